//! Errors for integration methods

use crate::Float;

/// Precondition violations reported before any step is taken.
///
/// Integrators collect every violation they find and return them together.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("step size h must be positive and finite (got {0})")]
    InvalidStepSize(Float),
    #[error("tolerance must be positive and finite (got {0})")]
    InvalidTolerance(Float),
    #[error("end time must be finite and greater than the start time (got t0 = {t0}, tend = {tend})")]
    InvalidInterval { t0: Float, tend: Float },
    #[error("step bounds must satisfy 0 < h_min <= h_max (got h_min = {h_min}, h_max = {h_max})")]
    InvalidStepBounds { h_min: Float, h_max: Float },
    #[error("step size {h} needs {steps} steps, more than a trajectory can hold")]
    TooManySteps { steps: Float, h: Float },
    #[error("safety factor must be in (0, 1] (got {0})")]
    SafetyFactorOutOfRange(Float),
    #[error("growth factor must be at least 1 (got {0})")]
    GrowthFactorOutOfRange(Float),
    #[error("initial condition must have at least one component")]
    EmptyState,
    #[error("initial condition contains non-finite values")]
    NonFiniteInitialState,
    #[error("system has dimension {expected} but initial condition has {actual} components")]
    DimensionMismatch { expected: usize, actual: usize },
}
