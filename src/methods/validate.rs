//! Eager input validation shared by all integrators.
//!
//! Nothing here evaluates the right-hand side, so a rejected call never
//! touches the user's system. Each check pushes what it finds onto the
//! caller's list, so one call reports every bad parameter at once.

use crate::{
    Float,
    core::ode::ODE,
    error::Error,
    methods::{norm::all_finite, settings::Settings},
};

/// Check the interval and the initial condition against the system.
pub(crate) fn validate_problem<F: ODE>(
    f: &F,
    t0: Float,
    tend: Float,
    y0: &[Float],
    errors: &mut Vec<Error>,
) {
    if !t0.is_finite() || !tend.is_finite() || tend <= t0 {
        errors.push(Error::InvalidInterval { t0, tend });
    }
    if y0.is_empty() {
        errors.push(Error::EmptyState);
    } else if let Some(expected) = f.dimension()
        && expected != y0.len()
    {
        errors.push(Error::DimensionMismatch {
            expected,
            actual: y0.len(),
        });
    }
    if !all_finite(y0) {
        errors.push(Error::NonFiniteInitialState);
    }
}

/// A step must be positive, finite and large enough to move `t0`.
pub(crate) fn validate_step(t0: Float, h: Float, errors: &mut Vec<Error>) {
    if !h.is_finite() || h <= 0.0 || t0 + h <= t0 {
        errors.push(Error::InvalidStepSize(h));
    }
}

pub(crate) fn validate_tolerance(tol: Float, errors: &mut Vec<Error>) {
    if !tol.is_finite() || tol <= 0.0 {
        errors.push(Error::InvalidTolerance(tol));
    }
}

pub(crate) fn validate_settings(settings: &Settings, errors: &mut Vec<Error>) {
    let Settings {
        hmax,
        hmin,
        safety_factor,
        growth_on_zero_error,
    } = *settings;

    if !(hmin > 0.0 && hmin <= hmax && hmax.is_finite()) {
        errors.push(Error::InvalidStepBounds {
            h_min: hmin,
            h_max: hmax,
        });
    }
    if !(safety_factor > 0.0 && safety_factor <= 1.0) {
        errors.push(Error::SafetyFactorOutOfRange(safety_factor));
    }
    if !(growth_on_zero_error >= 1.0 && growth_on_zero_error.is_finite()) {
        errors.push(Error::GrowthFactorOutOfRange(growth_on_zero_error));
    }
}
