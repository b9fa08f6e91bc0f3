//! Options and method selection for solve_ivp

use bon::Builder;

use crate::{Float, methods::grid::GridPolicy};

/// Solver method selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// Explicit Euler, fixed step
    Euler,
    /// Classic fixed-step RK4
    RK4,
    /// Runge-Kutta-Fehlberg 4(5) adaptive RK
    #[default]
    RKF45,
}

#[derive(Builder, Clone, Debug)]
/// Options for [`solve_ivp`](crate::solve::solve_ivp)
pub struct Options {
    /// Method to use. Default: RKF45.
    #[builder(default)]
    pub method: Method,
    /// Step size of the fixed-step methods, initial trial step of RKF45.
    /// Default: one hundredth of the interval.
    pub first_step: Option<Float>,
    /// Error tolerance of RKF45. Ignored by the fixed-step methods.
    #[builder(default = 1e-6)]
    pub tol: Float,
    /// Maximum step size of RKF45 (maps to `settings.hmax`).
    pub max_step: Option<Float>,
    /// Minimum step size of RKF45 (maps to `settings.hmin`).
    pub min_step: Option<Float>,
    /// Grid policy of the fixed-step methods. Default: truncate.
    #[builder(default)]
    pub grid: GridPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self::builder().build()
    }
}
