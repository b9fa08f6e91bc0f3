//! Settings for the adaptive integrator

use bon::Builder;

use crate::Float;

/// Step-size controller settings for [`rkf45`](crate::methods::rk::rkf45).
///
/// ```
/// use rkode::prelude::*;
///
/// let settings = Settings::builder().hmax(0.05).hmin(1e-10).build();
/// assert_eq!(settings.safety_factor, 0.84);
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Maximal step size. Default is 0.1.
    #[builder(default = 0.1)]
    pub hmax: Float,
    /// Minimal step size. A rejected step whose successor would be smaller
    /// ends the integration with
    /// [`Status::StepSizeTooSmall`](crate::core::status::Status). Default is 1e-12.
    #[builder(default = 1e-12)]
    pub hmin: Float,
    /// Safety factor in step-size prediction
    /// `hnew = safety_factor * (tol / err)^(1/4) * h`. Default is 0.84.
    #[builder(default = 0.84)]
    pub safety_factor: Float,
    /// Factor applied to the step when the error estimate is exactly zero.
    /// Default is 2.0.
    #[builder(default = 2.0)]
    pub growth_on_zero_error: Float,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
