//! solve_ivp entry point implementation

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{
        rk::{euler, rk4, rkf45},
        settings::Settings,
    },
};

use super::options::{Method, Options};

/// Solve an initial value problem with the method selected in `options`.
///
/// # Example
/// ```
/// use rkode::prelude::*;
///
/// struct Oscillator;
///
/// impl ODE for Oscillator {
///     fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
///         dydt[0] = y[1];
///         dydt[1] = -y[0];
///     }
/// }
///
/// let options = Options::builder()
///     .method(Method::RK4)
///     .first_step(0.01)
///     .build();
/// let sol = solve_ivp(&Oscillator, 0.0, 1.0, &[1.0, 0.0], options).unwrap();
/// assert_eq!(sol.len(), 101);
/// ```
pub fn solve_ivp<F>(
    f: &F,
    t0: Float,
    tend: Float,
    y0: &[Float],
    options: Options,
) -> Result<Solution, Vec<Error>>
where
    F: ODE,
{
    let h = options.first_step.unwrap_or((tend - t0) / 100.0);

    match options.method {
        Method::Euler => euler(f, t0, tend, y0, h, options.grid),
        Method::RK4 => rk4(f, t0, tend, y0, h, options.grid),
        Method::RKF45 => {
            let mut settings = Settings::default();
            if let Some(hmax) = options.max_step {
                settings.hmax = hmax;
            }
            if let Some(hmin) = options.min_step {
                settings.hmin = hmin;
            }
            rkf45(f, t0, tend, y0, options.tol, h, settings)
        }
    }
}
