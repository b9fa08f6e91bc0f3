//! User-supplied ODE system.

use crate::Float;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(t, y). The integrators repeatedly call `ode` with the
/// current time `t` and state `y` and expect you to fill `dydt` with the
/// derivative values. `dydt` always has the same length as `y`.
///
/// The integrators only hold a shared reference to the system, so `ode` must
/// not rely on state carried between calls.
///
/// # Example
///
/// ```
/// use rkode::prelude::*;
///
/// struct Lorenz { sigma: f64, rho: f64, beta: f64 }
///
/// impl ODE for Lorenz {
///     fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
///         dydt[0] = self.sigma * (y[1] - y[0]);
///         dydt[1] = y[0] * (self.rho - y[2]) - y[1];
///         dydt[2] = y[0] * y[1] - self.beta * y[2];
///     }
///
///     fn dimension(&self) -> Option<usize> {
///         Some(3)
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, t: Float, y: &[Float], dydt: &mut [Float]);

    /// Number of equations of the system, if fixed.
    ///
    /// When `Some(m)`, the integrators reject an initial condition whose
    /// length differs from `m` before evaluating the system.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

impl<F> ODE for F
where
    F: Fn(Float, &[Float], &mut [Float]),
{
    fn ode(&self, t: Float, y: &[Float], dydt: &mut [Float]) {
        self(t, y, dydt)
    }
}
