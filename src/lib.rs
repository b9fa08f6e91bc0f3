//! Explicit Runge-Kutta integrators for initial value problems (IVPs) of
//! first-order ordinary differential equation systems `y' = f(t, y)`.
//!
//! - [`euler`](methods::rk::euler): fixed-step, first order.
//! - [`rk4`](methods::rk::rk4): fixed-step, classical fourth order.
//! - [`rkf45`](methods::rk::rkf45): Runge-Kutta-Fehlberg 4(5) with automatic
//!   step-size control.
//!
//! Every integrator returns a [`Solution`] holding the sampled trajectory.
//! Invalid inputs are rejected before the system is evaluated, with one
//! [`Error`] per violated precondition. Non-finite values produced by the system are left in the
//! trajectory for the caller to inspect.

pub mod core;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod solve;

pub use crate::core::{ode::ODE, solution::Solution, status::Status};
pub use error::Error;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
