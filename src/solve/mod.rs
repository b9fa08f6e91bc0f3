//! High-level solve module: method selection on top of the integrators.

pub mod options;
pub mod solve_ivp;

pub use options::{Method, Options};
pub use solve_ivp::solve_ivp;
