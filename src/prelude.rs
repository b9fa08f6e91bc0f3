//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use rkode::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Solution`, `Status`, `Error`.
//! - Integrators: `euler`, `rk4`, `rkf45` with `GridPolicy` and `Settings`.
//! - High-level API: `solve_ivp`, `Options`, and `Method`.
//!

pub use crate::core::{ode::ODE, solution::Solution, status::Status};
pub use crate::error::Error;
pub use crate::methods::{
    grid::GridPolicy,
    rk::{euler, rk4, rkf45},
    settings::Settings,
};
pub use crate::solve::{Method, Options, solve_ivp};
