//! Core traits and types used throughout the library.

pub mod ode;
pub mod solution;
pub mod status;
