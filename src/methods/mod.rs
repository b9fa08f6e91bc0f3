// Numerical methods

mod norm;
mod validate;

pub mod grid;
pub mod rk;
pub mod settings;
