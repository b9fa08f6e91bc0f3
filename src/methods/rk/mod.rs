//! Explicit Runge-Kutta integrators (Euler, RK4, RKF45)

mod euler;
mod rk4;
mod rkf45;

pub use euler::euler;
pub use rk4::rk4;
pub use rkf45::rkf45;
