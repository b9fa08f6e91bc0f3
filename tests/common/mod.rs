//! Shared test systems.

#![allow(dead_code)]

use rkode::prelude::*;

/// dy/dt = -y, y(0) = 1 has the solution e^-t.
pub struct Decay;

impl ODE for Decay {
    fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        for i in 0..y.len() {
            dydt[i] = -y[i];
        }
    }
}

/// Simple harmonic oscillator, y = (cos t, -sin t) from (1, 0).
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        dydt[0] = y[1];
        dydt[1] = -y[0];
    }

    fn dimension(&self) -> Option<usize> {
        Some(2)
    }
}

/// Lorenz system with the classic parameters.
pub struct Lorenz {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for Lorenz {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl ODE for Lorenz {
    fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        dydt[0] = self.sigma * (y[1] - y[0]);
        dydt[1] = y[0] * (self.rho - y[2]) - y[1];
        dydt[2] = y[0] * y[1] - self.beta * y[2];
    }

    fn dimension(&self) -> Option<usize> {
        Some(3)
    }
}

/// dy/dt = rate * y, fast exponential growth for large rates.
pub struct Growth {
    pub rate: f64,
}

impl ODE for Growth {
    fn ode(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        dydt[0] = self.rate * y[0];
    }
}

/// Assert the trajectory invariants every integrator guarantees.
pub fn assert_well_formed(sol: &Solution, t0: f64, tend: f64, y0: &[f64]) {
    assert!(!sol.is_empty());
    assert_eq!(sol.t.len(), sol.y.len());
    assert_eq!(sol.t[0], t0);
    assert_eq!(sol.y[0], y0);
    for w in sol.t.windows(2) {
        assert!(w[1] > w[0], "times not increasing: {} -> {}", w[0], w[1]);
    }
    assert!(sol.t.iter().all(|&t| t <= tend));
    assert!(sol.y.iter().all(|y| y.len() == y0.len()));
}
