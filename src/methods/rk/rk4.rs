//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use log::debug;

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{
        grid::{Grid, GridPolicy},
        validate::{validate_problem, validate_step},
    },
};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator.
///
/// Uses the same grid as [`euler`](super::euler) for the same `(t0, tend, h)`
/// and policy, so the two trajectories can be compared sample by sample.
/// Four right-hand-side evaluations per step.
pub fn rk4<F>(
    f: &F,
    t0: Float,
    tend: Float,
    y0: &[Float],
    h: Float,
    grid: GridPolicy,
) -> Result<Solution, Vec<Error>>
where
    F: ODE,
{
    // --- Input Validation ---
    let mut errors = Vec::new();
    validate_problem(f, t0, tend, y0, &mut errors);
    validate_step(t0, h, &mut errors);
    if !errors.is_empty() {
        return Err(errors);
    }
    let grid = Grid::new(t0, tend, h, grid).map_err(|err| vec![err])?;

    // --- Declarations ---
    let n = y0.len();
    let mut y = y0.to_vec();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut yt = vec![0.0; n];
    let mut sol = Solution::start(t0, y0, 1);
    sol.try_reserve(grid.steps()).map_err(|_| {
        vec![Error::TooManySteps {
            steps: grid.steps() as Float,
            h,
        }]
    })?;

    // --- Main integration loop ---
    for step in 0..grid.steps() {
        let (t, h, tnew) = grid.step(step);

        // Stage computations
        f.ode(t, &y, &mut k1);

        for i in 0..n {
            yt[i] = y[i] + h * A21 * k1[i];
        }
        f.ode(t + C2 * h, &yt, &mut k2);

        for i in 0..n {
            yt[i] = y[i] + h * A32 * k2[i];
        }
        f.ode(t + C3 * h, &yt, &mut k3);

        for i in 0..n {
            yt[i] = y[i] + h * A43 * k3[i];
        }
        f.ode(t + C4 * h, &yt, &mut k4);

        // Update state
        for i in 0..n {
            y[i] += h / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
        }

        sol.push(tnew, &y);
    }

    sol.nfev = 4 * grid.steps();
    sol.nstep = grid.steps();
    sol.naccpt = grid.steps();
    sol.h = h;

    debug!(
        "rk4: {} steps of h = {} over [{}, {}]",
        sol.nstep,
        h,
        t0,
        sol.t.last().copied().unwrap_or(t0)
    );

    Ok(sol)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
