//! Explicit Euler fixed-step integrator.

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

/// Explicit (forward) Euler fixed-step integrator.
///
/// Advances `y[i+1] = y[i] + h * f(t[i], y[i])` over the grid `t0 + i*h`,
/// one right-hand-side evaluation per step. With [`GridPolicy::Truncate`]
/// the result has `floor((tend - t0) / h) + 1` samples.
pub fn euler<F>(
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

        f.ode(t, &y, &mut k1);
        for i in 0..n {
            y[i] += h * k1[i];
        }

        sol.push(tnew, &y);
    }

    sol.nfev = grid.steps();
    sol.nstep = grid.steps();
    sol.naccpt = grid.steps();
    sol.h = h;

    debug!(
        "euler: {} steps of h = {} over [{}, {}]",
        sol.nstep,
        h,
        t0,
        sol.t.last().copied().unwrap_or(t0)
    );

    Ok(sol)
}
