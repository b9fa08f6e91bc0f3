//! Uniform time grid shared by the fixed-step integrators.

use crate::{Float, error::Error};

/// What a fixed-step integrator does with the part of the interval that is
/// not a whole multiple of the step size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridPolicy {
    /// Take `N = floor((tend - t0) / h)` full steps and stop at `t0 + N*h`,
    /// which may fall short of `tend` by less than one step.
    #[default]
    Truncate,
    /// Take the same full steps, then one shortened step that lands exactly
    /// on `tend`.
    Clip,
}

/// Uniform grid `t0 + i*h`, with the final step possibly shortened.
///
/// Times are computed on demand; the trajectory is the only place they are
/// stored.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    t0: Float,
    h: Float,
    steps: usize,
    /// Size and end time of the final step when it differs from a full step.
    last_step: Option<(Float, Float)>,
}

impl Grid {
    /// Build the grid for `[t0, tend]`. Expects `h > 0` and `tend > t0`.
    pub(crate) fn new(
        t0: Float,
        tend: Float,
        h: Float,
        policy: GridPolicy,
    ) -> Result<Self, Error> {
        let n = full_steps(t0, tend, h)?;
        let mut grid = Self {
            t0,
            h,
            steps: n,
            last_step: None,
        };

        if policy == GridPolicy::Clip {
            let remainder = tend - grid.time(n);
            let roundoff = 16.0 * Float::EPSILON * tend.abs().max(t0.abs()).max(h);
            if remainder > roundoff || n == 0 {
                // one extra, shortened step
                grid.last_step = Some((remainder, tend));
                grid.steps += 1;
            } else {
                // the last full step already ends within rounding of tend
                grid.last_step = Some((tend - grid.time(n - 1), tend));
            }
        }

        Ok(grid)
    }

    /// Number of samples, including the initial one.
    pub(crate) fn len(&self) -> usize {
        self.steps + 1
    }

    /// Number of steps.
    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    fn time(&self, i: usize) -> Float {
        self.t0 + i as Float * self.h
    }

    /// Start time, step size and end time of step `i`.
    pub(crate) fn step(&self, i: usize) -> (Float, Float, Float) {
        match self.last_step {
            Some((h, tend)) if i + 1 == self.steps => (self.time(i), h, tend),
            _ => (self.time(i), self.h, self.time(i + 1)),
        }
    }
}

/// Largest step count whose trajectory, plus a clipped final step, can be
/// indexed by a `Vec`.
const MAX_STEPS: usize = isize::MAX as usize / size_of::<Vec<Float>>() - 2;

/// `floor((tend - t0) / h)`, lowered if rounding would put `t0 + N*h` past
/// `tend`.
pub(crate) fn full_steps(t0: Float, tend: Float, h: Float) -> Result<usize, Error> {
    let steps = ((tend - t0) / h).floor();
    if !(steps < MAX_STEPS as Float) {
        return Err(Error::TooManySteps { steps, h });
    }
    let mut n = steps as usize;
    while n > 0 && t0 + n as Float * h > tend {
        n -= 1;
    }
    Ok(n)
}
