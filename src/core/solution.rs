//! The trajectory produced by an integrator, together with run statistics.

use std::collections::TryReserveError;

use crate::{Float, core::status::Status};

/// Sampled trajectory of an integration call.
///
/// `t[i]` and `y[i]` form the i-th sample. The first sample is always the
/// initial condition, times are strictly increasing and every state has the
/// dimension of the initial condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Sample times
    pub t: Vec<Float>,
    /// Sample states, one vector per time
    pub y: Vec<Vec<Float>>,
    /// The step size of the next integration step
    pub h: Float,
    /// The number of right-hand-side evaluations
    pub nfev: usize,
    /// The number of steps attempted
    pub nstep: usize,
    /// The number of accepted steps
    pub naccpt: usize,
    /// The number of rejected steps
    pub nrejct: usize,
    /// The status of the integration process
    pub status: Status,
}

impl Solution {
    /// Start a trajectory at the initial condition.
    pub(crate) fn start(t0: Float, y0: &[Float], capacity: usize) -> Self {
        let mut t = Vec::with_capacity(capacity);
        let mut y = Vec::with_capacity(capacity);
        t.push(t0);
        y.push(y0.to_vec());
        Self {
            t,
            y,
            h: 0.0,
            nfev: 0,
            nstep: 0,
            naccpt: 0,
            nrejct: 0,
            status: Status::Success,
        }
    }

    /// Make room for `additional` more samples, failing instead of aborting
    /// when the allocation cannot be made.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.t.try_reserve_exact(additional)?;
        self.y.try_reserve_exact(additional)
    }

    pub(crate) fn push(&mut self, t: Float, y: &[Float]) {
        self.t.push(t);
        self.y.push(y.to_vec());
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// The last sample, i.e. where the integration stopped.
    pub fn last(&self) -> Option<(Float, &[Float])> {
        match (self.t.last(), self.y.last()) {
            (Some(&t), Some(y)) => Some((t, y.as_slice())),
            _ => None,
        }
    }

    /// Whether the integration finished normally.
    pub fn reached_end(&self) -> bool {
        self.status.is_success()
    }

    /// Iterate over stored sample pairs (t_i, y_i).
    pub fn iter(&self) -> SolutionIter<'_> {
        SolutionIter {
            t_iter: self.t.iter(),
            y_iter: self.y.iter(),
        }
    }
}

/// Iterator over (t, y) pairs of stored samples in a [`Solution`].
pub struct SolutionIter<'a> {
    t_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Vec<Float>>,
}

impl<'a> Iterator for SolutionIter<'a> {
    type Item = (Float, &'a [Float]);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.t_iter.next(), self.y_iter.next()) {
            (Some(&t), Some(y)) => Some((t, y.as_slice())),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.t_iter.size_hint()
    }
}

impl ExactSizeIterator for SolutionIter<'_> {}

impl<'a> IntoIterator for &'a Solution {
    type Item = (Float, &'a [Float]);
    type IntoIter = SolutionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
