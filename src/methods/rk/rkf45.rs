//! Runge-Kutta-Fehlberg 4(5) adaptive-step integrator.
//!
//! # Reference
//! - E. Fehlberg, "Low-order classical Runge-Kutta formulas with stepsize
//!   control and their application to some heat transfer problems",
//!   NASA TR R-315 (1969).

use log::{debug, trace, warn};

use crate::{
    Float,
    core::{ode::ODE, solution::Solution, status::Status},
    error::Error,
    methods::{
        norm::max_abs_diff,
        settings::Settings,
        validate::{validate_problem, validate_settings, validate_step, validate_tolerance},
    },
};

/// Runge-Kutta-Fehlberg 4(5) adaptive-step integrator.
///
/// Each trial step computes a fourth- and a fifth-order solution from the
/// same six stages. Their largest componentwise difference divided by the
/// step, `err = max |y5 - y4| / h`, decides the trial:
///
/// - `err <= tol`: the step is accepted and the fifth-order solution becomes
///   the new sample.
/// - otherwise the step is rejected; time and state stay where they are.
///
/// Either way the next trial step is
/// `clamp(safety_factor * (tol / err)^(1/4) * h, hmin, hmax)`, or
/// `growth_on_zero_error * h` when `err == 0`. A trial that would pass `tend`
/// is shortened to end exactly on `tend`.
///
/// A rejected trial that asks for less than `hmin` is retried at `hmin`. If a
/// trial at or below `hmin` is rejected and asks for a smaller step still,
/// the integration stops and the partial trajectory is returned with
/// [`Status::StepSizeTooSmall`]. A non-finite error estimate counts as an
/// infinite error, so a diverged state ends the run the same way.
///
/// Invalid inputs are all reported together, before the system is evaluated.
///
/// # Example
/// ```
/// use rkode::prelude::*;
///
/// let decay = |_t: f64, y: &[f64], dydt: &mut [f64]| dydt[0] = -y[0];
/// let sol = rkf45(&decay, 0.0, 1.0, &[1.0], 1e-8, 0.01, Settings::default()).unwrap();
/// assert_eq!(sol.status, Status::Success);
/// let (t, y) = sol.last().unwrap();
/// assert_eq!(t, 1.0);
/// assert!((y[0] - (-1.0f64).exp()).abs() < 1e-7);
/// ```
pub fn rkf45<F>(
    f: &F,
    t0: Float,
    tend: Float,
    y0: &[Float],
    tol: Float,
    h: Float,
    settings: Settings,
) -> Result<Solution, Vec<Error>>
where
    F: ODE,
{
    // --- Input Validation ---
    let mut errors = Vec::new();
    validate_problem(f, t0, tend, y0, &mut errors);
    validate_step(t0, h, &mut errors);
    validate_tolerance(tol, &mut errors);
    validate_settings(&settings, &mut errors);
    if !errors.is_empty() {
        return Err(errors);
    }

    let Settings {
        hmax,
        hmin,
        safety_factor,
        growth_on_zero_error,
    } = settings;

    // --- Declarations ---
    let n = y0.len();
    let mut t = t0;
    let mut h = h;
    let mut y = y0.to_vec();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut k5 = vec![0.0; n];
    let mut k6 = vec![0.0; n];
    let mut yt = vec![0.0; n];
    let mut y4 = vec![0.0; n];
    let mut y5 = vec![0.0; n];
    let uround = Float::EPSILON;
    let capacity = (((tend - t0) / hmax) as usize).saturating_add(2).min(1 << 16);
    let mut sol = Solution::start(t0, y0, capacity);
    let mut status = Status::Success;

    // --- Main integration loop ---
    while t < tend {
        // land on tend when only rounding separates the last sample from it
        if sol.len() > 1 && tend - t <= 10.0 * uround * tend.abs().max(t.abs()) {
            t = tend;
            if let Some(last) = sol.t.last_mut() {
                *last = tend;
            }
            break;
        }

        // check for underflow due to machine rounding
        if 0.1 * h <= t.abs() * uround {
            warn!("rkf45: step size {h} vanishes against t = {t}; stopping short of {tend}");
            status = Status::StepSizeTooSmall;
            break;
        }

        // adjust last step to land on tend
        let last = t + h > tend;
        if last {
            h = tend - t;
        }

        sol.nstep += 1;

        // Stage 1
        f.ode(t, &y, &mut k1);

        // Stage 2
        for i in 0..n {
            yt[i] = y[i] + h * A21 * k1[i];
        }
        f.ode(t + C2 * h, &yt, &mut k2);

        // Stage 3
        for i in 0..n {
            yt[i] = y[i] + h * (A31 * k1[i] + A32 * k2[i]);
        }
        f.ode(t + C3 * h, &yt, &mut k3);

        // Stage 4
        for i in 0..n {
            yt[i] = y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
        }
        f.ode(t + C4 * h, &yt, &mut k4);

        // Stage 5
        for i in 0..n {
            yt[i] = y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
        }
        f.ode(t + C5 * h, &yt, &mut k5);

        // Stage 6
        for i in 0..n {
            yt[i] = y[i]
                + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
        }
        f.ode(t + C6 * h, &yt, &mut k6);

        sol.nfev += 6;

        // Embedded 4th and 5th order solutions
        for i in 0..n {
            y4[i] = y[i] + h * (B1 * k1[i] + B3 * k3[i] + B4 * k4[i] + B5 * k5[i]);
            y5[i] = y[i]
                + h * (BH1 * k1[i] + BH3 * k3[i] + BH4 * k4[i] + BH5 * k5[i] + BH6 * k6[i]);
        }

        // Error estimation
        let mut err = max_abs_diff(&y5, &y4, h);
        if err.is_nan() {
            err = Float::INFINITY;
        }

        let accepted = err <= tol;
        if accepted {
            // Step accepted
            sol.naccpt += 1;
            t = if last { tend } else { t + h };
            y.copy_from_slice(&y5);
            sol.push(t, &y);
        } else {
            // Step rejected
            sol.nrejct += 1;
            trace!("rkf45: rejected h = {h} at t = {t} (err = {err:e}, tol = {tol:e})");
        }

        // Computation of hnew
        let delta = if err > 0.0 {
            safety_factor * (tol / err).powf(0.25)
        } else {
            growth_on_zero_error
        };
        let hnew = delta * h;

        // a trial at the floor failed and asks for less
        if !accepted && h <= hmin && hnew < hmin {
            warn!(
                "rkf45: step size {h:e} at the minimum {hmin:e} failed at t = {t} (requested {hnew:e}); stopping short of {tend}"
            );
            h = hnew;
            status = Status::StepSizeTooSmall;
            break;
        }

        h = hnew.clamp(hmin, hmax);
    }

    sol.h = h;
    sol.status = status;

    debug!(
        "rkf45: {} over [{}, {}] with {} accepted, {} rejected steps, {} evaluations",
        status, t0, t, sol.naccpt, sol.nrejct, sol.nfev
    );

    Ok(sol)
}

// Fehlberg 4(5) Butcher tableau coefficients
const C2: Float = 1.0 / 4.0;
const C3: Float = 3.0 / 8.0;
const C4: Float = 12.0 / 13.0;
const C5: Float = 1.0;
const C6: Float = 1.0 / 2.0;

const A21: Float = 1.0 / 4.0;
const A31: Float = 3.0 / 32.0;
const A32: Float = 9.0 / 32.0;
const A41: Float = 1932.0 / 2197.0;
const A42: Float = -7200.0 / 2197.0;
const A43: Float = 7296.0 / 2197.0;
const A51: Float = 439.0 / 216.0;
const A52: Float = -8.0;
const A53: Float = 3680.0 / 513.0;
const A54: Float = -845.0 / 4104.0;
const A61: Float = -8.0 / 27.0;
const A62: Float = 2.0;
const A63: Float = -3544.0 / 2565.0;
const A64: Float = 1859.0 / 4104.0;
const A65: Float = -11.0 / 40.0;

// 4th order weights
const B1: Float = 25.0 / 216.0;
const B3: Float = 1408.0 / 2565.0;
const B4: Float = 2197.0 / 4104.0;
const B5: Float = -1.0 / 5.0;

// 5th order weights
const BH1: Float = 16.0 / 135.0;
const BH3: Float = 6656.0 / 12825.0;
const BH4: Float = 28561.0 / 56430.0;
const BH5: Float = -9.0 / 50.0;
const BH6: Float = 2.0 / 55.0;
