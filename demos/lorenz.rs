//! # Example: Lorenz parameter sweep
//!
//! Integrate the Lorenz system with all three methods over a grid of initial
//! conditions, step sizes and tolerances. The runs are independent, so the
//! sweep is spread over threads with rayon.
//!
//! Equations:
//! dx/dt = sigma * (y - x)
//! dy/dt = x * (rho - z) - y
//! dz/dt = x * y - beta * z
//!
//! with sigma = 10, rho = 28, beta = 8/3 on t in [0, 50].
//!
//! Runs whose trajectory contains NaN or inf, or that stopped early, are
//! reported instead of summarized. Nothing is written to disk.

use rayon::prelude::*;
use rkode::prelude::*;

struct Lorenz {
    sigma: f64,
    rho: f64,
    beta: f64,
}

impl ODE for Lorenz {
    fn ode(&self, _t: f64, sv: &[f64], dsdt: &mut [f64]) {
        let (x, y, z) = (sv[0], sv[1], sv[2]);
        dsdt[0] = self.sigma * (y - x);
        dsdt[1] = x * (self.rho - z) - y;
        dsdt[2] = x * y - self.beta * z;
    }

    fn dimension(&self) -> Option<usize> {
        Some(3)
    }
}

/// How one method's runs are labelled in the report.
struct Presentation {
    title: &'static str,
    prefix: &'static str,
    labels: [&'static str; 3],
}

struct Run {
    name: String,
    solution: Result<Solution, Vec<Error>>,
}

fn run_name(prefix: &str, h: f64, z0: f64, tol: Option<f64>) -> String {
    let mut name = format!("{prefix}_h{h:.4}_init{z0:.8}");
    if let Some(tol) = tol {
        name.push_str(&format!("_tol{tol:.8}"));
    }
    name.replace('.', "p")
}

fn report(presentation: &Presentation, runs: &[Run]) {
    println!("== {} ==", presentation.title);
    for run in runs {
        let sol = match &run.solution {
            Ok(sol) => sol,
            Err(errors) => {
                for err in errors {
                    println!("{:<40} invalid input: {err}", run.name);
                }
                continue;
            }
        };
        if sol.y.iter().flatten().any(|v| !v.is_finite()) {
            println!("{:<40} contains NaN or inf", run.name);
            continue;
        }
        let Some((t, y)) = sol.last() else { continue };
        if !sol.reached_end() {
            println!("{:<40} {} at t = {t:.6}", run.name, sol.status);
            continue;
        }
        let [lx, ly, lz] = presentation.labels;
        println!(
            "{:<40} {:>7} samples, t = {t:.2}: {lx} = {:>9.4}, {ly} = {:>9.4}, {lz} = {:>9.4}",
            run.name,
            sol.len(),
            y[0],
            y[1],
            y[2],
        );
    }
    println!();
}

fn main() {
    let lorenz = Lorenz {
        sigma: 10.0,
        rho: 28.0,
        beta: 8.0 / 3.0,
    };
    let t0 = 0.0;
    let tend = 50.0;
    let initial_conditions = [[1.0, 1.0, 1.0], [1.0, 1.0, 1.0 + 1e-5], [1.0, 1.0, 1.0 + 1e-7]];
    let steps = [0.1, 0.005, 0.002, 0.01];
    let tolerances = [1e-2, 1e-4, 1e-9];

    let fixed: Vec<([f64; 3], f64)> = initial_conditions
        .iter()
        .flat_map(|&y0| steps.iter().map(move |&h| (y0, h)))
        .collect();
    let adaptive: Vec<([f64; 3], f64, f64)> = fixed
        .iter()
        .flat_map(|&(y0, h)| tolerances.iter().map(move |&tol| (y0, h, tol)))
        .collect();

    let euler_style = Presentation {
        title: "Euler method for the Lorenz system",
        prefix: "lorenz",
        labels: ["X (Euler)", "Y (Euler)", "Z (Euler)"],
    };
    let euler_runs: Vec<Run> = fixed
        .par_iter()
        .map(|&(y0, h)| Run {
            name: run_name(euler_style.prefix, h, y0[2], None),
            solution: euler(&lorenz, t0, tend, &y0, h, GridPolicy::Truncate),
        })
        .collect();
    report(&euler_style, &euler_runs);

    let rk4_style = Presentation {
        title: "Runge-Kutta 4 method for the Lorenz system",
        prefix: "lorenz",
        labels: ["X (RK4)", "Y (RK4)", "Z (RK4)"],
    };
    let rk4_runs: Vec<Run> = fixed
        .par_iter()
        .map(|&(y0, h)| Run {
            name: run_name(rk4_style.prefix, h, y0[2], None),
            solution: rk4(&lorenz, t0, tend, &y0, h, GridPolicy::Truncate),
        })
        .collect();
    report(&rk4_style, &rk4_runs);

    let rkf45_style = Presentation {
        title: "Runge-Kutta-Fehlberg method for the Lorenz system",
        prefix: "rkf45",
        labels: ["X (RKF45)", "Y (RKF45)", "Z (RKF45)"],
    };
    let rkf45_runs: Vec<Run> = adaptive
        .par_iter()
        .map(|&(y0, h, tol)| Run {
            name: run_name(rkf45_style.prefix, h, y0[2], Some(tol)),
            solution: rkf45(&lorenz, t0, tend, &y0, tol, h, Settings::default()),
        })
        .collect();
    report(&rkf45_style, &rkf45_runs);
}
