//! Property tests for the trajectory invariants shared by all integrators.
//!
//! Reproduce: `PROPTEST_SEED=<seed> cargo test --test property_tests`

use proptest::prelude::*;
use rkode::prelude::*;

mod common;
use common::{Decay, Lorenz, assert_well_formed};

fn state(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, 1..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn fixed_step_trajectories_are_well_formed(
        t0 in -5.0f64..5.0,
        span in 0.01f64..3.0,
        h in 0.001f64..0.5,
        y0 in state(6),
        clip in any::<bool>(),
    ) {
        let tend = t0 + span;
        let grid = if clip { GridPolicy::Clip } else { GridPolicy::Truncate };
        let a = euler(&Decay, t0, tend, &y0, h, grid).unwrap();
        let b = rk4(&Decay, t0, tend, &y0, h, grid).unwrap();

        assert_well_formed(&a, t0, tend, &y0);
        assert_well_formed(&b, t0, tend, &y0);
        prop_assert_eq!(&a.t, &b.t);

        let (t_last, _) = a.last().unwrap();
        match grid {
            GridPolicy::Truncate => {
                let n = ((tend - t0) / h).floor() as usize;
                prop_assert!(a.len() == n + 1 || a.len() == n, "len {} for n {}", a.len(), n);
                prop_assert!(tend - t_last < h * (1.0 + 1e-9));
            }
            GridPolicy::Clip => prop_assert_eq!(t_last, tend),
        }
    }

    #[test]
    fn fixed_step_is_bit_reproducible(
        h in 0.001f64..0.05,
        z0 in 0.5f64..1.5,
    ) {
        let y0 = [1.0, 1.0, z0];
        let a = rk4(&Lorenz::default(), 0.0, 1.0, &y0, h, GridPolicy::Truncate).unwrap();
        let b = rk4(&Lorenz::default(), 0.0, 1.0, &y0, h, GridPolicy::Truncate).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn adaptive_trajectories_reach_tend(
        t0 in -5.0f64..5.0,
        span in 0.01f64..3.0,
        h in 1e-4f64..0.5,
        tol in 1e-10f64..1e-3,
        y0 in state(6),
    ) {
        let tend = t0 + span;
        let sol = rkf45(&Decay, t0, tend, &y0, tol, h, Settings::default()).unwrap();

        assert_well_formed(&sol, t0, tend, &y0);
        prop_assert_eq!(sol.status, Status::Success);
        prop_assert_eq!(sol.last().unwrap().0, tend);
        prop_assert_eq!(sol.len(), sol.naccpt + 1);
        // every step after the first respects hmax
        prop_assert!(sol.t.windows(2).skip(1).all(|w| w[1] - w[0] <= 0.1 + 1e-12));
    }
}
