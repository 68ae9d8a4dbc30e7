//! Scenario tests for the bounded samplers.
//!
//! These integration tests exercise the public `zmbd`, `zmbd_with_target`
//! and `ttbd` entry points end to end: validation, the shuffled processing
//! order and the restored output order.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rnd_core::ErrorKind;
use rnd_math::sampling::{ttbd, zmbd, zmbd_with_target, BoundedSampler};
use rnd_math::vector::sum;
use rnd_math::MersenneTwisterUniformRng;

const TOL: f64 = 1e-8;

/// Assert that `x` lies inside the bounds and sums to `target`.
fn check_sample(lower: &[f64], upper: &[f64], target: f64, x: &[f64]) {
    assert_eq!(x.len(), lower.len(), "sample has wrong length: {x:?}");
    for i in 0..x.len() {
        assert!(
            x[i] >= lower[i] - TOL && x[i] <= upper[i] + TOL,
            "at index {i}: {} not in [{}, {}]",
            x[i],
            lower[i],
            upper[i]
        );
    }
    assert!(
        (sum(x) - target).abs() < TOL,
        "sum {} differs from target {target}: {x:?}",
        sum(x)
    );
}

// ─── ZMBD ─────────────────────────────────────────────────────────────────────

#[test]
fn test_zmbd_thousand_draws() {
    let lower = [-4.0, -1.0, -1.0, -4.0];
    let upper = [1.0, 5.0, 1.0, 1.0];
    let mut rng = StdRng::seed_from_u64(20150226);
    for _ in 0..1_000 {
        let x = zmbd(&lower, &upper, &mut rng).unwrap();
        check_sample(&lower, &upper, 0.0, &x);
    }
}

#[test]
fn test_zmbd_single_element() {
    let mut rng = MersenneTwisterUniformRng::new(1);
    for _ in 0..100 {
        assert_eq!(zmbd(&[-5.0], &[5.0], &mut rng).unwrap(), vec![0.0]);
    }
}

#[test]
fn test_zmbd_with_target() {
    let lower = [-1.0, 0.0, 2.0, -3.0, 0.5];
    let upper = [1.0, 4.0, 2.5, 3.0, 0.5];
    let mut rng = MersenneTwisterUniformRng::new(2);
    for target in [-1.5, 0.0, 2.0, 7.5, 11.0] {
        for _ in 0..200 {
            let x = zmbd_with_target(&lower, &upper, target, &mut rng).unwrap();
            check_sample(&lower, &upper, target, &x);
        }
    }
}

#[test]
fn test_zmbd_boundary_zero_bounds() {
    let mut rng = MersenneTwisterUniformRng::new(3);
    // Lower bounds of exactly zero force every element to zero.
    let x = zmbd(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0], &mut rng).unwrap();
    assert_eq!(x, vec![0.0, 0.0, 0.0]);
    // Likewise for upper bounds of exactly zero.
    let x = zmbd(&[-1.0, -2.0, -3.0], &[0.0, 0.0, 0.0], &mut rng).unwrap();
    assert_eq!(x, vec![0.0, 0.0, 0.0]);
    // A mix: only the straddling elements can move.
    let lower = [0.0, -2.0, -1.0, -3.0];
    let upper = [2.0, 0.0, 1.0, 0.0];
    for _ in 0..500 {
        let x = zmbd(&lower, &upper, &mut rng).unwrap();
        check_sample(&lower, &upper, 0.0, &x);
    }
}

#[test]
fn test_zmbd_symmetric_bounds_are_centred() {
    let lower = [-1.0; 5];
    let upper = [1.0; 5];
    let mut rng = MersenneTwisterUniformRng::new(4);
    let draws = 2_000;
    let mut means = [0.0; 5];
    for _ in 0..draws {
        let x = zmbd(&lower, &upper, &mut rng).unwrap();
        check_sample(&lower, &upper, 0.0, &x);
        for (m, v) in means.iter_mut().zip(&x) {
            *m += v / draws as f64;
        }
    }
    for m in means {
        assert!(m.abs() < 0.1, "coordinate mean {m} is far from zero");
    }
}

#[test]
fn test_zmbd_is_not_constant() {
    let lower = [-1.0; 4];
    let upper = [1.0; 4];
    let mut rng = MersenneTwisterUniformRng::new(5);
    let first = zmbd(&lower, &upper, &mut rng).unwrap();
    let differs = (0..20).any(|_| zmbd(&lower, &upper, &mut rng).unwrap() != first);
    assert!(differs);
}

// ─── TTBD ─────────────────────────────────────────────────────────────────────

#[test]
fn test_ttbd_degenerate_bounds() {
    let mut rng = MersenneTwisterUniformRng::new(6);
    for _ in 0..100 {
        let x = ttbd(5.0, &[2.0, 3.0], &[2.0, 3.0], &mut rng).unwrap();
        assert_eq!(x, vec![2.0, 3.0]);
        assert_eq!(5.0 - sum(&x), 0.0);
    }
}

#[test]
fn test_ttbd_arbitrary_targets() {
    let lower = [0.0, 10.0, -5.0, 1.0, 1.0, 0.25];
    let upper = [1.0, 20.0, 5.0, 1.0, 3.0, 0.75];
    let mut rng = StdRng::seed_from_u64(77);
    for target in [7.25, 10.0, 20.0, 30.75] {
        for _ in 0..250 {
            let x = ttbd(target, &lower, &upper, &mut rng).unwrap();
            check_sample(&lower, &upper, target, &x);
        }
    }
}

#[test]
fn test_ttbd_at_extremes() {
    let lower = [-1.0, 0.0, 2.0];
    let upper = [1.0, 3.0, 4.0];
    let mut rng = MersenneTwisterUniformRng::new(8);
    let low = ttbd(1.0, &lower, &upper, &mut rng).unwrap();
    let high = ttbd(8.0, &lower, &upper, &mut rng).unwrap();
    for i in 0..3 {
        assert_abs_diff_eq!(low[i], lower[i], epsilon = 1e-12);
        assert_abs_diff_eq!(high[i], upper[i], epsilon = 1e-12);
    }
}

// ─── Validation ───────────────────────────────────────────────────────────────

#[test]
fn test_dimension_mismatch() {
    let mut rng = MersenneTwisterUniformRng::new(9);
    let zmbd_err = zmbd(&[-1.0, -1.0, -1.0], &[1.0, 1.0], &mut rng).unwrap_err();
    let ttbd_err = ttbd(0.0, &[-1.0, -1.0, -1.0], &[1.0, 1.0], &mut rng).unwrap_err();
    assert_eq!(zmbd_err.kind(), ErrorKind::DimensionMismatch);
    assert_eq!(zmbd_err, ttbd_err);
    assert_eq!(
        zmbd_err.to_string(),
        "invalid argument (dimension mismatch): lower and upper bounds must be of same length (3 vs 2)"
    );
}

#[test]
fn test_inverted_bounds() {
    let mut rng = MersenneTwisterUniformRng::new(10);
    let err = zmbd(&[-1.0, 0.5], &[1.0, 0.25], &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InfeasibleBounds);
    let err = ttbd(0.0, &[-1.0, 0.5], &[1.0, 0.25], &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InfeasibleBounds);
}

#[test]
fn test_unreachable_target() {
    let mut rng = MersenneTwisterUniformRng::new(11);
    let err = zmbd_with_target(&[-1.0, -1.0], &[1.0, 1.0], 2.5, &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InfeasibleBounds);
    let err = ttbd(-0.5, &[0.0, 0.0], &[1.0, 1.0], &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InfeasibleBounds);
}

#[test]
fn test_overflowing_bounds_return_errors() {
    let lower = [-1e308, -1e308];
    let upper = [1e308, 1e308];
    let mut rng = StdRng::seed_from_u64(1);
    let err = zmbd(&lower, &upper, &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InfeasibleBounds);
    let err = ttbd(0.0, &lower, &upper, &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InfeasibleBounds);
}

// ─── Configuration and reproducibility ───────────────────────────────────────

#[test]
fn test_seeded_runs_repeat() {
    let lower = [-2.0, -1.0, -3.0, 0.0, -0.5];
    let upper = [2.0, 1.0, 0.0, 4.0, 0.5];
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| zmbd(&lower, &upper, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(123), run(123));
    assert_ne!(run(123), run(124));
}

#[test]
fn test_unshuffled_sampler() {
    let lower = [-4.0, -1.0, -1.0, -4.0];
    let upper = [1.0, 5.0, 1.0, 1.0];
    let sampler = BoundedSampler::new().with_shuffled_order(false);
    let mut rng = MersenneTwisterUniformRng::new(12);
    for _ in 0..200 {
        let x = sampler.zmbd(&lower, &upper, &mut rng).unwrap();
        check_sample(&lower, &upper, 0.0, &x);
        let y = sampler.ttbd(-3.0, &lower, &upper, &mut rng).unwrap();
        check_sample(&lower, &upper, -3.0, &y);
    }
}

#[test]
fn test_dyn_random_source() {
    let mut inner = StdRng::seed_from_u64(13);
    let rng: &mut dyn rand::RngCore = &mut inner;
    let x = zmbd(&[-1.0, -1.0], &[1.0, 1.0], rng).unwrap();
    check_sample(&[-1.0, -1.0], &[1.0, 1.0], 0.0, &x);
}
