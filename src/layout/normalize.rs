use super::Canvas;
use crate::error::{InvalidInput, Result};

/// Check that every weight is finite and non-negative.
pub fn validate_weights(weights: &[f64]) -> Result<()> {
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() {
            return Err(InvalidInput::NonFiniteWeight { index, weight }.into());
        }
        if weight < 0.0 {
            return Err(InvalidInput::NegativeWeight { index, weight }.into());
        }
    }
    Ok(())
}

/// Rescale `weights` so they sum to the canvas area, keeping their ratios.
///
/// An all-zero (or empty) input maps to all zeros. Weights are first divided
/// by the largest one, so neither the sum nor the scale factor can overflow or
/// underflow for huge or subnormal inputs.
pub fn normalize_sizes(weights: &[f64], canvas: Canvas) -> Result<Vec<f64>> {
    canvas.validate()?;
    validate_weights(weights)?;

    let max = weights.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        if !weights.is_empty() {
            tracing::debug!("All {} weights are zero, layout is degenerate", weights.len());
        }
        return Ok(vec![0.0; weights.len()]);
    }

    // Each relative weight is in [0, 1] and the largest is exactly 1,
    // so `total` lies in [1, len].
    let relative: Vec<f64> = weights.iter().map(|w| w / max).collect();
    let total: f64 = relative.iter().sum();
    let area = canvas.area();
    Ok(relative.iter().map(|r| (r / total) * area).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn sum_matches_canvas_area() {
        let out = normalize_sizes(&[100.0, 50.0, 30.0, 20.0], Canvas::new(200.0, 100.0)).unwrap();
        let sum: f64 = out.iter().sum();
        assert!((sum - 20_000.0).abs() < 1e-6);
        assert!((out[0] - 10_000.0).abs() < 1e-6);
        assert!((out[3] - 2_000.0).abs() < 1e-6);
    }

    #[test]
    fn random_weights_keep_area_and_ratios() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(1..40);
            let weights: Vec<f64> = (0..n)
                .map(|_| if rng.gen_bool(0.1) { 0.0 } else { rng.gen_range(0.0..1000.0) })
                .collect();
            let canvas = Canvas::new(rng.gen_range(1.0..2000.0), rng.gen_range(1.0..2000.0));
            let out = normalize_sizes(&weights, canvas).unwrap();
            assert_eq!(out.len(), weights.len());

            let total: f64 = weights.iter().sum();
            let sum: f64 = out.iter().sum();
            if total > 0.0 {
                assert!((sum - canvas.area()).abs() <= canvas.area() * 1e-9);
            } else {
                assert_eq!(sum, 0.0);
            }

            for i in 0..n {
                for j in 0..n {
                    if weights[j] != 0.0 {
                        let want = weights[i] / weights[j];
                        let got = out[i] / out[j];
                        assert!((want - got).abs() <= want.abs() * 1e-9 + 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let canvas = Canvas::new(100.0, 100.0);
        let out = normalize_sizes(&[1e308, 1e308], canvas).unwrap();
        assert!((out[0] - 5_000.0).abs() < 1e-9);
        assert!((out[1] - 5_000.0).abs() < 1e-9);
    }

    #[test]
    fn subnormal_weights_do_not_blow_up() {
        let canvas = Canvas::new(100.0, 100.0);
        let out = normalize_sizes(&[1e-320, 5e-321], canvas).unwrap();
        assert!(out.iter().all(|a| a.is_finite() && *a > 0.0), "{out:?}");
        let sum: f64 = out.iter().sum();
        assert!((sum - 10_000.0).abs() < 1e-6);
        assert!(out[0] > out[1]);
    }

    #[test]
    fn extreme_weights_still_tile_the_canvas() {
        let canvas = Canvas::new(100.0, 100.0);
        for weights in [[1e308, 1e308], [1e-320, 5e-321]] {
            let areas = normalize_sizes(&weights, canvas).unwrap();
            let rects = crate::layout::squarify(&areas, canvas.bounds());
            let report = crate::layout::check_layout(&rects, &weights, canvas, 1e-6);
            assert!(report.is_clean(), "{report:?} for {weights:?}");
        }
    }

    #[test]
    fn all_zero_weights_stay_zero() {
        let out = normalize_sizes(&[0.0, 0.0, 0.0], Canvas::new(100.0, 100.0)).unwrap();
        assert_eq!(out, vec![0.0; 3]);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = normalize_sizes(&[3.0, -1.0], Canvas::new(10.0, 10.0)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput(InvalidInput::NegativeWeight {
                index: 1,
                weight: -1.0
            })
        );
    }

    #[test]
    fn nan_weight_is_rejected() {
        let err = normalize_sizes(&[f64::NAN], Canvas::new(10.0, 10.0)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInput::NonFiniteWeight { index: 0, .. })
        ));
    }
}
