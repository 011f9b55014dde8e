// =============================================================================
// Numeric helpers for score normalisation
// =============================================================================
//
// The scoring pipeline maps unbounded indicator values into [0, 1] score
// space. Two rules hold everywhere:
//   - every division is guarded by `EPS` so a near-zero denominator can
//     never produce an arithmetic exception,
//   - every sub-score passes through `clamp01`, which also swallows NaN.
// =============================================================================

/// Guard added to every denominator in score space.
pub const EPS: f64 = 1e-9;

/// Numerically stabilised logistic sigmoid: `1 / (1 + e^{-x})`.
///
/// The two-branch form never evaluates `exp` on a large positive argument,
/// so extreme inputs saturate to 0.0 / 1.0 instead of overflowing.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Clamp `x` to [0, 1]. NaN collapses to the lower bound so that a broken
/// intermediate value can never escape score space.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Round to 2 decimal places, the precision of every published field.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_midpoint_and_symmetry() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        // σ(x) + σ(-x) = 1
        for &x in &[0.1, 1.0, 3.7, 12.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sigmoid_saturates_without_overflow() {
        assert!((sigmoid(1000.0) - 1.0).abs() < 1e-12);
        assert!(sigmoid(-1000.0).abs() < 1e-12);
        assert!(sigmoid(f64::MAX).is_finite());
        assert!(sigmoid(f64::MIN).is_finite());
    }

    #[test]
    fn clamp01_bounds_and_nan() {
        assert_eq!(clamp01(-0.3), 0.0);
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(0.42), 0.42);
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
        assert_eq!(clamp01(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(96.004), 96.0);
        assert_eq!(round2(-2.346), -2.35);
        assert_eq!(round2(0.8826), 0.88);
    }
}
