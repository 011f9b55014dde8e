// =============================================================================
// Confidence Scorer — weighted composite of four normalised sub-scores
// =============================================================================
//
// Each sub-score maps one indicator into [0, 1]:
//
//   trend      σ(((Close − EMA_20) / (EMA_20 + ε)) · gain)   0.5 when missing
//   momentum   σ(MACD / (|Close| · scale + ε))               MACD missing → 0.0
//   oscillator 1 − |RSI_14 − 50| / span                      RSI missing → 50.0
//   volume     σ(Vol_Ratio)                                  missing → 1.0
//
// The weighted sum is remapped as 0.5 + 0.5 · sum, so with the default
// weights the composite never falls below 0.5; the final clamp is only a
// bound against pathological overrides.
//
// The missing-RSI default of 50 yields an oscillator score of 1.0, not the
// 0.5 used for a missing trend. That asymmetry is intentional original
// behaviour and is preserved.
// =============================================================================

use serde::Serialize;

use crate::config::EngineConfig;
use crate::math::{clamp01, sigmoid, EPS};
use crate::types::IndicatorSnapshot;

/// The sub-scores behind a composite confidence value, kept for dashboards
/// and diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceBreakdown {
    pub trend: f64,
    pub momentum: f64,
    pub oscillator: f64,
    pub volume: f64,
    /// Weighted sum of the four sub-scores, before the 0.5 remap.
    pub weighted: f64,
    /// Final composite in [0, 1].
    pub confidence: f64,
}

/// Score one snapshot, returning the full sub-score breakdown.
pub fn score(row: &IndicatorSnapshot, cfg: &EngineConfig) -> ConfidenceBreakdown {
    let close = row.close_val();
    let ema_20 = row.ema_20_val();
    let macd = row.macd_val().unwrap_or(0.0);
    let rsi = row.rsi_14_val().unwrap_or(50.0);
    let vol_ratio = row.vol_ratio_val().unwrap_or(1.0);

    let trend = match (close, ema_20) {
        (Some(close), Some(ema)) => {
            let rel = (close - ema) / (ema + EPS);
            clamp01(sigmoid(rel * cfg.trend_gain))
        }
        // Neutral when either side of the comparison is missing.
        _ => 0.5,
    };

    let close_mag = close.map(f64::abs).unwrap_or(f64::NAN);
    let momentum = clamp01(sigmoid(macd / (close_mag * cfg.momentum_price_scale + EPS)));

    let oscillator = clamp01(1.0 - (rsi - 50.0).abs() / cfg.oscillator_span);

    let volume = clamp01(sigmoid(vol_ratio));

    let w = &cfg.weights;
    let weighted =
        w.trend * trend + w.momentum * momentum + w.oscillator * oscillator + w.volume * volume;
    let confidence = clamp01(0.5 + 0.5 * weighted);

    ConfidenceBreakdown {
        trend,
        momentum,
        oscillator,
        volume,
        weighted,
        confidence,
    }
}

/// Composite confidence in [0, 1] for one snapshot.
pub fn confidence(row: &IndicatorSnapshot, cfg: &EngineConfig) -> f64 {
    score(row, cfg).confidence
}
