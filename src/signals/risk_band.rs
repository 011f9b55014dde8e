// =============================================================================
// Risk Band Calculator — ATR-sized stop-loss / take-profit levels
// =============================================================================
//
// Band shape depends on the decision:
//
//   Buy   SL = Close − sl_mult·atr    TP = Close + tp_mult·atr   (2:3 default)
//   Sell  SL = Close + sl_mult·atr    TP = Close − tp_mult·atr   (mirrored)
//   Hold  SL = Close − hold_mult·atr  TP = Close + hold_mult·atr (symmetric)
//
// When ATR is missing or zero the effective volatility falls back to a
// fraction of price (1 % by default), floored at ε.
// =============================================================================

use serde::Serialize;

use crate::config::EngineConfig;
use crate::math::EPS;
use crate::types::{IndicatorSnapshot, Signal};

/// Stop-loss / take-profit pair bounding a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskBand {
    pub stop_loss: f64,
    pub take_profit: f64,
}

/// Effective volatility: the snapshot's ATR when present and non-zero,
/// otherwise `max(|close| · atr_floor_pct, ε)`.
pub fn effective_atr(close: f64, atr: Option<f64>, cfg: &EngineConfig) -> f64 {
    match atr {
        Some(a) if a != 0.0 => a,
        _ => (close.abs() * cfg.atr_floor_pct).max(EPS),
    }
}

/// Compute the band for one price / volatility / decision triple.
pub fn risk_band(close: f64, atr: Option<f64>, signal: Signal, cfg: &EngineConfig) -> RiskBand {
    let atr_val = effective_atr(close, atr, cfg);

    let (stop_loss, take_profit) = match signal {
        Signal::Buy => (
            close - cfg.sl_atr_multiplier * atr_val,
            close + cfg.tp_atr_multiplier * atr_val,
        ),
        Signal::Sell => (
            close + cfg.sl_atr_multiplier * atr_val,
            close - cfg.tp_atr_multiplier * atr_val,
        ),
        Signal::Hold => (
            close - cfg.hold_atr_multiplier * atr_val,
            close + cfg.hold_atr_multiplier * atr_val,
        ),
    };

    RiskBand {
        stop_loss,
        take_profit,
    }
}

/// Band for a snapshot row, using its close and (NaN-filtered) ATR.
pub fn band_for_row(row: &IndicatorSnapshot, signal: Signal, cfg: &EngineConfig) -> RiskBand {
    risk_band(row.close, row.atr_val(), signal, cfg)
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_band_is_asymmetric_upside() {
        let cfg = EngineConfig::default();
        let band = risk_band(100.0, Some(2.0), Signal::Buy, &cfg);
        assert!((band.stop_loss - 96.0).abs() < 1e-12);
        assert!((band.take_profit - 106.0).abs() < 1e-12);
        assert!(band.take_profit > 100.0 && 100.0 > band.stop_loss);
    }

    #[test]
    fn sell_band_mirrors_for_short_exposure() {
        let cfg = EngineConfig::default();
        let band = risk_band(100.0, Some(2.0), Signal::Sell, &cfg);
        assert!((band.stop_loss - 104.0).abs() < 1e-12);
        assert!((band.take_profit - 94.0).abs() < 1e-12);
        assert!(band.stop_loss > 100.0 && 100.0 > band.take_profit);
    }

    #[test]
    fn hold_band_is_symmetric_and_tighter() {
        let cfg = EngineConfig::default();
        let band = risk_band(100.0, Some(2.0), Signal::Hold, &cfg);
        assert!((band.stop_loss - 98.0).abs() < 1e-12);
        assert!((band.take_profit - 102.0).abs() < 1e-12);
    }

    #[test]
    fn zero_atr_falls_back_to_price_floor() {
        // Scenario C: Close=100, ATR=0 → effective ATR 1.0.
        let cfg = EngineConfig::default();
        assert!((effective_atr(100.0, Some(0.0), &cfg) - 1.0).abs() < 1e-12);

        let band = risk_band(100.0, Some(0.0), Signal::Hold, &cfg);
        assert!((band.stop_loss - 99.0).abs() < 1e-12);
        assert!((band.take_profit - 101.0).abs() < 1e-12);
    }

    #[test]
    fn missing_atr_falls_back_to_price_floor() {
        let cfg = EngineConfig::default();
        assert!((effective_atr(250.0, None, &cfg) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn zero_price_floor_is_epsilon() {
        let cfg = EngineConfig::default();
        assert!((effective_atr(0.0, None, &cfg) - EPS).abs() < 1e-18);
    }

    #[test]
    fn negative_price_uses_absolute_value_for_floor() {
        let cfg = EngineConfig::default();
        assert!((effective_atr(-200.0, None, &cfg) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn custom_multipliers_reshape_band() {
        let mut cfg = EngineConfig::default();
        cfg.sl_atr_multiplier = 1.0;
        cfg.tp_atr_multiplier = 5.0;
        let band = risk_band(100.0, Some(2.0), Signal::Buy, &cfg);
        assert!((band.stop_loss - 98.0).abs() < 1e-12);
        assert!((band.take_profit - 110.0).abs() < 1e-12);
    }
}
