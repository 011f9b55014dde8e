// =============================================================================
// Engine Configuration — every heuristic constant named and overridable
// =============================================================================
//
// All tunables of the scoring, classification and risk-band stages live
// here so they can be adjusted (or parameterised in tests) without code
// changes.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash. All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_trend_weight() -> f64 {
    0.45
}

fn default_momentum_weight() -> f64 {
    0.25
}

fn default_oscillator_weight() -> f64 {
    0.20
}

fn default_volume_weight() -> f64 {
    0.10
}

fn default_trend_gain() -> f64 {
    8.0
}

fn default_momentum_price_scale() -> f64 {
    0.0005
}

fn default_oscillator_span() -> f64 {
    60.0
}

fn default_rsi_overbought() -> f64 {
    70.0
}

fn default_rsi_oversold() -> f64 {
    30.0
}

fn default_sl_atr_multiplier() -> f64 {
    2.0
}

fn default_tp_atr_multiplier() -> f64 {
    3.0
}

fn default_hold_atr_multiplier() -> f64 {
    1.0
}

fn default_atr_floor_pct() -> f64 {
    0.01
}

// =============================================================================
// ScoreWeights
// =============================================================================

/// Weights of the four confidence sub-scores. They sum to 1.0 by default;
/// the scorer does not renormalise, so overrides that break that sum shift
/// the confidence range accordingly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_trend_weight")]
    pub trend: f64,

    #[serde(default = "default_momentum_weight")]
    pub momentum: f64,

    #[serde(default = "default_oscillator_weight")]
    pub oscillator: f64,

    #[serde(default = "default_volume_weight")]
    pub volume: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            trend: default_trend_weight(),
            momentum: default_momentum_weight(),
            oscillator: default_oscillator_weight(),
            volume: default_volume_weight(),
        }
    }
}

// =============================================================================
// EngineConfig
// =============================================================================

/// Tunable parameters for the signal engine.
///
/// Every field has a serde default so that older JSON files missing new
/// fields will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // --- Confidence scoring --------------------------------------------------

    /// Sub-score weights for the composite confidence value.
    #[serde(default)]
    pub weights: ScoreWeights,

    /// Sigmoid steepness applied to the relative Close/EMA_20 distance.
    #[serde(default = "default_trend_gain")]
    pub trend_gain: f64,

    /// Fraction of |Close| used as the MACD normalisation denominator.
    #[serde(default = "default_momentum_price_scale")]
    pub momentum_price_scale: f64,

    /// Divisor for the RSI distance-from-50 oscillator score.
    #[serde(default = "default_oscillator_span")]
    pub oscillator_span: f64,

    // --- Classification ------------------------------------------------------

    /// RSI level above which a Buy is suppressed (exhaustion guard).
    #[serde(default = "default_rsi_overbought")]
    pub rsi_overbought: f64,

    /// RSI level below which a Sell is suppressed (exhaustion guard).
    #[serde(default = "default_rsi_oversold")]
    pub rsi_oversold: f64,

    // --- Risk bands -----------------------------------------------------------

    /// ATR multiple for the stop-loss distance on directional signals.
    #[serde(default = "default_sl_atr_multiplier")]
    pub sl_atr_multiplier: f64,

    /// ATR multiple for the take-profit distance on directional signals.
    #[serde(default = "default_tp_atr_multiplier")]
    pub tp_atr_multiplier: f64,

    /// ATR multiple for the symmetric Hold band.
    #[serde(default = "default_hold_atr_multiplier")]
    pub hold_atr_multiplier: f64,

    /// Volatility floor as a fraction of |Close|, used when ATR is missing
    /// or zero.
    #[serde(default = "default_atr_floor_pct")]
    pub atr_floor_pct: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            trend_gain: default_trend_gain(),
            momentum_price_scale: default_momentum_price_scale(),
            oscillator_span: default_oscillator_span(),
            rsi_overbought: default_rsi_overbought(),
            rsi_oversold: default_rsi_oversold(),
            sl_atr_multiplier: default_sl_atr_multiplier(),
            tp_atr_multiplier: default_tp_atr_multiplier(),
            hold_atr_multiplier: default_hold_atr_multiplier(),
            atr_floor_pct: default_atr_floor_pct(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse engine config from {}", path.display()))?;

        info!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise engine config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "engine config saved (atomic)");
        Ok(())
    }
}
