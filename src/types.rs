// =============================================================================
// Shared types used across the signal engine
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ticker's technical-indicator values at a single date.
///
/// `ticker`, `date` and `close` are required — rows missing them must be
/// excluded by the upstream supplier. Every indicator field is optional;
/// the accessor methods collapse present-but-non-finite values (NaN, ±inf)
/// to `None` so that downstream code has a single notion of "missing".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(rename = "Ticker")]
    pub ticker: String,

    #[serde(rename = "Date")]
    pub date: NaiveDate,

    /// Closing price. Required, but still guarded against NaN downstream.
    #[serde(rename = "Close")]
    pub close: f64,

    /// 20-period exponential moving average of the close.
    #[serde(rename = "EMA_20", default)]
    pub ema_20: Option<f64>,

    /// MACD momentum oscillator value.
    #[serde(rename = "MACD", default)]
    pub macd: Option<f64>,

    /// 14-period relative strength index, nominally in [0, 100].
    #[serde(rename = "RSI_14", default)]
    pub rsi_14: Option<f64>,

    /// Average true range. Zero is treated the same as missing when sizing
    /// risk bands.
    #[serde(rename = "ATR", default)]
    pub atr: Option<f64>,

    /// Volume ratio vs typical volume; 1.0 means "typical".
    #[serde(rename = "Vol_Ratio", default)]
    pub vol_ratio: Option<f64>,
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

impl IndicatorSnapshot {
    /// Minimal snapshot with all indicator fields absent.
    pub fn new(ticker: impl Into<String>, date: NaiveDate, close: f64) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            close,
            ema_20: None,
            macd: None,
            rsi_14: None,
            atr: None,
            vol_ratio: None,
        }
    }

    /// Close, or `None` when the upstream supplier leaked a non-finite value.
    pub fn close_val(&self) -> Option<f64> {
        finite(Some(self.close))
    }

    pub fn ema_20_val(&self) -> Option<f64> {
        finite(self.ema_20)
    }

    pub fn macd_val(&self) -> Option<f64> {
        finite(self.macd)
    }

    pub fn rsi_14_val(&self) -> Option<f64> {
        finite(self.rsi_14)
    }

    pub fn atr_val(&self) -> Option<f64> {
        finite(self.atr)
    }

    pub fn vol_ratio_val(&self) -> Option<f64> {
        finite(self.vol_ratio)
    }

    /// Base symbol used for display-name lookup: the substring before the
    /// first `-`, trimmed and upper-cased (e.g. `"btc-usd"` → `"BTC"`).
    pub fn base_symbol(&self) -> String {
        self.ticker
            .split('-')
            .next()
            .unwrap_or(&self.ticker)
            .trim()
            .to_uppercase()
    }
}

/// Discrete trading recommendation for a single ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Default for Signal {
    fn default() -> Self {
        Self::Hold
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
            Self::Hold => write!(f, "Hold"),
        }
    }
}

/// Final per-ticker recommendation handed to an external writer.
///
/// All float fields are rounded to 2 decimal places by the assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    #[serde(rename = "Ticker")]
    pub ticker: String,

    #[serde(rename = "DisplayName")]
    pub display_name: String,

    #[serde(rename = "LivePrice")]
    pub live_price: f64,

    /// Composite belief strength in [0, 1].
    #[serde(rename = "Confidence")]
    pub confidence: f64,

    #[serde(rename = "Signal")]
    pub signal: Signal,

    #[serde(rename = "StopLoss")]
    pub stop_loss: f64,

    #[serde(rename = "TakeProfit")]
    pub take_profit: f64,
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn accessors_collapse_non_finite_to_none() {
        let mut snap = IndicatorSnapshot::new("BTC-USD", date(), 100.0);
        snap.ema_20 = Some(f64::NAN);
        snap.macd = Some(f64::INFINITY);
        snap.rsi_14 = Some(55.0);

        assert_eq!(snap.ema_20_val(), None);
        assert_eq!(snap.macd_val(), None);
        assert_eq!(snap.rsi_14_val(), Some(55.0));
        assert_eq!(snap.atr_val(), None);
    }

    #[test]
    fn atr_zero_is_present_at_the_type_level() {
        // Zero is a real value here; the risk band applies its own fallback.
        let mut snap = IndicatorSnapshot::new("BTC-USD", date(), 100.0);
        snap.atr = Some(0.0);
        assert_eq!(snap.atr_val(), Some(0.0));
    }

    #[test]
    fn base_symbol_strips_suffix_and_uppercases() {
        let snap = IndicatorSnapshot::new(" btc-usd ", date(), 100.0);
        assert_eq!(snap.base_symbol(), "BTC");

        let plain = IndicatorSnapshot::new("GCF", date(), 100.0);
        assert_eq!(plain.base_symbol(), "GCF");
    }

    #[test]
    fn signal_serialises_as_plain_string() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"Buy\"");
        assert_eq!(serde_json::to_string(&Signal::Hold).unwrap(), "\"Hold\"");
        assert_eq!(Signal::default(), Signal::Hold);
    }

    #[test]
    fn snapshot_deserialises_with_missing_indicator_columns() {
        let json = r#"{"Ticker":"ETH-USD","Date":"2025-06-01","Close":2500.0}"#;
        let snap: IndicatorSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.ticker, "ETH-USD");
        assert_eq!(snap.ema_20, None);
        assert_eq!(snap.vol_ratio, None);
    }
}
