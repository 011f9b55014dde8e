// =============================================================================
// Decision Classifier — Buy / Sell / Hold from one snapshot
// =============================================================================
//
// Rules, in order:
//   1. Any of Close / EMA_20 / MACD / RSI_14 missing     → Hold
//   2. Close > EMA_20  and  MACD > 0  and  RSI < overbought → Buy
//   3. Close < EMA_20  and  MACD < 0  and  RSI > oversold   → Sell
//   4. Otherwise                                          → Hold
//
// The RSI guards suppress directional calls deep in exhaustion territory.
// The function is total: every input maps to a valid signal, and Hold is
// the conservative answer under any data insufficiency.
// =============================================================================

use crate::config::EngineConfig;
use crate::types::{IndicatorSnapshot, Signal};

/// Classify one snapshot into a trading signal.
pub fn classify(row: &IndicatorSnapshot, cfg: &EngineConfig) -> Signal {
    let (close, ema_20, macd, rsi) = match (
        row.close_val(),
        row.ema_20_val(),
        row.macd_val(),
        row.rsi_14_val(),
    ) {
        (Some(c), Some(e), Some(m), Some(r)) => (c, e, m, r),
        _ => return Signal::Hold,
    };

    if close > ema_20 && macd > 0.0 && rsi < cfg.rsi_overbought {
        Signal::Buy
    } else if close < ema_20 && macd < 0.0 && rsi > cfg.rsi_oversold {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
