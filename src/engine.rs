// =============================================================================
// Signal Engine — latest-snapshot selection and report assembly
// =============================================================================
//
// Pipeline, per run:
//   1. Reduce the snapshot table to the most recent row per ticker
//   2. Score each selected row (confidence composite)
//   3. Classify it (Buy / Sell / Hold)
//   4. Size its stop-loss / take-profit band from ATR
//   5. Join with display metadata and round every numeric field to 2 dp
//
// The run is a pure batch transformation: no engine state survives between
// invocations, and re-running on the same table yields identical output.
// =============================================================================

use std::collections::HashMap;

use tracing::{debug, info};

use crate::assets::AssetClass;
use crate::config::EngineConfig;
use crate::math::round2;
use crate::signals::{classifier, confidence, risk_band};
use crate::types::{IndicatorSnapshot, SignalResult};

/// Reduce the full snapshot table to one row per ticker — the most recent
/// by date.
///
/// Tickers are trimmed before grouping. Within a group the sort is stable,
/// so rows sharing the newest date resolve to the later one in input order.
/// Group output order is the first-appearance order of each ticker in the
/// input, which keeps runs deterministic.
pub fn latest_per_ticker(table: &[IndicatorSnapshot]) -> Vec<IndicatorSnapshot> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<IndicatorSnapshot>)> = Vec::new();

    for row in table {
        let key = row.ticker.trim().to_string();
        let idx = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(row.clone());
    }

    let mut latest = Vec::with_capacity(groups.len());
    for (ticker, mut rows) in groups {
        rows.sort_by_key(|r| r.date);
        if let Some(mut last) = rows.pop() {
            last.ticker = ticker;
            latest.push(last);
        }
    }
    latest
}

/// The signal engine: one instance per asset class.
///
/// Holds only configuration — every run is stateless and idempotent.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    config: EngineConfig,
    asset_class: AssetClass,
}

impl SignalEngine {
    /// Engine with default heuristics for the given asset class.
    pub fn new(asset_class: AssetClass) -> Self {
        Self::with_config(asset_class, EngineConfig::default())
    }

    /// Engine with explicit (e.g. file-loaded or test-tuned) heuristics.
    pub fn with_config(asset_class: AssetClass, config: EngineConfig) -> Self {
        Self {
            config,
            asset_class,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn asset_class(&self) -> &AssetClass {
        &self.asset_class
    }

    /// Compute one `SignalResult` per distinct ticker in `table`.
    ///
    /// Rows missing `Ticker`, `Date` or `Close` are the upstream supplier's
    /// responsibility; everything else degrades to documented defaults
    /// rather than failing.
    pub fn compute_signals(&self, table: &[IndicatorSnapshot]) -> Vec<SignalResult> {
        let latest = latest_per_ticker(table);
        let mut results = Vec::with_capacity(latest.len());

        for row in &latest {
            let breakdown = confidence::score(row, &self.config);
            let signal = classifier::classify(row, &self.config);
            let band = risk_band::band_for_row(row, signal, &self.config);

            let symbol = row.base_symbol();
            let display_name = self.asset_class.display_name(&symbol);

            debug!(
                ticker = %row.ticker,
                signal = %signal,
                confidence = breakdown.confidence,
                trend = breakdown.trend,
                momentum = breakdown.momentum,
                oscillator = breakdown.oscillator,
                volume = breakdown.volume,
                stop_loss = band.stop_loss,
                take_profit = band.take_profit,
                "snapshot scored"
            );

            results.push(SignalResult {
                ticker: row.ticker.clone(),
                display_name,
                live_price: round2(row.close),
                confidence: round2(breakdown.confidence),
                signal,
                stop_loss: round2(band.stop_loss),
                take_profit: round2(band.take_profit),
            });
        }

        info!(
            asset_class = %self.asset_class.label,
            rows = table.len(),
            tickers = results.len(),
            "signal computation complete"
        );

        results
    }
}
