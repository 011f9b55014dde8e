// =============================================================================
// techsignals — confidence-weighted trading-signal engine
// =============================================================================
//
// Turns a table of per-ticker technical-indicator snapshots into one
// recommendation per ticker: a Buy / Sell / Hold decision, a composite
// confidence score in [0, 1], and an ATR-sized stop-loss / take-profit
// band. Indicator computation, persistence and transport are external
// collaborators; the engine itself is a pure, synchronous batch transform.
//
//   let engine = SignalEngine::new(AssetClass::crypto());
//   let results = engine.compute_signals(&snapshots);
// =============================================================================

pub mod assets;
pub mod config;
pub mod engine;
pub mod math;
pub mod signals;
pub mod types;

pub use assets::AssetClass;
pub use config::{EngineConfig, ScoreWeights};
pub use engine::{latest_per_ticker, SignalEngine};
pub use signals::{ConfidenceBreakdown, RiskBand};
pub use types::{IndicatorSnapshot, Signal, SignalResult};
