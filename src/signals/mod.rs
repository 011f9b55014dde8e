// =============================================================================
// Signals Module
// =============================================================================
//
// The scoring pipeline applied to each selected snapshot:
// - Confidence scoring (weighted sub-score composite)
// - Buy / Sell / Hold classification
// - ATR-sized stop-loss / take-profit bands

pub mod classifier;
pub mod confidence;
pub mod risk_band;

pub use confidence::ConfidenceBreakdown;
pub use risk_band::RiskBand;
