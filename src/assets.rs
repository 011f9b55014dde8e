// =============================================================================
// Asset-class metadata — tracked universe and display names
// =============================================================================
//
// The scoring pipeline is identical across asset classes; only the tracked
// tickers and their human-readable names differ. One `AssetClass` value
// parameterises the engine instead of duplicating the algorithm per domain.
// =============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata for one asset class: a label, the tracked base symbols, and a
/// base-symbol → display-name map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetClass {
    /// Short class label, e.g. `"crypto"` or `"commodities"`.
    pub label: String,

    /// Tracked base symbols, in catalog order.
    pub symbols: Vec<String>,

    /// Base symbol → human-readable name.
    pub names: HashMap<String, String>,
}

impl AssetClass {
    /// Build an asset class from `(symbol, display name)` pairs.
    pub fn new(label: impl Into<String>, pairs: &[(&str, &str)]) -> Self {
        let symbols = pairs.iter().map(|(s, _)| s.to_string()).collect();
        let names = pairs
            .iter()
            .map(|(s, n)| (s.to_string(), n.to_string()))
            .collect();
        Self {
            label: label.into(),
            symbols,
            names,
        }
    }

    /// Resolve a base symbol to its display name. Unknown symbols pass
    /// through unchanged.
    pub fn display_name(&self, symbol: &str) -> String {
        self.names
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| symbol.to_string())
    }

    /// Whether `symbol` belongs to this class's tracked universe.
    pub fn is_tracked(&self, symbol: &str) -> bool {
        self.names.contains_key(symbol)
    }

    /// The tracked cryptocurrency universe.
    pub fn crypto() -> Self {
        Self::new(
            "crypto",
            &[
                ("BTC", "Bitcoin"),
                ("ETH", "Ethereum"),
                ("USDT", "Tether"),
                ("BNB", "Binance Coin"),
                ("ADA", "Cardano"),
                ("SOL", "Solana"),
                ("XRP", "Ripple"),
                ("DOT", "Polkadot"),
                ("AVAX", "Avalanche"),
                ("MATIC", "Polygon"),
                ("ATOM", "Cosmos"),
                ("DAI", "Dai"),
                ("LTC", "Litecoin"),
                ("UNI", "Uniswap"),
                ("ALGO", "Algorand"),
                ("BCH", "Bitcoin Cash"),
                ("XLM", "Stellar"),
                ("XMR", "Monero"),
                ("LINK", "Chainlink"),
                ("SUI", "Sui"),
                ("TON", "Toncoin"),
                ("TRX", "Tron"),
                ("USDE", "Ethena USDe"),
                ("HBAR", "Hedera"),
                ("DOGE", "Dogecoin"),
            ],
        )
    }

    /// The tracked commodity-futures universe.
    pub fn commodities() -> Self {
        Self::new(
            "commodities",
            &[
                ("BZF", "Brent Futures"),
                ("CLF", "Crude Oil Futures"),
                ("NGF", "Natural Gas Futures"),
                ("GCF", "Gold Futures"),
                ("SIF", "Silver Futures"),
                ("RBF", "Gasoline Futures"),
                ("HOF", "Heating Oil Futures"),
            ],
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crypto_catalog_resolves_names() {
        let crypto = AssetClass::crypto();
        assert_eq!(crypto.label, "crypto");
        assert_eq!(crypto.symbols.len(), 25);
        assert_eq!(crypto.display_name("BTC"), "Bitcoin");
        assert_eq!(crypto.display_name("DOGE"), "Dogecoin");
        assert!(crypto.is_tracked("HBAR"));
    }

    #[test]
    fn commodities_catalog_resolves_names() {
        let com = AssetClass::commodities();
        assert_eq!(com.symbols.len(), 7);
        assert_eq!(com.display_name("GCF"), "Gold Futures");
        assert!(!com.is_tracked("BTC"));
    }

    #[test]
    fn unknown_symbol_falls_back_to_identity() {
        let crypto = AssetClass::crypto();
        assert_eq!(crypto.display_name("PEPE"), "PEPE");
    }

    #[test]
    fn custom_class_preserves_catalog_order() {
        let class = AssetClass::new("metals", &[("XAU", "Gold"), ("XAG", "Silver")]);
        assert_eq!(class.symbols, vec!["XAU", "XAG"]);
        assert_eq!(class.display_name("XAG"), "Silver");
    }
}
