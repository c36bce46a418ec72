use crate::error::EngineError;
use crate::symbols::Symbol;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaytableEntry {
    pub symbol: Symbol,
    pub payout_multiplier: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paytable(pub Vec<PaytableEntry>);

impl Paytable {
    pub fn default_classic() -> Self {
        Self(vec![
            PaytableEntry {
                symbol: Symbol::A,
                payout_multiplier: 5,
            },
            PaytableEntry {
                symbol: Symbol::B,
                payout_multiplier: 4,
            },
            PaytableEntry {
                symbol: Symbol::C,
                payout_multiplier: 3,
            },
            PaytableEntry {
                symbol: Symbol::D,
                payout_multiplier: 2,
            },
        ])
    }

    /// Payout multiplier for a fully matched line of `symbol`. A symbol
    /// missing from the table is a configuration error, not a zero payout.
    pub fn multiplier(&self, symbol: Symbol) -> Result<u64, EngineError> {
        self.0
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.payout_multiplier)
            .ok_or(EngineError::UnknownSymbol(symbol))
    }
}
