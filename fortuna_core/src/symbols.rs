use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

impl Symbol {
    pub fn from_index(i: u8) -> Self {
        match i % 4 {
            0 => Symbol::A,
            1 => Symbol::B,
            2 => Symbol::C,
            _ => Symbol::D,
        }
    }

    pub fn to_index(self) -> u8 {
        match self {
            Symbol::A => 0,
            Symbol::B => 1,
            Symbol::C => 2,
            Symbol::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative draw frequencies. Each symbol appears `weight` times in the
/// pool a column draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolWeights(pub Vec<(Symbol, u32)>);

impl SymbolWeights {
    /// Classic distribution: the highest-paying symbol is the rarest.
    pub fn default_classic() -> Self {
        Self(vec![
            (Symbol::A, 2),
            (Symbol::B, 4),
            (Symbol::C, 6),
            (Symbol::D, 8),
        ])
    }

    pub fn total_weight(&self) -> usize {
        self.0.iter().map(|&(_, w)| w as usize).sum()
    }

    /// Expand the weight table into the full draw pool, one instance per
    /// unit of weight.
    pub fn population(&self) -> Vec<Symbol> {
        let mut pool = Vec::with_capacity(self.total_weight());
        for &(symbol, weight) in &self.0 {
            for _ in 0..weight {
                pool.push(symbol);
            }
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for i in 0..4u8 {
            assert_eq!(Symbol::from_index(i).to_index(), i);
        }
    }

    #[test]
    fn test_population_matches_weights() {
        let weights = SymbolWeights::default_classic();
        let pool = weights.population();
        assert_eq!(pool.len(), weights.total_weight());
        assert_eq!(pool.iter().filter(|&&s| s == Symbol::A).count(), 2);
        assert_eq!(pool.iter().filter(|&&s| s == Symbol::D).count(), 8);
    }
}
