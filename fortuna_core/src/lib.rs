pub mod engine;
pub mod error;
pub mod paytable;
pub mod symbols;

pub use crate::engine::{
    evaluate, generate_grid, spin_once, EngineParams, Grid, SpinOutcome, WinResult, COLS, MAX_BET,
    MAX_LINES, MIN_BET, ROWS,
};
pub use crate::error::EngineError;
pub use crate::paytable::{Paytable, PaytableEntry};
pub use crate::symbols::{Symbol, SymbolWeights};
