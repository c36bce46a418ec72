use crate::symbols::Symbol;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("symbol pool exhausted: {requested} draws requested but only {available} weighted instances configured")]
    PoolExhausted { requested: usize, available: usize },
    #[error("no paytable entry for symbol {0}")]
    UnknownSymbol(Symbol),
    #[error("cannot evaluate {requested} lines on a grid with {rows} rows")]
    TooManyLines { requested: usize, rows: usize },
}
