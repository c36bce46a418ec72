use crate::{
    error::EngineError,
    paytable::Paytable,
    symbols::{Symbol, SymbolWeights},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ROWS: usize = 3;
pub const COLS: usize = 3;
pub const MAX_LINES: usize = 3;
pub const MIN_BET: u64 = 1;
pub const MAX_BET: u64 = 100;

#[derive(Debug, Clone)]
pub struct EngineParams {
    pub rows: usize,
    pub cols: usize,
    pub weights: SymbolWeights,
    pub paytable: Paytable,
}

impl EngineParams {
    pub fn default_classic() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            weights: SymbolWeights::default_classic(),
            paytable: Paytable::default_classic(),
        }
    }
}

/// One spin's reel window, column-major. Built fresh per spin and thrown
/// away after evaluation and display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Vec<Symbol>>,
}

impl Grid {
    pub fn from_columns(columns: Vec<Vec<Symbol>>) -> Self {
        Self { columns }
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn symbol_at(&self, row: usize, col: usize) -> Symbol {
        self.columns[col][row]
    }

    pub fn columns(&self) -> &[Vec<Symbol>] {
        &self.columns
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, column) in self.columns.iter().enumerate() {
                if col > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{}", column[row])?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinResult {
    pub total_winnings: u64,
    /// 1-indexed, ascending.
    pub winning_lines: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct SpinOutcome {
    pub grid: Grid,
    pub win: WinResult,
}

/// Fill a grid column by column. Every column draws `rows` symbols from a
/// fresh copy of the weighted pool without replacement: no symbol repeats
/// within a column, while repeats across columns stay possible.
pub fn generate_grid<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    weights: &SymbolWeights,
) -> Result<Grid, EngineError> {
    let population = weights.population();
    if rows > population.len() {
        return Err(EngineError::PoolExhausted {
            requested: rows,
            available: population.len(),
        });
    }
    let mut columns = Vec::with_capacity(cols);
    for _ in 0..cols {
        let mut pool = population.clone();
        let mut column = Vec::with_capacity(rows);
        for _ in 0..rows {
            let picked = rng.gen_range(0..pool.len());
            column.push(pool.swap_remove(picked));
        }
        columns.push(column);
    }
    Ok(Grid::from_columns(columns))
}

/// A line pays iff every column holds the same symbol on that row. Exact
/// equality only, no wild substitution.
pub fn evaluate(
    grid: &Grid,
    active_lines: usize,
    bet_per_line: u64,
    paytable: &Paytable,
) -> Result<WinResult, EngineError> {
    if active_lines > grid.rows() {
        return Err(EngineError::TooManyLines {
            requested: active_lines,
            rows: grid.rows(),
        });
    }
    let mut total_winnings = 0u64;
    let mut winning_lines = Vec::new();
    for line in 0..active_lines {
        let symbol = grid.symbol_at(line, 0);
        if (1..grid.cols()).all(|col| grid.symbol_at(line, col) == symbol) {
            total_winnings += bet_per_line * paytable.multiplier(symbol)?;
            winning_lines.push(line + 1);
        }
    }
    Ok(WinResult {
        total_winnings,
        winning_lines,
    })
}

/// Convenience: one full spin, generation then evaluation.
pub fn spin_once<R: Rng + ?Sized>(
    rng: &mut R,
    params: &EngineParams,
    bet_per_line: u64,
    lines: usize,
) -> Result<SpinOutcome, EngineError> {
    let grid = generate_grid(rng, params.rows, params.cols, &params.weights)?;
    let win = evaluate(&grid, lines, bet_per_line, &params.paytable)?;
    Ok(SpinOutcome { grid, win })
}
