//! Pure input validation. Each function parses one prompt's answer and
//! returns either the value or the corrective message to print before
//! re-prompting; the interactive loop lives in `session`.

use fortuna_core::{MAX_BET, MAX_LINES, MIN_BET};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a number.")]
    NotANumber,
    #[error("Amount must be greater than 0.")]
    ZeroDeposit,
    #[error("Enter a valid number of lines.")]
    LinesOutOfRange,
    #[error("Amount must be between ${min} - ${max}.")]
    BetOutOfRange { min: u64, max: u64 },
    #[error("You do not have enough to bet that amount, your current balance is: ${balance}")]
    InsufficientBalance { balance: u64 },
}

pub fn parse_deposit(input: &str) -> Result<u64, InputError> {
    let amount: u64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if amount == 0 {
        return Err(InputError::ZeroDeposit);
    }
    Ok(amount)
}

pub fn parse_line_count(input: &str) -> Result<usize, InputError> {
    let lines: usize = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !(1..=MAX_LINES).contains(&lines) {
        return Err(InputError::LinesOutOfRange);
    }
    Ok(lines)
}

pub fn parse_bet(input: &str) -> Result<u64, InputError> {
    let amount: u64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !(MIN_BET..=MAX_BET).contains(&amount) {
        return Err(InputError::BetOutOfRange {
            min: MIN_BET,
            max: MAX_BET,
        });
    }
    Ok(amount)
}

/// Total wager for the round, rejected while it exceeds the balance. The
/// session keeps the line count and re-prompts for the bet alone.
pub fn affordable_total(lines: usize, bet_per_line: u64, balance: u64) -> Result<u64, InputError> {
    let total = bet_per_line * lines as u64;
    if total > balance {
        return Err(InputError::InsufficientBalance { balance });
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_accepts_positive_integers_only() {
        assert_eq!(parse_deposit("100"), Ok(100));
        assert_eq!(parse_deposit("0"), Err(InputError::ZeroDeposit));
        assert_eq!(parse_deposit("-5"), Err(InputError::NotANumber));
        assert_eq!(parse_deposit("abc"), Err(InputError::NotANumber));
    }

    #[test]
    fn test_line_count_range() {
        assert_eq!(parse_line_count("1"), Ok(1));
        assert_eq!(parse_line_count("3"), Ok(3));
        assert_eq!(parse_line_count("0"), Err(InputError::LinesOutOfRange));
        assert_eq!(parse_line_count("4"), Err(InputError::LinesOutOfRange));
        assert_eq!(parse_line_count("two"), Err(InputError::NotANumber));
    }

    #[test]
    fn test_bet_range() {
        assert_eq!(parse_bet("1"), Ok(1));
        assert_eq!(parse_bet("100"), Ok(100));
        assert_eq!(
            parse_bet("0"),
            Err(InputError::BetOutOfRange { min: 1, max: 100 })
        );
        assert_eq!(
            parse_bet("101"),
            Err(InputError::BetOutOfRange { min: 1, max: 100 })
        );
    }

    #[test]
    fn test_wager_must_fit_balance() {
        assert_eq!(
            affordable_total(3, 20, 50),
            Err(InputError::InsufficientBalance { balance: 50 })
        );
        assert_eq!(affordable_total(3, 10, 50), Ok(30));
        assert_eq!(affordable_total(2, 25, 50), Ok(50));
    }

    #[test]
    fn test_corrective_messages() {
        assert_eq!(
            InputError::BetOutOfRange { min: 1, max: 100 }.to_string(),
            "Amount must be between $1 - $100."
        );
        assert_eq!(
            InputError::InsufficientBalance { balance: 50 }.to_string(),
            "You do not have enough to bet that amount, your current balance is: $50"
        );
    }
}
