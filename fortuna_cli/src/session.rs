//! Interactive session loop: deposit, then spin until the player quits.
//! Generic over reader/writer and RNG so tests can script a whole session
//! and assert the exact transcript and final balance.

use std::io::{BufRead, Write};

use anyhow::bail;
use fortuna_core::{evaluate, generate_grid, EngineParams, MAX_LINES};
use rand::Rng;
use tracing::info;

use crate::input;

/// Run one full session and return the balance the player left with.
pub fn run<R, In, Out>(
    rng: &mut R,
    params: &EngineParams,
    input: &mut In,
    output: &mut Out,
) -> anyhow::Result<u64>
where
    R: Rng + ?Sized,
    In: BufRead,
    Out: Write,
{
    let mut balance = prompt_deposit(input, output)?;
    loop {
        writeln!(output, "Current balance is ${balance}")?;
        let answer = prompt(input, output, "Press enter to play (q to quit).")?;
        if answer == "q" {
            break;
        }
        balance = play_round(rng, params, input, output, balance)?;
    }
    writeln!(output, "You left with ${balance}")?;
    Ok(balance)
}

/// Print a prompt without a trailing newline and read the answer with its
/// line terminator stripped. A closed input stream is an error, not a
/// re-prompt.
fn prompt<In, Out>(input: &mut In, output: &mut Out, text: &str) -> anyhow::Result<String>
where
    In: BufRead,
    Out: Write,
{
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed while waiting for a response");
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn prompt_deposit<In, Out>(input: &mut In, output: &mut Out) -> anyhow::Result<u64>
where
    In: BufRead,
    Out: Write,
{
    loop {
        let answer = prompt(input, output, "What would you like to deposit? $")?;
        match input::parse_deposit(&answer) {
            Ok(amount) => return Ok(amount),
            Err(reason) => writeln!(output, "{reason}")?,
        }
    }
}

fn prompt_line_count<In, Out>(input: &mut In, output: &mut Out) -> anyhow::Result<usize>
where
    In: BufRead,
    Out: Write,
{
    let text = format!("Enter the number of lines to bet on (1-{MAX_LINES})? ");
    loop {
        let answer = prompt(input, output, &text)?;
        match input::parse_line_count(&answer) {
            Ok(lines) => return Ok(lines),
            Err(reason) => writeln!(output, "{reason}")?,
        }
    }
}

/// One bet-and-spin round; returns the updated balance.
fn play_round<R, In, Out>(
    rng: &mut R,
    params: &EngineParams,
    input: &mut In,
    output: &mut Out,
    balance: u64,
) -> anyhow::Result<u64>
where
    R: Rng + ?Sized,
    In: BufRead,
    Out: Write,
{
    let lines = prompt_line_count(input, output)?;

    // The line count is kept; only the bet amount is re-collected until
    // the total wager fits the balance.
    let (bet, total_bet) = loop {
        let answer = prompt(input, output, "What would you like to bet on each line? $")?;
        let bet = match input::parse_bet(&answer) {
            Ok(bet) => bet,
            Err(reason) => {
                writeln!(output, "{reason}")?;
                continue;
            }
        };
        match input::affordable_total(lines, bet, balance) {
            Ok(total) => break (bet, total),
            Err(reason) => writeln!(output, "{reason}")?,
        }
    };

    writeln!(
        output,
        "You are betting ${bet} on {lines} lines. Total bet is equal to: ${total_bet}"
    )?;

    let grid = generate_grid(rng, params.rows, params.cols, &params.weights)?;
    writeln!(output, "{grid}")?;

    let win = evaluate(&grid, lines, bet, &params.paytable)?;
    writeln!(output, "You won ${}.", win.total_winnings)?;
    let mut line_list = String::new();
    for line in &win.winning_lines {
        line_list.push(' ');
        line_list.push_str(&line.to_string());
    }
    writeln!(output, "You won on lines:{line_list}")?;

    let new_balance = balance - total_bet + win.total_winnings;
    info!(
        bet,
        lines,
        winnings = win.total_winnings,
        balance = new_balance,
        "spin settled"
    );
    Ok(new_balance)
}
