//! Command dispatch and output rendering.

use std::io::Write;
use std::time::Instant;

use anyhow::{bail, Result};
use fibonacci_engine::{FibonacciEngine, Strategy};
use serde_json::json;
use tracing::debug;

use crate::config::{AppConfig, Command};

/// Run the configured command against `engine`, writing results to `out`.
pub fn run<W: Write>(config: &AppConfig, engine: &FibonacciEngine, out: &mut W) -> Result<()> {
    let start = Instant::now();

    match config.command {
        Command::Value { n, strategy } => {
            check_limit(n, config.max_index)?;
            let value = engine.value_with(strategy, n)?;
            if config.json {
                writeln!(out, "{}", json!({ "n": n, "value": value, "strategy": strategy }))?;
            } else {
                writeln!(out, "{value}")?;
            }
        }
        Command::Sequence { n } => {
            check_limit(n, config.max_sequence)?;
            let sequence = engine.fibonacci_sequence(n)?;
            if config.json {
                writeln!(out, "{}", json!({ "n": n, "sequence": sequence }))?;
            } else {
                let rendered: Vec<String> = sequence.iter().map(u64::to_string).collect();
                writeln!(out, "{}", rendered.join(", "))?;
            }
        }
        Command::Info { n } => {
            check_limit(n, config.max_index)?;
            let info = engine.fibonacci_with_info(n)?;
            if config.json {
                writeln!(out, "{}", serde_json::to_string(&info)?)?;
            } else {
                let parity = if info.is_even { "even" } else { "odd" };
                let unit = if info.digit_count == 1 { "digit" } else { "digits" };
                writeln!(
                    out,
                    "F({}) = {} ({parity}, {} {unit})",
                    info.n, info.value, info.digit_count
                )?;
            }
        }
        Command::Compare { n } => {
            check_limit(n, config.max_index)?;
            let memoized = engine.value_with(Strategy::Memoized, n)?;
            let fast = engine.value_with(Strategy::Fast, n)?;
            let agree = memoized == fast;
            if config.json {
                writeln!(
                    out,
                    "{}",
                    json!({ "n": n, "memoized": memoized, "fast": fast, "agree": agree })
                )?;
            } else {
                writeln!(out, "memoized: {memoized}")?;
                writeln!(out, "fast:     {fast}")?;
                writeln!(out, "agree:    {agree}")?;
            }
        }
    }

    debug!(elapsed = ?start.elapsed(), "command finished");
    Ok(())
}

// Negative indices pass through so the engine reports them.
fn check_limit(n: i64, max: u64) -> Result<()> {
    if u64::try_from(n).is_ok_and(|n| n > max) {
        bail!("n is too large (max {max})");
    }
    Ok(())
}
