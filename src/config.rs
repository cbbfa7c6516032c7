//! Command-line configuration from flags and environment.

use clap::{Parser, Subcommand};
use fibonacci_engine::Strategy;

/// Default largest index accepted by `value`, `info` and `compare`.
pub const DEFAULT_MAX_INDEX: u64 = 10_000;

/// Default largest sequence length accepted by `sequence`.
pub const DEFAULT_MAX_SEQUENCE: u64 = 1_000;

/// Fibonacci numbers over u64: memoized, fast doubling, sequences and metadata.
#[derive(Parser, Debug)]
#[command(name = "fibonacci", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Largest index accepted by value, info and compare.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_INDEX, env = "FIBONACCI_MAX_INDEX")]
    pub max_index: u64,

    /// Largest length accepted by sequence.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_SEQUENCE, env = "FIBONACCI_MAX_SEQUENCE")]
    pub max_sequence: u64,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute F(n).
    Value {
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Algorithm to use: memoized or fast.
        #[arg(short, long, default_value = "memoized")]
        strategy: Strategy,
    },
    /// Print the first n Fibonacci numbers.
    Sequence {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Show F(n) with its parity and digit count.
    Info {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Compute F(n) with both strategies and check that they agree.
    Compare {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
