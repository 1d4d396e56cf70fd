//! Example Ext command-line wrapper.
//!
//! Exposes the two [`ExampleClass`] operations from a shell.
//!
//! # Usage
//!
//! ```bash
//! example-ext multiply 3 4            # 12
//! example-ext multiply -2 5           # -10
//! example-ext multiply --checked 2147483647 2   # error: integer overflow
//! example-ext multiply --json 3 4     # {"a":3,"b":4,"product":12}
//! example-ext print hello             # hello
//! ```
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (or `-v`, `-vv`, `-vvv`
//! when `RUST_LOG` is unset).

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use example_ext::ExampleClass;
use tracing_subscriber::EnvFilter;

/// Multiply integers or print strings with the example extension class.
#[derive(Parser, Debug)]
#[command(name = "example-ext")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Multiply two 32-bit integers (wrapping on overflow)
    #[command(allow_negative_numbers = true)]
    Multiply {
        a: i32,
        b: i32,

        /// Fail instead of wrapping when the product overflows
        #[arg(long)]
        checked: bool,

        /// Output the result as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Print a string followed by a newline
    Print {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

/// JSON form of a `multiply` result.
#[derive(Debug, serde::Serialize)]
struct Product {
    a: i32,
    b: i32,
    product: i32,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // stdout carries operation output only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(command: Command, out: &mut W) -> Result<()> {
    let example = ExampleClass::new();
    match command {
        Command::Multiply {
            a,
            b,
            checked,
            json,
        } => {
            let product = if checked {
                example.checked_multiply(a, b)?
            } else {
                example.multiply(a, b)
            };
            tracing::info!(a, b, product, "multiply");
            if json {
                let line = serde_json::to_string(&Product { a, b, product })
                    .context("failed to serialize product")?;
                writeln!(out, "{line}").context("failed to write output")?;
            } else {
                writeln!(out, "{product}").context("failed to write output")?;
            }
        }
        Command::Print { text } => {
            example
                .write_string(out, &text)
                .context("failed to print string")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn multiply_prints_product() {
        assert_eq!(run_args(&["example-ext", "multiply", "3", "4"]).unwrap(), "12\n");
    }

    #[test]
    fn multiply_accepts_negative_operands() {
        assert_eq!(run_args(&["example-ext", "multiply", "-2", "5"]).unwrap(), "-10\n");
        assert_eq!(run_args(&["example-ext", "multiply", "-3", "-7"]).unwrap(), "21\n");
    }

    #[test]
    fn multiply_wraps_by_default() {
        assert_eq!(
            run_args(&["example-ext", "multiply", "2147483647", "2"]).unwrap(),
            "-2\n"
        );
    }

    #[test]
    fn checked_multiply_fails_on_overflow() {
        let err = run_args(&["example-ext", "multiply", "--checked", "2147483647", "2"])
            .unwrap_err();
        assert!(err.to_string().contains("integer overflow"));
    }

    #[test]
    fn multiply_json_output() {
        let line = run_args(&["example-ext", "multiply", "--json", "3", "4"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value, serde_json::json!({ "a": 3, "b": 4, "product": 12 }));
    }

    #[test]
    fn multiply_rejects_out_of_range_operand() {
        assert!(run_args(&["example-ext", "multiply", "2147483648", "1"]).is_err());
    }

    #[test]
    fn print_writes_text_and_newline() {
        assert_eq!(run_args(&["example-ext", "print", "hello"]).unwrap(), "hello\n");
        assert_eq!(run_args(&["example-ext", "print", ""]).unwrap(), "\n");
        assert_eq!(run_args(&["example-ext", "print", "日本語"]).unwrap(), "日本語\n");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
