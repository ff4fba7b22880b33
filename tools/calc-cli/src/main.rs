//! calc - terminal front end for the calculator
//!
//! Runs an interactive prompt by default; `eval` and `ops` are one-shot
//! commands for scripts.

mod repl;

use anyhow::{Context, Result};
use calc_core::{Calculator, Operator};
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;

use crate::repl::{LineOutcome, Repl};

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Basic calculator: <number> <operator> <number>")]
#[command(long_about = "Basic calculator: <number> <operator> <number>

Operators: + - * / ^
Input may be written with or without spaces: 10+5, 10 + 5, -3*-2

Examples:
  calc                    # Interactive prompt
  calc eval 2^10          # Evaluate once and exit
  calc eval \"10 / 4\"      # Quote expressions that contain spaces or *
  calc ops                # List supported operators")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt (default)
    Repl,

    /// Evaluate a single expression; exits with status 1 on error
    Eval {
        /// Expression, e.g. "10 + 5" (unquoted words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// List supported operators
    Ops,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Logs go to stderr so they never interleave with results
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let calculator = Calculator::new().context("Failed to build calculator")?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            Repl::new(calculator).run()?;
            Ok(ExitCode::SUCCESS)
        },
        Commands::Eval { expression } => Ok(eval(&calculator, &expression.join(" "))),
        Commands::Ops => {
            print_operations();
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn eval(calculator: &Calculator, expression: &str) -> ExitCode {
    match repl::evaluate(calculator, expression) {
        LineOutcome::Calculated(calc) => {
            println!("{}", calc.formatted());
            ExitCode::SUCCESS
        },
        outcome => {
            if let Some(message) = outcome.message() {
                eprintln!("{}", message.red());
            }
            ExitCode::FAILURE
        },
    }
}

fn print_operations() {
    println!("{}", "Available operations:".bright_cyan().bold());
    for op in Operator::ALL {
        println!("  {}  {}", op.symbol().bright_yellow(), op.name());
    }
}
