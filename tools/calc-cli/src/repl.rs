//! Interactive calculator prompt

use anyhow::{Context, Result};
use calc_core::{CalcError, Calculation, Calculator};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Words that end the session (case-insensitive)
pub const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

const PROMPT: &str = "Enter expression (e.g. 10+5 or 10 + 5): ";
const RULE_WIDTH: usize = 50;

/// What a single input line produced
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Blank line
    Skip,
    Quit,
    Calculated(Calculation),
    /// The line could not be parsed
    InputError(CalcError),
    /// Parsed, but the operation failed
    CalculationError(CalcError),
}

impl LineOutcome {
    /// Uncoloured text shown to the user, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Skip | Self::Quit => None,
            Self::Calculated(calc) => Some(format!("Result: {}", calc.formatted())),
            Self::InputError(e) => Some(format!("Input error: {}", e)),
            Self::CalculationError(e) => Some(format!("Error: {}", e)),
        }
    }
}

pub fn is_quit_word(input: &str) -> bool {
    QUIT_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w))
}

/// Parse and calculate, keeping parse failures apart from operation failures
pub fn evaluate(calculator: &Calculator, input: &str) -> LineOutcome {
    let parsed = match calculator.parse(input) {
        Ok(parsed) => parsed,
        Err(e) => return LineOutcome::InputError(e),
    };

    match calculator.compute(parsed) {
        Ok(calc) => LineOutcome::Calculated(calc),
        Err(e) => LineOutcome::CalculationError(e),
    }
}

/// Handle one line of REPL input
pub fn execute_line(calculator: &Calculator, line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Skip;
    }
    if is_quit_word(line) {
        return LineOutcome::Quit;
    }
    evaluate(calculator, line)
}

pub struct Repl {
    calculator: Calculator,
}

impl Repl {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    /// Interactive REPL loop
    pub fn run(&self) -> Result<()> {
        let config = rustyline::Config::builder()
            .history_ignore_space(true)
            .build();
        let mut rl = DefaultEditor::with_config(config).context("Failed to initialize readline")?;

        self.print_welcome();

        loop {
            println!();
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let outcome = execute_line(&self.calculator, &line);
                    if !matches!(outcome, LineOutcome::Skip) {
                        // Add to history (ignore errors)
                        let _ = rl.add_history_entry(line.trim());
                    }
                    if !self.show(&outcome) {
                        break;
                    }
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    // Ctrl+C / Ctrl+D
                    println!("\n{}", "Goodbye!".bright_cyan());
                    break;
                },
                Err(e) => {
                    eprintln!("{} {}", "Readline error:".red(), e);
                    break;
                },
            }
        }

        println!("{}", "Thank you for using the calculator!".bright_cyan());
        Ok(())
    }

    /// Print the outcome; returns false when the session should end
    fn show(&self, outcome: &LineOutcome) -> bool {
        debug!(?outcome, "line handled");
        let message = outcome.message();
        match (outcome, message) {
            (LineOutcome::Quit, _) => return false,
            (LineOutcome::Calculated(_), Some(msg)) => println!("{}", msg.bright_green()),
            (LineOutcome::InputError(_), Some(msg)) => println!("{}", msg.yellow()),
            (LineOutcome::CalculationError(_), Some(msg)) => println!("{}", msg.red()),
            _ => {},
        }
        true
    }

    fn print_welcome(&self) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("{}", rule.bright_blue());
        println!("{}", "          BASIC CALCULATOR".bright_cyan().bold());
        println!("{}", rule.bright_blue());
        println!(
            "Available operations: {}",
            self.calculator
                .available_operations()
                .join(", ")
                .bright_yellow()
        );
        println!("Enter with spaces (10 + 5) or without (10+5)");
        println!(
            "Type '{}', '{}' or '{}' to exit",
            QUIT_WORDS[0], QUIT_WORDS[1], QUIT_WORDS[2]
        );
        println!("{}", rule.bright_blue());
    }
}
