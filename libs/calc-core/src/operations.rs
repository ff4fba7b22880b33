//! Operation registry
//!
//! Fixed table from operator symbol to a pure binary function over `f64`.
//! The table is ordered: that order is both the display order of
//! `available_operations()` and the priority order the contiguous parser
//! phase tries operators in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Supported operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl Operator {
    /// All operators in priority order
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Subtract => "subtraction",
            Operator::Multiply => "multiplication",
            Operator::Divide => "division",
            Operator::Power => "power",
        }
    }

    /// Resolve a symbol, `None` for anything outside the closed set
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply this operator to two operands
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        self.operation().execute(a, b)
    }

    /// The registry entry for this operator
    pub fn operation(self) -> Operation {
        // REGISTRY is indexed in the same order as ALL
        REGISTRY[self as usize]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbol(s).ok_or_else(|| CalcError::unsupported(s))
    }
}

/// Binary function signature shared by every registry entry
pub type BinaryFn = fn(f64, f64) -> Result<f64>;

/// A registered operation: operator plus its function
#[derive(Clone, Copy)]
pub struct Operation {
    pub operator: Operator,
    func: BinaryFn,
}

impl Operation {
    const fn new(operator: Operator, func: BinaryFn) -> Self {
        Self { operator, func }
    }

    pub fn symbol(&self) -> &'static str {
        self.operator.symbol()
    }

    pub fn execute(&self, a: f64, b: f64) -> Result<f64> {
        (self.func)(a, b)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("operator", &self.operator)
            .finish()
    }
}

fn add(a: f64, b: f64) -> Result<f64> {
    Ok(a + b)
}

fn subtract(a: f64, b: f64) -> Result<f64> {
    Ok(a - b)
}

fn multiply(a: f64, b: f64) -> Result<f64> {
    Ok(a * b)
}

fn divide(a: f64, b: f64) -> Result<f64> {
    // Exact comparison: -0.0 is rejected too, tiny non-zero divisors are not
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// NaN from a negative base with a fractional exponent is a valid result
fn power(a: f64, b: f64) -> Result<f64> {
    Ok(a.powf(b))
}

static REGISTRY: [Operation; 5] = [
    Operation::new(Operator::Add, add),
    Operation::new(Operator::Subtract, subtract),
    Operation::new(Operator::Multiply, multiply),
    Operation::new(Operator::Divide, divide),
    Operation::new(Operator::Power, power),
];

/// Look up the operation for a symbol
pub fn lookup(symbol: &str) -> Result<Operation> {
    REGISTRY
        .iter()
        .find(|op| op.symbol() == symbol)
        .copied()
        .ok_or_else(|| CalcError::unsupported(symbol))
}

/// Registered symbols in priority order
pub fn symbols() -> [&'static str; 5] {
    Operator::ALL.map(Operator::symbol)
}
