//! Operation table and dispatch.
//!
//! # Responsibilities
//! - Map operation names to numeric functions
//! - Resolve names within a route group or across all operations
//! - Enforce the zero-denominator rule
//!
//! # Design Decisions
//! - Names are matched exactly; `Add` is not `add`
//! - The trigonometry group rejects a zero denominator before name lookup
//! - Non-finite results (e.g. `ctg` of 0) are returned as-is

use std::fmt;
use std::str::FromStr;

use crate::calc::{CalcError, Operands};

/// Route group an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationGroup {
    /// `/calculation/...`: add, subtract, multiply, divide.
    Calculation,
    /// `/trigonometry/...`: sin, cos, tan, ctg of `num1 / num2`.
    Trigonometry,
}

impl OperationGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationGroup::Calculation => "calculation",
            OperationGroup::Trigonometry => "trigonometry",
        }
    }

    /// Operations served under this group's route.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            OperationGroup::Calculation => &[
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
            ],
            OperationGroup::Trigonometry => {
                &[Operation::Sin, Operation::Cos, Operation::Tan, Operation::Ctg]
            }
        }
    }

    /// Resolve `name` and evaluate it, scoped to this group.
    pub fn dispatch(&self, name: &str, operands: Operands) -> Result<f64, CalcError> {
        if *self == OperationGroup::Trigonometry && operands.num2 == 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        let operation = name
            .parse::<Operation>()
            .ok()
            .filter(|op| self.operations().contains(op))
            .ok_or(CalcError::InvalidOperation)?;

        operation.apply(operands)
    }
}

impl fmt::Display for OperationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the eight supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sin,
    Cos,
    Tan,
    Ctg,
}

impl Operation {
    /// Every operation, calculation group first.
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
        Operation::Ctg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Tan => "tan",
            Operation::Ctg => "ctg",
        }
    }

    pub fn group(&self) -> OperationGroup {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
                OperationGroup::Calculation
            }
            Operation::Sin | Operation::Cos | Operation::Tan | Operation::Ctg => {
                OperationGroup::Trigonometry
            }
        }
    }

    /// Whether `num2` is used as a denominator.
    pub fn divides(&self) -> bool {
        !matches!(self, Operation::Add | Operation::Subtract | Operation::Multiply)
    }

    /// Evaluate the operation.
    pub fn apply(&self, operands: Operands) -> Result<f64, CalcError> {
        let Operands { num1, num2 } = operands;

        if self.divides() && num2 == 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        let result = match self {
            Operation::Add => num1 + num2,
            Operation::Subtract => num1 - num2,
            Operation::Multiply => num1 * num2,
            Operation::Divide => num1 / num2,
            Operation::Sin => (num1 / num2).sin(),
            Operation::Cos => (num1 / num2).cos(),
            Operation::Tan => (num1 / num2).tan(),
            Operation::Ctg => 1.0 / (num1 / num2).tan(),
        };

        Ok(result)
    }

    /// Resolve `name` across all operations and evaluate it.
    pub fn dispatch(name: &str, operands: Operands) -> Result<f64, CalcError> {
        name.parse::<Operation>()?.apply(operands)
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or(CalcError::InvalidOperation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
