//! Calculation core.
//!
//! # Data Flow
//! ```text
//! Request parameters (name → string)
//!     → operands.rs (parse num1, num2 as f64)
//!     → operation.rs (resolve name, apply function)
//!     → Result<f64, CalcError>
//!     → [http layer writes the envelope]
//! ```
//!
//! # Design Decisions
//! - Pure functions only, no state between calls
//! - Operands are parsed before the operation is resolved
//! - Every failure is a `CalcError` variant with a fixed client message

pub mod error;
pub mod operands;
pub mod operation;

pub use error::CalcError;
pub use operands::{Operands, Params};
pub use operation::{Operation, OperationGroup};
