//! Calculator HTTP service library.
//!
//! Arithmetic and trigonometric operations over two operands, served as JSON.

pub mod calc;
pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use calc::{CalcError, Operands, Operation, OperationGroup};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
