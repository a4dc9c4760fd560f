//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request span)
//!     → extract.rs (query string or JSON body → Params)
//!     → handlers.rs (route → calc dispatch)
//!     → response.rs (result/error envelope)
//!     → Send to client
//! ```

pub mod extract;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use extract::CalcParams;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{CalcResult, ErrorBody};
pub use server::HttpServer;
