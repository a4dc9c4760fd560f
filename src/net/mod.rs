//! Network layer subsystem.
//!
//! Plain TCP is bound directly with tokio; this module only carries the
//! optional TLS setup handed to `axum-server`.

pub mod tls;
