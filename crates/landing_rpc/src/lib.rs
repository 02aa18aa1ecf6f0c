//! RPC boundary for the landing page API.
//!
//! # Responsibility
//! - Expose the landing page use-cases as named procedures over HTTP.
//! - Decode and shape-check inputs before they reach the core service.
//! - Map service failures to transport-level error envelopes.
//!
//! # Invariants
//! - Handlers never panic on bad input; every failure becomes an envelope.
//! - Store work runs off the async executor, one procedure at a time per
//!   connection.

pub mod config;
pub mod error;
pub mod procedures;
pub mod server;

pub use config::{ServerConfig, DEFAULT_DB_PATH, DEFAULT_HOST, DEFAULT_PORT};
pub use error::RpcError;
pub use server::{router, serve, AppState, ServerError, SharedState};
