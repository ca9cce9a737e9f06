//! HTTP adapter for the Order-Form Ledger.
//!
//! Exposes the four record operations through a single `POST /v1/invoke`
//! endpoint taking `{operation, args}` and returning the flat wire document,
//! plus `/v1/health` and `/v1/info`. All record semantics live in
//! `ofl-ledger`; this crate only wires the dispatcher to the network and the
//! host environment's configuration.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ServerConfig, ENV_SERVER_ADDRESS, ENV_SERVICE_ID};
pub use error::{ServerError, ServerResult};
pub use handler::{AppState, InvokeRequest};
pub use server::OflServer;
