//! Transport layer for the dashboard server.
//!
//! The dashboard speaks plain HTTP/JSON, so this module carries a single
//! transport: an axum HTTP server exposing the gateway's operations. The
//! transport handles the connection lifecycle and route wiring and delegates
//! all request processing to the gateway.

mod error;
pub mod http;

pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
