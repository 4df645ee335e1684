//! Client module - the state layer a dashboard frontend sits on.
//!
//! Provides a typed HTTP consumer of the gateway API and the bounded
//! recent-activity log. Rendering is out of scope.

pub mod activity;
pub mod api;

pub use activity::{ACTIVITY_LOG_CAPACITY, ActivityLog, ActivityLogEntry};
pub use api::{ClientError, GatewayClient};
