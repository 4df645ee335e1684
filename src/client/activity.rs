//! Recent-activity log for the dashboard.
//!
//! A bounded in-memory ring of completed invocations, newest first. Purely
//! ephemeral - nothing here is ever persisted.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::gateway::ToolCallResponse;

/// Maximum number of entries retained by the activity log.
pub const ACTIVITY_LOG_CAPACITY: usize = 10;

/// One completed invocation, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: String,
    pub tool_name: String,
    pub server_name: String,
    pub success: bool,
    pub time_stamp: DateTime<Utc>,
    pub duration: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Capped ring of recent invocations, newest first.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityLogEntry>,
    next_id: u64,
}

impl ActivityLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed invocation. Evicts the oldest entry once the
    /// capacity of [`ACTIVITY_LOG_CAPACITY`] is exceeded.
    pub fn record(&mut self, tool_name: &str, server_name: &str, response: &ToolCallResponse) {
        self.next_id += 1;
        self.entries.push_front(ActivityLogEntry {
            id: format!("call-{}", self.next_id),
            tool_name: tool_name.to_string(),
            server_name: server_name.to_string(),
            success: response.success,
            time_stamp: response.time_stamp,
            duration: response.duration,
            error: response.error.clone(),
        });
        self.entries.truncate(ACTIVITY_LOG_CAPACITY);
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &ActivityLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
