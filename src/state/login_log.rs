// Login bookkeeping for the login/month server

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single recorded login event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRecord {
    /// Name captured from the login route's path segment
    pub name: String,
    /// Moment the login was recorded
    pub login_time: DateTime<Utc>,
}

/// Append-only log of login events, oldest first
///
/// Records are never mutated or removed; the log lives as long as the
/// process and starts out empty.
#[derive(Debug, Default)]
pub struct LoginLog {
    records: Vec<LoginRecord>,
}

impl LoginLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a login for `name` at the current time
    pub fn record(&mut self, name: String) {
        self.records.push(LoginRecord {
            name,
            login_time: Utc::now(),
        });
    }

    /// All records in insertion order
    pub fn records(&self) -> &[LoginRecord] {
        &self.records
    }

    /// Number of recorded logins
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any logins have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
