//! Canonical task entity.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A task as held by the source of truth.
///
/// Date fields are canonical instants carrying their own offset; the external
/// [`TaskRecord`](crate::TaskRecord) re-expresses them per client request.
/// The conversion layer only ever reads this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub due_date: Option<DateTime<FixedOffset>>,
    pub resolved_at: Option<DateTime<FixedOffset>>,
}
