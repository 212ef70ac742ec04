//! External task representation with timezone-aware date conversion.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::convert::{convert_and_format, parse_and_convert};
use crate::error::ConvertError;
use crate::task::Task;
use crate::timezone::ClientTimezone;

/// Task record for external API clients.
///
/// All date fields carry wire-format text (`yyyy-MM-dd HH:mm <zone>`)
/// rendered in the timezone the client requested. The record is
/// default-buildable so a serialization layer can construct it empty and
/// populate fields one at a time; a fresh record is built per request and
/// discarded after the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Unique identifier, immutable once assigned.
    pub id: Option<i64>,
    /// When the task was created; always present after a full conversion.
    pub created_at: Option<String>,
    /// When the task was last updated; always present after a full conversion.
    pub updated_at: Option<String>,
    /// When the task is expected to be done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// When the task was resolved; absent until then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

impl TaskRecord {
    /// Build the full external record from the canonical entity, with all
    /// date fields rendered in the client's timezone.
    pub fn from_task(task: &Task, timezone: &ClientTimezone) -> Self {
        let mut record = Self {
            id: Some(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            priority: Some(task.priority.clone()),
            status: Some(task.status.clone()),
            ..Self::default()
        };
        record.set_all_dates_converted(task, timezone);
        record
    }

    /// Parse the creation date and re-express it in the supplied timezone.
    pub fn created_at_converted(
        &self,
        timezone: &ClientTimezone,
    ) -> Result<Option<DateTime<FixedOffset>>, ConvertError> {
        parse_and_convert(timezone, self.created_at.as_deref())
    }

    /// Parse the last-update date and re-express it in the supplied timezone.
    pub fn updated_at_converted(
        &self,
        timezone: &ClientTimezone,
    ) -> Result<Option<DateTime<FixedOffset>>, ConvertError> {
        parse_and_convert(timezone, self.updated_at.as_deref())
    }

    /// Parse the due date and re-express it in the supplied timezone.
    pub fn due_date_converted(
        &self,
        timezone: &ClientTimezone,
    ) -> Result<Option<DateTime<FixedOffset>>, ConvertError> {
        parse_and_convert(timezone, self.due_date.as_deref())
    }

    /// Parse the resolution date and re-express it in the supplied timezone.
    pub fn resolved_at_converted(
        &self,
        timezone: &ClientTimezone,
    ) -> Result<Option<DateTime<FixedOffset>>, ConvertError> {
        parse_and_convert(timezone, self.resolved_at.as_deref())
    }

    /// Convert all date fields from the canonical entity into the supplied
    /// timezone in one pass.
    pub fn set_all_dates_converted(&mut self, task: &Task, timezone: &ClientTimezone) {
        tracing::debug!("Converting task {} dates to timezone {}", task.id, timezone);
        self.set_created_at_converted(&task.created_at, timezone);
        self.set_updated_at_converted(&task.updated_at, timezone);
        self.set_due_date_converted(task.due_date.as_ref(), timezone);
        self.set_resolved_at_converted(task.resolved_at.as_ref(), timezone);
    }

    /// Format the creation instant in the supplied timezone and store it.
    pub fn set_created_at_converted(
        &mut self,
        created_at: &DateTime<FixedOffset>,
        timezone: &ClientTimezone,
    ) {
        self.created_at = Some(convert_and_format(created_at, timezone));
    }

    /// Format the last-update instant in the supplied timezone and store it.
    pub fn set_updated_at_converted(
        &mut self,
        updated_at: &DateTime<FixedOffset>,
        timezone: &ClientTimezone,
    ) {
        self.updated_at = Some(convert_and_format(updated_at, timezone));
    }

    /// Format the due date, propagating absence: no value in, no value out.
    pub fn set_due_date_converted(
        &mut self,
        due_date: Option<&DateTime<FixedOffset>>,
        timezone: &ClientTimezone,
    ) {
        self.due_date = due_date.map(|d| convert_and_format(d, timezone));
    }

    /// Format the resolution instant. When the source has none, the field
    /// keeps whatever value it already had instead of being cleared; callers
    /// that need it cleared must clear it themselves.
    pub fn set_resolved_at_converted(
        &mut self,
        resolved_at: Option<&DateTime<FixedOffset>>,
        timezone: &ClientTimezone,
    ) {
        if let Some(resolved_at) = resolved_at {
            self.resolved_at = Some(convert_and_format(resolved_at, timezone));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn sample_task() -> Task {
        Task {
            id: 42,
            title: "Fix the widget".to_string(),
            description: Some("It wobbles".to_string()),
            priority: "high".to_string(),
            status: "open".to_string(),
            created_at: instant("2024-03-15T19:30:00Z"),
            updated_at: instant("2024-03-16T08:15:00Z"),
            due_date: Some(instant("2024-04-01T12:00:00Z")),
            resolved_at: None,
        }
    }

    #[test]
    fn test_from_task_formats_all_fields() {
        let record = TaskRecord::from_task(&sample_task(), &ClientTimezone::utc());
        assert_eq!(record.id, Some(42));
        assert_eq!(record.title, "Fix the widget");
        assert_eq!(record.created_at.as_deref(), Some("2024-03-15 19:30 UTC"));
        assert_eq!(record.updated_at.as_deref(), Some("2024-03-16 08:15 UTC"));
        assert_eq!(record.due_date.as_deref(), Some("2024-04-01 12:00 UTC"));
        assert_eq!(record.resolved_at, None);
    }

    #[test]
    fn test_conversion_renders_client_timezone() {
        let tz = ClientTimezone::named("CET").unwrap();
        let record = TaskRecord::from_task(&sample_task(), &tz);
        assert_eq!(record.created_at.as_deref(), Some("2024-03-15 20:30 CET"));
        assert_eq!(record.due_date.as_deref(), Some("2024-04-01 13:00 CET"));
    }

    #[test]
    fn test_due_date_absence_propagates() {
        let mut task = sample_task();
        task.due_date = None;

        let mut record = TaskRecord {
            due_date: Some("2024-04-01 12:00 UTC".to_string()),
            ..TaskRecord::default()
        };
        record.set_all_dates_converted(&task, &ClientTimezone::utc());
        assert_eq!(record.due_date, None);
    }

    #[test]
    fn test_resolved_at_absence_keeps_prior_value() {
        let task = sample_task();
        assert_eq!(task.resolved_at, None);

        let mut record = TaskRecord {
            resolved_at: Some("2024-03-14 09:00 UTC".to_string()),
            ..TaskRecord::default()
        };
        record.set_all_dates_converted(&task, &ClientTimezone::utc());
        assert_eq!(record.resolved_at.as_deref(), Some("2024-03-14 09:00 UTC"));
    }

    #[test]
    fn test_resolved_at_present_is_formatted() {
        let mut task = sample_task();
        task.resolved_at = Some(instant("2024-03-20T10:00:00Z"));

        let record = TaskRecord::from_task(&task, &ClientTimezone::utc());
        assert_eq!(record.resolved_at.as_deref(), Some("2024-03-20 10:00 UTC"));
    }

    #[test]
    fn test_per_field_parse_round_trips_instant() {
        let task = sample_task();
        let tz = ClientTimezone::named("PST").unwrap();
        let record = TaskRecord::from_task(&task, &tz);

        let parsed = record.created_at_converted(&tz).unwrap().unwrap();
        assert_eq!(parsed.timestamp(), task.created_at.timestamp());

        let parsed = record.due_date_converted(&tz).unwrap().unwrap();
        assert_eq!(parsed.timestamp(), task.due_date.unwrap().timestamp());
    }

    #[test]
    fn test_absent_fields_parse_to_none() {
        let record = TaskRecord::default();
        let tz = ClientTimezone::utc();
        assert_eq!(record.due_date_converted(&tz).unwrap(), None);
        assert_eq!(record.resolved_at_converted(&tz).unwrap(), None);
    }

    #[test]
    fn test_malformed_field_propagates_error() {
        let record = TaskRecord {
            created_at: Some("not-a-date".to_string()),
            ..TaskRecord::default()
        };
        let err = record.created_at_converted(&ClientTimezone::utc()).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedText { .. }));
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let record = TaskRecord::from_task(&sample_task(), &ClientTimezone::utc());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["createdAt"], "2024-03-15 19:30 UTC");
        assert_eq!(json["updatedAt"], "2024-03-16 08:15 UTC");
        assert_eq!(json["dueDate"], "2024-04-01 12:00 UTC");
        // Absent optional fields are omitted, not null
        assert!(json.get("resolvedAt").is_none());
    }

    #[test]
    fn test_deserializes_field_by_field() {
        let json = r#"{
            "id": 7,
            "createdAt": "2024-03-15 19:30 UTC",
            "updatedAt": "2024-03-15 19:30 UTC",
            "title": "Ship it",
            "priority": "low",
            "status": "open"
        }"#;
        let record: TaskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.due_date, None);
        assert_eq!(record.resolved_at, None);
        assert_eq!(
            record
                .created_at_converted(&ClientTimezone::utc())
                .unwrap()
                .unwrap()
                .to_rfc3339(),
            "2024-03-15T19:30:00+00:00"
        );
    }
}
