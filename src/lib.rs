//! # taskwire
//!
//! Task records for external API clients, with date-time conversion between
//! canonical stored instants and a client-requested timezone.
//!
//! All wire-level date fields use the fixed pattern
//! `yyyy-MM-dd HH:mm <zone-abbreviation>` (e.g. `2024-03-15 14:30 GMT`).
//! Conversion preserves the absolute instant and only changes the displayed
//! offset, in both directions. The timezone is an explicit parameter on every
//! operation; there is no implicit bound-timezone state.
//!
//! ```
//! use chrono::DateTime;
//! use taskwire::{ClientTimezone, Task, TaskRecord};
//!
//! let task = Task {
//!     id: 1,
//!     title: "Write docs".to_string(),
//!     description: None,
//!     priority: "normal".to_string(),
//!     status: "open".to_string(),
//!     created_at: DateTime::parse_from_rfc3339("2024-03-15T19:30:00Z").unwrap(),
//!     updated_at: DateTime::parse_from_rfc3339("2024-03-15T19:30:00Z").unwrap(),
//!     due_date: None,
//!     resolved_at: None,
//! };
//!
//! let tz = ClientTimezone::named("CET").unwrap();
//! let record = TaskRecord::from_task(&task, &tz);
//! assert_eq!(record.created_at.as_deref(), Some("2024-03-15 20:30 CET"));
//! ```
//!
//! ## Modules
//! - `record`: the external `TaskRecord` representation
//! - `convert`: parse/format for the wire date pattern
//! - `timezone`: client timezone resolution
//! - `task`: the canonical task entity
//! - `error`: conversion error taxonomy

pub mod convert;
pub mod error;
pub mod record;
pub mod task;
pub mod timezone;

pub use convert::{convert_and_format, parse_and_convert, STAMP_FORMAT};
pub use error::ConvertError;
pub use record::TaskRecord;
pub use task::Task;
pub use timezone::ClientTimezone;
