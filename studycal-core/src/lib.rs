//! Core of studycal.
//!
//! - `schedule` enumerates study sessions over a date range
//! - `record` turns sessions into structured calendar records with stable UIDs
//! - `document` and `ics` assemble and render the publish/cancel .ics files
//! - `output` writes rendered documents to disk

pub mod config;
pub mod document;
pub mod error;
pub mod ics;
pub mod output;
pub mod record;
pub mod schedule;
pub mod tracing;

pub use config::{ScheduleConfig, TimeWindow};
pub use document::{DocumentKind, ScheduleDocument};
pub use error::{ScheduleError, ScheduleResult};
pub use record::{CalendarRecord, RecordStatus, identifier};
pub use schedule::{Schedule, ScheduleEntry, Slot};
