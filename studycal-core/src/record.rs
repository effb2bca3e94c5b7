//! Structured calendar records.
//!
//! A [`CalendarRecord`] is what a VEVENT will contain, before any text is
//! produced. Active and cancelled records for the same entry share their UID
//! through [`identifier`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::schedule::{ScheduleEntry, Slot};

/// SEQUENCE of a freshly published event.
pub const ACTIVE_SEQUENCE: u32 = 0;
/// SEQUENCE of a cancellation; must exceed [`ACTIVE_SEQUENCE`].
pub const CANCEL_SEQUENCE: u32 = 1;

/// Deterministic UID for the session in `slot` on `date`.
///
/// `study-20250106-morning-setmyday@example.org`
pub fn identifier(date: NaiveDate, slot: Slot, suffix: &str) -> String {
    format!(
        "study-{}-{}-{}",
        date.format("%Y%m%d"),
        slot.name().to_lowercase(),
        suffix
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Confirmed,
    Cancelled,
}

impl RecordStatus {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            RecordStatus::Confirmed => "CONFIRMED",
            RecordStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Local wall-clock start/end, tagged with the zone they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub tzid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub minutes_before: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub uid: String,
    pub status: RecordStatus,
    pub summary: String,
    pub sequence: u32,

    // Only present on active records
    pub time: Option<TimeRange>,
    pub description: Option<String>,
    pub organizer: Option<String>,
    pub reminder: Option<Reminder>,
}

impl CalendarRecord {
    /// The published (CONFIRMED) form of `entry`.
    pub fn active(entry: &ScheduleEntry, config: &ScheduleConfig) -> Self {
        let uid = identifier(entry.date, entry.slot, &config.uid_suffix);
        let summary = format!("{} — {} Session", entry.label, entry.slot);
        let description = format!(
            "{}\nUID:{}\nCalendar:{}",
            summary, uid, config.calendar_name
        );

        let window = config.window(entry.slot);
        let time = TimeRange {
            start: entry.date.and_time(window.start),
            end: entry.date.and_time(window.end),
            tzid: config.time_zone.clone(),
        };

        let reminder = Reminder {
            minutes_before: config.reminder_minutes,
            description: format!("Reminder - {}", summary),
        };

        CalendarRecord {
            uid,
            status: RecordStatus::Confirmed,
            summary,
            sequence: ACTIVE_SEQUENCE,
            time: Some(time),
            description: Some(description),
            organizer: Some(config.organizer.clone()),
            reminder: Some(reminder),
        }
    }

    /// The CANCELLED form of `entry`; carries only what consumers key off.
    pub fn cancelled(entry: &ScheduleEntry, config: &ScheduleConfig) -> Self {
        CalendarRecord {
            uid: identifier(entry.date, entry.slot, &config.uid_suffix),
            status: RecordStatus::Cancelled,
            summary: format!("{} — {}", config.default_label, entry.slot),
            sequence: CANCEL_SEQUENCE,
            time: None,
            description: None,
            organizer: None,
            reminder: None,
        }
    }
}
