//! Error types for studycal.

use std::path::PathBuf;

use thiserror::Error;

use crate::schedule::Slot;

/// Errors that can occur while building or writing a schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown time zone '{0}'")]
    InvalidTimeZone(String),

    #[error("{slot} window must end after it starts ({start} - {end})")]
    InvalidWindow {
        slot: Slot,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
    },

    #[error("Rest day must be between 0 (Monday) and 6 (Sunday), got {0}")]
    InvalidRestDay(u8),

    #[error("Reminder lead time must be between 0 and {max} minutes, got {0}", max = crate::config::MAX_REMINDER_MINUTES)]
    InvalidReminder(i64),

    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for studycal operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
