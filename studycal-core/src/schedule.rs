//! Schedule enumeration.
//!
//! Walks `days_ahead` calendar days from a caller-supplied start date, drops
//! the rest day, and yields one [`ScheduleEntry`] per remaining day and slot.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::error::ScheduleResult;

/// One of the two fixed daily study slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    Morning,
    Evening,
}

impl Slot {
    /// Both slots in the order they occur during a day.
    pub const ALL: [Slot; 2] = [Slot::Morning, Slot::Evening];

    pub fn name(&self) -> &'static str {
        match self {
            Slot::Morning => "Morning",
            Slot::Evening => "Evening",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single study session on a scheduled day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub slot: Slot,
    pub label: String,
    /// 1-based position of `date` among scheduled (non-rest) days
    pub day_ordinal: u32,
}

/// The set of study sessions covering `[start, start + days_ahead - 1]`.
///
/// Cheap to build and pure: calling [`Schedule::entries`] twice yields the
/// same sequence.
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    config: &'a ScheduleConfig,
    start: NaiveDate,
    rest_day: Weekday,
}

impl<'a> Schedule<'a> {
    /// Fails if `config` does not pass [`ScheduleConfig::validate`].
    pub fn new(config: &'a ScheduleConfig, start: NaiveDate) -> ScheduleResult<Self> {
        config.validate()?;
        let rest_day = config.rest_weekday()?;

        Ok(Schedule {
            config,
            start,
            rest_day,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the range, or `None` when the range is empty.
    pub fn end(&self) -> Option<NaiveDate> {
        let span = u64::try_from(self.config.days_ahead).ok()?.checked_sub(1)?;
        Some(
            self.start
                .checked_add_days(Days::new(span))
                .unwrap_or(NaiveDate::MAX),
        )
    }

    /// Dates in range that are not the rest day, in order.
    pub fn scheduled_dates(&self) -> impl Iterator<Item = NaiveDate> {
        let rest_day = self.rest_day;
        let end = self.end();

        self.start
            .iter_days()
            .take_while(move |date| end.is_some_and(|end| *date <= end))
            .filter(move |date| date.weekday() != rest_day)
    }

    pub fn scheduled_days(&self) -> u32 {
        self.scheduled_dates().fold(0, |count, _| count + 1)
    }

    /// Every session in chronological order, morning before evening.
    pub fn entries(&self) -> impl Iterator<Item = ScheduleEntry> {
        let config = self.config;

        self.scheduled_dates()
            .zip(1u32..)
            .flat_map(move |(date, day_ordinal)| {
                let label = label_for(config, day_ordinal);
                Slot::ALL.into_iter().map(move |slot| ScheduleEntry {
                    date,
                    slot,
                    label: label.to_string(),
                    day_ordinal,
                })
            })
    }
}

/// Label for the scheduled day at `day_ordinal` (1-based).
pub fn label_for(config: &ScheduleConfig, day_ordinal: u32) -> &str {
    if day_ordinal <= config.intro_days {
        &config.intro_label
    } else {
        &config.default_label
    }
}
