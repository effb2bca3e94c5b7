//! Schedule configuration.
//!
//! All knobs of a generation run live in one immutable [`ScheduleConfig`].
//! Defaults reproduce the stock SetMyDay timetable; an optional TOML file at
//! `~/.config/studycal/config.toml` and `STUDYCAL_*` environment variables
//! override them.

use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::schedule::Slot;

static DEFAULT_OUTPUT: &str = "study_schedule.ics";
static DEFAULT_CANCEL_OUTPUT: &str = "study_schedule_cancel.ics";

/// Longest reminder lead time accepted: one week.
pub const MAX_REMINDER_MINUTES: i64 = 7 * 24 * 60;

/// A time-of-day window on a single date, in the configured time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        TimeWindow { start, end }
    }

    fn hours(start: u32, end: u32) -> Self {
        TimeWindow {
            start: NaiveTime::from_hms_opt(start, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(end, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// IANA time zone name, used for "today" and as the TZID of every event
    pub time_zone: String,
    /// Number of calendar days covered, starting today (inclusive)
    pub days_ahead: i64,
    pub morning: TimeWindow,
    pub evening: TimeWindow,
    /// Minutes before start for the display reminder
    pub reminder_minutes: i64,
    /// How many scheduled days carry `intro_label`
    pub intro_days: u32,
    pub intro_label: String,
    pub default_label: String,
    /// Weekday skipped entirely, 0 = Monday ... 6 = Sunday
    pub rest_day: u8,
    pub organizer: String,
    pub calendar_name: String,
    /// Fixed tail of every event UID
    pub uid_suffix: String,
    pub output: PathBuf,
    pub cancel_output: PathBuf,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            time_zone: "Africa/Accra".to_string(),
            days_ahead: 40,
            morning: TimeWindow::hours(5, 7),
            evening: TimeWindow::hours(19, 22),
            reminder_minutes: 15,
            intro_days: 7,
            intro_label: "Generative AI course".to_string(),
            default_label: "Study Session".to_string(),
            rest_day: 6,
            organizer: "setmyday@example.org".to_string(),
            calendar_name: "SetMyDay — Study Timetable".to_string(),
            uid_suffix: "setmyday@example.org".to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            cancel_output: PathBuf::from(DEFAULT_CANCEL_OUTPUT),
        }
    }
}

impl ScheduleConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("studycal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the user config file (if any) and the environment.
    pub fn load() -> ScheduleResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (optional) layered under `STUDYCAL_*` environment variables.
    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        Self::load_layered(path, Environment::with_prefix("STUDYCAL"))
    }

    fn load_layered(path: &Path, env: Environment) -> ScheduleResult<Self> {
        let config: ScheduleConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded schedule config");
        Ok(config)
    }

    /// Check everything that would otherwise fail halfway through a run.
    pub fn validate(&self) -> ScheduleResult<()> {
        self.tz()?;
        self.rest_weekday()?;

        for slot in Slot::ALL {
            let window = self.window(slot);
            if window.end <= window.start {
                return Err(ScheduleError::InvalidWindow {
                    slot,
                    start: window.start,
                    end: window.end,
                });
            }
        }

        if !(0..=MAX_REMINDER_MINUTES).contains(&self.reminder_minutes) {
            return Err(ScheduleError::InvalidReminder(self.reminder_minutes));
        }

        Ok(())
    }

    pub fn tz(&self) -> ScheduleResult<Tz> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| ScheduleError::InvalidTimeZone(self.time_zone.clone()))
    }

    pub fn rest_weekday(&self) -> ScheduleResult<Weekday> {
        Weekday::try_from(self.rest_day).map_err(|_| ScheduleError::InvalidRestDay(self.rest_day))
    }

    pub fn window(&self, slot: Slot) -> &TimeWindow {
        match slot {
            Slot::Morning => &self.morning,
            Slot::Evening => &self.evening,
        }
    }

    /// Destination of the active document, with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        expand(&self.output)
    }

    /// Destination of the cancellation document, with `~` expanded.
    pub fn cancel_output_path(&self) -> PathBuf {
        expand(&self.cancel_output)
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ScheduleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rest_weekday().unwrap(), Weekday::Sun);
        assert_eq!(config.tz().unwrap(), chrono_tz::Africa::Accra);
        assert_eq!(config.morning.start, NaiveTime::from_hms_opt(5, 0, 0).unwrap());
        assert_eq!(config.evening.end, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    }

    #[test]
    fn test_unknown_time_zone_is_rejected() {
        let config = ScheduleConfig {
            time_zone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::InvalidTimeZone(tz)) if tz == "Mars/Olympus_Mons"
        ));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let config = ScheduleConfig {
            evening: TimeWindow::hours(22, 19),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::InvalidWindow { slot: Slot::Evening, .. })
        ));
    }

    #[test]
    fn test_rest_day_out_of_range() {
        let config = ScheduleConfig {
            rest_day: 7,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ScheduleError::InvalidRestDay(7))));
    }

    #[test]
    fn test_negative_reminder_is_rejected() {
        let config = ScheduleConfig {
            reminder_minutes: -5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ScheduleError::InvalidReminder(-5))));
    }

    #[test]
    fn test_oversized_reminder_is_rejected() {
        let config = ScheduleConfig {
            days_ahead: 1,
            reminder_minutes: i64::MAX / 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::InvalidReminder(m)) if m == i64::MAX / 2
        ));

        let week = ScheduleConfig {
            reminder_minutes: MAX_REMINDER_MINUTES,
            ..Default::default()
        };
        assert!(week.validate().is_ok());
    }

    #[test]
    fn test_environment_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "days_ahead = 21\n\
             rest_day = 5\n\
             calendar_name = \"From file\"\n",
        )
        .unwrap();

        let mut vars = config::Map::new();
        vars.insert("STUDYCAL_DAYS_AHEAD".to_string(), "14".to_string());
        vars.insert("STUDYCAL_REST_DAY".to_string(), "0".to_string());
        let env = Environment::with_prefix("STUDYCAL").source(Some(vars));

        let config = ScheduleConfig::load_layered(&path, env).unwrap();
        assert_eq!(config.days_ahead, 14);
        assert_eq!(config.rest_day, 0);
        assert_eq!(config.rest_weekday().unwrap(), Weekday::Mon);
        // Keys absent from the environment still come from the file
        assert_eq!(config.calendar_name, "From file");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScheduleConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.time_zone, ScheduleConfig::default().time_zone);
        assert_eq!(config.intro_days, 7);
    }

    #[test]
    fn test_file_overrides_selected_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "time_zone = \"Europe/Berlin\"\n\
             calendar_name = \"Exam prep\"\n\
             intro_days = 3\n\
             \n\
             [morning]\n\
             start = \"06:30:00\"\n\
             end = \"08:00:00\"\n",
        )
        .unwrap();

        let config = ScheduleConfig::load_from(&path).unwrap();
        assert_eq!(config.time_zone, "Europe/Berlin");
        assert_eq!(config.calendar_name, "Exam prep");
        assert_eq!(config.intro_days, 3);
        assert_eq!(config.morning.start, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        // Untouched fields keep their defaults
        assert_eq!(config.evening, ScheduleConfig::default().evening);
        assert_eq!(config.rest_day, 6);
    }

    #[test]
    fn test_output_paths_expand_tilde() {
        let config = ScheduleConfig {
            output: PathBuf::from("~/study.ics"),
            ..Default::default()
        };
        assert!(!config.output_path().to_string_lossy().starts_with('~'));
        assert_eq!(config.cancel_output_path(), PathBuf::from(DEFAULT_CANCEL_OUTPUT));
    }
}
