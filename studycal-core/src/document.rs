//! Document assembly: an ordered list of records under a VCALENDAR header.

use chrono::{DateTime, Utc};

use crate::config::ScheduleConfig;
use crate::ics::generate_document;
use crate::record::CalendarRecord;
use crate::schedule::Schedule;

static PUBLISH_PRODUCT_ID: &str = "-//SetMyDay//Study Schedule//EN";
static CANCEL_PRODUCT_ID: &str = "-//SetMyDay//Study Schedule Cancel//EN";

/// Which of the two generated documents this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Active events (METHOD:PUBLISH)
    Publish,
    /// Cancellations of the same UIDs (METHOD:CANCEL)
    Cancel,
}

impl DocumentKind {
    pub fn method(&self) -> &'static str {
        match self {
            DocumentKind::Publish => "PUBLISH",
            DocumentKind::Cancel => "CANCEL",
        }
    }

    pub fn product_id(&self) -> &'static str {
        match self {
            DocumentKind::Publish => PUBLISH_PRODUCT_ID,
            DocumentKind::Cancel => CANCEL_PRODUCT_ID,
        }
    }

    fn display_name(&self, calendar_name: &str) -> String {
        match self {
            DocumentKind::Publish => calendar_name.to_string(),
            DocumentKind::Cancel => format!("{} (CANCELLATIONS)", calendar_name),
        }
    }
}

/// Calendar-level properties written before the first VEVENT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    pub product_id: String,
    pub method: String,
    pub name: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDocument {
    pub kind: DocumentKind,
    pub header: DocumentHeader,
    pub records: Vec<CalendarRecord>,
}

impl ScheduleDocument {
    /// One CONFIRMED record per scheduled session.
    pub fn publish(schedule: &Schedule, config: &ScheduleConfig) -> Self {
        Self::build(DocumentKind::Publish, schedule, config)
    }

    /// One CANCELLED record per UID the publish document would contain.
    pub fn cancel(schedule: &Schedule, config: &ScheduleConfig) -> Self {
        Self::build(DocumentKind::Cancel, schedule, config)
    }

    pub fn build(kind: DocumentKind, schedule: &Schedule, config: &ScheduleConfig) -> Self {
        let records: Vec<CalendarRecord> = schedule
            .entries()
            .map(|entry| match kind {
                DocumentKind::Publish => CalendarRecord::active(&entry, config),
                DocumentKind::Cancel => CalendarRecord::cancelled(&entry, config),
            })
            .collect();

        tracing::debug!(
            method = kind.method(),
            start = %schedule.start(),
            records = records.len(),
            "built schedule document"
        );

        ScheduleDocument {
            kind,
            header: DocumentHeader {
                product_id: kind.product_id().to_string(),
                method: kind.method().to_string(),
                name: kind.display_name(&config.calendar_name),
                time_zone: config.time_zone.clone(),
            },
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn uids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.uid.as_str())
    }

    /// Render as .ics text, stamping every event with `generated_at`.
    pub fn to_ics(&self, generated_at: DateTime<Utc>) -> String {
        generate_document(self, generated_at)
    }
}
