//! ICS file generation.

use chrono::{DateTime, NaiveDateTime, Utc};
use icalendar::{Alarm, Calendar, Component, EventLike, Property, Trigger};

use crate::document::{DocumentHeader, ScheduleDocument};
use crate::record::{CalendarRecord, RecordStatus};

/// Render a whole document: header, one VEVENT per record, footer.
pub fn generate_document(document: &ScheduleDocument, generated_at: DateTime<Utc>) -> String {
    let mut cal = Calendar::new();
    append_header(&mut cal, &document.header);

    for record in &document.records {
        cal.push(generate_event(record, generated_at));
    }

    let cal = cal.done();
    let output = strip_ics_bloat(&cal.to_string(), &document.header.product_id);

    tracing::debug!(
        method = %document.header.method,
        events = document.records.len(),
        bytes = output.len(),
        "rendered ics document"
    );

    output
}

/// Build the VEVENT for a single record.
pub fn generate_event(record: &CalendarRecord, generated_at: DateTime<Utc>) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&record.uid);
    ics_event.add_property("SEQUENCE", record.sequence.to_string());
    ics_event.add_property("STATUS", record.status.as_ics_str());

    // DTSTAMP is required by RFC 5545; taken from the caller so output is reproducible
    let dtstamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    if let Some(ref time) = record.time {
        add_zoned_property(&mut ics_event, "DTSTART", &time.start, &time.tzid);
        add_zoned_property(&mut ics_event, "DTEND", &time.end, &time.tzid);
    }

    ics_event.summary(&record.summary);

    if record.status == RecordStatus::Confirmed {
        ics_event.add_property("TRANSP", "OPAQUE");
    }

    if let Some(ref desc) = record.description {
        ics_event.description(desc);

        let html = format!("<b>{}</b><br/>{}", record.summary, desc.replace('\n', "<br/>"));
        let mut prop = Property::new("X-ALT-DESC", html);
        prop.add_parameter("FMTTYPE", "text/html");
        ics_event.append_property(prop);
    }

    if let Some(ref org) = record.organizer {
        ics_event.append_property(Property::new("ORGANIZER", format!("mailto:{}", org)));
    }

    if let Some(ref reminder) = record.reminder {
        let trigger = Trigger::before_start(chrono::Duration::minutes(reminder.minutes_before));
        ics_event.alarm(Alarm::display(&reminder.description, trigger));
    }

    ics_event.done()
}

fn append_header(cal: &mut Calendar, header: &DocumentHeader) {
    cal.append_property(Property::new("METHOD", &header.method));
    cal.append_property(Property::new("X-WR-CALNAME", &header.name));
    cal.append_property(Property::new("X-WR-TIMEZONE", &header.time_zone));
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our product identifier, followed by a single CALSCALE
/// - Remove DTSTAMP and UID inside VALARM sections (not required by RFC 5545)
fn strip_ics_bloat(ics: &str, product_id: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{}\r\n", product_id));
            result.push_str("CALSCALE:GREGORIAN\r\n");
            continue;
        }

        if line.starts_with("CALSCALE:") {
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Local wall-clock datetime with a TZID parameter (never converted to UTC)
fn add_zoned_property(
    ics_event: &mut icalendar::Event,
    name: &str,
    datetime: &NaiveDateTime,
    tzid: &str,
) {
    let mut prop = Property::new(name, datetime.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", tzid);
    ics_event.append_property(prop);
}
