//! ICS file generation.
//!
//! This module turns structured records into .ics text according to RFC 5545.

mod generate;

pub use generate::{generate_document, generate_event};
