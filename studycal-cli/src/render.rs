//! Colored console rendering for studycal-core types.

use std::path::Path;

use owo_colors::OwoColorize;
use studycal_core::{DocumentKind, ScheduleDocument};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DocumentKind {
    fn render(&self) -> String {
        match self {
            DocumentKind::Publish => self.method().green().to_string(),
            DocumentKind::Cancel => self.method().red().to_string(),
        }
    }
}

/// A document together with where it was written.
impl Render for (&ScheduleDocument, &Path) {
    fn render(&self) -> String {
        let (document, path) = *self;
        let count = document.len();

        let detail = match document.kind {
            DocumentKind::Publish => format!(
                "with {} {} (morning+evening each scheduled study-day)",
                count,
                pluralize("event", count)
            ),
            DocumentKind::Cancel => {
                format!("with {} CANCEL {}", count, pluralize("event", count))
            }
        };

        format!(
            "{} Wrote {} {}",
            document.kind.render(),
            path.display().bold(),
            detail.dimmed()
        )
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
