//! Writing rendered documents to disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ScheduleError, ScheduleResult};

/// Replace `path` with `contents` in one step.
///
/// The data is written to a temporary file next to `path` and renamed over
/// it, so the destination holds either the previous document or the new one.
pub fn write_atomic(path: &Path, contents: &str) -> ScheduleResult<()> {
    let write_err = |source: std::io::Error| ScheduleError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote document");
    Ok(())
}
