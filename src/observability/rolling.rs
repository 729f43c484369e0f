//! Rolling trace-file writer.
//!
//! Size-bounded log file: when the current file crosses the size limit it is
//! renamed with a dated suffix and a fresh file is started, keeping a fixed
//! number of dated backups. Stdout belongs to the UI, so traces must go to a
//! file, and that file must not grow without bound.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of dated backup files kept after rotation.
const MAX_BACKUP_FILES: usize = 2;

/// Thread-safe rolling file writer.
///
/// The file handle opens lazily on first write so construction never fails.
/// Rotation renames the current file to `<stem>-<YYYYMMDD-HHMMSS>.json` and
/// removes the oldest backups beyond the retention count.
pub struct RollingLogFile {
    /// Path of the active log file.
    path: PathBuf,

    /// Lazily opened append handle.
    handle: Mutex<Option<fs::File>>,
}

impl RollingLogFile {
    /// Creates a rolling writer for the given path.
    ///
    /// The file is not touched until the first write.
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first when the file is over the size limit.
    ///
    /// The line is written with a trailing newline and flushed immediately so
    /// a crash cannot lose buffered spans.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| {
                std::io::Error::new(std::io::ErrorKind::Other, "rolling log mutex poisoned")
            })?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *guard = Some(file);
        }

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }

        Ok(())
    }

    /// Whether the active file has crossed the size limit.
    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.len() > MAX_FILE_SIZE_BYTES)
            .unwrap_or(false)
    }

    /// Renames the active file to a dated backup and prunes old backups.
    fn rotate(&self) -> std::io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("traces");

        let backup = self.path.with_file_name(format!("{stem}-{stamp}.json"));
        fs::rename(&self.path, &backup)?;

        self.prune_backups(stem);
        Ok(())
    }

    /// Removes the oldest dated backups beyond the retention count.
    ///
    /// Backup names embed a sortable UTC timestamp, so lexicographic order is
    /// chronological order.
    fn prune_backups(&self, stem: &str) {
        let Some(dir) = self.path.parent() else {
            return;
        };
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        let prefix = format!("{stem}-");
        let mut backups: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".json"))
            })
            .collect();

        backups.sort();

        let excess = backups.len().saturating_sub(MAX_BACKUP_FILES);
        for old in backups.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }
    }
}

impl std::fmt::Debug for RollingLogFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingLogFile")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RollingLogFile;

    #[test]
    fn writes_lines_to_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");

        let writer = RollingLogFile::new(path.clone());
        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
