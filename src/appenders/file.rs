//! File sink implementation
//!
//! A configured log path is either the exact file to write (it ends in
//! `.txt` or `.log`) or a directory that receives a new file named
//! `log_<timestamp>.txt`. Missing parent directories are created, the file
//! is opened for append, and every line is flushed as soon as it is written.

use crate::core::{LogEntry, LoggerError, Result, Sink, TimestampPattern};
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extensions that mark a log path as an exact file rather than a directory
pub const LOG_FILE_EXTENSIONS: [&str; 2] = [".txt", ".log"];

/// Native line terminator written after every file line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Whether `path` names a log file rather than a directory
pub fn is_log_file_path(path: &Path) -> bool {
    let path = path.as_os_str().to_string_lossy();
    LOG_FILE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// File that a log path refers to at the instant `now`
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use line_logger::appenders::file::resolve_log_path;
/// use line_logger::TimestampPattern;
/// use std::path::Path;
///
/// let now = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let pattern = TimestampPattern::filename_default();
///
/// let file = resolve_log_path(Path::new("logs"), &pattern, &now);
/// assert_eq!(file, Path::new("logs").join("log_2025_01_08-10_30_45.txt"));
///
/// let file = resolve_log_path(Path::new("logs/app.log"), &pattern, &now);
/// assert_eq!(file, Path::new("logs/app.log"));
/// ```
pub fn resolve_log_path(
    log_path: &Path,
    filename_pattern: &TimestampPattern,
    now: &DateTime<Local>,
) -> PathBuf {
    if is_log_file_path(log_path) {
        log_path.to_path_buf()
    } else {
        log_path.join(format!("log_{}.txt", filename_pattern.format(now)))
    }
}

pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    /// Resolve `log_path`, create missing directories and open the file for append
    pub fn open(log_path: impl AsRef<Path>, filename_pattern: &TimestampPattern) -> Result<Self> {
        let path = resolve_log_path(log_path.as_ref(), filename_pattern, &Local::now());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| LoggerError::io_operation("creating log directory", parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::io_operation("opening log file", &path, e))?;

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    /// The file this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }

    /// Flush and release the file handle. Later appends fail with `Closed`.
    pub fn close(&mut self) -> Result<()> {
        match self.file.take() {
            Some(mut file) => file
                .flush()
                .map_err(|e| LoggerError::io_operation("flushing log file", &self.path, e)),
            None => Ok(()),
        }
    }
}

impl Sink for FileSink {
    fn append(&mut self, entry: &LogEntry, pattern: &TimestampPattern) -> Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| LoggerError::closed("file"))?;

        let mut output = entry.format_line(pattern);
        output.push_str(LINE_ENDING);

        // One write per line; an append-mode write never lands mid-line
        file.write_all(output.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| LoggerError::io_operation("writing log file", &self.path, e))
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.file {
            file.flush()
                .map_err(|e| LoggerError::io_operation("flushing log file", &self.path, e))?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
