//! Caller identification
//!
//! Every log line is tagged with the code unit it came from. The plain
//! emission methods on [`Logger`](crate::Logger) are `#[track_caller]`, so the
//! tag is derived from the source location of the application code that
//! called them. Macros and [`ScopedLogger`](crate::ScopedLogger) inject the
//! tag explicitly instead.

use std::ffi::OsStr;
use std::panic::Location;
use std::path::Path;

const UNKNOWN_ORIGIN: &str = "unknown";

/// Origin tag of the first caller outside `#[track_caller]` frames
#[track_caller]
#[must_use]
pub fn caller() -> String {
    from_location(Location::caller())
}

/// Name of the code unit a source location belongs to
///
/// The file stem is used (`src/net/client.rs` gives `client`), except for
/// `mod.rs` where the enclosing directory names the module.
#[must_use]
pub fn from_location(location: &Location<'_>) -> String {
    from_file(location.file())
}

pub(crate) fn from_file(file: &str) -> String {
    let path = Path::new(file);
    let stem = path.file_stem().and_then(OsStr::to_str);

    let unit = match stem {
        Some("mod") => path
            .parent()
            .and_then(Path::file_name)
            .and_then(OsStr::to_str)
            .or(stem),
        other => other,
    };

    unit.filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_ORIGIN)
        .to_string()
}
