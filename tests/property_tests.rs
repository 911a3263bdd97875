//! Property-based tests for line_logger using proptest

use chrono::{Local, TimeZone};
use line_logger::appenders::file::{is_log_file_path, resolve_log_path};
use line_logger::prelude::*;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::io;
use std::path::Path;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Parsing a label gives back the level, in any letter case
    #[test]
    fn test_log_level_label_parses(level in any_level(), lower in any::<bool>()) {
        let label = if lower { level.to_str().to_lowercase() } else { level.to_string() };
        let parsed: LogLevel = label.parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// The label segment of a line is the fixed uppercase tag
    #[test]
    fn test_line_label_segment(level in any_level(), message in "[a-zA-Z0-9 ]{0,40}") {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder().console_writer(buffer.clone()).build().unwrap();

        logger.log_from("prop", level, message.clone());

        let text = String::from_utf8(buffer.0.lock().clone()).unwrap();
        let expected = format!("] [{}/prop] {}\n", level.to_str(), message);
        prop_assert!(text.ends_with(&expected), "line was {:?}", text);
        prop_assert_eq!(text.matches('\n').count(), 1);
    }
}

// ============================================================================
// Path resolution Tests
// ============================================================================

proptest! {
    /// Paths ending in .txt or .log are used verbatim
    #[test]
    fn test_log_file_paths_are_verbatim(
        dir in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        stem in "[a-z0-9_]{1,12}",
        ext in prop_oneof![Just("txt"), Just("log")],
    ) {
        let path = format!("{}/{}.{}", dir, stem, ext);
        let now = Local::now();
        let resolved = resolve_log_path(Path::new(&path), &TimestampPattern::filename_default(), &now);
        prop_assert_eq!(resolved, Path::new(&path).to_path_buf());
    }

    /// Any other path is a directory holding log_<timestamp>.txt
    #[test]
    fn test_directories_get_generated_name(
        dir in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        secs in 0i64..4_000_000_000,
    ) {
        let now = Local.timestamp_opt(secs, 0).single().unwrap();
        let pattern = TimestampPattern::filename_default();
        let resolved = resolve_log_path(Path::new(&dir), &pattern, &now);

        prop_assert!(!is_log_file_path(Path::new(&dir)));
        prop_assert_eq!(resolved.parent().unwrap(), Path::new(&dir));
        let expected = format!("log_{}.txt", pattern.format(&now));
        prop_assert_eq!(resolved.file_name().unwrap().to_str().unwrap(), expected.as_str());
    }
}

// ============================================================================
// TimestampPattern Tests
// ============================================================================

proptest! {
    /// Patterns built only from literal text and known specifiers always validate
    #[test]
    fn test_known_specifiers_validate(
        parts in prop::collection::vec(
            prop_oneof![
                Just("%Y"), Just("%m"), Just("%d"), Just("%H"), Just("%M"),
                Just("%S"), Just("%.3f"), Just("-"), Just("_"), Just(":"), Just("log"),
            ],
            0..8,
        )
    ) {
        let pattern = parts.concat();
        let parsed = TimestampPattern::new(pattern.as_str());
        prop_assert!(parsed.is_ok());
        let formatted = parsed.unwrap().format(&Local::now());
        prop_assert!(!formatted.contains('%'));
    }
}
