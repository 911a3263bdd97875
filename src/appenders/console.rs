//! Console sink implementation

use crate::core::{LogEntry, LogLevel, Result, Sink, TimestampPattern};
use std::io::{self, Write};

/// Writes and flushes each line followed by `\n` to a console stream or any writer
pub struct ConsoleSink {
    writer: Box<dyn Write + Send>,
    name: &'static str,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::named(Box::new(io::stdout()), "stdout")
    }

    pub fn stderr() -> Self {
        Self::named(Box::new(io::stderr()), "stderr")
    }

    /// Use an arbitrary writer as the console stream
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named(Box::new(writer), "console")
    }

    fn named(writer: Box<dyn Write + Send>, name: &'static str) -> Self {
        Self {
            writer,
            name,
            use_colors: false,
        }
    }

    /// Color the level label
    ///
    /// Off by default, which keeps console lines byte-for-byte identical to
    /// file lines.
    ///
    /// # Example
    ///
    /// ```
    /// use line_logger::appenders::ConsoleSink;
    ///
    /// let sink = ConsoleSink::stderr().with_colors(true);
    /// ```
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "console")]
    fn label(&self, level: LogLevel) -> String {
        use colored::Colorize;
        if self.use_colors {
            level.to_str().color(level.color_code()).to_string()
        } else {
            level.to_str().to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn label(&self, level: LogLevel) -> String {
        level.to_str().to_string()
    }
}

impl Sink for ConsoleSink {
    fn append(&mut self, entry: &LogEntry, pattern: &TimestampPattern) -> Result<()> {
        let mut output = entry.render(pattern, &self.label(entry.level));
        output.push('\n');
        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}
