// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::sync::OnceLock;

static MAX_LEVEL: OnceLock<LevelFilter> = OnceLock::new();
static LOGGER: StderrLogger = StderrLogger;

/// Minimal logger for programs that have not installed one of their own.
struct StderrLogger;

/// Routes `log` records at or above `level` to stderr.
///
/// Fails if another logger is already registered.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  let _ = MAX_LEVEL.set(level);
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn format_record(level: Level, target: &str, args: &std::fmt::Arguments) -> String {
  let icon = match level {
    Level::Error => "✗",
    Level::Warn => "⚠",
    Level::Info => "•",
    Level::Debug => "·",
    Level::Trace => "▫",
  };

  // Format: "⚠ [molecool::io::pdb] Line 3: atom record has no element symbol"
  format!("{} [{}] {}\n", icon, target, args)
}

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= *MAX_LEVEL.get().unwrap_or(&LevelFilter::Info)
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let msg = format_record(record.level(), record.target(), record.args());
      let _ = std::io::stderr().lock().write_all(msg.as_bytes());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
