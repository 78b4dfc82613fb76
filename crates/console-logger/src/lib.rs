//! Console Logger
//!
//! A `log` backend for browser apps. Every record is stamped with the local
//! time and the app name, then written to the browser console (stderr on
//! native targets) at the matching console level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger installed by `init_logger`
pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
        }
    }

    /// Formatted line for `record`, or `None` when its level is filtered out
    fn line_for(&self, record: &Record) -> Option<String> {
        if !self.enabled(record.metadata()) {
            return None;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        Some(format_line(
            &timestamp,
            &self.app_name,
            record.level(),
            record.target(),
            &record.args().to_string(),
        ))
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if let Some(line) = self.line_for(record) {
            write_console(record.level(), &line);
        }
    }

    fn flush(&self) {}
}

/// Format a single log line: `[12:00:00.000] [App] INFO target: message`
pub fn format_line(timestamp: &str, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] [{}] {} {}: {}", timestamp, app_name, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger as the global `log` backend.
///
/// Fails if a logger is already installed; the previous logger stays active.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(app_name, level)))?;
    log::set_max_level(level);
    Ok(())
}
