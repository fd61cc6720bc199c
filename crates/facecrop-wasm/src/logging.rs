//! `log` backend that writes to the browser console.
//!
//! Core library messages (`log::debug!`, `log::warn!`, ...) are routed to
//! the matching `console` method so they show up in the devtools with the
//! right severity.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}", record.target(), record.args())
}

/// Install the console logger. Later calls only adjust the level.
pub(crate) fn init(level: LevelFilter) {
    // set_logger fails once a logger is installed; keep the existing one
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Parse a level name as accepted by [`crate::set_log_level`].
pub(crate) fn level_from_str(value: &str) -> Option<LevelFilter> {
    value.parse().ok()
}
