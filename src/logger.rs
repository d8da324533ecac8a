//! Console Logger
//!
//! `log` backend that writes to the browser devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_record(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::debug_1(&line),
            Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[TARGET] message`, with the crate prefix stripped from the target
fn format_record(target: &str, message: &str) -> String {
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short.to_uppercase(), message)
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
