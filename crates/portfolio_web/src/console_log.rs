//! Browser console logging bootstrap.
//!
//! # Responsibility
//! - Route `log` macros to `console.{debug,info,warn,error}`.
//!
//! # Invariants
//! - The logger is installed at most once per page.
//! - Re-initialization with a different level is rejected.

use log::{info, Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use portfolio_core::logging::{default_log_level, level_filter};
use wasm_bindgen::JsValue;
use web_sys::console;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;
static CONSOLE_LEVEL: OnceCell<LevelFilter> = OnceCell::new();

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{}] {} {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger with `level`.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when console logging is already active with another level.
pub fn init_console_logging(level: &str) -> Result<(), String> {
    let filter = level_filter(level)?;
    let active = CONSOLE_LEVEL.get_or_try_init(|| -> Result<LevelFilter, String> {
        log::set_logger(&CONSOLE_LOGGER)
            .map_err(|err| format!("failed to install console logger: {err}"))?;
        log::set_max_level(filter);
        info!(
            "event=app_start module=web status=ok version={}",
            env!("CARGO_PKG_VERSION")
        );
        Ok(filter)
    })?;

    if *active != filter {
        return Err(format!(
            "console logging already initialized with level `{active}`; refusing to switch to `{filter}`"
        ));
    }
    Ok(())
}

/// Installs the console logger with the build's default level unless one is active.
pub fn ensure_console_logging() {
    if CONSOLE_LEVEL.get().is_some() {
        return;
    }
    if let Err(err) = init_console_logging(default_log_level()) {
        console::warn_1(&JsValue::from_str(&err));
    }
}
