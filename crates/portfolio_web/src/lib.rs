//! Browser bindings for the portfolio page.
//!
//! # Responsibility
//! - Expose page state, navigation and the contact form to page scripts
//!   through `wasm-bindgen`.
//! - Keep every DOM dependency behind `DomHost`.
//!
//! # Invariants
//! - Exported functions never panic; failures surface as `JsValue` strings.
//! - DOM modules only build for `wasm32`; `api` builds everywhere.

pub mod api;
#[cfg(target_arch = "wasm32")]
mod console_log;
#[cfg(target_arch = "wasm32")]
mod contact;
#[cfg(target_arch = "wasm32")]
mod dom_host;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod typewriter;

#[cfg(target_arch = "wasm32")]
pub use contact::ContactFormHandle;
#[cfg(target_arch = "wasm32")]
pub use dom_host::{DomHost, EventSink};
#[cfg(target_arch = "wasm32")]
pub use page::PortfolioPage;

use wasm_bindgen::prelude::*;

/// Expose core crate version to page scripts.
#[wasm_bindgen(js_name = coreVersion)]
pub fn core_version() -> String {
    api::core_version()
}

/// Default `PageConfig` as JSON; a starting point for overrides.
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<String, JsValue> {
    api::default_config_json().map_err(|err| JsValue::from_str(&err))
}

/// Page content (profile, projects, skills, links) as JSON.
#[wasm_bindgen(js_name = siteContent)]
pub fn site_content() -> Result<String, JsValue> {
    api::site_content_json().map_err(|err| JsValue::from_str(&err))
}

/// Initializes console logging once per page.
///
/// Returns an empty string on success and the error message otherwise.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: String) -> String {
    match console_log::init_console_logging(level.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}
