//! `PortfolioPage` binding.
//!
//! # Responsibility
//! - Mount one `PageController` over the live document.
//! - Feed DOM events into the controller and notify `onChange` listeners
//!   with a fresh snapshot whenever state changed.
//! - Run hero typewriters bound to elements on the page.
//!
//! # Invariants
//! - Exported methods never panic; a busy or unmounted controller reads as
//!   the default state.
//! - Listeners are notified after the controller borrow is released, so
//!   they may call back into the page.

use crate::api::{nav_items_json, parse_config, snapshot_json};
use crate::console_log::ensure_console_logging;
use crate::dom_host::{js_error_text, DomHost, EventSink};
use crate::typewriter::TypewriterDriver;
use js_sys::Function;
use log::{debug, warn};
use portfolio_core::config::TypewriterConfig;
use portfolio_core::{default_nav_items, HostEvent, PageController, SectionId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

type SharedController = Rc<RefCell<Option<PageController<DomHost>>>>;
type Listeners = Rc<RefCell<Vec<Function>>>;

#[wasm_bindgen]
pub struct PortfolioPage {
    controller: SharedController,
    listeners: Listeners,
    typewriter_config: TypewriterConfig,
    typewriters: Vec<TypewriterDriver>,
}

#[wasm_bindgen]
impl PortfolioPage {
    /// Mounts the page. `config_json` overrides any subset of the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PortfolioPage, JsValue> {
        ensure_console_logging();
        let config =
            parse_config(config_json.as_deref()).map_err(|err| JsValue::from_str(&err))?;

        let controller: SharedController = Rc::new(RefCell::new(None));
        let listeners: Listeners = Rc::new(RefCell::new(Vec::new()));
        let sink = event_sink(Rc::downgrade(&controller), Rc::clone(&listeners));

        let host = DomHost::new(sink).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let mounted = PageController::mount(host, &config, default_nav_items())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        *controller.borrow_mut() = Some(mounted);

        Ok(Self {
            controller,
            listeners,
            typewriter_config: config.typewriter,
            typewriters: Vec::new(),
        })
    }

    /// Current snapshot as JSON: `{isPastThreshold, activeSection, revealed}`.
    #[wasm_bindgen(js_name = scrollState)]
    pub fn scroll_state(&self) -> Result<String, JsValue> {
        let slot = self.borrow_controller()?;
        let Some(page) = slot.as_ref() else {
            return Err(JsValue::from_str("page is unmounted"));
        };
        snapshot_json(page.scroll_state(), page.reveal_state())
            .map_err(|err| JsValue::from_str(&err))
    }

    #[wasm_bindgen(getter, js_name = isPastThreshold)]
    pub fn is_past_threshold(&self) -> bool {
        self.read(|page| page.scroll_state().is_past_threshold)
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        self.read(|page| {
            page.scroll_state()
                .active_section
                .as_ref()
                .map(|id| id.as_str().to_string())
        })
        .flatten()
    }

    #[wasm_bindgen(js_name = isRevealed)]
    pub fn is_revealed(&self, section: &str) -> bool {
        let Ok(id) = SectionId::parse(section) else {
            return false;
        };
        self.read(|page| page.is_revealed(&id)).unwrap_or(false)
    }

    /// Smooth-scrolls to `section`; `false` when the element is missing.
    #[wasm_bindgen(js_name = scrollToSection)]
    pub fn scroll_to_section(&self, section: &str) -> bool {
        let Ok(id) = SectionId::parse(section) else {
            debug!("event=scroll_to_section module=web status=skip reason=invalid_id");
            return false;
        };
        self.read(|page| page.scroll_to_section(&id)).unwrap_or(false)
    }

    /// Registers a listener called with the snapshot JSON after each change.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Function) -> Result<(), JsValue> {
        self.listeners
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("listeners are busy"))?
            .push(callback);
        Ok(())
    }

    #[wasm_bindgen(js_name = navItems)]
    pub fn nav_items(&self) -> Result<String, JsValue> {
        let slot = self.borrow_controller()?;
        let json = match slot.as_ref() {
            Some(page) => nav_items_json(page.nav_items()),
            None => nav_items_json(&default_nav_items()),
        };
        json.map_err(|err| JsValue::from_str(&err))
    }

    /// Starts the role typewriter in `element_id`, replacing any running one there.
    #[wasm_bindgen(js_name = startTypewriter)]
    pub fn start_typewriter(&mut self, element_id: &str) -> Result<(), JsValue> {
        self.typewriters.retain(|driver| driver.element_id() != element_id);
        let driver = TypewriterDriver::start(&self.typewriter_config, element_id)?;
        self.typewriters.push(driver);
        Ok(())
    }

    /// Releases listeners, observers and timers. Later calls are no-ops.
    pub fn unmount(&mut self) {
        self.typewriters.clear();
        if let Ok(mut listeners) = self.listeners.try_borrow_mut() {
            listeners.clear();
        }
        let page = match self.controller.try_borrow_mut() {
            Ok(mut slot) => slot.take(),
            Err(_) => {
                warn!("event=page_unmount module=web status=skip reason=busy");
                None
            }
        };
        if let Some(page) = page {
            page.unmount();
        }
    }
}

impl PortfolioPage {
    fn borrow_controller(
        &self,
    ) -> Result<std::cell::Ref<'_, Option<PageController<DomHost>>>, JsValue> {
        self.controller
            .try_borrow()
            .map_err(|_| JsValue::from_str("page is busy"))
    }

    fn read<T>(&self, f: impl FnOnce(&PageController<DomHost>) -> T) -> Option<T> {
        let slot = self.controller.try_borrow().ok()?;
        slot.as_ref().map(f)
    }
}

fn event_sink(
    controller: Weak<RefCell<Option<PageController<DomHost>>>>,
    listeners: Listeners,
) -> EventSink {
    Rc::new(move |event: HostEvent| {
        let Some(controller) = controller.upgrade() else {
            return;
        };
        let snapshot = {
            let Ok(mut slot) = controller.try_borrow_mut() else {
                debug!("event=host_event module=web status=skip reason=busy");
                return;
            };
            let Some(page) = slot.as_mut() else {
                return;
            };
            if page.handle_event(&event).is_empty() {
                return;
            }
            snapshot_json(page.scroll_state(), page.reveal_state())
        };

        let snapshot = match snapshot {
            Ok(json) => JsValue::from_str(&json),
            Err(err) => {
                warn!("event=page_notify module=web status=error error={err}");
                return;
            }
        };
        let callbacks = match listeners.try_borrow() {
            Ok(listeners) => listeners.clone(),
            Err(_) => return,
        };
        for callback in callbacks {
            if let Err(err) = callback.call1(&JsValue::NULL, &snapshot) {
                warn!(
                    "event=page_notify module=web status=error error={}",
                    js_error_text(&err)
                );
            }
        }
    })
}
