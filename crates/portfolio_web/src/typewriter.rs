//! Hero typewriter driven by `window.setTimeout`.
//!
//! The core `Typewriter` decides what to show and when; this driver only
//! schedules its timer requests and writes the text into one element.

use crate::dom_host::js_error_text;
use log::warn;
use portfolio_core::config::TypewriterConfig;
use portfolio_core::{TimerRequest, TimerToken, Typewriter};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

struct PendingTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

struct Slot {
    writer: Typewriter,
    element: Element,
    window: Window,
    pending: Option<PendingTimer>,
}

/// One running typewriter bound to a DOM element.
pub struct TypewriterDriver {
    slot: Rc<RefCell<Slot>>,
}

impl TypewriterDriver {
    pub fn start(config: &TypewriterConfig, element_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let element = window
            .document()
            .and_then(|document| document.get_element_by_id(element_id))
            .ok_or_else(|| JsValue::from_str(&format!("element `{element_id}` not found")))?;
        let mut writer =
            Typewriter::new(config).map_err(|err| JsValue::from_str(&err.to_string()))?;

        let first = writer.start();
        let slot = Rc::new(RefCell::new(Slot {
            writer,
            element,
            window,
            pending: None,
        }));
        schedule(&slot, first)?;
        Ok(Self { slot })
    }

    pub fn element_id(&self) -> String {
        self.slot.borrow().element.id()
    }

    /// Cancels the live timer; the displayed text stays as it is.
    pub fn stop(&self) {
        let Ok(mut slot) = self.slot.try_borrow_mut() else {
            return;
        };
        slot.writer.cancel();
        if let Some(pending) = slot.pending.take() {
            slot.window.clear_timeout_with_handle(pending.handle);
        }
    }
}

impl Drop for TypewriterDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(slot: &Rc<RefCell<Slot>>, request: TimerRequest) -> Result<(), JsValue> {
    let weak = Rc::downgrade(slot);
    let token = request.token;
    let callback: Closure<dyn FnMut()> = Closure::once(move || fire(&weak, token));
    let delay = i32::try_from(request.delay_ms).unwrap_or(i32::MAX);

    let mut inner = slot.borrow_mut();
    let handle = inner
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        )?;
    inner.pending = Some(PendingTimer {
        handle,
        _callback: callback,
    });
    Ok(())
}

fn fire(weak: &Weak<RefCell<Slot>>, token: TimerToken) {
    let Some(slot) = weak.upgrade() else {
        return;
    };
    let next = {
        let Ok(mut inner) = slot.try_borrow_mut() else {
            return;
        };
        let next = inner.writer.on_timer(token);
        let text = inner.writer.displayed().to_string();
        inner.element.set_text_content(Some(&text));
        next
    };
    if let Some(request) = next {
        if let Err(err) = schedule(&slot, request) {
            warn!(
                "event=typewriter_schedule module=web status=error error={}",
                js_error_text(&err)
            );
        }
    }
}
