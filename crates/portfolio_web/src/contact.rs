//! Contact form binding.
//!
//! # Invariants
//! - `submit()` never throws synchronously; failures reject the promise.
//! - The form state is only borrowed between awaits, never across one.

use crate::api::parse_config;
use crate::console_log::ensure_console_logging;
use js_sys::{Function, Promise};
use portfolio_core::{ContactField, ContactForm};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

#[wasm_bindgen]
pub struct ContactFormHandle {
    form: Rc<RefCell<ContactForm>>,
}

#[wasm_bindgen]
impl ContactFormHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ContactFormHandle, JsValue> {
        ensure_console_logging();
        let config =
            parse_config(config_json.as_deref()).map_err(|err| JsValue::from_str(&err))?;
        Ok(Self {
            form: Rc::new(RefCell::new(ContactForm::new(config.contact))),
        })
    }

    /// Updates one draft field by its control name (`name|email|message`).
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&self, field: &str, value: String) -> Result<(), JsValue> {
        let field = ContactField::parse(field)
            .ok_or_else(|| JsValue::from_str(&format!("unknown contact field `{field}`")))?;
        let mut form = self
            .form
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("contact form is busy"))?;
        form.set_field(field, value);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = isSubmitting)]
    pub fn is_submitting(&self) -> bool {
        self.form
            .try_borrow()
            .map(|form| form.is_submitting())
            .unwrap_or(true)
    }

    /// Resolves with the toast JSON after the simulated delay.
    pub fn submit(&self) -> Promise {
        let form = Rc::clone(&self.form);
        future_to_promise(async move {
            let ticket = form
                .borrow_mut()
                .begin_submit()
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            sleep_ms(ticket.delay_ms).await?;
            let toast = form
                .borrow_mut()
                .complete_submit(ticket)
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            let json = serde_json::to_string(&toast)
                .map_err(|err| JsValue::from_str(&format!("failed to encode toast: {err}")))?;
            Ok(JsValue::from_str(&json))
        })
    }
}

async fn sleep_ms(delay_ms: u32) -> Result<(), JsValue> {
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let Some(window) = web_sys::window() else {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("window unavailable"));
            return;
        };
        if let Err(err) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay)
        {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}
