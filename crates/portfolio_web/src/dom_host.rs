//! DOM-backed page host.
//!
//! # Responsibility
//! - Read scroll offset and section boxes from the live document.
//! - Own the window `scroll`/`resize` listener and one `IntersectionObserver`
//!   per observed section, forwarding their callbacks as `HostEvent`s.
//!
//! # Invariants
//! - At most one scroll listener is registered at a time.
//! - Every registered listener and observer is released on unsubscribe,
//!   unobserve, or drop.

use log::{debug, warn};
use portfolio_core::{
    HostError, HostEvent, IntersectionSignal, ListenerId, PageHost, SectionBounds, SectionId,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, Window,
};

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Receives host events; installed by the page binding.
pub type EventSink = Rc<dyn Fn(HostEvent)>;

type ScrollCallback = Closure<dyn FnMut(Event)>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct ScrollListener {
    id: ListenerId,
    callback: ScrollCallback,
}

struct SectionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

pub struct DomHost {
    window: Window,
    document: Document,
    sink: EventSink,
    listener: Option<ScrollListener>,
    next_listener: u64,
    observers: BTreeMap<SectionId, SectionObserver>,
}

impl DomHost {
    pub fn new(sink: EventSink) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(HostError::Unavailable("document"))?;
        Ok(Self {
            window,
            document,
            sink,
            listener: None,
            next_listener: 1,
            observers: BTreeMap::new(),
        })
    }

    fn element(&self, id: &SectionId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }

    fn remove_scroll_callback(&self, callback: &ScrollCallback) {
        for kind in SCROLL_EVENTS {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            {
                warn!(
                    "event=scroll_unsubscribe module=dom status=error kind={} error={}",
                    kind,
                    js_error_text(&err)
                );
            }
        }
    }
}

impl PageHost for DomHost {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_bounds(&self, id: &SectionId) -> Option<SectionBounds> {
        let rect = self.element(id)?.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }

    fn scroll_into_view(&self, id: &SectionId) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn subscribe_scroll(&mut self) -> Result<ListenerId, HostError> {
        if self.listener.is_some() {
            return Err(HostError::Subscription(
                "scroll listener already registered".to_string(),
            ));
        }

        let sink = Rc::clone(&self.sink);
        let callback: ScrollCallback = Closure::new(move |event: Event| {
            let host_event = if event.type_() == "resize" {
                HostEvent::Resize
            } else {
                HostEvent::Scroll
            };
            sink(host_event);
        });

        for kind in SCROLL_EVENTS {
            if let Err(err) = self
                .window
                .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            {
                self.remove_scroll_callback(&callback);
                return Err(HostError::Subscription(format!(
                    "failed to listen for `{kind}`: {}",
                    js_error_text(&err)
                )));
            }
        }

        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listener = Some(ScrollListener { id, callback });
        debug!("event=scroll_subscribe module=dom status=ok listener={}", id.0);
        Ok(id)
    }

    fn unsubscribe_scroll(&mut self, listener: ListenerId) {
        match self.listener.take() {
            Some(active) if active.id == listener => {
                self.remove_scroll_callback(&active.callback);
                debug!(
                    "event=scroll_unsubscribe module=dom status=ok listener={}",
                    listener.0
                );
            }
            other => {
                self.listener = other;
                debug!(
                    "event=scroll_unsubscribe module=dom status=skip reason=unknown_listener listener={}",
                    listener.0
                );
            }
        }
    }

    fn observe_section(&mut self, id: &SectionId, amount: f64) -> Result<(), HostError> {
        let Some(element) = self.element(id) else {
            debug!("event=observe_section module=dom status=skip reason=missing section={id}");
            return Ok(());
        };

        let sink = Rc::clone(&self.sink);
        let section = id.clone();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    sink(HostEvent::Intersection(IntersectionSignal::new(
                        section.clone(),
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    )));
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(amount));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| {
                    HostError::Subscription(format!(
                        "failed to observe `{id}`: {}",
                        js_error_text(&err)
                    ))
                })?;
        observer.observe(&element);

        let previous = self.observers.insert(
            id.clone(),
            SectionObserver {
                observer,
                _callback: callback,
            },
        );
        if let Some(previous) = previous {
            previous.observer.disconnect();
        }
        Ok(())
    }

    fn unobserve_section(&mut self, id: &SectionId) {
        if let Some(entry) = self.observers.remove(id) {
            entry.observer.disconnect();
        }
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.remove_scroll_callback(&listener.callback);
        }
        for (_, entry) in std::mem::take(&mut self.observers) {
            entry.observer.disconnect();
        }
    }
}

pub(crate) fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
