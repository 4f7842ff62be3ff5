//! [`Host`] for a real browser page.
//!
//! Timers are `gloo-timers` callbacks, which clear themselves on drop.
//! The visibility listener is a `visibilitychange` handler on `document`
//! that [`VisibilityListener`] removes again on drop.

use community_page::host::Host;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

const VISIBILITY_CHANGE: &str = "visibilitychange";

#[derive(Clone)]
pub struct BrowserHost {
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("community-wasm: no document available"))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Registered `visibilitychange` handler, removed on drop.
pub struct VisibilityListener {
    document: Document,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for VisibilityListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            VISIBILITY_CHANGE,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

impl Host for BrowserHost {
    type Interval = Interval;
    type Timeout = Timeout;
    type Subscription = VisibilityListener;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn is_hidden(&self) -> bool {
        self.document.hidden()
    }

    fn on_visibility_change(&self, mut callback: Box<dyn FnMut(bool)>) -> VisibilityListener {
        let document = self.document.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            callback(document.hidden());
        });
        if let Err(err) = self
            .document
            .add_event_listener_with_callback(VISIBILITY_CHANGE, closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "could not subscribe to visibilitychange");
        }
        VisibilityListener {
            document: self.document.clone(),
            closure,
        }
    }
}
