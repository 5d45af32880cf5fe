//! Thin wrappers over the browser APIs the pages use. Every function degrades
//! to a no-op or a neutral value when there is no `window`.

use common::timer::{Clock, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Window `scroll` listener that unregisters itself when dropped.
pub struct ScrollListener {
    closure: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn new(on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(on_scroll);
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn encode_component(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// [`Clock`] backed by `setTimeout`.
pub struct GlooClock;

impl Clock for GlooClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(millis))
    }
}
