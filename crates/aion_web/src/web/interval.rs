//! Owned `setInterval` registration.
//!
//! The handle owns both the interval id and the JS closure. Dropping it (or
//! calling [`IntervalHandle::cancel`]) clears the interval before returning, so
//! no further callbacks fire.

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) struct IntervalHandle {
    id: Cell<Option<i32>>,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub(super) fn start(period_ms: u32, tick: impl FnMut() + 'static) -> Result<Self, String> {
        let window = web_sys::window().ok_or("interval: no window")?;
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);

        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|_| "interval: setInterval threw".to_string())?;

        Ok(Self {
            id: Cell::new(Some(id)),
            _callback: callback,
        })
    }

    /// Clear the interval but keep the closure alive. Safe to call from inside
    /// the callback itself.
    pub(super) fn cancel(&self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
