//! `navigator.share` / `navigator.clipboard` bridge.
//!
//! Both APIs are looked up with `Reflect` so missing support is detected at
//! runtime instead of failing to link. Their promises are awaited in the
//! background only to report rejections to the console.

use aion_core::share::{ShareHost, SharePayload};
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

pub(super) struct BrowserShareHost {
    navigator: JsValue,
}

impl BrowserShareHost {
    pub(super) fn new() -> Self {
        let navigator = web_sys::window()
            .map(|w| JsValue::from(w.navigator()))
            .unwrap_or(JsValue::UNDEFINED);
        Self { navigator }
    }

    fn method(target: &JsValue, name: &str) -> Option<Function> {
        if target.is_undefined() || target.is_null() {
            return None;
        }
        Reflect::get(target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

fn settle_in_background(what: &'static str, promise: JsValue) {
    let Ok(promise) = promise.dyn_into::<Promise>() else {
        return;
    };
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            web_sys::console::warn_2(&JsValue::from_str(what), &e);
        }
    });
}

impl ShareHost for BrowserShareHost {
    fn can_share_natively(&self) -> bool {
        Self::method(&self.navigator, "share").is_some()
    }

    fn share_natively(&self, payload: &SharePayload) -> Result<(), String> {
        let share = Self::method(&self.navigator, "share").ok_or("share: unsupported")?;

        let data = Object::new();
        for (key, value) in [
            ("title", &payload.title),
            ("text", &payload.text),
            ("url", &payload.url),
        ] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|_| "share: could not build payload".to_string())?;
        }

        let promise = share
            .call1(&self.navigator, &data)
            .map_err(|_| "share: navigator.share threw".to_string())?;
        settle_in_background("share rejected:", promise);
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), String> {
        if self.navigator.is_undefined() {
            return Err("clipboard: no navigator".into());
        }
        let clipboard = Reflect::get(&self.navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| "clipboard: lookup failed".to_string())?;
        let write = Self::method(&clipboard, "writeText").ok_or("clipboard: unsupported")?;

        let promise = write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|_| "clipboard: writeText threw".to_string())?;
        settle_in_background("clipboard write rejected:", promise);
        Ok(())
    }
}
