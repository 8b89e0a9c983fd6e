use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::constants::{CANVAS_PADDING, MAX_CANVAS_SIZE};
use crate::state::State;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Keep the canvas square, sized to its container minus some padding and
/// capped so the wheel never outgrows small layouts.
pub fn sync_canvas_size(state: &State) {
    let container_width = state
        .canvas
        .parent_element()
        .map(|el| el.client_width() as f64)
        .filter(|w| *w > 0.0)
        .unwrap_or(MAX_CANVAS_SIZE + CANVAS_PADDING);
    let size = (container_width - CANVAS_PADDING)
        .clamp(1.0, MAX_CANVAS_SIZE)
        .round() as u32;
    if state.canvas.width() != size {
        state.canvas.set_width(size);
    }
    if state.canvas.height() != size {
        state.canvas.set_height(size);
    }
}

/// Fetch a text resource. Any transport failure or non-OK status collapses
/// to `None`; callers map that to the generic failure state.
pub async fn fetch_text(window: &Window, url: &str) -> Option<String> {
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(url))
        .await
        .ok()?;
    let resp: web_sys::Response = resp_value.dyn_into().ok()?;
    if !resp.ok() {
        return None;
    }
    let text_promise = resp.text().ok()?;
    let text_js = wasm_bindgen_futures::JsFuture::from(text_promise).await.ok()?;
    text_js.as_string()
}

/// Percent-encode a value for use in a query string.
pub fn encode_query_value(v: &str) -> String {
    percent_encoding::utf8_percent_encode(v, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}
