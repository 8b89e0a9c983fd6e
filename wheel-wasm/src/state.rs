use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};
use wheel_core::WheelSession;

/// Global application state stored behind an `Rc<RefCell<_>>` so it can be
/// shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    /// Items, rotation angle and the in-flight spin, owned by the core crate.
    pub session: WheelSession,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
