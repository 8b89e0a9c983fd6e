use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement,
    HtmlSelectElement,
};
use wheel_core::{DEFAULT_SPIN_DURATION_MS, Item, Tick, WheelSession, render};

mod canvas;
mod constants;
mod models;
mod state;
mod utils;

use canvas::CanvasSurface;
use constants::{
    API_ENDPOINT, DEFAULT_CATEGORY, DEFAULT_STATUS_TEXT, LOAD_FAILED_TEXT, NO_ITEMS_MESSAGE,
    SPIN_AGAIN_LABEL, SPIN_LABEL, SPINNING_STATUS_TEXT,
};
use models::ItemsResponse;
use state::{STATE, State};
use utils::{encode_query_value, fetch_text, get_query_param, log, sync_canvas_size};

/// Redraw the wheel from the current session state.
fn draw(state: &State) {
    let mut surface = CanvasSurface::new(state.canvas.clone(), state.ctx.clone());
    render(
        &mut surface,
        state.session.items(),
        state.session.rotation_angle(),
    );
}

fn set_status(document: &Document, msg: &str) {
    if let Some(el) = document.get_element_by_id("status")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_inner_text(msg);
    }
}

fn set_selected(document: &Document, label: &str) {
    if let Some(el) = document.get_element_by_id("selected")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_inner_text(label);
    }
}

fn set_spin_label(document: &Document, label: &str) {
    if let Some(btn) = document.get_element_by_id("spin")
        && let Ok(btn) = btn.dyn_into::<HtmlElement>()
    {
        btn.set_inner_text(label);
    }
}

/// Disable both buttons while busy; the spin button additionally stays
/// disabled whenever there is nothing to spin.
fn set_buttons_disabled(state: &State, disabled: bool) {
    let doc = &state.document;
    if let Some(btn) = doc.get_element_by_id("refresh")
        && let Ok(btn) = btn.dyn_into::<HtmlButtonElement>()
    {
        btn.set_disabled(disabled);
    }
    if let Some(btn) = doc.get_element_by_id("spin")
        && let Ok(btn) = btn.dyn_into::<HtmlButtonElement>()
    {
        btn.set_disabled(disabled || state.session.items().is_empty());
    }
}

fn current_category(document: &Document) -> String {
    document
        .get_element_by_id("category")
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        .map(|sel| sel.value())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Load the current category's items from the item source and reset the
/// wheel to them. Any failure collapses to an empty wheel plus a status
/// message; nothing is thrown.
async fn fetch_items(state: Rc<RefCell<State>>) {
    let (window, document, category) = {
        let s = state.borrow();
        set_buttons_disabled(&s, true);
        (
            s.window.clone(),
            s.document.clone(),
            current_category(&s.document),
        )
    };
    set_status(&document, &format!("Loading {category}..."));

    let url = format!(
        "{}?category={}",
        API_ENDPOINT,
        encode_query_value(&category)
    );
    let items: Option<Vec<Item>> = match fetch_text(&window, &url).await {
        Some(body) => match serde_json::from_str::<ItemsResponse>(&body) {
            Ok(resp) => Some(resp.items.into_iter().map(Item::from).collect()),
            Err(err) => {
                log(&format!("Malformed items response: {err}"));
                None
            }
        },
        None => None,
    };

    STATE.with(|st| {
        if let Some(st_rc) = st.borrow().as_ref() {
            let mut s = st_rc.borrow_mut();
            match items {
                Some(items) => {
                    let status = if items.is_empty() {
                        NO_ITEMS_MESSAGE.to_string()
                    } else {
                        format!("Loaded {} items", items.len())
                    };
                    s.session.replace_items(items);
                    set_status(&s.document, &status);
                }
                None => {
                    s.session.replace_items(Vec::new());
                    set_status(&s.document, LOAD_FAILED_TEXT);
                }
            }
            set_selected(&s.document, "");
            set_spin_label(&s.document, SPIN_LABEL);
            sync_canvas_size(&s);
            draw(&s);
            set_buttons_disabled(&s, false);
        }
    });
}

/// Kick off a spin. Ignored while one is already running or the wheel is
/// empty; the session enforces both guards.
fn spin_wheel(state: Rc<RefCell<State>>) {
    {
        let mut s = state.borrow_mut();
        let sample = js_sys::Math::random();
        if !s.session.start_spin(sample, DEFAULT_SPIN_DURATION_MS) {
            return;
        }
        set_status(&s.document, SPINNING_STATUS_TEXT);
        set_buttons_disabled(&s, true);
    }
    run_spin_animation(state);
}

/// Drive the armed spin with a self-rescheduling animation frame callback.
/// The loop stops rescheduling itself once the session settles.
fn run_spin_animation(state: Rc<RefCell<State>>) {
    type RafClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let settled = {
            let mut s = state.borrow_mut();
            let outcome = s.session.tick(ts);
            draw(&s);
            match outcome {
                Tick::Settled(result) => {
                    let label = s
                        .session
                        .selected_item(&result)
                        .map(|item| item.label.clone())
                        .unwrap_or_default();
                    set_selected(&s.document, &label);
                    set_status(&s.document, DEFAULT_STATUS_TEXT);
                    set_spin_label(&s.document, SPIN_AGAIN_LABEL);
                    set_buttons_disabled(&s, false);
                    true
                }
                Tick::Animating => false,
                Tick::Idle => true,
            }
        };
        if !settled {
            let _ = web_sys::window()
                .unwrap()
                .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    let _ = web_sys::window()
        .unwrap()
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    if let Some(btn) = doc.get_element_by_id("refresh") {
        let btn: HtmlElement = btn.dyn_into().unwrap();
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let st2 = st.clone();
            wasm_bindgen_futures::spawn_local(async move {
                fetch_items(st2).await;
            });
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = doc.get_element_by_id("spin") {
        let btn: HtmlElement = btn.dyn_into().unwrap();
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            spin_wheel(st.clone());
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Changing the category refetches and rebuilds the wheel from scratch.
    if let Some(sel) = doc.get_element_by_id("category") {
        let sel: HtmlElement = sel.dyn_into().unwrap();
        let st = state.clone();
        let onchange = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let st2 = st.clone();
            wasm_bindgen_futures::spawn_local(async move {
                fetch_items(st2).await;
            });
        }));
        sel.set_onchange(Some(onchange.as_ref().unchecked_ref()));
        onchange.forget();
    }

    // Resizes mid-spin are safe: every frame recomputes the layout from the
    // current canvas size.
    {
        let st = state.clone();
        let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            sync_canvas_size(&s);
            draw(&s);
        }));
        state
            .borrow()
            .window
            .add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    Ok(())
}

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id("wheel")
        .ok_or_else(|| JsValue::from_str("canvas #wheel not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let (canvas, ctx) = init_canvas(&document)?;

    // An initial ?category= query parameter preselects the category.
    if let Ok(search) = window.location().search()
        && let Some(cat) = get_query_param(&search, "category")
        && let Some(sel) = document.get_element_by_id("category")
        && let Ok(sel) = sel.dyn_into::<HtmlSelectElement>()
    {
        sel.set_value(&cat);
    }

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        canvas,
        ctx,
        session: WheelSession::new(),
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    {
        let s = state.borrow();
        set_status(&s.document, DEFAULT_STATUS_TEXT);
        set_spin_label(&s.document, SPIN_LABEL);
        sync_canvas_size(&s);
        draw(&s);
    }
    attach_ui(state.clone())?;

    wasm_bindgen_futures::spawn_local(async move {
        fetch_items(state).await;
    });
    Ok(())
}
