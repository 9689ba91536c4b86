use crate::shared::dom::{document, listen, set_style, window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;

pub const FADE_IN_TRANSITION: &str = "opacity 0.2s ease";

/// Start the body transparent and fade it in on the next frame.
pub fn fade_in() {
    let (Some(win), Some(body)) = (window(), document().and_then(|d| d.body())) else {
        return;
    };
    set_style(&body, "opacity", "0");
    set_style(&body, "transition", FADE_IN_TRANSITION);

    let shown = body.clone();
    let frame = Closure::once_into_js(move || set_style(&shown, "opacity", "1"));
    if win
        .request_animation_frame(frame.unchecked_ref::<js_sys::Function>())
        .is_err()
    {
        log::warn!("requestAnimationFrame unavailable");
        set_style(&body, "opacity", "1");
    }
}

/// Route uncaught script errors to the log.
pub fn log_errors() {
    let Some(win) = window() else {
        return;
    };
    listen(&win, "error", |ev| match ev.dyn_ref::<ErrorEvent>() {
        Some(err) => log::error!(
            "uncaught error: {} ({}:{}:{})",
            err.message(),
            err.filename(),
            err.lineno(),
            err.colno()
        ),
        None => log::error!("uncaught error event: {}", ev.type_()),
    });
}
