//! Hero banner: parallax image and typewriter title.

use crate::shared::config::EffectsConfig;
use crate::shared::dom::{listen, query, scroll_y, set_style, window};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

pub const HERO_IMAGE_SELECTOR: &str = ".hero-image";
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// Successive prefixes of `text`, one more character each.
pub fn typewriter_frames(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .map(move |(idx, ch)| &text[..idx + ch.len_utf8()])
}

pub fn attach(config: &EffectsConfig) {
    attach_parallax(config.parallax_rate);
    attach_typewriter(config.typewriter_delay_ms, config.typewriter_speed_ms);
}

fn attach_parallax(rate: f64) {
    if query(HERO_IMAGE_SELECTOR).is_none() {
        return;
    }
    if let Some(win) = window() {
        listen(&win, "scroll", move |_| {
            if let Some(image) = query(HERO_IMAGE_SELECTOR) {
                let offset = parallax_offset(scroll_y(), rate);
                set_style(&image, "transform", &parallax_transform(offset));
            }
        });
    }
}

/// Retype the title's markup after a short pause. Intermediate frames may
/// hold half-written tags; the final frame restores the original markup.
fn attach_typewriter(delay_ms: u32, speed_ms: u32) {
    let Some(title) = query(HERO_TITLE_SELECTOR) else {
        return;
    };
    let markup = title.inner_html();
    if markup.is_empty() {
        return;
    }
    title.set_inner_html("");

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        for frame in typewriter_frames(&markup) {
            title.set_inner_html(frame);
            TimeoutFuture::new(speed_ms).await;
        }
    });
}
