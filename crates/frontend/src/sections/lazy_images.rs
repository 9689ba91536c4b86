use crate::shared::dom::{intersection_observer, query_all, toggle_class};
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Swap in `data-src` once an image scrolls into view.
pub fn attach() {
    let images = query_all(LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return;
    }

    let Some(observer) = intersection_observer(None, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
            if let Some(src) = image.get_attribute("data-src") {
                image.set_src(&src);
            }
        }
        toggle_class(&target, "lazy", false);
        observer.unobserve(&target);
    }) else {
        return;
    };

    for image in &images {
        observer.observe(image);
    }
    log::debug!("lazy loading {} images", images.len());
}
