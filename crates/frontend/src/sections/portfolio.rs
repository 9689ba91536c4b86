//! Portfolio cards: placeholder links and background images.

use crate::shared::dom::{document, listen, query_all, set_style, toggle_class};
use crate::shared::notification::NotificationCenter;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlImageElement};

pub const PORTFOLIO_LINK_SELECTOR: &str = ".portfolio-link";
pub const PORTFOLIO_IMAGE_SELECTOR: &str = ".portfolio-image";
pub const BACKGROUND_IMAGE_CLASS: &str = "portfolio-bg-image";
pub const HAS_IMAGE_CLASS: &str = "has-image";

pub const IN_PROGRESS_MESSAGE: &str =
    "Projet en cours de développement. Contactez-nous pour plus d'informations !";

/// Links without a real destination stand for projects not yet published.
pub fn is_placeholder_href(href: Option<&str>) -> bool {
    matches!(href, None | Some("") | Some("#"))
}

pub fn attach(notifications: NotificationCenter) {
    for link in query_all(PORTFOLIO_LINK_SELECTOR) {
        let target = link.clone();
        listen(&link, "click", move |ev| {
            if !is_placeholder_href(target.get_attribute("href").as_deref()) {
                return;
            }
            ev.prevent_default();
            notifications.info(IN_PROGRESS_MESSAGE);
        });
    }
}

fn image_container(item: &Element) -> Option<Element> {
    item.query_selector(PORTFOLIO_IMAGE_SELECTOR).ok().flatten()
}

/// Show `image_url` as the background of a portfolio card. Reuses the
/// card's existing background image when there is one.
#[wasm_bindgen(js_name = setPortfolioImage)]
pub fn set_portfolio_image(item: &Element, image_url: &str, alt_text: Option<String>) {
    let Some(container) = image_container(item) else {
        return;
    };
    toggle_class(&container, HAS_IMAGE_CLASS, true);
    let alt_text = alt_text.unwrap_or_default();

    let existing = container
        .query_selector(&format!(".{}", BACKGROUND_IMAGE_CLASS))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());

    match existing {
        Some(image) => {
            image.set_src(image_url);
            if !alt_text.is_empty() {
                image.set_alt(&alt_text);
            }
        }
        None => {
            let Some(image) = document()
                .and_then(|d| d.create_element("img").ok())
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            else {
                return;
            };
            image.set_src(image_url);
            image.set_alt(&alt_text);
            image.set_class_name(BACKGROUND_IMAGE_CLASS);
            let _ = container.insert_before(&image, container.first_child().as_ref());
        }
    }

    if !alt_text.is_empty() {
        let _ = container.set_attribute("aria-label", &alt_text);
    }
}

/// Drop a card's background image and fall back to its gradient.
#[wasm_bindgen(js_name = removePortfolioImage)]
pub fn remove_portfolio_image(item: &Element) {
    let Some(container) = image_container(item) else {
        return;
    };
    toggle_class(&container, HAS_IMAGE_CLASS, false);
    set_style(&container, "background-image", "");
    let _ = container.remove_attribute("aria-label");
    if let Some(image) = container
        .query_selector(&format!(".{}", BACKGROUND_IMAGE_CLASS))
        .ok()
        .flatten()
    {
        image.remove();
    }
}
