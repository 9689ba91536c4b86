//! Thin helpers over `web-sys` shared by the page behaviours.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Attach an event listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, mut handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: Event| handler(ev)) as Box<dyn FnMut(Event)>);
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to listen for `{}`: {:?}", event, err);
    }
    // Page-level listeners are never removed; keep the closure alive.
    closure.forget();
}

/// Every element in the document matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector `{}`", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Set an inline style property; ignored for non-HTML elements.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Position of an element among its parent's element children.
pub fn sibling_index(element: &Element) -> usize {
    let Some(parent) = element.parent_element() else {
        return 0;
    };
    let node: &Node = element;
    let children = parent.children();
    (0..children.length())
        .find(|&i| {
            children
                .item(i)
                .map(|child| child.is_same_node(Some(node)))
                .unwrap_or(false)
        })
        .unwrap_or(0) as usize
}

/// Visibility trigger options: intersection ratio and root margin.
#[derive(Debug, Clone, Copy)]
pub struct ObserveOptions<'a> {
    pub threshold: f64,
    pub root_margin: &'a str,
}

/// Create an `IntersectionObserver` calling `handler` once per entry.
///
/// Returns `None` when the browser lacks the API or rejects the options.
pub fn intersection_observer<F>(
    options: Option<ObserveOptions<'_>>,
    mut handler: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let supported = window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false);
    if !supported {
        log::debug!("IntersectionObserver not available");
        return None;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match options {
        Some(options) => {
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(options.root_margin);
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };
    // Observers live as long as the page.
    callback.forget();

    observer
        .map_err(|err| log::warn!("IntersectionObserver rejected: {:?}", err))
        .ok()
}
