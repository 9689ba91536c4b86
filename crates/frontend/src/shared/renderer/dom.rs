use super::{ElementSpec, Mount, Renderer};
use crate::shared::dom::{document, set_style};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Node,
};

/// [`Renderer`] over the browser document.
///
/// Holds no JS handles; the document is looked up on every call, so the
/// renderer is `Copy` and can live in Leptos context.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomRenderer;

impl DomRenderer {
    fn build(&self, document: &Document, spec: &ElementSpec) -> Option<Element> {
        let element = document.create_element(&spec.tag_name).ok()?;
        if let Some(id) = &spec.id {
            element.set_id(id);
        }
        if !spec.classes.is_empty() {
            element.set_class_name(&spec.classes.join(" "));
        }
        if let Some(text) = &spec.text {
            element.set_text_content(Some(text));
        }
        for (property, value) in &spec.styles {
            set_style(&element, property, value);
        }
        for child in &spec.children {
            if let Some(child_element) = self.build(document, child) {
                let _ = element.append_child(&child_element);
            }
        }
        Some(element)
    }
}

/// Click listener attached to an element; detached and freed on drop.
pub struct DomListener {
    target: Element,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}

impl Renderer for DomRenderer {
    type Node = Element;
    type Listener = DomListener;

    fn find(&self, selector: &str) -> Option<Element> {
        document()?.query_selector(selector).ok().flatten()
    }

    fn find_within(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).ok().flatten()
    }

    fn find_all_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        let Ok(list) = scope.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn insert(&self, mount: Mount<'_, Element>, spec: &ElementSpec) -> Option<Element> {
        let document = document()?;
        let parent: Node = match mount {
            Mount::Head => document.head()?.into(),
            Mount::Body => document.body()?.into(),
            Mount::Child(node) => node.clone().into(),
        };
        let element = self.build(&document, spec)?;
        parent.append_child(&element).ok()?;
        Some(element)
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn toggle_class(&self, node: &Element, class: &str, on: bool) {
        let _ = node.class_list().toggle_with_force(class, on);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = node.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn on_click(&self, node: &Element, mut handler: Box<dyn FnMut()>) -> DomListener {
        let callback = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
        if let Err(err) =
            node.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to listen for `click`: {:?}", err);
        }
        DomListener {
            target: node.clone(),
            callback,
        }
    }
}
