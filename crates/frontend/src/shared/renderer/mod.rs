//! Renderer capability over the live presentation tree.
//!
//! The notification center and the field validator only talk to the page
//! through [`Renderer`]. In the browser this is [`DomRenderer`]; tests use an
//! in-memory tree.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let renderer = DomRenderer;
//! let spec = ElementSpec::new("div").class("field-error").text("Le nom est requis");
//! if let Some(parent) = renderer.find(".form-group") {
//!     renderer.insert(Mount::Child(&parent), &spec);
//! }
//! ```

mod dom;
#[cfg(test)]
pub(crate) mod fake;

pub use dom::{DomListener, DomRenderer};

/// Where a new element is attached.
pub enum Mount<'a, N> {
    Head,
    /// Topmost layer of the page.
    Body,
    /// Appended as the last child of a node.
    Child(&'a N),
}

/// Declarative description of an element to create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSpec {
    pub tag_name: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Inserted as text, never parsed as markup.
    pub text: Option<String>,
    pub styles: Vec<(String, String)>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add one or more space-separated classes.
    pub fn class(mut self, class: &str) -> Self {
        self.classes
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.styles.push((property.to_string(), value.to_string()));
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// Element lookup and tree mutation primitives.
///
/// Implementations never fail loudly: a lookup that finds nothing returns
/// `None`, a mutation on a detached node is a no-op.
pub trait Renderer: Clone + 'static {
    type Node: Clone + 'static;
    /// Guard of a registered handler; dropping it removes the handler.
    type Listener: 'static;

    /// First element in the document matching `selector`.
    fn find(&self, selector: &str) -> Option<Self::Node>;

    /// First descendant of `scope` matching `selector`.
    fn find_within(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// Every descendant of `scope` matching `selector`, in document order.
    fn find_all_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Create the element described by `spec` and attach it.
    fn insert(&self, mount: Mount<'_, Self::Node>, spec: &ElementSpec) -> Option<Self::Node>;

    fn remove(&self, node: &Self::Node);

    /// Whether the node is still part of the document.
    fn is_attached(&self, node: &Self::Node) -> bool;

    fn toggle_class(&self, node: &Self::Node, class: &str, on: bool);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Current value of a form control; empty for anything else.
    fn value(&self, node: &Self::Node) -> String;

    /// Register a click handler that stays active until the returned guard
    /// is dropped.
    fn on_click(&self, node: &Self::Node, handler: Box<dyn FnMut()>) -> Self::Listener;
}
