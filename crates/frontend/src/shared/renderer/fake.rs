//! In-memory [`Renderer`] for host-side tests.
//!
//! Supports the selector subset the components use: comma lists of
//! `tag`, `#id`, `.class` and `[attr]` / `[attr="value"]` compounds.

use super::{ElementSpec, Mount, Renderer};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

type ClickHandler = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct FakeNode {
    tag_name: String,
    id: Option<String>,
    classes: Vec<String>,
    text: Option<String>,
    attributes: HashMap<String, String>,
    styles: Vec<(String, String)>,
    value: String,
    parent: Option<usize>,
    children: Vec<usize>,
    click: Option<ClickHandler>,
}

const ROOT: usize = 0;
const HEAD: usize = 1;
const BODY: usize = 2;

#[derive(Clone)]
pub struct FakeRenderer {
    tree: Rc<RefCell<Vec<FakeNode>>>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        let renderer = Self {
            tree: Rc::new(RefCell::new(vec![FakeNode {
                tag_name: "html".to_string(),
                ..FakeNode::default()
            }])),
        };
        renderer.element(ROOT, "head");
        renderer.element(ROOT, "body");
        renderer
    }

    pub fn head(&self) -> usize {
        HEAD
    }

    pub fn body(&self) -> usize {
        BODY
    }

    fn push(&self, parent: usize, node: FakeNode) -> usize {
        let mut tree = self.tree.borrow_mut();
        let id = tree.len();
        tree.push(FakeNode {
            parent: Some(parent),
            ..node
        });
        tree[parent].children.push(id);
        id
    }

    /// Append an empty element.
    pub fn element(&self, parent: usize, tag_name: &str) -> usize {
        self.push(
            parent,
            FakeNode {
                tag_name: tag_name.to_string(),
                ..FakeNode::default()
            },
        )
    }

    /// Append a named form control holding `value`.
    pub fn control(&self, parent: usize, tag_name: &str, name: &str, value: &str) -> usize {
        let id = self.element(parent, tag_name);
        let mut tree = self.tree.borrow_mut();
        tree[id]
            .attributes
            .insert("name".to_string(), name.to_string());
        tree[id].value = value.to_string();
        id
    }

    pub fn set_attribute(&self, node: usize, name: &str, value: &str) {
        self.tree.borrow_mut()[node]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_value(&self, node: usize, value: &str) {
        self.tree.borrow_mut()[node].value = value.to_string();
    }

    /// Number of attached elements matching `selector`.
    pub fn count(&self, selector: &str) -> usize {
        let tree = self.tree.borrow();
        descendants(&tree, ROOT)
            .into_iter()
            .filter(|&n| matches(&tree[n], selector))
            .count()
    }

    pub fn find_all(&self, selector: &str) -> Vec<usize> {
        self.find_all_within(&ROOT, selector)
    }

    /// Own text plus the text of every descendant.
    pub fn text_content(&self, node: usize) -> String {
        let tree = self.tree.borrow();
        std::iter::once(node)
            .chain(descendants(&tree, node))
            .filter_map(|n| tree[n].text.clone())
            .collect()
    }

    pub fn styles(&self, node: usize) -> Vec<(String, String)> {
        self.tree.borrow()[node].styles.clone()
    }

    pub fn children(&self, node: usize) -> Vec<usize> {
        self.tree.borrow()[node].children.clone()
    }

    pub fn has_click_handler(&self, node: usize) -> bool {
        self.tree.borrow()[node].click.is_some()
    }

    /// Dispatch a click to the node's handler, if any.
    pub fn click(&self, node: usize) {
        let handler = self.tree.borrow()[node].click.clone();
        if let Some(handler) = handler {
            (*handler.borrow_mut())();
        }
    }

    fn build(&self, parent: usize, spec: &ElementSpec) -> usize {
        let id = self.push(
            parent,
            FakeNode {
                tag_name: spec.tag_name.clone(),
                id: spec.id.clone(),
                classes: spec.classes.clone(),
                text: spec.text.clone(),
                styles: spec.styles.clone(),
                ..FakeNode::default()
            },
        );
        for child in &spec.children {
            self.build(id, child);
        }
        id
    }
}

/// Clears the node's click handler when dropped.
pub struct FakeListener {
    tree: Rc<RefCell<Vec<FakeNode>>>,
    node: usize,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Ok(mut tree) = self.tree.try_borrow_mut() {
            tree[self.node].click = None;
        }
    }
}

impl Renderer for FakeRenderer {
    type Node = usize;
    type Listener = FakeListener;

    fn find(&self, selector: &str) -> Option<usize> {
        self.find_within(&ROOT, selector)
    }

    fn find_within(&self, scope: &usize, selector: &str) -> Option<usize> {
        self.find_all_within(scope, selector).into_iter().next()
    }

    fn find_all_within(&self, scope: &usize, selector: &str) -> Vec<usize> {
        let tree = self.tree.borrow();
        descendants(&tree, *scope)
            .into_iter()
            .filter(|&n| matches(&tree[n], selector))
            .collect()
    }

    fn parent(&self, node: &usize) -> Option<usize> {
        self.tree.borrow()[*node].parent
    }

    fn insert(&self, mount: Mount<'_, usize>, spec: &ElementSpec) -> Option<usize> {
        let parent = match mount {
            Mount::Head => HEAD,
            Mount::Body => BODY,
            Mount::Child(node) => *node,
        };
        Some(self.build(parent, spec))
    }

    fn remove(&self, node: &usize) {
        let mut tree = self.tree.borrow_mut();
        if let Some(parent) = tree[*node].parent.take() {
            tree[parent].children.retain(|c| c != node);
        }
    }

    fn is_attached(&self, node: &usize) -> bool {
        let tree = self.tree.borrow();
        let mut current = *node;
        loop {
            if current == ROOT {
                return true;
            }
            match tree[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn toggle_class(&self, node: &usize, class: &str, on: bool) {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree[*node].classes;
        classes.retain(|c| c != class);
        if on {
            classes.push(class.to_string());
        }
    }

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.tree.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.tree.borrow()[*node].attributes.get(name).cloned()
    }

    fn value(&self, node: &usize) -> String {
        self.tree.borrow()[*node].value.clone()
    }

    fn on_click(&self, node: &usize, handler: Box<dyn FnMut()>) -> FakeListener {
        self.tree.borrow_mut()[*node].click = Some(Rc::new(RefCell::new(handler)));
        FakeListener {
            tree: self.tree.clone(),
            node: *node,
        }
    }
}

fn descendants(tree: &[FakeNode], scope: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut stack: Vec<usize> = tree[scope].children.iter().rev().copied().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(tree[node].children.iter().rev().copied());
    }
    out
}

fn matches(node: &FakeNode, selector: &str) -> bool {
    selector
        .split(',')
        .map(str::trim)
        .any(|compound| matches_compound(node, compound))
}

fn matches_compound(node: &FakeNode, compound: &str) -> bool {
    let is_marker = |c: char| matches!(c, '#' | '.' | '[');
    let tag_end = compound.find(is_marker).unwrap_or(compound.len());
    let tag_name = &compound[..tag_end];
    if !tag_name.is_empty() && tag_name != node.tag_name {
        return false;
    }

    let mut rest = &compound[tag_end..];
    while !rest.is_empty() {
        let (marker, body) = rest.split_at(1);
        if marker == "[" {
            let Some(end) = body.find(']') else {
                return false;
            };
            let (name, expected) = match body[..end].split_once('=') {
                Some((name, value)) => (name, Some(value.trim_matches('"'))),
                None => (&body[..end], None),
            };
            match (node.attributes.get(name), expected) {
                (Some(actual), Some(expected)) if actual == expected => {}
                (Some(_), None) => {}
                _ => return false,
            }
            rest = &body[end + 1..];
        } else {
            let end = body.find(is_marker).unwrap_or(body.len());
            let ident = &body[..end];
            let ok = match marker {
                "#" => node.id.as_deref() == Some(ident),
                _ => node.classes.iter().any(|c| c == ident),
            };
            if !ok {
                return false;
            }
            rest = &body[end..];
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_subset() {
        let r = FakeRenderer::new();
        let form = r.element(r.body(), "form");
        let input = r.control(form, "input", "email", "a@b.c");
        r.toggle_class(&form, "contact-form", true);

        assert_eq!(r.find(".contact-form"), Some(form));
        assert_eq!(r.find("input[name=\"email\"]"), Some(input));
        assert_eq!(r.find_all_within(&form, "input, textarea, select"), vec![input]);
        assert_eq!(r.find("textarea"), None);
    }

    #[test]
    fn test_dropping_listener_clears_handler() {
        let r = FakeRenderer::new();
        let button = r.element(r.body(), "button");
        let clicks = Rc::new(std::cell::Cell::new(0));
        let c = clicks.clone();
        let listener = r.on_click(&button, Box::new(move || c.set(c.get() + 1)));

        r.click(button);
        drop(listener);
        r.click(button);
        assert_eq!(clicks.get(), 1);
        assert!(!r.has_click_handler(button));
        assert_eq!(Rc::strong_count(&clicks), 1);
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let r = FakeRenderer::new();
        let spec = ElementSpec::new("div")
            .class("outer")
            .child(ElementSpec::new("span").class("inner"));
        let outer = r.insert(Mount::Body, &spec).unwrap();
        let inner = r.find(".inner").unwrap();

        r.remove(&outer);
        assert!(!r.is_attached(&outer));
        assert!(!r.is_attached(&inner));
        assert_eq!(r.count(".inner"), 0);
    }
}
