//! Inline validation of form controls.
//!
//! The verdict comes from the pure rules in
//! [`contracts::shared::contact::validate`]; this module only owns the
//! annotation side effect: a `.field-error` element appended to the
//! control's parent and an `error` class on the control itself.
//!
//! Any previous annotation in the parent is removed before a new one is
//! added, so a control never carries more than one.

use crate::shared::renderer::{ElementSpec, Mount, Renderer};
use contracts::shared::contact::{validate, ValidationResult};

pub const FIELD_ERROR_CLASS: &str = "field-error";
pub const ERROR_CLASS: &str = "error";

#[derive(Clone, Copy)]
pub struct FieldValidator<R> {
    renderer: R,
}

impl<R: Renderer> FieldValidator<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Validate a control by its `name` attribute and current value,
    /// replacing any annotation it had.
    pub fn validate_control(&self, control: &R::Node) -> ValidationResult {
        let name = self
            .renderer
            .attribute(control, "name")
            .unwrap_or_default();
        let value = self.renderer.value(control);

        self.clear(control);

        let result = validate(&name, &value);
        if let Some(message) = &result.error_message {
            self.annotate(control, message);
        }
        result
    }

    /// Drop the annotation and the error state of a control.
    pub fn clear(&self, control: &R::Node) {
        if let Some(parent) = self.renderer.parent(control) {
            let selector = format!(".{}", FIELD_ERROR_CLASS);
            for annotation in self.renderer.find_all_within(&parent, &selector) {
                self.renderer.remove(&annotation);
            }
        }
        self.renderer.toggle_class(control, ERROR_CLASS, false);
    }

    fn annotate(&self, control: &R::Node, message: &str) {
        self.renderer.toggle_class(control, ERROR_CLASS, true);
        let Some(parent) = self.renderer.parent(control) else {
            return;
        };
        let spec = ElementSpec::new("div")
            .class(FIELD_ERROR_CLASS)
            .text(message)
            .style("color", "var(--error-color)")
            .style("font-size", "0.875rem")
            .style("margin-top", "0.25rem");
        self.renderer.insert(Mount::Child(&parent), &spec);
    }
}
