use crate::shared::field_validator::FieldValidator;
use crate::shared::notification::NotificationCenter;
use crate::shared::renderer::Renderer;
use crate::shared::scheduler::Scheduler;
use contracts::shared::contact::{ContactForm, FORM_ERRORS_MESSAGE};
use contracts::shared::notification::Severity;

/// Every control of the form takes part in the whole-form check.
pub const CONTROLS_SELECTOR: &str = "input, textarea, select";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All controls passed; the completion action ran with this snapshot.
    Accepted(ContactForm),
    /// Submission blocked; `failures` controls show an inline error.
    Rejected { failures: usize },
}

/// Whole-form check of the contact form.
#[derive(Clone)]
pub struct ContactFormController<R, S> {
    renderer: R,
    validator: FieldValidator<R>,
    notifications: NotificationCenter<R, S>,
}

impl<R: Renderer, S: Scheduler> ContactFormController<R, S> {
    pub fn new(renderer: R, notifications: NotificationCenter<R, S>) -> Self {
        Self {
            validator: FieldValidator::new(renderer.clone()),
            renderer,
            notifications,
        }
    }

    pub fn validator(&self) -> &FieldValidator<R> {
        &self.validator
    }

    pub fn notifications(&self) -> &NotificationCenter<R, S> {
        &self.notifications
    }

    pub fn controls(&self, form: &R::Node) -> Vec<R::Node> {
        self.renderer.find_all_within(form, CONTROLS_SELECTOR)
    }

    /// Validate every control, then either run `on_accept` once or raise a
    /// single aggregate error notification.
    ///
    /// All controls are checked even after the first failure so each one
    /// shows its own inline message.
    pub fn submit<F>(&self, form: &R::Node, on_accept: F) -> SubmitOutcome
    where
        F: FnOnce(ContactForm),
    {
        let controls = self.controls(form);
        let failures = controls
            .iter()
            .filter(|control| !self.validator.validate_control(control).is_valid)
            .count();

        if failures > 0 {
            log::debug!("contact form rejected: {} invalid field(s)", failures);
            self.notifications.notify(FORM_ERRORS_MESSAGE, Severity::Error);
            return SubmitOutcome::Rejected { failures };
        }

        let pairs: Vec<(String, String)> = controls
            .iter()
            .filter_map(|control| {
                let name = self.renderer.attribute(control, "name")?;
                Some((name, self.renderer.value(control)))
            })
            .collect();
        let snapshot =
            ContactForm::from_pairs(pairs.iter().map(|(n, v)| (n.as_str(), v.as_str())));

        on_accept(snapshot.clone());
        SubmitOutcome::Accepted(snapshot)
    }
}
