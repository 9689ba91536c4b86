use super::controller::ContactFormController;
use crate::shared::config::SiteConfig;
use crate::shared::dom::{listen, query};
use crate::shared::notification::NotificationCenter;
use crate::shared::renderer::DomRenderer;
use crate::shared::scheduler::{BrowserScheduler, Scheduler};
use contracts::shared::contact::{
    prepend_plan, ContactForm, FORM_SENDING_LABEL, FORM_SENT_MESSAGE,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

pub const FORM_SELECTOR: &str = ".contact-form";
pub const SERVICE_SELECTOR: &str = "#service";
pub const MESSAGE_SELECTOR: &str = "#message";

/// Wire inline validation, the guarded submit and plan selection onto the
/// page's contact form.
pub fn attach(config: &SiteConfig, notifications: NotificationCenter) {
    attach_plan_selection();

    let Some(form) = query(FORM_SELECTOR) else {
        log::debug!("no {} on this page", FORM_SELECTOR);
        return;
    };
    let controller = ContactFormController::new(DomRenderer, notifications);

    for control in controller.controls(&form) {
        let validator = *controller.validator();
        let target = control.clone();
        listen(&control, "blur", move |_| {
            validator.validate_control(&target);
        });
        let target = control.clone();
        listen(&control, "input", move |_| validator.clear(&target));
    }

    let submit_delay_ms = config.contact.submit_delay_ms;
    let target = form.clone();
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let sending = target.clone();
        controller.submit(&target, move |snapshot| {
            simulate_send(&sending, &snapshot, notifications, submit_delay_ms)
        });
    });
    log::debug!("contact form attached");
}

/// Stand-in for a real transport: spinner on the submit button, then an
/// acknowledgment after `delay_ms`.
fn simulate_send(
    form: &Element,
    snapshot: &ContactForm,
    notifications: NotificationCenter,
    delay_ms: u32,
) {
    match serde_json::to_string(snapshot) {
        Ok(json) => log::info!("contact form accepted: {}", json),
        Err(err) => log::warn!("contact form snapshot not serializable: {}", err),
    }

    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_label = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();
    if let Some(button) = &button {
        button.set_inner_html(&format!(
            "<i class=\"fas fa-spinner fa-spin\"></i> {}",
            FORM_SENDING_LABEL
        ));
        button.set_disabled(true);
    }

    let form = form.clone();
    BrowserScheduler.schedule(
        delay_ms,
        Box::new(move || {
            notifications.success(FORM_SENT_MESSAGE);
            if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
                form.reset();
            }
            if let Some(button) = button {
                button.set_text_content(Some(&original_label));
                button.set_disabled(false);
            }
        }),
    );
}

/// Copy the chosen plan into the message when the service select changes.
fn attach_plan_selection() {
    let Some(select) = query(SERVICE_SELECTOR).and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    else {
        return;
    };
    let target = select.clone();
    listen(&select, "change", move |_| {
        if target.value().is_empty() {
            return;
        }
        let Some(message) = query(MESSAGE_SELECTOR) else {
            return;
        };
        let label = u32::try_from(target.selected_index())
            .ok()
            .and_then(|idx| target.options().get_with_index(idx))
            .and_then(|option| option.dyn_into::<HtmlOptionElement>().ok())
            .map(|option| option.text())
            .unwrap_or_default();
        if let Some(updated) = prepend_plan(&control_value(&message), &label) {
            set_control_value(&message, &updated);
        }
    });
}

fn control_value(element: &Element) -> String {
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        String::new()
    }
}

fn set_control_value(element: &Element, value: &str) {
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}
