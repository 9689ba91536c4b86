//! Notification center
//!
//! Short-lived alerts stacked in the top layer of the page. Each alert is
//! independent: it is visible as soon as [`NotificationCenter::notify`]
//! returns and disappears on the first of
//!   1. a click on its close button,
//!   2. the auto-dismiss timer (5 s by default).
//!
//! ## Usage
//!
//! ```rust,ignore
//! let center = NotificationCenter::browser(AUTO_DISMISS_MS);
//! center.notify("Message envoyé", Severity::Success);
//! ```

mod styles;

pub use styles::{ensure_styles, NOTIFICATION_CSS, STYLE_ELEMENT_ID};

use crate::shared::renderer::{DomRenderer, ElementSpec, Mount, Renderer};
use crate::shared::scheduler::{BrowserScheduler, ScheduledTask, Scheduler};
use contracts::shared::notification::{
    NotificationId, NotificationRecord, NotificationState, Severity, AUTO_DISMISS_MS,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const CLOSE_SELECTOR: &str = ".notification-close";

struct Lifecycle<T, L> {
    state: NotificationState,
    timer: Option<T>,
    close_listener: Option<L>,
}

/// Handle to one alert. Clones share the same lifecycle.
pub struct NotificationHandle<R: Renderer, T: ScheduledTask> {
    record: Rc<NotificationRecord>,
    node: Option<R::Node>,
    renderer: R,
    lifecycle: Rc<RefCell<Lifecycle<T, R::Listener>>>,
}

impl<R: Renderer, T: ScheduledTask> Clone for NotificationHandle<R, T> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            node: self.node.clone(),
            renderer: self.renderer.clone(),
            lifecycle: self.lifecycle.clone(),
        }
    }
}

impl<R: Renderer, T: ScheduledTask> NotificationHandle<R, T> {
    pub fn id(&self) -> NotificationId {
        self.record.id
    }

    pub fn record(&self) -> &NotificationRecord {
        &self.record
    }

    pub fn state(&self) -> NotificationState {
        self.lifecycle.borrow().state
    }

    pub fn is_visible(&self) -> bool {
        self.state() == NotificationState::Visible
    }

    /// Remove the alert, cancel its timer and detach its close handler.
    ///
    /// Returns `false` if it was already dismissed; nothing happens then.
    pub fn dismiss(&self) -> bool {
        let (timer, close_listener) = {
            let mut lifecycle = self.lifecycle.borrow_mut();
            if !lifecycle.state.dismiss() {
                return false;
            }
            (lifecycle.timer.take(), lifecycle.close_listener.take())
        };
        if let Some(timer) = timer {
            timer.cancel();
        }
        drop(close_listener);
        if let Some(node) = &self.node {
            if self.renderer.is_attached(node) {
                self.renderer.remove(node);
            }
        }
        log::debug!("notification {} dismissed", self.record.id);
        true
    }

    /// Keep the alert until it is closed explicitly.
    pub fn cancel_auto_dismiss(&self) {
        if let Some(timer) = self.lifecycle.borrow_mut().timer.take() {
            timer.cancel();
        }
    }
}

/// Creates alerts through a [`Renderer`] and expires them through a
/// [`Scheduler`].
#[derive(Clone, Copy)]
pub struct NotificationCenter<R = DomRenderer, S = BrowserScheduler> {
    renderer: R,
    scheduler: S,
    dismiss_after_ms: u32,
}

impl NotificationCenter<DomRenderer, BrowserScheduler> {
    pub fn browser(dismiss_after_ms: u32) -> Self {
        Self::new(DomRenderer, BrowserScheduler).with_dismiss_after(dismiss_after_ms)
    }
}

impl<R: Renderer, S: Scheduler> NotificationCenter<R, S> {
    pub fn new(renderer: R, scheduler: S) -> Self {
        Self {
            renderer,
            scheduler,
            dismiss_after_ms: AUTO_DISMISS_MS,
        }
    }

    pub fn with_dismiss_after(mut self, dismiss_after_ms: u32) -> Self {
        self.dismiss_after_ms = dismiss_after_ms;
        self
    }

    pub fn notify(&self, message: &str, severity: Severity) -> NotificationHandle<R, S::Task> {
        self.show(NotificationRecord::new(message, severity))
    }

    pub fn info(&self, message: &str) -> NotificationHandle<R, S::Task> {
        self.notify(message, Severity::Info)
    }

    pub fn success(&self, message: &str) -> NotificationHandle<R, S::Task> {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: &str) -> NotificationHandle<R, S::Task> {
        self.notify(message, Severity::Error)
    }

    /// Insert the alert for `record` and arm both dismissal paths.
    pub fn show(&self, record: NotificationRecord) -> NotificationHandle<R, S::Task> {
        ensure_styles(&self.renderer);

        let node = self.renderer.insert(Mount::Body, &alert_spec(&record));
        if node.is_none() {
            log::warn!("notification not shown, page has no body: {}", record.message);
        }

        let handle = NotificationHandle {
            record: Rc::new(record),
            node,
            renderer: self.renderer.clone(),
            lifecycle: Rc::new(RefCell::new(Lifecycle {
                state: NotificationState::Created,
                timer: None,
                close_listener: None,
            })),
        };

        let close_listener = handle
            .node
            .as_ref()
            .and_then(|node| self.renderer.find_within(node, CLOSE_SELECTOR))
            .map(|close| {
                let h = handle.clone();
                self.renderer.on_click(
                    &close,
                    Box::new(move || {
                        h.dismiss();
                    }),
                )
            });

        let h = handle.clone();
        let timer = self.scheduler.schedule(
            self.dismiss_after_ms,
            Box::new(move || {
                if h.dismiss() {
                    log::debug!("notification {} expired", h.id());
                }
            }),
        );

        {
            let mut lifecycle = handle.lifecycle.borrow_mut();
            lifecycle.timer = Some(timer);
            lifecycle.close_listener = close_listener;
            lifecycle.state.show();
        }
        log::debug!(
            "notification {} shown ({})",
            handle.id(),
            handle.record.severity.as_str()
        );
        handle
    }
}

fn alert_spec(record: &NotificationRecord) -> ElementSpec {
    let severity = record.severity;
    ElementSpec::new("div")
        .class("notification")
        .class(&severity.css_class())
        .child(
            ElementSpec::new("div")
                .class("notification-content")
                .child(ElementSpec::new("i").class("fas").class(severity.icon()))
                .child(ElementSpec::new("span").text(record.message.clone()))
                .child(ElementSpec::new("button").class("notification-close").text("×")),
        )
}
