use crate::layout::navbar::{NavbarPolicy, NavbarState};
use leptos::prelude::*;

/// Reactive page state shared by the header behaviours.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub menu_open: RwSignal<bool>,
    pub navbar: RwSignal<NavbarState>,
    last_scroll_y: StoredValue<f64>,
    policy: NavbarPolicy,
}

impl SiteContext {
    pub fn new(policy: NavbarPolicy) -> Self {
        Self {
            menu_open: RwSignal::new(false),
            navbar: RwSignal::new(NavbarState::default()),
            last_scroll_y: StoredValue::new(0.0),
            policy,
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }

    /// Record the scroll position the page starts at, without deriving state.
    pub fn seed_scroll(&self, scroll_y: f64) {
        self.last_scroll_y.set_value(scroll_y);
    }

    /// Feed the current scroll position; the navbar signal only changes
    /// when the derived state does.
    pub fn on_scroll(&self, scroll_y: f64) {
        let next = self
            .policy
            .next_state(self.last_scroll_y.get_value(), scroll_y);
        if self.navbar.get_untracked() != next {
            self.navbar.set(next);
        }
        self.last_scroll_y.set_value(scroll_y);
    }
}
