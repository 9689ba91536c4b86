//! Header behaviours: mobile menu, navbar scroll state, smooth anchor scroll.
//!
//! State lives in [`SiteContext`]; effects project it onto the page classes.

use crate::layout::global_context::SiteContext;
use crate::shared::config::NavbarConfig;
use crate::shared::dom::{document, listen, query, query_all, scroll_y, set_style, toggle_class, window};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node, ScrollBehavior, ScrollToOptions};

pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Visual state of the fixed navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    /// Page scrolled past the top band.
    pub scrolled: bool,
    /// Slid out of view while the user scrolls down.
    pub hidden: bool,
}

impl NavbarState {
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarPolicy {
    pub scrolled_threshold: f64,
    pub hide_threshold: f64,
}

impl From<&NavbarConfig> for NavbarPolicy {
    fn from(config: &NavbarConfig) -> Self {
        Self {
            scrolled_threshold: config.scrolled_threshold,
            hide_threshold: config.hide_threshold,
        }
    }
}

impl NavbarPolicy {
    pub fn next_state(&self, last_y: f64, y: f64) -> NavbarState {
        NavbarState {
            scrolled: y > self.scrolled_threshold,
            hidden: y > last_y && y > self.hide_threshold,
        }
    }
}

/// Scroll position that puts an anchor target just below the fixed navbar.
pub fn anchor_scroll_top(target_offset_top: f64, navbar_offset: f64) -> f64 {
    target_offset_top - navbar_offset
}

pub fn attach(ctx: SiteContext, config: &NavbarConfig) {
    attach_menu(ctx);
    attach_scroll_state(ctx);
    attach_smooth_scroll(config.anchor_offset);
}

fn attach_menu(ctx: SiteContext) {
    let Some(hamburger) = query(HAMBURGER_SELECTOR) else {
        log::debug!("no {} on this page", HAMBURGER_SELECTOR);
        return;
    };
    let nav_menu: Option<Node> = query(NAV_MENU_SELECTOR).map(Node::from);

    listen(&hamburger, "click", move |_| ctx.toggle_menu());

    for link in query_all(NAV_LINK_SELECTOR) {
        listen(&link, "click", move |_| ctx.close_menu());
    }

    // Close when clicking anywhere outside the menu and its toggle.
    if let Some(doc) = document() {
        let toggle: Node = hamburger.clone().into();
        listen(&doc, "click", move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |container: &Node| container.contains(target.as_ref());
            let in_menu = nav_menu.as_ref().map(inside).unwrap_or(false);
            if !in_menu && !inside(&toggle) {
                ctx.close_menu();
            }
        });
    }

    Effect::new(move |_| {
        let open = ctx.menu_open.get();
        for selector in [HAMBURGER_SELECTOR, NAV_MENU_SELECTOR] {
            if let Some(element) = query(selector) {
                toggle_class(&element, "active", open);
            }
        }
        if let Some(body) = document().and_then(|d| d.body()) {
            toggle_class(&body, "menu-open", open);
        }
    });
}

fn attach_scroll_state(ctx: SiteContext) {
    if query(NAVBAR_SELECTOR).is_none() {
        log::debug!("no {} on this page", NAVBAR_SELECTOR);
        return;
    }
    // A page restored mid-scroll must not read its first scroll as downward.
    ctx.seed_scroll(scroll_y());
    if let Some(win) = window() {
        listen(&win, "scroll", move |_| ctx.on_scroll(scroll_y()));
    }

    Effect::new(move |_| {
        let state = ctx.navbar.get();
        if let Some(navbar) = query(NAVBAR_SELECTOR) {
            toggle_class(&navbar, "scrolled", state.scrolled);
            set_style(&navbar, "transform", state.transform());
        }
    });
}

fn attach_smooth_scroll(navbar_offset: f64) {
    for anchor in query_all(ANCHOR_SELECTOR) {
        let link = anchor.clone();
        listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            // `#` alone is not a valid selector; query() yields None for it.
            let Some(target) = link
                .get_attribute("href")
                .and_then(|href| query(&href))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(anchor_scroll_top(
                f64::from(target.offset_top()),
                navbar_offset,
            ));
            options.set_behavior(ScrollBehavior::Smooth);
            if let Some(win) = window() {
                win.scroll_to_with_scroll_to_options(&options);
            }
        });
    }
}
