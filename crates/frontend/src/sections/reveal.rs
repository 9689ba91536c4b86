//! Scroll-triggered reveal of content blocks.

use crate::shared::config::EffectsConfig;
use crate::shared::dom::{intersection_observer, query_all, set_style, sibling_index, toggle_class, ObserveOptions};

pub const REVEAL_SELECTOR: &str =
    ".service-card, .portfolio-item, .pricing-card, .contact-item, .section-header";

pub const REVEAL_OPTIONS: ObserveOptions<'static> = ObserveOptions {
    threshold: 0.05,
    root_margin: "0px 0px -50px 0px",
};

/// CSS delay for the `index`-th sibling of a cascade.
pub fn cascade_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * u64::from(step_ms))
}

pub fn attach(config: &EffectsConfig) {
    let elements = query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }

    for element in &elements {
        toggle_class(element, "fade-in", true);
    }

    let step_ms = config.cascade_step_ms;
    let Some(observer) = intersection_observer(Some(REVEAL_OPTIONS), move |entry, _| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        toggle_class(&target, "visible", true);
        set_style(
            &target,
            "animation-delay",
            &cascade_delay(sibling_index(&target), step_ms),
        );
    }) else {
        // Without the observer everything is shown up front.
        for element in &elements {
            toggle_class(element, "visible", true);
        }
        return;
    };

    for element in &elements {
        observer.observe(element);
    }
    log::debug!("observing {} reveal targets", elements.len());
}
