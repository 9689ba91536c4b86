use super::reveal::cascade_delay;
use crate::shared::config::EffectsConfig;
use crate::shared::dom::{listen, query_all, set_style};

pub const CARD_SELECTOR: &str = ".service-card, .portfolio-item, .pricing-card";

pub const HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Staggered entrance plus a lift on hover.
pub fn attach(config: &EffectsConfig) {
    for (index, card) in query_all(CARD_SELECTOR).into_iter().enumerate() {
        set_style(
            &card,
            "animation-delay",
            &cascade_delay(index, config.cascade_step_ms),
        );

        let target = card.clone();
        listen(&card, "mouseenter", move |_| {
            set_style(&target, "transform", HOVER_TRANSFORM)
        });
        let target = card.clone();
        listen(&card, "mouseleave", move |_| {
            set_style(&target, "transform", REST_TRANSFORM)
        });
    }
}
