//! Page-section behaviours attached once at start-up.

pub mod cards;
pub mod hero;
pub mod lazy_images;
pub mod page;
pub mod portfolio;
pub mod reveal;

use crate::shared::config::SiteConfig;
use crate::shared::notification::NotificationCenter;

pub fn attach_all(config: &SiteConfig, notifications: NotificationCenter) {
    page::log_errors();
    page::fade_in();
    reveal::attach(&config.effects);
    cards::attach(&config.effects);
    hero::attach(&config.effects);
    portfolio::attach(notifications);
    lazy_images::attach();
}
