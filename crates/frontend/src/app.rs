use crate::layout::navbar::{self, NavbarPolicy};
use crate::layout::SiteContext;
use crate::sections;
use crate::shared::config::{load_config, SiteConfig};
use crate::shared::notification::NotificationCenter;
use contracts::shared::notification::AUTO_DISMISS_MS;
use crate::usecases::u101_contact_form;
use leptos::prelude::*;
use once_cell::sync::OnceCell;

static NOTIFICATIONS: OnceCell<NotificationCenter> = OnceCell::new();

fn init_notifications(config: &SiteConfig) -> NotificationCenter {
    *NOTIFICATIONS.get_or_init(|| NotificationCenter::browser(config.notifications.dismiss_after_ms))
}

/// The page-wide notification center, also reachable from page scripts.
pub fn notifications() -> NotificationCenter {
    *NOTIFICATIONS.get_or_init(|| {
        let dismiss_after_ms = load_config()
            .map(|config| config.notifications.dismiss_after_ms)
            .unwrap_or(AUTO_DISMISS_MS);
        NotificationCenter::browser(dismiss_after_ms)
    })
}

/// Root of the behaviour layer. The markup is static; the component renders
/// nothing and attaches behaviours to what is already on the page.
#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("site configuration unusable, behaviours not attached: {}", err);
            return;
        }
    };
    let notifications = init_notifications(&config);

    // Provide the SiteContext store to the whole app via context.
    let ctx = SiteContext::new(NavbarPolicy::from(&config.navbar));
    provide_context(ctx);
    provide_context(notifications);

    navbar::attach(ctx, &config.navbar);
    u101_contact_form::attach(&config, notifications);
    sections::attach_all(&config, notifications);
    log::debug!("site behaviours attached");

    provide_context(config);
}
