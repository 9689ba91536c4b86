//! Site configuration.
//!
//! Defaults are embedded below. A host page can override any subset of keys
//! with an inline TOML block:
//!
//! ```html
//! <script id="site-config" type="text/toml">
//! [notifications]
//! dismiss_after_ms = 8000
//! </script>
//! ```

use crate::shared::dom::document;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[notifications]
dismiss_after_ms = 5000

[contact]
submit_delay_ms = 2000

[navbar]
scrolled_threshold = 50.0
hide_threshold = 100.0
anchor_offset = 70.0

[effects]
parallax_rate = -0.5
cascade_step_ms = 50
typewriter_speed_ms = 30
typewriter_delay_ms = 200
"#;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub notifications: NotificationsConfig,
    pub contact: ContactConfig,
    pub navbar: NavbarConfig,
    pub effects: EffectsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub dismiss_after_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactConfig {
    /// Delay of the simulated send acknowledgment.
    pub submit_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavbarConfig {
    /// Scroll position past which the navbar gets the `scrolled` class.
    pub scrolled_threshold: f64,
    /// Scroll position past which scrolling down hides the navbar.
    pub hide_threshold: f64,
    /// Height of the fixed navbar, subtracted from anchor targets.
    pub anchor_offset: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EffectsConfig {
    pub parallax_rate: f64,
    pub cascade_step_ms: u32,
    pub typewriter_speed_ms: u32,
    pub typewriter_delay_ms: u32,
}

/// Parse `overrides` on top of [`DEFAULT_CONFIG`]; keys it leaves out keep
/// their embedded value.
pub fn parse_config(overrides: &str) -> Result<SiteConfig, toml::de::Error> {
    let mut table: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    merge(&mut table, toml::from_str(overrides)?);
    toml::Value::Table(table).try_into()
}

/// The embedded defaults alone.
pub fn default_config() -> Result<SiteConfig, toml::de::Error> {
    parse_config("")
}

fn merge(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(section)), toml::Value::Table(patch)) => merge(section, patch),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Load configuration from the host page
///
/// Search order:
/// 1. `<script id="site-config">` inline TOML over the embedded defaults
/// 2. Falls back to the embedded defaults
pub fn load_config() -> Result<SiteConfig, toml::de::Error> {
    let inline = document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    if let Some(source) = inline {
        match parse_config(&source) {
            Ok(config) => {
                log::info!("site config loaded from #{}", CONFIG_ELEMENT_ID);
                return Ok(config);
            }
            Err(err) => log::warn!("invalid #{} ignored: {}", CONFIG_ELEMENT_ID, err),
        }
    }

    log::debug!("using default site configuration");
    default_config()
}
