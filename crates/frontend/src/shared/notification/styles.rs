//! Style sheet shared by every notification.

use crate::shared::renderer::{ElementSpec, Mount, Renderer};
use contracts::shared::notification::Severity;
use once_cell::sync::Lazy;

pub const STYLE_ELEMENT_ID: &str = "notification-styles";

const BASE_CSS: &str = r#"
.notification {
    position: fixed;
    top: 20px;
    right: 20px;
    background: white;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    z-index: 10000;
    max-width: 400px;
    animation: slideInRight 0.3s ease;
}
.notification-content {
    display: flex;
    align-items: center;
    padding: 1rem;
    gap: 0.75rem;
}
.notification-content i {
    font-size: 1.2rem;
}
.notification-close {
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
    color: #6b7280;
    margin-left: auto;
}
.notification-close:hover {
    color: #374151;
}
@keyframes slideInRight {
    from {
        transform: translateX(100%);
        opacity: 0;
    }
    to {
        transform: translateX(0);
        opacity: 1;
    }
}
"#;

/// Base rules plus one accent block per severity.
pub static NOTIFICATION_CSS: Lazy<String> = Lazy::new(|| {
    let mut css = BASE_CSS.to_string();
    for severity in Severity::all() {
        css.push_str(&format!(
            ".{class} {{\n    border-left: 4px solid {color};\n}}\n.{class} i {{\n    color: {color};\n}}\n",
            class = severity.css_class(),
            color = severity.accent_color(),
        ));
    }
    css
});

/// Register the notification style sheet unless the page already has it.
///
/// Returns `true` when the sheet was inserted by this call.
pub fn ensure_styles<R: Renderer>(renderer: &R) -> bool {
    if renderer
        .find(&format!("#{}", STYLE_ELEMENT_ID))
        .is_some()
    {
        return false;
    }
    let spec = ElementSpec::new("style")
        .id(STYLE_ELEMENT_ID)
        .text(NOTIFICATION_CSS.as_str());
    let inserted = renderer.insert(Mount::Head, &spec).is_some();
    if inserted {
        log::debug!("notification styles registered");
    }
    inserted
}
