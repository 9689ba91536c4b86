//! Notification records shared by every caller of the notification center.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Delay after which a notification removes itself.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity selects the accent color and icon of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Returns the severity name (used as CSS class suffix).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Font Awesome icon class.
    pub const fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "fa-info-circle",
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
        }
    }

    pub const fn accent_color(&self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }

    /// CSS class applied to the alert root, e.g. `notification-error`.
    pub fn css_class(&self) -> String {
        format!("notification-{}", self.as_str())
    }

    pub const fn all() -> [Severity; 3] {
        [Severity::Info, Severity::Success, Severity::Error]
    }

    /// Parse severity from string; unknown values fall back to `Info`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// Lifecycle of a single notification. `Dismissed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationState {
    Created,
    Visible,
    Dismissed,
}

impl NotificationState {
    /// Apply a dismissal. Returns `true` only for the transition that
    /// actually removed the notification.
    pub fn dismiss(&mut self) -> bool {
        match self {
            NotificationState::Dismissed => false,
            _ => {
                *self = NotificationState::Dismissed;
                true
            }
        }
    }

    /// Mark as shown. A dismissed notification never becomes visible again.
    pub fn show(&mut self) {
        if *self == NotificationState::Created {
            *self = NotificationState::Visible;
        }
    }

    pub fn is_dismissed(&self) -> bool {
        *self == NotificationState::Dismissed
    }
}

/// A notification as created by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl NotificationRecord {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}
