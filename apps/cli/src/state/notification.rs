//! # Notifications
//!
//! Short-lived status messages ("Copied!", "Clipboard unavailable").
//!
//! A notification is shown until `expires_at`, then dropped on the next
//! render. Nothing is ever retried.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// How long a notification stays visible, in milliseconds.
pub const TOAST_DURATION_MS: i64 = 1800;

/// Outcome a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification starting at `now`.
    pub fn at(kind: NotificationKind, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Notification {
            kind,
            message: message.into(),
            created_at: now,
            expires_at: now + Duration::milliseconds(TOAST_DURATION_MS),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notification::at(NotificationKind::Success, message, Utc::now())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification::at(NotificationKind::Error, message, Utc::now())
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    /// Whether the notification should no longer be shown at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime() {
        let now = Utc::now();
        let toast = Notification::at(NotificationKind::Success, "Copied", now);

        assert_eq!(
            (toast.expires_at - toast.created_at).num_milliseconds(),
            1800
        );
        assert!(!toast.is_expired(now));
        assert!(!toast.is_expired(now + Duration::milliseconds(1799)));
        assert!(toast.is_expired(now + Duration::milliseconds(1800)));
    }

    #[test]
    fn test_constructors() {
        assert!(Notification::success("ok").is_success());
        let err = Notification::error("nope");
        assert_eq!(err.kind, NotificationKind::Error);
        assert_eq!(err.message, "nope");
    }
}
