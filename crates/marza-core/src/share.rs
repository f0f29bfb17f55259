//! # Share Links
//!
//! Builds the two outbound deep links that carry a summary.
//!
//! ```text
//! summary text ──► urlencoding::encode ──► https://t.me/share/url?url=...
//!                                      └─► https://wa.me/?text=...
//! ```
//!
//! Opening the link is the front-end's job; nothing here touches the OS.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Messenger a summary can be shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    Telegram,
    WhatsApp,
}

impl ShareTarget {
    const ALLOWED: &'static [&'static str] = &["telegram", "whatsapp"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ShareTarget::Telegram => "telegram",
            ShareTarget::WhatsApp => "whatsapp",
        }
    }

    /// Link prefix; the encoded summary is appended as the only parameter.
    const fn base_url(&self) -> &'static str {
        match self {
            ShareTarget::Telegram => "https://t.me/share/url?url=",
            ShareTarget::WhatsApp => "https://wa.me/?text=",
        }
    }
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShareTarget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "telegram" | "tg" => Ok(ShareTarget::Telegram),
            "whatsapp" | "wa" => Ok(ShareTarget::WhatsApp),
            _ => Err(CoreError::unknown("share target", s, Self::ALLOWED)),
        }
    }
}

/// Builds the share link for `target` carrying `summary`.
///
/// ## Example
/// ```rust
/// use marza_core::share::{share_url, ShareTarget};
///
/// assert_eq!(
///     share_url(ShareTarget::WhatsApp, "Final price: 8 308"),
///     "https://wa.me/?text=Final%20price%3A%208%20308"
/// );
/// ```
pub fn share_url(target: ShareTarget, summary: &str) -> String {
    format!("{}{}", target.base_url(), urlencoding::encode(summary))
}

// =============================================================================
// Unit Tests
// =============================================================================
