//! # Effects
//!
//! The two things the calculator does to the outside world: put the
//! summary on the system clipboard and hand a share link to the system
//! browser.
//!
//! ## Backends
//! ```text
//! ┌──────────────┬──────────────────────────────┬─────────────────────────┐
//! │ Effect       │ Crate                        │ Runs on                 │
//! ├──────────────┼──────────────────────────────┼─────────────────────────┤
//! │ Clipboard    │ copypasta::ClipboardContext  │ tokio blocking pool     │
//! │ Link opener  │ webbrowser::open             │ tokio blocking pool     │
//! └──────────────┴──────────────────────────────┴─────────────────────────┘
//! ```
//!
//! Commands take `&dyn Effects`, so tests substitute a recording fake.

use async_trait::async_trait;
use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tokio::task;
use tracing::debug;

/// Effect failures. Always reported to the user as a notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EffectError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardFailed(String),

    #[error("Could not open link: {0}")]
    OpenerFailed(String),
}

/// Side effects available to commands.
#[async_trait]
pub trait Effects: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    async fn write_clipboard(&self, text: &str) -> Result<(), EffectError>;

    /// Opens `url` in the user's browser. No response is read back.
    async fn open_url(&self, url: &str) -> Result<(), EffectError>;
}

/// Effects backed by the real operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEffects;

impl SystemEffects {
    fn set_clipboard(text: String) -> Result<(), EffectError> {
        let mut ctx = ClipboardContext::new()
            .map_err(|e| EffectError::ClipboardUnavailable(e.to_string()))?;
        ctx.set_contents(text)
            .map_err(|e| EffectError::ClipboardFailed(e.to_string()))
    }
}

#[async_trait]
impl Effects for SystemEffects {
    async fn write_clipboard(&self, text: &str) -> Result<(), EffectError> {
        let text = text.to_owned();
        task::spawn_blocking(move || Self::set_clipboard(text))
            .await
            .map_err(|e| EffectError::ClipboardFailed(e.to_string()))??;

        debug!("Clipboard written");
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<(), EffectError> {
        let url = url.to_owned();
        task::spawn_blocking(move || webbrowser::open(&url))
            .await
            .map_err(|e| EffectError::OpenerFailed(e.to_string()))?
            .map_err(|e| EffectError::OpenerFailed(e.to_string()))?;

        debug!("Link handed to browser");
        Ok(())
    }
}

// =============================================================================
// Test Double
// =============================================================================

/// Records effect calls instead of performing them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingEffects {
    pub clipboard: std::sync::Mutex<Vec<String>>,
    pub opened: std::sync::Mutex<Vec<String>>,
    pub fail: bool,
}

#[cfg(test)]
impl RecordingEffects {
    pub fn failing() -> Self {
        RecordingEffects {
            fail: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Effects for RecordingEffects {
    async fn write_clipboard(&self, text: &str) -> Result<(), EffectError> {
        if self.fail {
            return Err(EffectError::ClipboardUnavailable(
                "no display".to_string(),
            ));
        }
        self.clipboard.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<(), EffectError> {
        if self.fail {
            return Err(EffectError::OpenerFailed("denied".to_string()));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
