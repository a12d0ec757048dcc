//! Per-visitor session flag.
//!
//! Handlers never touch the session store directly; they go through
//! [`VoterSession`], which the cookie-backed [`Session`] implements.

use async_trait::async_trait;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::{Config, MAX_SESSION_IDLE_MINUTES};
use crate::error::AppError;

/// Session key holding `"true"` once the visitor has voted.
pub const HAS_VOTED_KEY: &str = "HasVoted";

#[async_trait]
pub trait VoterSession: Send + Sync {
    async fn has_voted(&self) -> Result<bool, AppError>;

    /// Set the voted flag. There is no way to clear it again.
    async fn mark_voted(&self) -> Result<(), AppError>;
}

#[async_trait]
impl VoterSession for Session {
    async fn has_voted(&self) -> Result<bool, AppError> {
        let flag: Option<String> = self.get(HAS_VOTED_KEY).await?;
        Ok(flag.as_deref() == Some("true"))
    }

    async fn mark_voted(&self) -> Result<(), AppError> {
        self.insert(HAS_VOTED_KEY, "true").await?;
        Ok(())
    }
}

/// Server-side sessions held in process memory, keyed by cookie.
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.session_cookie_name.clone())
        .with_secure(config.session_cookie_secure)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            // Config built by hand skips from_lookup's range check
            config.session_idle_minutes.clamp(1, MAX_SESSION_IDLE_MINUTES),
        )))
}
