use std::{env, fmt::Display, str::FromStr};

use log::info;

use crate::error::ConfigError;

pub const DEFAULT_QUESTION: &str = "Do you enjoy writing Rust?";

/// 400 days, the longest `Max-Age` browsers honour on a cookie.
pub const MAX_SESSION_IDLE_MINUTES: i64 = 400 * 24 * 60;

/// Startup settings. Read once, never reloaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_cookie_name: String,
    pub session_cookie_secure: bool,
    pub session_idle_minutes: i64,
    pub poll_question: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            session_cookie_name: "quickpoll.session".to_string(),
            session_cookie_secure: false,
            session_idle_minutes: 20,
            poll_question: DEFAULT_QUESTION.to_string(),
        }
    }
}

impl Config {
    /// Load from the process environment. Call `dotenvy::dotenv()` first if a `.env` file should count.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load through an arbitrary key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let session_idle_minutes: i64 =
            try_load(&lookup, "SESSION_IDLE_MINUTES", defaults.session_idle_minutes)?;
        if !(1..=MAX_SESSION_IDLE_MINUTES).contains(&session_idle_minutes) {
            return Err(ConfigError::InvalidValue {
                key: "SESSION_IDLE_MINUTES",
                value: session_idle_minutes.to_string(),
                reason: format!("must be between 1 and {}", MAX_SESSION_IDLE_MINUTES),
            });
        }

        Ok(Self {
            host: try_load(&lookup, "HOST", defaults.host)?,
            port: try_load(&lookup, "PORT", defaults.port)?,
            session_cookie_name: try_load(&lookup, "SESSION_COOKIE_NAME", defaults.session_cookie_name)?,
            session_cookie_secure: try_load(
                &lookup,
                "SESSION_COOKIE_SECURE",
                defaults.session_cookie_secure,
            )?,
            session_idle_minutes,
            poll_question: try_load(&lookup, "POLL_QUESTION", defaults.poll_question)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => {
            info!("{} not set, using default: {}", key, default);
            Ok(default)
        }
    }
}
