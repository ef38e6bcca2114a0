use std::env;

use poem::session::{CookieConfig, MemoryStorage, ServerSession};
use poem::web::cookie::SameSite;

pub const DEFAULT_SESSION_COOKIE_NAME: &str = "catalog-session";

/// Session keys live in server memory; the cookie only carries the session id.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
}

impl SessionConfig {
    /// Environment variables:
    /// - SESSION_COOKIE_NAME: cookie name (default: "catalog-session")
    /// - SESSION_COOKIE_SECURE: "true" to send the cookie over HTTPS only (default: false)
    pub fn from_env() -> Self {
        let cookie_name = env::var("SESSION_COOKIE_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_COOKIE_NAME.to_string());
        let secure = env::var("SESSION_COOKIE_SECURE").is_ok_and(|v| v == "true");

        Self {
            cookie_name,
            secure,
        }
    }

    pub fn init_session(&self) -> ServerSession<MemoryStorage> {
        ServerSession::new(
            CookieConfig::default()
                .name(self.cookie_name.clone())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(self.secure),
            MemoryStorage::new(),
        )
    }
}
