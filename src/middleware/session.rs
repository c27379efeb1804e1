use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use time::Duration;

pub const SESSION_COOKIE: &str = "ast_session";

/// Per-user gate state, carried in a private cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// First contact, no login attempt yet.
    #[default]
    Fresh,
    /// Last login attempt failed.
    Rejected,
    Authenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    fn cookie_value(&self) -> Option<&'static str> {
        match self {
            Self::Fresh => None,
            Self::Rejected => Some("rejected"),
            Self::Authenticated => Some("authenticated"),
        }
    }

    fn from_cookie_value(value: &str) -> Self {
        match value {
            "rejected" => Self::Rejected,
            "authenticated" => Self::Authenticated,
            _ => Self::Fresh,
        }
    }
}

/// Cookie attributes shared by every session cookie.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookieSettings {
    pub secure: bool,
    pub max_age: Duration,
}

/// Session context handed to page handlers.
///
/// The jar decrypts and authenticates the cookie; anything it rejects
/// reads as `SessionState::Fresh`.
pub struct Session {
    state: SessionState,
    jar: PrivateCookieJar,
    settings: SessionCookieSettings,
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Persist `state` and hand back the jar to attach to the response.
    pub fn store(self, state: SessionState) -> PrivateCookieJar {
        match state.cookie_value() {
            Some(value) => self.jar.add(build_cookie(value, self.settings)),
            None => self.jar.remove(clear_cookie(self.settings)),
        }
    }

    /// Destroy the session.
    pub fn end(self) -> PrivateCookieJar {
        self.store(SessionState::Fresh)
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: FromRef<S>,
    SessionCookieSettings: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state).await?;
        let session_state = jar
            .get(SESSION_COOKIE)
            .map(|c| SessionState::from_cookie_value(c.value()))
            .unwrap_or_default();
        Ok(Self {
            state: session_state,
            jar,
            settings: SessionCookieSettings::from_ref(state),
        })
    }
}

fn build_cookie(value: &str, settings: SessionCookieSettings) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, value.to_string()))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .max_age(settings.max_age)
        .build()
}

fn clear_cookie(settings: SessionCookieSettings) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_values_round_trip() {
        for state in [SessionState::Rejected, SessionState::Authenticated] {
            let value = state.cookie_value().unwrap();
            assert_eq!(SessionState::from_cookie_value(value), state);
        }
        assert_eq!(SessionState::Fresh.cookie_value(), None);
    }

    #[test]
    fn unknown_cookie_value_is_fresh() {
        assert_eq!(SessionState::from_cookie_value("admin"), SessionState::Fresh);
        assert!(!SessionState::from_cookie_value("").is_authenticated());
    }
}
