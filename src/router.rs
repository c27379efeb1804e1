use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use std::sync::Arc;
use time::Duration;

use crate::config::{Config, FormConfig};
use crate::db::Database;
use crate::error::AstError;
use crate::handlers::form::{form_page, health, login, logout, submit};
use crate::middleware::session::SessionCookieSettings;
use crate::service::{AstCheckService, CredentialGate, DwellingDirectory};

/// Shared state for every route.
#[derive(Clone)]
pub struct AppState {
    pub gate: CredentialGate,
    pub directory: DwellingDirectory,
    pub service: AstCheckService,
    pub options: Arc<FormConfig>,
    pub cookies: SessionCookieSettings,
    key: Key,
}

impl AppState {
    pub fn new(db: Database, cfg: &Config, key: Key) -> Self {
        Self {
            gate: CredentialGate::new(cfg.secrets.password.as_str()),
            directory: DwellingDirectory::new(db.clone()),
            service: AstCheckService::new(db),
            options: Arc::new(cfg.form.clone()),
            cookies: SessionCookieSettings {
                secure: !cfg.basic.insecure_cookie,
                max_age: Duration::minutes(cfg.basic.session_minutes),
            },
            key,
        }
    }

    /// Build state with the cookie key from configuration.
    pub fn from_config(db: Database, cfg: &Config) -> Result<Self, AstError> {
        let key = cfg.basic.cookie_key()?;
        Ok(Self::new(db, cfg, key))
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

impl FromRef<AppState> for SessionCookieSettings {
    fn from_ref(state: &AppState) -> Self {
        state.cookies
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/login", post(login))
        .route("/submit", post(submit))
        .route("/logout", post(logout))
        .route("/health", get(health))
        .with_state(state)
}
