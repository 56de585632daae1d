use std::sync::RwLock;

use async_trait::async_trait;
use tracing::info;

use crate::config::AuthConfig;
use crate::error::{ContactsError, Result};

pub const TOKEN_ENV_VAR: &str = "CONTACTS_ACCESS_TOKEN";

/// Hands out the current bearer credential. Callers must re-request the token
/// for every operation instead of holding on to it: the token is opaque and
/// its expiry is unknown.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

/// In-process stand-in for the OpenID-Connect session provider. The provider
/// itself is an external collaborator: sign-in and sign-out are redirects to
/// its endpoints, and the token obtained there is either pasted into the
/// session, set in the config file, or exported via `CONTACTS_ACCESS_TOKEN`.
pub struct Session {
    auth: AuthConfig,
    token: RwLock<Option<String>>,
}

impl Session {
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            auth,
            token: RwLock::new(None),
        }
    }

    fn resolve_token(&self) -> Option<String> {
        if let Some(token) = self.token.read().ok().and_then(|t| t.clone()) {
            return Some(token);
        }
        if let Some(token) = self.auth.access_token.as_ref().filter(|t| !t.is_empty()) {
            return Some(token.clone());
        }
        std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.resolve_token().is_some()
    }

    /// Builds the provider's authorization redirect URL. The caller opens it
    /// in a browser and pastes the resulting token back via `set_token`.
    pub fn sign_in_url(&self) -> String {
        format!(
            "{}/connect/authorize?client_id={}&redirect_uri={}&response_type=code&scope={}",
            self.auth.authority.trim_end_matches('/'),
            urlencoding::encode(&self.auth.client_id),
            urlencoding::encode(&self.auth.redirect_uri),
            urlencoding::encode(&self.auth.scope),
        )
    }

    /// Provider end-session redirect URL.
    pub fn sign_out_url(&self) -> String {
        format!(
            "{}/connect/endsession?post_logout_redirect_uri={}",
            self.auth.authority.trim_end_matches('/'),
            urlencoding::encode(&self.auth.post_logout_redirect_uri),
        )
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
        info!("Session token updated");
    }

    pub fn sign_out(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
        info!("Signed out");
    }
}

#[async_trait]
impl TokenSource for Session {
    async fn access_token(&self) -> Result<String> {
        self.resolve_token()
            .ok_or_else(|| ContactsError::Session("not signed in".to_string()))
    }
}
