use std::collections::HashMap;

use axum::http::{header, HeaderMap};
use serde::Serialize;

use crate::config::AuthConfig;

/// Caller identity established from the request credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub id: String,
}

/// Credential check for API callers; the identity provider itself lives elsewhere.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> Option<AuthenticatedUser>;
}

/// Fixed set of bearer tokens, typically from `APP_API_TOKENS`.
#[derive(Debug, Clone, Default)]
pub struct TokenAuthenticator {
    tokens: HashMap<String, String>,
}

impl TokenAuthenticator {
    pub fn from_config(config: &AuthConfig) -> Self {
        let tokens = config
            .api_tokens
            .iter()
            .map(|entry| (entry.token.clone(), entry.user.clone()))
            .collect();
        Self { tokens }
    }

    pub fn with_token(mut self, token: impl Into<String>, user: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), user.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Authenticator for TokenAuthenticator {
    fn authenticate(&self, token: &str) -> Option<AuthenticatedUser> {
        self.tokens
            .get(token)
            .map(|user| AuthenticatedUser { id: user.clone() })
    }
}

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
