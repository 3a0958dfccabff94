//! Persisted client session.
//!
//! The session is an explicit value handed to whichever HTTP client needs
//! it; the storage behind it (a JSON file, `localStorage`, memory) sits
//! behind [`SessionStore`].

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::system::auth::{LoginResponse, TokenClaims};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: None,
            full_name: None,
            role: None,
            email: None,
            expires_at: None,
        }
    }

    /// Собирает сессию из ответа логина и (если удалось) раскодированных claims.
    /// Values in the response body win over the token payload.
    pub fn from_login(response: LoginResponse, claims: Option<TokenClaims>) -> Self {
        let mut session = Session::new(response.token);
        session.full_name = response.full_name;
        session.role = response.role;

        if let Some(claims) = claims {
            session.user_id = claims.user_id;
            session.email = Some(claims.sub);
            if session.role.is_none() {
                session.role = claims.role;
            }
            session.expires_at = claims
                .exp
                .and_then(|exp| Utc.timestamp_opt(exp, 0).single());
        }

        session
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|exp| exp <= now).unwrap_or(false)
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Admin User")
    }

    pub fn display_role(&self) -> &str {
        self.role.as_deref().unwrap_or("ADMIN")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session storage error: {0}")]
pub struct SessionStoreError(pub String);

impl SessionStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Load / save / clear lifecycle of the persisted session.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// Хранилище в памяти: для тестов и одноразовых запусков
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| SessionStoreError::new("session lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| SessionStoreError::new("session lock poisoned"))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| SessionStoreError::new("session lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}
