use chrono::Utc;
use contracts::system::auth::LoginRequest;
use contracts::system::session::{Session, SessionStore};

use super::token::decode_claims;
use crate::api::ApiClient;
use crate::error::{ApiError, ClientError, ClientResult};

/// Вход: `POST /users/login`, сессия сохраняется в хранилище клиента.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ClientResult<Session> {
    let request = LoginRequest::new(email, password);
    if !request.is_complete() {
        return Err(ClientError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let response = match client.login(&request).await {
        Ok(response) => response,
        Err(ApiError::Status { status, body }) if status == 401 || status == 403 => {
            let reason = if body.trim().is_empty() {
                "Invalid credentials".to_string()
            } else {
                body
            };
            return Err(ClientError::AuthenticationFailed(reason));
        }
        Err(e) => return Err(e.into()),
    };

    let claims = decode_claims(&response.token);
    if claims.is_none() {
        tracing::warn!("Login token is not a readable JWT, session has no expiry");
    }

    let session = Session::from_login(response, claims);
    client.session_store().save(&session)?;
    tracing::info!("Logged in as {} ({})", session.display_name(), session.display_role());

    Ok(session)
}

/// Returns `true` when there was a session to drop.
pub fn logout(store: &dyn SessionStore) -> ClientResult<bool> {
    let had_session = store.load()?.is_some();
    store.clear()?;
    Ok(had_session)
}

/// Сохранённая сессия; истёкший токен считается отсутствующим.
pub fn current_session(store: &dyn SessionStore) -> ClientResult<Session> {
    let session = store.load()?.ok_or(ClientError::NotAuthenticated)?;
    if session.is_expired_at(Utc::now()) {
        tracing::info!("Stored session has expired");
        return Err(ClientError::NotAuthenticated);
    }
    Ok(session)
}
