use contracts::shared::api_paths;
use contracts::system::auth::{LoginReply, LoginRequest, LoginResponse};

use crate::shared::http;

/// Login with email and password
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, String> {
    let response = http::post_json(api_paths::USERS_LOGIN, request).await?;

    let reply = response
        .json::<LoginReply>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(reply.into_response())
}
