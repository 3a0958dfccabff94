use contracts::domain::a001_society::SocietyId;
use contracts::domain::a002_user::{RegisterUserDto, User};
use contracts::shared::api_paths;
use contracts::system::auth::{LoginReply, LoginRequest, LoginResponse};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `POST /users/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let reply: LoginReply = self.post_json(api_paths::USERS_LOGIN, request).await?;
        Ok(reply.into_response())
    }

    /// `POST /users/register`. Any 2xx answer counts as success; the body is ignored.
    pub async fn register_user(&self, request: &RegisterUserDto) -> Result<(), ApiError> {
        self.post(api_paths::USERS_REGISTER, request).await?;
        Ok(())
    }

    pub async fn users_by_society(&self, society_id: SocietyId) -> Result<Vec<User>, ApiError> {
        self.get_json(&api_paths::users_by_society(society_id)).await
    }

    /// Пользователи с ролью (`VENDOR`, `GUARD`, ...) по всему API
    pub async fn users_by_role(&self, role: &str) -> Result<Vec<User>, ApiError> {
        self.get_json(&api_paths::users_by_role(role)).await
    }
}
