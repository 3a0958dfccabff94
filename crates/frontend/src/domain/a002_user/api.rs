use contracts::domain::a001_society::SocietyId;
use contracts::domain::a002_user::{RegisterUserDto, User};
use contracts::shared::api_paths;

use crate::shared::http;

/// Fetch everyone registered in the society
pub async fn fetch_residents(society_id: SocietyId) -> Result<Vec<User>, String> {
    http::get_json(&api_paths::users_by_society(society_id)).await
}

/// Users with a role across the API (e.g. `VENDOR`)
pub async fn fetch_by_role(role: &str) -> Result<Vec<User>, String> {
    http::get_json(&api_paths::users_by_role(role)).await
}

/// Register one user; any 2xx answer is a success
pub async fn register_user(dto: &RegisterUserDto) -> Result<(), String> {
    http::post_json(api_paths::USERS_REGISTER, dto).await?;
    Ok(())
}
