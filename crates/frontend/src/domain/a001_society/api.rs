use contracts::domain::a001_society::{Society, SocietyId, SocietyUpdateDto};
use contracts::shared::api_paths;

use crate::shared::http;

pub async fn fetch_society(society_id: SocietyId) -> Result<Society, String> {
    http::get_json(&api_paths::society(society_id)).await
}

pub async fn update_society(society_id: SocietyId, dto: &SocietyUpdateDto) -> Result<(), String> {
    http::put_json(&api_paths::society(society_id), dto).await?;
    Ok(())
}
