use contracts::domain::a001_society::{Society, SocietyId, SocietyUpdateDto};
use contracts::shared::api_paths;

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_society(&self, society_id: SocietyId) -> Result<Society, ApiError> {
        self.get_json(&api_paths::society(society_id)).await
    }

    /// `PUT /societies/{id}`; the updated record in the answer is not needed.
    pub async fn update_society(
        &self,
        society_id: SocietyId,
        update: &SocietyUpdateDto,
    ) -> Result<(), ApiError> {
        self.put(&api_paths::society(society_id), update).await?;
        Ok(())
    }
}
