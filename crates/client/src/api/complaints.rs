use contracts::domain::a001_society::SocietyId;
use contracts::domain::a002_user::UserId;
use contracts::domain::a003_complaint::{Complaint, ComplaintId, ComplaintStatus};
use contracts::shared::api_paths;

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn complaints_by_society(
        &self,
        society_id: SocietyId,
    ) -> Result<Vec<Complaint>, ApiError> {
        self.get_json(&api_paths::complaints_by_society(society_id))
            .await
    }

    /// `PUT /complaints/{id}/status?status=...`
    pub async fn update_complaint_status(
        &self,
        complaint_id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<(), ApiError> {
        self.put_query(
            &api_paths::complaint_status(complaint_id),
            &[("status", status.as_str())],
        )
        .await?;
        Ok(())
    }

    pub async fn assign_vendor(
        &self,
        complaint_id: ComplaintId,
        vendor_id: UserId,
    ) -> Result<(), ApiError> {
        self.put_query(&api_paths::complaint_assign(complaint_id, vendor_id), &[])
            .await?;
        Ok(())
    }
}
