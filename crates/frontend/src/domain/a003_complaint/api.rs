use contracts::domain::a001_society::SocietyId;
use contracts::domain::a002_user::UserId;
use contracts::domain::a003_complaint::{Complaint, ComplaintId, ComplaintStatus};
use contracts::shared::api_paths;

use crate::shared::http;

pub async fn fetch_complaints(society_id: SocietyId) -> Result<Vec<Complaint>, String> {
    http::get_json(&api_paths::complaints_by_society(society_id)).await
}

pub async fn update_status(id: ComplaintId, status: ComplaintStatus) -> Result<(), String> {
    http::put_query(&api_paths::complaint_status(id), &[("status", status.as_str())]).await?;
    Ok(())
}

pub async fn assign_vendor(id: ComplaintId, vendor_id: UserId) -> Result<(), String> {
    http::put_query(&api_paths::complaint_assign(id, vendor_id), &[]).await?;
    Ok(())
}
