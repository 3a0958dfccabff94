//! Paths of the remote API, relative to its base URL (which already ends in `/api`).
//!
//! Both clients build URLs from these so the two never drift apart.

use crate::domain::a001_society::SocietyId;
use crate::domain::a002_user::UserId;
use crate::domain::a003_complaint::ComplaintId;

pub const USERS_LOGIN: &str = "/users/login";
pub const USERS_REGISTER: &str = "/users/register";

pub fn users_by_society(society_id: SocietyId) -> String {
    format!("/users/society/{}", society_id)
}

pub fn users_by_role(role: &str) -> String {
    format!("/users/role/{}", role.trim().to_uppercase())
}

pub fn complaints_by_society(society_id: SocietyId) -> String {
    format!("/complaints/society/{}", society_id)
}

/// The new status travels as the `status` query parameter.
pub fn complaint_status(complaint_id: ComplaintId) -> String {
    format!("/complaints/{}/status", complaint_id)
}

pub fn complaint_assign(complaint_id: ComplaintId, vendor_id: UserId) -> String {
    format!("/complaints/{}/assign/{}", complaint_id, vendor_id)
}

pub fn society(society_id: SocietyId) -> String {
    format!("/societies/{}", society_id)
}

/// Склеивает базовый URL и путь, не удваивая слэш.
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(users_by_society(SocietyId(1)), "/users/society/1");
        assert_eq!(users_by_role("vendor"), "/users/role/VENDOR");
        assert_eq!(complaint_status(ComplaintId(8)), "/complaints/8/status");
        assert_eq!(
            complaint_assign(ComplaintId(8), UserId(31)),
            "/complaints/8/assign/31"
        );
        assert_eq!(society(SocietyId(2)), "/societies/2");
    }

    #[test]
    fn test_join() {
        assert_eq!(
            join("http://localhost:8080/api/", USERS_LOGIN),
            "http://localhost:8080/api/users/login"
        );
        assert_eq!(
            join("http://localhost:8080/api", USERS_REGISTER),
            "http://localhost:8080/api/users/register"
        );
    }
}
