use serde::{Deserialize, Serialize};

use crate::domain::a001_society::SocietyId;

/// Body of `POST /users/register`.
///
/// `email` is omitted from the JSON when absent; the API owns the
/// required-field check and rejects the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub society_id: SocietyId,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
    pub role: String,
    pub flat_no: String,
    pub phone_number: String,
}
