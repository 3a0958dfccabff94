use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор пользователя
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl AggregateId for UserId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_value(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Role
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Resident,
    Vendor,
    Guard,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Resident,
        UserRole::Vendor,
        UserRole::Guard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Resident => "RESIDENT",
            UserRole::Vendor => "VENDOR",
            UserRole::Guard => "GUARD",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == upper)
            .ok_or_else(|| format!("Unknown role '{}'", s))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

fn default_reputation() -> i32 {
    100
}

/// Member of a society as listed by `GET /users/society/{id}` and
/// `GET /users/role/{role}`.
///
/// The role stays a plain string: the API upper-cases whatever it is sent,
/// so values outside [`UserRole`] do occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub flat_no: Option<String>,
    #[serde(default = "default_reputation")]
    pub reputation_score: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(UserRole::Admin.as_str())
    }

    /// Первая буква имени для аватара в таблице
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn phone_label(&self) -> &str {
        match self.phone_number.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => "No phone added",
        }
    }

    pub fn flat_label(&self) -> &str {
        match self.flat_no.as_deref() {
            Some(f) if !f.is_empty() => f,
            _ => "N/A",
        }
    }
}
