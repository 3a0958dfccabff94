use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::a002_user::User;
use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplaintId(pub i64);

impl AggregateId for ComplaintId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_value(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle states the console knows how to filter on.
///
/// New complaints start in `PendingVerification`; the API promotes them to
/// `Open` once enough residents upvote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
    PendingVerification,
    Open,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Open,
        ComplaintStatus::PendingVerification,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::PendingVerification => "PENDING_VERIFICATION",
            ComplaintStatus::Open => "OPEN",
            ComplaintStatus::Resolved => "RESOLVED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::PendingVerification => "Pending Checks",
            ComplaintStatus::Open => "Open (Active)",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase().replace(|c: char| c == '-' || c == ' ', "_");
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == upper)
            .ok_or_else(|| format!("Unknown complaint status '{}'", s))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Complaint ticket as returned by `GET /complaints/society/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: ComplaintId,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub upvotes: i32,
    #[serde(default)]
    pub assigned_vendor: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Complaint {
    pub fn known_status(&self) -> Option<ComplaintStatus> {
        self.status.parse().ok()
    }

    pub fn is_resolved(&self) -> bool {
        self.known_status() == Some(ComplaintStatus::Resolved)
    }

    pub fn is_emergency(&self) -> bool {
        self.severity
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("EMERGENCY"))
            .unwrap_or(false)
    }

    pub fn reporter_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.full_name.as_str())
    }

    /// Тип вложения по расширению ссылки (видео только .mp4 / .mov)
    pub fn media_kind(&self) -> Option<MediaKind> {
        let url = self.image_url.as_deref().filter(|u| !u.is_empty())?;
        let lower = url.to_lowercase();
        if lower.ends_with(".mp4") || lower.ends_with(".mov") {
            Some(MediaKind::Video)
        } else {
            Some(MediaKind::Image)
        }
    }
}
