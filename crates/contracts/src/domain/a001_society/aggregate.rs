use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор жилого комплекса (society)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocietyId(pub i64);

impl AggregateId for SocietyId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_value(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SocietyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Every amenity the settings form can toggle, in display order.
pub const AMENITIES: [&str; 8] = [
    "Clubhouse",
    "Swimming Pool",
    "Gymnasium",
    "Kids Play Area",
    "Visitor Parking",
    "Solar Power",
    "CCTV Network",
    "Community Hall",
];

/// Society record as returned by `GET /societies/{id}`.
///
/// Older records predate the infrastructure fields, so everything past
/// `name` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Society {
    #[serde(default)]
    pub id: SocietyId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub subscription_status: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub total_wings: Option<i32>,
    #[serde(default)]
    pub total_floors: Option<i32>,
    #[serde(default)]
    pub total_flats: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `PUT /societies/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyUpdateDto {
    pub name: String,
    pub address: String,
    pub registration_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_wings: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_flats: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl From<&Society> for SocietyUpdateDto {
    fn from(society: &Society) -> Self {
        Self {
            name: society.name.clone(),
            address: society.address.clone().unwrap_or_default(),
            registration_number: society.registration_number.clone().unwrap_or_default(),
            total_wings: society.total_wings,
            total_floors: society.total_floors,
            total_flats: society.total_flats,
            amenities: society.amenities.clone(),
        }
    }
}

impl SocietyUpdateDto {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    /// Добавляет удобство, если его нет, иначе убирает. Порядок остальных сохраняется.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if self.has_amenity(amenity) {
            self.amenities.retain(|a| a != amenity);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }
}

/// Parses a numeric form field; blank or non-numeric input clears the value.
pub fn parse_count(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_society_tolerates_missing_fields() {
        let society: Society =
            serde_json::from_str(r#"{"id":1,"name":"Green Acres","address":"MG Road"}"#).unwrap();
        assert_eq!(society.id, SocietyId(1));
        assert_eq!(society.registration_number, None);
        assert!(society.amenities.is_empty());

        let form = SocietyUpdateDto::from(&society);
        assert_eq!(form.address, "MG Road");
        assert_eq!(form.registration_number, "");
    }

    #[test]
    fn test_toggle_amenity_adds_then_removes() {
        let mut form = SocietyUpdateDto {
            amenities: vec!["Gymnasium".into(), "Clubhouse".into()],
            ..Default::default()
        };
        form.toggle_amenity("Solar Power");
        assert_eq!(form.amenities, vec!["Gymnasium", "Clubhouse", "Solar Power"]);
        form.toggle_amenity("Gymnasium");
        assert_eq!(form.amenities, vec!["Clubhouse", "Solar Power"]);
    }

    #[test]
    fn test_update_dto_omits_empty_counts() {
        let form = SocietyUpdateDto {
            name: "Green Acres".into(),
            total_flats: Some(120),
            ..Default::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["totalFlats"], 120);
        assert!(json.get("totalWings").is_none());
        assert_eq!(json["registrationNumber"], "");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 12 "), Some(12));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("twelve"), None);
    }
}
