use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов.
///
/// The remote API hands out numeric identity columns, so every id wraps an
/// `i64` and round-trips through its decimal form (CLI arguments, URL paths).
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn value(&self) -> i64;

    fn from_value(value: i64) -> Self;

    /// Преобразовать ID в строку
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(Self::from_value)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_complaint::ComplaintId;

    #[test]
    fn test_parse_id_from_string() {
        assert_eq!(ComplaintId::from_string(" 42 ").unwrap(), ComplaintId(42));
        assert_eq!(ComplaintId(7).as_string(), "7");
        assert!(ComplaintId::from_string("abc").is_err());
    }
}
