use super::aggregate::Complaint;

/// Filter state of the complaints board.
///
/// `status == None` means "all statuses". The search term is matched
/// case-insensitively against title, description and the reporter's name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub status: Option<String>,
    pub search: String,
}

impl ComplaintFilter {
    pub fn new(status: Option<&str>, search: impl Into<String>) -> Self {
        let status = status
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty() && s != "ALL");
        Self {
            status,
            search: search.into(),
        }
    }

    pub fn matches(&self, complaint: &Complaint) -> bool {
        if let Some(status) = &self.status {
            if &complaint.status != status {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        complaint.title.to_lowercase().contains(&needle)
            || complaint.description.to_lowercase().contains(&needle)
            || complaint
                .reporter_name()
                .map(|n| n.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }

    pub fn apply(&self, complaints: &[Complaint]) -> Vec<Complaint> {
        complaints
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn board() -> Vec<Complaint> {
        serde_json::from_value(json!([
            {"id": 1, "title": "Lift stuck", "description": "Wing A lift", "status": "OPEN",
             "user": {"id": 5, "fullName": "Meera Iyer", "role": "RESIDENT"}},
            {"id": 2, "title": "Water leak", "description": "Basement pipe", "status": "RESOLVED",
             "user": {"id": 6, "fullName": "Karan Shah", "role": "RESIDENT"}},
            {"id": 3, "title": "Noise", "description": "Party at night", "status": "PENDING_VERIFICATION"}
        ]))
        .unwrap()
    }

    fn ids(list: &[Complaint]) -> Vec<i64> {
        list.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn test_all_keeps_everything() {
        let filter = ComplaintFilter::new(Some("ALL"), "");
        assert_eq!(ids(&filter.apply(&board())), vec![1, 2, 3]);
    }

    #[test]
    fn test_status_filter() {
        let filter = ComplaintFilter::new(Some("resolved"), "");
        assert_eq!(ids(&filter.apply(&board())), vec![2]);
    }

    #[test]
    fn test_search_covers_reporter_name_and_description() {
        assert_eq!(ids(&ComplaintFilter::new(None, "karan").apply(&board())), vec![2]);
        assert_eq!(ids(&ComplaintFilter::new(None, "WING").apply(&board())), vec![1]);
        // complaint without a reporter still matches on its own text
        assert_eq!(ids(&ComplaintFilter::new(None, "party").apply(&board())), vec![3]);
    }

    #[test]
    fn test_status_and_search_combine() {
        let filter = ComplaintFilter::new(Some("OPEN"), "leak");
        assert!(filter.apply(&board()).is_empty());
    }
}
