//! Header → field mapping for the resident CSV.

use csv::StringRecord;

/// Fields a resident row can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidentField {
    FullName,
    Email,
    Role,
    FlatNo,
    PhoneNumber,
}

impl ResidentField {
    pub const ALL: [ResidentField; 5] = [
        ResidentField::FullName,
        ResidentField::Email,
        ResidentField::Role,
        ResidentField::FlatNo,
        ResidentField::PhoneNumber,
    ];

    /// Accepted header spellings after normalisation, highest priority first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ResidentField::FullName => &["fullname", "name", "residentname"],
            ResidentField::Email => &["email", "emailaddress"],
            ResidentField::Role => &["role"],
            ResidentField::FlatNo => &["flatno", "flat", "flatnumber", "unit"],
            ResidentField::PhoneNumber => &["phone", "phonenumber", "mobile"],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResidentField::FullName => "FullName",
            ResidentField::Email => "Email",
            ResidentField::Role => "Role",
            ResidentField::FlatNo => "FlatNo",
            ResidentField::PhoneNumber => "Phone",
        }
    }

    fn slot(&self) -> usize {
        match self {
            ResidentField::FullName => 0,
            ResidentField::Email => 1,
            ResidentField::Role => 2,
            ResidentField::FlatNo => 3,
            ResidentField::PhoneNumber => 4,
        }
    }
}

/// "Full Name", "full_name" и "FULL-NAME" сводятся к "fullname"
pub fn normalize_header(header: &str) -> String {
    header
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Column indices per field, ordered by alias priority and then by position
/// in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [Vec<usize>; 5],
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let mut map = ColumnMap::default();

        for field in ResidentField::ALL {
            let slot = &mut map.columns[field.slot()];
            for alias in field.aliases() {
                for (idx, header) in normalized.iter().enumerate() {
                    if header == alias {
                        slot.push(idx);
                    }
                }
            }
        }

        map
    }

    pub fn columns(&self, field: ResidentField) -> &[usize] {
        &self.columns[field.slot()]
    }

    /// Fields with no matching column at all. Rows still import; the
    /// missing values fall back to their defaults.
    pub fn unmapped(&self) -> Vec<ResidentField> {
        ResidentField::ALL
            .into_iter()
            .filter(|f| self.columns(*f).is_empty())
            .collect()
    }

    /// Первое непустое значение среди подходящих колонок
    pub fn value(&self, record: &StringRecord, field: ResidentField) -> Option<String> {
        self.columns(field)
            .iter()
            .filter_map(|&idx| record.get(idx))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }
}
