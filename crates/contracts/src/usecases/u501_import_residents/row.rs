//! Parsing of the uploaded file into [`ResidentRow`]s and the per-row
//! defaulting rules.

use csv::StringRecord;

use super::columns::{ColumnMap, ResidentField};
use super::error::ImportError;
use crate::domain::a001_society::SocietyId;
use crate::domain::a002_user::RegisterUserDto;

/// Password given to every imported account.
///
/// All residents created by one import share it, so a real deployment has to
/// force a password reset on first login.
pub const DEFAULT_RESIDENT_PASSWORD: &str = "ResidentPassword123!";
pub const DEFAULT_FULL_NAME: &str = "Unknown";
pub const DEFAULT_ROLE: &str = "RESIDENT";

/// One data row of the file. Blank cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentRow {
    /// Line of the record in the source file (header is line 1).
    pub line: u64,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub flat_no: Option<String>,
    pub phone_number: Option<String>,
}

impl ResidentRow {
    fn from_record(record: &StringRecord, map: &ColumnMap) -> Self {
        Self {
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            full_name: map.value(record, ResidentField::FullName),
            email: map.value(record, ResidentField::Email),
            role: map.value(record, ResidentField::Role),
            flat_no: map.value(record, ResidentField::FlatNo),
            phone_number: map.value(record, ResidentField::PhoneNumber),
        }
    }

    /// Registration request for this row. Missing values are defaulted, never
    /// a reason to skip the row.
    pub fn to_registration(&self, society_id: SocietyId) -> RegisterUserDto {
        RegisterUserDto {
            society_id,
            full_name: self
                .full_name
                .clone()
                .unwrap_or_else(|| DEFAULT_FULL_NAME.to_string()),
            email: self.email.clone(),
            password: DEFAULT_RESIDENT_PASSWORD.to_string(),
            role: self
                .role
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            flat_no: self.flat_no.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
        }
    }
}

/// Parse delimited text with a header row into resident rows.
///
/// Empty and whitespace-only lines are skipped. A row of empty cells (`,,`)
/// is kept and defaulted like any other. A record with the wrong number of
/// fields fails the whole file.
pub fn parse_residents(bytes: &[u8]) -> Result<(ColumnMap, Vec<ResidentRow>), ImportError> {
    // Strip UTF-8 BOM if present (Excel exports add it)
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers().map_err(|e| ImportError::parse(&e))?.clone();
    let map = ColumnMap::from_headers(&headers);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ImportError::parse(&e))?;
        if is_blank_line(&record) {
            continue;
        }
        if record.len() != headers.len() {
            return Err(ImportError::Parse {
                line: record.position().map(|p| p.line()),
                message: format!(
                    "expected {} fields, found {}",
                    headers.len(),
                    record.len()
                ),
            });
        }
        rows.push(ResidentRow::from_record(&record, &map));
    }

    Ok((map, rows))
}

// "   " или одиночный таб: одна пустая ячейка
fn is_blank_line(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}
