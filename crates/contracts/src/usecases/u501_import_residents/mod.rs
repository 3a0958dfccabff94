//! Bulk resident import: CSV file → one `POST /users/register` per row,
//! submitted strictly one after another.

pub mod columns;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod row;

pub use columns::{ColumnMap, ResidentField};
pub use error::ImportError;
pub use pipeline::{ImportReport, ResidentImporter, ResidentRegistry, RowTask};
pub use progress::{ImportOutcome, ImportStatus, RowResult};
pub use row::{
    parse_residents, ResidentRow, DEFAULT_FULL_NAME, DEFAULT_RESIDENT_PASSWORD, DEFAULT_ROLE,
};

use crate::usecases::common::UseCaseMetadata;

pub struct ImportResidents;

impl UseCaseMetadata for ImportResidents {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_residents"
    }

    fn display_name() -> &'static str {
        "Bulk Import CSV"
    }

    fn description() -> &'static str {
        "Register every resident listed in a CSV file with the society"
    }
}
