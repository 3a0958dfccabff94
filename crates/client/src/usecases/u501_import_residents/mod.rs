pub mod executor;

pub use executor::{import_file, preview_file, ImportPreview};
