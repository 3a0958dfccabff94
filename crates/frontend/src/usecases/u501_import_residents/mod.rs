pub mod registry;
pub mod view;

pub use registry::WebResidentRegistry;
pub use view::ResidentImport;
