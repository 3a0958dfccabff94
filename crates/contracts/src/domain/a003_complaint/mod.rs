pub mod aggregate;
pub mod filter;

pub use aggregate::{Complaint, ComplaintId, ComplaintStatus, MediaKind};
pub use filter::ComplaintFilter;
