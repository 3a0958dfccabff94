pub mod aggregate;

pub use aggregate::{parse_count, Society, SocietyId, SocietyUpdateDto, AMENITIES};
