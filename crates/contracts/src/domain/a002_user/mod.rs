pub mod aggregate;
pub mod dto;

pub use aggregate::{User, UserId, UserRole};
pub use dto::RegisterUserDto;
