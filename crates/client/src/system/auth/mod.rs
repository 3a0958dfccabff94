pub mod service;
pub mod storage;
pub mod token;

pub use service::{current_session, login, logout};
pub use storage::FileSessionStore;
pub use token::decode_claims;
