//! Shared types for the society admin clients.
//!
//! Everything here is platform neutral: the native `client` crate and the
//! wasm `frontend` console both depend on it.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
