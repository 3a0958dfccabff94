//! Typed access to the society management REST API.

pub mod client;
pub mod complaints;
pub mod societies;
pub mod users;

pub use client::ApiClient;
