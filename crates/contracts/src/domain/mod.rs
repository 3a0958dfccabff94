pub mod a001_society;
pub mod a002_user;
pub mod a003_complaint;
pub mod common;
