//! CLI Commands module
//!
//! Each command follows a consistent pattern with dedicated Args and
//! Command structs.

pub mod add;
pub mod edit;
pub mod export;
pub mod list;
pub mod paid;
pub mod remove;
pub mod summary;
pub mod version;
