//! Domain building blocks shared by the database and API crates.

pub mod catalog;
pub mod error;
pub mod types;
