//! Domain types and validation rules shared by the Pawsome crates.

pub mod dog;
pub mod error;
pub mod patch;
pub mod types;
