//! Core operations.
//!
//! This module contains the business logic for typesnip commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod languages;

pub use check::check;
pub use generate::{WriteOptions, generate};
pub use languages::languages;
