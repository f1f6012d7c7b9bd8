//! # isotopia-core
//! Foundation types and traits for Isotopia decay curves.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
