//! Core domain types and logic.

pub mod number_parser;
pub mod interest;
pub mod operation;
pub mod formatter;
pub mod config_validation;
pub mod error;
