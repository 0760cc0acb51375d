//! Anonymization data models

pub mod pii_category;

pub use pii_category::PiiCategory;
