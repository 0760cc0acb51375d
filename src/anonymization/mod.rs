//! Anonymization module for Mascara
//!
//! Detects and masks PII in free-form text: CPF and CNPJ numbers, email
//! addresses, phone numbers and, optionally, proper names.
//!
//! # Architecture
//!
//! - **Cleaning**: separator stripping for document numbers
//! - **Masking**: one independent pass per PII category
//! - **Engine**: runs the passes in a fixed order
//! - **Report**: per-category counts for a run, never the matched values
//!
//! # Usage
//!
//! ```rust
//! use mascara::anonymization::{anonymize_text, AnonymizationOptions};
//!
//! let text = "Contato: joao@email.com, CPF 123.456.789-09. João Silva, Doutor.";
//! let masked = anonymize_text(text, &AnonymizationOptions::with_names());
//! assert_eq!(masked, "C*: j*@e*.com, CPF ***.456.789-**. J* S*, Doutor.");
//! ```

pub mod cleaner;
pub mod config;
pub mod engine;
pub mod exclusions;
pub mod masker;
pub mod models;
pub mod report;

// Re-export main types
pub use config::AnonymizationOptions;
pub use engine::{anonymize_text, AnonymizationEngine, MaskOutcome};
pub use exclusions::ExclusionList;
pub use masker::{MaskingPass, PassOutput};
pub use models::PiiCategory;
pub use report::MaskReport;
