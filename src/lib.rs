//! # Mascara - PII masking for free-form text
//!
//! Mascara masks Brazilian personal data in text: CPF and CNPJ numbers, email
//! addresses, phone numbers and, on request, proper names. Masked values keep
//! enough structure to stay recognizable:
//!
//! | PII   | Input                  | Output                 |
//! |-------|------------------------|------------------------|
//! | CPF   | `123.456.789-09`       | `***.456.789-**`       |
//! | CNPJ  | `11.222.333/0001-81`   | `**.***.333/0001-**`   |
//! | Email | `joao@email.com`       | `j*@e*.com`            |
//! | Phone | `(11) 91234-5678`      | `(11) *****-5678`      |
//! | Name  | `João`                 | `J*`                   |
//!
//! ## Architecture
//!
//! - [`anonymization`] - Masking passes, engine and reports
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration management
//! - [`domain`] - Error and result types
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use mascara::{anonymize_text, AnonymizationOptions};
//!
//! let text = "Contato: joao@email.com, CPF 123.456.789-09, tel (11) 91234-5678. João Silva, Doutor.";
//! let masked = anonymize_text(text, &AnonymizationOptions::with_names());
//!
//! assert_eq!(
//!     masked,
//!     "C*: j*@e*.com, CPF ***.456.789-**, tel (11) *****-5678. J* S*, Doutor."
//! );
//! ```
//!
//! Masking never fails. Candidates that look like a document or phone number
//! but have the wrong digit count once cleaned are left exactly as they were.
//!
//! ## Logging
//!
//! Mascara logs through `tracing` and never records input text or matched
//! values:
//!
//! ```rust,no_run
//! tracing::info!(masked = 3, "Text anonymized");
//! ```

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;

pub use anonymization::{anonymize_text, AnonymizationEngine, AnonymizationOptions};
