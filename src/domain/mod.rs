//! Domain types shared across Mascara.
//!
//! # Error Handling
//!
//! Fallible operations outside the masking core return [`Result<T, MascaraError>`]:
//!
//! ```rust
//! use mascara::domain::{MascaraError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = mascara::config::load_config_or_default("mascara.toml")?;
//!     if !config.anonymization.anonymize_names {
//!         return Err(MascaraError::Other("names disabled".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::MascaraError;
pub use result::Result;
