//! Result type alias for Mascara

use super::errors::MascaraError;

/// Result type alias for Mascara operations
///
/// # Examples
///
/// ```
/// use mascara::domain::result::Result;
/// use mascara::domain::errors::MascaraError;
///
/// fn read_input() -> Result<String> {
///     Ok("Contato: joao@email.com".to_string())
/// }
///
/// fn reject_blank() -> Result<()> {
///     Err(MascaraError::EmptyInput)
/// }
/// ```
pub type Result<T> = std::result::Result<T, MascaraError>;
