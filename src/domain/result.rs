//! Result type alias for Inventario

use super::errors::InventarioError;

/// Result type alias for Inventario operations
///
/// # Examples
///
/// ```
/// use inventario::domain::result::Result;
/// use inventario::domain::errors::InventarioError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(InventarioError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, InventarioError>;
