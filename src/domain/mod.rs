//! Domain models and types for Inventario.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ArticleId`], [`LoanId`], [`MovementId`], [`OptionId`])
//! - **Entities** mirrored from the inventory server ([`Article`], [`LoanRecord`], [`MovementRecord`])
//! - **Error types** ([`InventarioError`], [`ApiError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Ids are newtypes over the server's integer keys, so an article id can't be
//! passed where a loan id is expected:
//!
//! ```rust
//! use inventario::domain::{ArticleId, LoanId};
//!
//! let article = ArticleId::new(1);
//! let loan = LoanId::new(1);
//! assert_eq!(article.get(), loan.get());
//! // let wrong: ArticleId = loan;  // Compile error!
//! ```
//!
//! # Unresolved references
//!
//! Loan records may reference articles, people or reasons that no longer
//! resolve. Accessors return the `"N/D"` placeholder instead of failing:
//!
//! ```rust
//! use inventario::domain::LoanRecord;
//!
//! let loan: LoanRecord = serde_json::from_str(
//!     r#"{"id": 1, "articulo": null, "cantidad_restante": 2,
//!         "personal": null, "fecha_prestamo": "2024-10-14T10:00:00Z"}"#,
//! ).unwrap();
//! assert_eq!(loan.article_name(), "N/D");
//! assert!(loan.is_active());
//! ```

pub mod article;
mod de;
pub mod errors;
pub mod ids;
pub mod loan;
pub mod movement;
pub mod option;
pub mod result;

// Re-export commonly used types for convenience
pub use article::{Article, ArticleCondition};
pub use errors::{ApiError, InventarioError};
pub use ids::{ArticleId, LoanId, MovementId, OptionId};
pub use loan::{ArticleRef, LoanRecord, Person, Reason, PLACEHOLDER};
pub use movement::{MovementRecord, MovementType};
pub use option::SelectableOption;
pub use result::Result;
