//! Domain identifier types
//!
//! Newtype wrappers for the numeric primary keys the inventory server hands
//! out. Each type keeps article, loan, movement and option ids from being
//! mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw server id
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw id
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| format!("Invalid {}: '{}'", $label, s))
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Article identifier
    ///
    /// ```
    /// use inventario::domain::ids::ArticleId;
    /// use std::str::FromStr;
    ///
    /// let id = ArticleId::from_str("42").unwrap();
    /// assert_eq!(id.get(), 42);
    /// ```
    ArticleId,
    "article id"
);

numeric_id!(
    /// Loan record identifier
    LoanId,
    "loan id"
);

numeric_id!(
    /// Stock movement identifier
    MovementId,
    "movement id"
);

numeric_id!(
    /// Identifier of an option offered by the selection widget
    OptionId,
    "option id"
);
