//! Loan history domain model
//!
//! Loan records reference an article, a person and a reason. Any of those
//! references can come back unresolved (`null`); accessors degrade to
//! [`PLACEHOLDER`] instead of failing.

use super::de::{null_as_default, optional_timestamp};
use super::ids::LoanId;
use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

/// Display value for unresolved references
pub const PLACEHOLDER: &str = "N/D";

/// Date format used for loan dates in tables and reports
pub const LOAN_DATE_FORMAT: &str = "%d-%m-%Y";

/// A nested reference to an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    /// Article primary key
    #[serde(default)]
    pub id: Option<i64>,

    /// Article name
    #[serde(default)]
    pub nombre: Option<String>,
}

/// Person who received the loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Person primary key
    #[serde(default)]
    pub id: Option<i64>,

    /// Full name
    #[serde(default)]
    pub nombre: Option<String>,

    /// Institutional e-mail, shown under the name when present
    #[serde(default)]
    pub correo_institucional: Option<String>,
}

/// Reason recorded for a loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    /// Reason primary key
    #[serde(default)]
    pub id: Option<i64>,

    /// Reason name (may be missing even when the reference resolves)
    #[serde(default)]
    pub nombre: Option<String>,
}

/// One entry of the loan history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Server primary key
    pub id: LoanId,

    /// Loaned article
    #[serde(default)]
    pub articulo: Option<ArticleRef>,

    /// Units not yet returned
    #[serde(default, deserialize_with = "null_as_default")]
    pub cantidad_restante: u32,

    /// Borrower
    #[serde(default)]
    pub personal: Option<Person>,

    /// When the loan was registered
    pub fecha_prestamo: DateTime<FixedOffset>,

    /// When the loan was fully returned
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub fecha_devolucion: Option<DateTime<FixedOffset>>,

    /// Why the article was loaned
    #[serde(default)]
    pub motivo: Option<Reason>,
}

impl LoanRecord {
    /// Units are still out and no return date has been recorded
    pub fn is_active(&self) -> bool {
        self.cantidad_restante > 0 && self.fecha_devolucion.is_none()
    }

    /// Article name or [`PLACEHOLDER`]
    pub fn article_name(&self) -> &str {
        self.articulo
            .as_ref()
            .and_then(|a| a.nombre.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(PLACEHOLDER)
    }

    /// Borrower name or [`PLACEHOLDER`]
    pub fn person_name(&self) -> &str {
        self.personal
            .as_ref()
            .and_then(|p| p.nombre.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(PLACEHOLDER)
    }

    /// Borrower e-mail, empty when unknown
    pub fn person_email(&self) -> &str {
        self.personal
            .as_ref()
            .and_then(|p| p.correo_institucional.as_deref())
            .unwrap_or("")
    }

    /// Reason name or [`PLACEHOLDER`]
    pub fn reason_name(&self) -> &str {
        self.motivo
            .as_ref()
            .and_then(|m| m.nombre.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(PLACEHOLDER)
    }

    /// Loan date rendered in the given zone as `dd-mm-yyyy`
    pub fn loan_date_label<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.fecha_prestamo
            .with_timezone(tz)
            .format(LOAN_DATE_FORMAT)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::Santiago;

    fn loan_json(extra: &str) -> String {
        format!(
            r#"{{"id": 1, "cantidad_restante": 2, "fecha_prestamo": "2024-10-14T15:00:00Z"{extra}}}"#
        )
    }

    #[test]
    fn test_unresolved_references_use_placeholder() {
        let loan: LoanRecord = serde_json::from_str(&loan_json(
            r#", "articulo": null, "personal": null, "motivo": null"#,
        ))
        .unwrap();
        assert_eq!(loan.article_name(), PLACEHOLDER);
        assert_eq!(loan.person_name(), PLACEHOLDER);
        assert_eq!(loan.reason_name(), PLACEHOLDER);
        assert_eq!(loan.person_email(), "");
    }

    #[test]
    fn test_reason_without_name_uses_placeholder() {
        let loan: LoanRecord =
            serde_json::from_str(&loan_json(r#", "motivo": {"id": 3, "nombre": null}"#)).unwrap();
        assert_eq!(loan.reason_name(), PLACEHOLDER);
    }

    #[test]
    fn test_article_and_person_without_name_use_placeholder() {
        let loan: LoanRecord = serde_json::from_str(&loan_json(
            r#", "articulo": {"id": 1, "nombre": null}, "personal": {"id": 4, "nombre": ""}"#,
        ))
        .unwrap();
        assert_eq!(loan.article_name(), PLACEHOLDER);
        assert_eq!(loan.person_name(), PLACEHOLDER);

        let history: Vec<LoanRecord> = serde_json::from_str(
            r#"[{"id": 1, "articulo": {"id": 1, "nombre": "Taladro"}, "cantidad_restante": 2,
                "personal": {"id": 4, "nombre": null}, "fecha_prestamo": "2024-10-14T15:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(history[0].article_name(), "Taladro");
        assert_eq!(history[0].person_name(), PLACEHOLDER);
    }

    #[test]
    fn test_active_requires_remaining_and_no_return() {
        let active: LoanRecord = serde_json::from_str(&loan_json("")).unwrap();
        assert!(active.is_active());

        let returned: LoanRecord = serde_json::from_str(&loan_json(
            r#", "fecha_devolucion": "2024-10-15T10:00:00Z""#,
        ))
        .unwrap();
        assert!(!returned.is_active());

        let mut drained = active.clone();
        drained.cantidad_restante = 0;
        assert!(!drained.is_active());
    }

    #[test]
    fn test_empty_return_date_is_absent() {
        let loan: LoanRecord =
            serde_json::from_str(&loan_json(r#", "fecha_devolucion": """#)).unwrap();
        assert!(loan.fecha_devolucion.is_none());
        assert!(loan.is_active());
    }

    #[test]
    fn test_loan_date_label_uses_zone() {
        // 02:00 UTC on the 15th is still the 14th in Santiago
        let mut loan: LoanRecord = serde_json::from_str(&loan_json("")).unwrap();
        loan.fecha_prestamo = DateTime::parse_from_rfc3339("2024-10-15T02:00:00Z").unwrap();
        assert_eq!(loan.loan_date_label(&Santiago), "14-10-2024");
    }
}
