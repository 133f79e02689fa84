//! Free-text filtering shared by every search box
//!
//! Matching is a case-insensitive substring test. An empty query keeps
//! everything, in input order. Inputs are borrowed, never modified.

/// Items whose extracted text contains `query`, ignoring case
///
/// # Example
///
/// ```rust
/// use inventario::core::filter::filter;
///
/// let nombres = ["Taladro", "Pala", "Martillo"];
/// let hits = filter(&nombres, "LA", |n| n.to_string());
/// assert_eq!(hits, vec!["Taladro", "Pala"]);
/// ```
pub fn filter<T, F, S>(items: &[T], query: &str, extract: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> S,
    S: AsRef<str>,
{
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| contains(extract(item).as_ref(), &needle))
        .cloned()
        .collect()
}

/// Items where any of the extracted fields contains `query`, ignoring case
pub fn filter_any<T, F>(items: &[T], query: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<String>,
{
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| fields(item).iter().any(|f| contains(f, &needle)))
        .cloned()
        .collect()
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}
