//! Utility functions for the Opsdeck backend

/// Case-insensitive substring containment.
///
/// An empty needle matches everything, which is what makes an empty
/// search box a no-op filter.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether any of the given fields contains the query, ignoring case
#[must_use]
pub fn matches_any(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|field| contains_ignore_case(field, query))
}

/// Format a whole-dollar amount with thousands separators ("$1,247")
#[must_use]
pub fn format_dollars(amount: i64) -> String {
    format!("${}", group_thousands(amount))
}

/// Format a count with thousands separators ("20,300")
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Initials for an avatar fallback ("Sarah Johnson" -> "SJ")
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
