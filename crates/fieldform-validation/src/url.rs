//! URL validation

use crate::bounds::LengthBounds;

/// Prefixes removed before the host is inspected.
const IGNORED_PREFIXES: &[&str] = &["http://", "https://", "www."];

/// Validates a URL.
///
/// Every occurrence of `http://`, `https://` and `www.` is removed first; what
/// remains must still hold two non-empty labels around a `.`.
pub fn is_valid_url(value: &str, bounds: LengthBounds) -> bool {
    if value.is_empty() || !bounds.contains(value) {
        return false;
    }

    let host = strip_ignored_prefixes(value);
    let mut labels = host.split('.');
    matches!(
        (labels.next(), labels.next()),
        (Some(name), Some(extension)) if !name.is_empty() && !extension.is_empty()
    )
}

fn strip_ignored_prefixes(value: &str) -> String {
    IGNORED_PREFIXES
        .iter()
        .fold(value.to_string(), |acc, prefix| acc.replace(prefix, ""))
}
