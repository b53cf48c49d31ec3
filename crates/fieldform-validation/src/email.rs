//! Email validation

use crate::bounds::LengthBounds;

/// Validates an email address.
///
/// Accepts exactly one `@` with a non-empty local part, and a domain whose
/// first two `.`-separated labels are both non-empty (`b.co`, `mail.example.org`).
pub fn is_valid_email(value: &str, bounds: LengthBounds) -> bool {
    if value.is_empty() || !bounds.contains(value) {
        return false;
    }

    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    let mut labels = domain.split('.');
    matches!(
        (labels.next(), labels.next()),
        (Some(name), Some(extension)) if !name.is_empty() && !extension.is_empty()
    )
}
