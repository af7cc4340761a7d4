//! Slug generation for human-readable calendar identifiers.
//!
//! ## Summary
//! Generates stable, URL-safe slugs from calendar names. Slugs are lowercase,
//! alphanumeric with hyphens, and don't change even if the calendar is renamed.

/// Generate a URL-safe slug from a name.
///
/// Lowercases ASCII alphanumeric runs and joins them with single hyphens;
/// every other character acts as a separator. Edge hyphens never appear.
/// A name with no alphanumeric characters produces an empty slug, which
/// callers must treat as invalid.
///
/// Examples:
/// - "My Calendar" -> "my-calendar"
/// - "Team #2 (Berlin)" -> "team-2-berlin"
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut separated = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if separated && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            separated = false;
        } else {
            separated = true;
        }
    }
    slug
}
