//! Small view-layer helpers shared across components.

/// Composes a class string from conditional fragments, skipping empty ones.
///
/// Fragments are joined with single spaces, so callers can hand in `""` for
/// branches that contribute nothing.
#[must_use]
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
