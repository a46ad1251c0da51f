use std::cmp::Ordering;

/// Renders names as `[a, b, c]`.
pub fn format_names<S: AsRef<str>>(names: &[S]) -> String {
    let joined = names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Search order: larger size token first, compared as plain strings.
/// Sizes are never interpreted numerically, so `"90kb"` sorts above
/// `"100kb"`.
pub fn by_size_desc(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}
