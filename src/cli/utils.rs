//! Shared CLI utilities.

/// Join scheme names for display, or `-` when there are none.
pub fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
