//! Human-readable list joining ("a, b and c").

/// Joins phrases as prose: all but the last comma-separated, then the
/// conjunction, then the last one.
///
/// A single phrase is returned as-is; an empty slice yields an empty string.
pub fn join_human<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{} {} {}", head.join(", "), conjunction, last.as_ref())
        }
    }
}
