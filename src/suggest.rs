//! Quick-action parameter suggestions for the offset input.

/// Offsets offered before the user has typed anything.
pub const DEFAULT_SUGGESTIONS: [&str; 5] = ["8", "16", "24", "48", "64"];

/// Candidates containing `query` anywhere, in their original order.
pub fn suggestions<'a, S>(candidates: &'a [S], query: &str) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| s.contains(query))
        .collect()
}
