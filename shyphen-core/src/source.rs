//! Splitting of pattern and exception sources into tokens

/// Marker that starts a comment line
pub const COMMENT_PREFIX: &str = "//";

/// Iterate over the whitespace-separated tokens of a data source.
///
/// Lines whose first non-blank characters are `//` are skipped entirely.
pub fn tokens(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .filter(|line| !line.trim_start().starts_with(COMMENT_PREFIX))
        .flat_map(str::split_whitespace)
}
