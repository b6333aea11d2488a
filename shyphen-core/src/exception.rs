//! Pre-hyphenated exception words

use smallvec::SmallVec;

use crate::types::fold_case;

/// Character indices of the hyphen-free word at which a split is made
pub type Locations = SmallVec<[usize; 4]>;

/// Marker used in exception sources and in rendered exceptions
pub const EXCEPTION_HYPHEN: char = '-';

/// A word whose split points are given explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    identifier: String,
    locations: Locations,
}

impl Exception {
    /// Decompose a hyphenated word such as `as-so-ciate`.
    ///
    /// Never fails. A word without hyphens is legal and produces no
    /// locations.
    pub fn parse(word: &str) -> Self {
        let mut identifier = String::with_capacity(word.len());
        let mut locations = Locations::new();
        let mut count = 0;

        for ch in word.chars() {
            if ch == EXCEPTION_HYPHEN {
                locations.push(count);
            } else {
                identifier.push(fold_case(ch));
                count += 1;
            }
        }

        Self {
            identifier,
            locations,
        }
    }

    /// Lowercase, hyphen-free lookup key
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Split locations in ascending order
    pub fn locations(&self) -> &[usize] {
        &self.locations
    }

    /// Insert `separator` into `word` at every location.
    ///
    /// `word` keeps its case. Locations at either edge of `word`, or past its
    /// end, are ignored.
    pub fn render(&self, word: &str, separator: char) -> String {
        insert_separators(word, &self.locations, separator)
    }
}

/// Insert `separator` into `word` before each character index in `points`.
///
/// `points` must be ascending. Indices of zero or at least the word length
/// are skipped, so the result never starts or ends with a separator.
pub fn insert_separators(word: &str, points: &[usize], separator: char) -> String {
    let mut output = String::with_capacity(word.len() + points.len() * separator.len_utf8());
    let mut pending = points.iter().copied().peekable();

    for (index, ch) in word.chars().enumerate() {
        while pending.next_if(|&point| point <= index).is_some() {
            if index > 0 {
                output.push(separator);
            }
        }
        output.push(ch);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let exception = Exception::parse("as-so-ciate");
        assert_eq!(exception.identifier(), "associate");
        assert_eq!(exception.locations(), &[2, 4]);
    }

    #[test]
    fn test_parse_folds_case() {
        let exception = Exception::parse("Ta-Ble");
        assert_eq!(exception.identifier(), "table");
        assert_eq!(exception.locations(), &[2]);
    }

    #[test]
    fn test_no_hyphens() {
        let exception = Exception::parse("present");
        assert_eq!(exception.identifier(), "present");
        assert!(exception.locations().is_empty());
        assert_eq!(exception.render("Present", '-'), "Present");
    }

    #[test]
    fn test_render_keeps_case() {
        let exception = Exception::parse("re-cog-ni-zance");
        assert_eq!(exception.render("Recognizance", '-'), "Re-cog-ni-zance");
        assert_eq!(
            exception.render("recognizance", '\u{AD}'),
            "re\u{AD}cog\u{AD}ni\u{AD}zance"
        );
    }

    #[test]
    fn test_render_ignores_out_of_range_locations() {
        let exception = Exception::parse("ab-cd-");
        assert_eq!(exception.locations(), &[2, 4]);
        assert_eq!(exception.render("abcd", '-'), "ab-cd");
    }

    #[test]
    fn test_edge_hyphens() {
        let exception = Exception::parse("-abc");
        assert_eq!(exception.locations(), &[0]);
        assert_eq!(exception.render("abc", '-'), "abc");
    }
}
