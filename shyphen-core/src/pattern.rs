//! Single Liang pattern parsing
//!
//! A pattern such as `.hy3ph` or `4tio` interleaves letters with priority
//! digits. Parsing separates the two: the letters (plus an optional anchor
//! period) form the identifier used as lookup key, and every digit becomes a
//! priority attached to the gap before the letter that follows it.

use smallvec::SmallVec;

use crate::error::{PatternError, Result};
use crate::types::{fold_case, Class};

/// Offset/priority pairs sorted by offset.
///
/// Offsets count letters from the first letter of the identifier; a leading
/// anchor period does not shift them.
pub type Priorities = SmallVec<[(usize, u8); 4]>;

/// A parsed hyphenation pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    identifier: String,
    priorities: Priorities,
}

impl Pattern {
    /// Parse one pattern token.
    ///
    /// Checks run in order: missing letter or digit, invalid characters
    /// (a period is valid only as a single leading or trailing anchor), then
    /// adjacent digits.
    pub fn parse(token: &str) -> Result<Self> {
        let classes: Vec<Class> = token.chars().map(Class::from_char).collect();

        let has_letter = classes.iter().any(|class| class.is_letter());
        let has_digit = classes.iter().any(|class| class.is_digit());
        if !has_letter || !has_digit {
            return Err(PatternError::DeficientPattern(token.to_string()));
        }

        let last = classes.len() - 1;
        let periods = classes.iter().filter(|&&c| c == Class::Period).count();
        for (index, class) in classes.iter().enumerate() {
            match class {
                Class::Letter | Class::Digit(_) => {}
                Class::Period if periods == 1 && (index == 0 || index == last) => {}
                _ => return Err(PatternError::InvalidCharacter(token.to_string())),
            }
        }

        if classes
            .windows(2)
            .any(|pair| pair[0].is_digit() && pair[1].is_digit())
        {
            return Err(PatternError::ConsecutiveDigits(token.to_string()));
        }

        let mut identifier = String::with_capacity(token.len());
        let mut priorities = Priorities::new();
        let mut offset = 0;
        for (ch, class) in token.chars().zip(classes) {
            match class {
                Class::Digit(value) => priorities.push((offset, value)),
                Class::Letter => {
                    identifier.push(fold_case(ch));
                    offset += 1;
                }
                // Validation leaves only anchor periods here
                Class::Period | Class::Other => identifier.push(ch),
            }
        }

        Ok(Self {
            identifier,
            priorities,
        })
    }

    /// Lookup key: lowercase letters plus any anchor period
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Priorities keyed by letter offset
    pub fn priorities(&self) -> &[(usize, u8)] {
        &self.priorities
    }

    /// Whether the pattern only matches at the start of a word
    pub fn is_start_anchored(&self) -> bool {
        self.identifier.starts_with('.')
    }

    /// Whether the pattern only matches at the end of a word
    pub fn is_end_anchored(&self) -> bool {
        self.identifier.ends_with('.')
    }

    /// Split into identifier and priorities
    pub fn into_parts(self) -> (String, Priorities) {
        (self.identifier, self.priorities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pattern() {
        let pattern = Pattern::parse("hy3ph").unwrap();
        assert_eq!(pattern.identifier(), "hyph");
        assert_eq!(pattern.priorities(), &[(2, 3)]);
        assert!(!pattern.is_start_anchored());
        assert!(!pattern.is_end_anchored());
    }

    #[test]
    fn test_digits_at_edges() {
        let pattern = Pattern::parse("4b1d").unwrap();
        assert_eq!(pattern.identifier(), "bd");
        assert_eq!(pattern.priorities(), &[(0, 4), (1, 1)]);

        let pattern = Pattern::parse("aff4").unwrap();
        assert_eq!(pattern.priorities(), &[(3, 4)]);
    }

    #[test]
    fn test_leading_anchor_does_not_shift_offsets() {
        let pattern = Pattern::parse(".ach4").unwrap();
        assert_eq!(pattern.identifier(), ".ach");
        assert_eq!(pattern.priorities(), &[(3, 4)]);
        assert!(pattern.is_start_anchored());

        let pattern = Pattern::parse(".eq5ui5t").unwrap();
        assert_eq!(pattern.identifier(), ".equit");
        assert_eq!(pattern.priorities(), &[(2, 5), (4, 5)]);
    }

    #[test]
    fn test_trailing_anchor() {
        let pattern = Pattern::parse("4ab.").unwrap();
        assert_eq!(pattern.identifier(), "ab.");
        assert_eq!(pattern.priorities(), &[(0, 4)]);
        assert!(pattern.is_end_anchored());
    }

    #[test]
    fn test_uppercase_is_folded() {
        let pattern = Pattern::parse("Hy3Ph").unwrap();
        assert_eq!(pattern.identifier(), "hyph");
    }

    #[test]
    fn test_deficient_patterns() {
        assert_eq!(
            Pattern::parse("hyph"),
            Err(PatternError::DeficientPattern("hyph".to_string()))
        );
        assert!(matches!(
            Pattern::parse("123"),
            Err(PatternError::DeficientPattern(_))
        ));
        assert!(matches!(
            Pattern::parse("."),
            Err(PatternError::DeficientPattern(_))
        ));
        // zero is not a priority digit
        assert!(matches!(
            Pattern::parse("hy0ph"),
            Err(PatternError::DeficientPattern(_))
        ));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            Pattern::parse("hy3ph;"),
            Err(PatternError::InvalidCharacter("hy3ph;".to_string()))
        );
        assert!(matches!(
            Pattern::parse("hy0p1h"),
            Err(PatternError::InvalidCharacter(_))
        ));
        assert!(matches!(
            Pattern::parse(".hy3ph."),
            Err(PatternError::InvalidCharacter(_))
        ));
        assert!(matches!(
            Pattern::parse("hy.3ph"),
            Err(PatternError::InvalidCharacter(_))
        ));
    }

    #[test]
    fn test_consecutive_digits() {
        assert_eq!(
            Pattern::parse("hy33ph"),
            Err(PatternError::ConsecutiveDigits("hy33ph".to_string()))
        );
        assert!(matches!(
            Pattern::parse("1hy34ph"),
            Err(PatternError::ConsecutiveDigits(_))
        ));
        assert!(Pattern::parse("hy3p4h").is_ok());
        assert!(Pattern::parse(".1hy3p4h5").is_ok());
        // a period between digits is never an anchor
        assert!(matches!(
            Pattern::parse("ab1.2"),
            Err(PatternError::InvalidCharacter(_))
        ));
        assert!(matches!(
            Pattern::parse("1.2ab"),
            Err(PatternError::InvalidCharacter(_))
        ));
    }

    #[test]
    fn test_validation_order() {
        // deficient wins over invalid character
        assert!(matches!(
            Pattern::parse("hy;ph"),
            Err(PatternError::DeficientPattern(_))
        ));
        // invalid character wins over consecutive digits
        assert!(matches!(
            Pattern::parse("hy33ph!"),
            Err(PatternError::InvalidCharacter(_))
        ));
    }
}
