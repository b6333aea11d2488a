//! Built-in US English hyphenation data
//!
//! The tables are embedded at compile time and parsed on first use. Every
//! engine built from the defaults shares the same parsed tables.

use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::exception_set::{parse_table, ExceptionTable};
use crate::pattern_set::PatternSet;

/// Embedded US English patterns
pub const PATTERNS_EN_US: &str = include_str!("../data/hyph-en-us.pat.txt");

/// Embedded US English exceptions
pub const EXCEPTIONS_EN_US: &str = include_str!("../data/hyph-en-us.hyp.txt");

static PATTERNS: OnceLock<Arc<PatternSet>> = OnceLock::new();
static EXCEPTIONS: OnceLock<Arc<ExceptionTable>> = OnceLock::new();

/// Shared built-in pattern set
pub fn patterns() -> Arc<PatternSet> {
    let set = PATTERNS.get_or_init(|| match PatternSet::parse(PATTERNS_EN_US) {
        Ok(set) => Arc::new(set),
        Err(e) => {
            warn!("Failed to parse built-in patterns: {e}");
            Arc::new(PatternSet::default())
        }
    });
    Arc::clone(set)
}

/// Shared built-in exception table
pub fn exceptions() -> Arc<ExceptionTable> {
    Arc::clone(EXCEPTIONS.get_or_init(|| Arc::new(parse_table(EXCEPTIONS_EN_US))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_parse() {
        let set = PatternSet::parse(PATTERNS_EN_US).unwrap();
        assert!(set.len() > 4000);
        assert_eq!(set.max_identifier_len(), 8);
    }

    #[test]
    fn test_builtin_exceptions() {
        let table = exceptions();
        assert_eq!(table.len(), 14);
        assert_eq!(table["associate"].locations(), &[2, 4]);
        assert!(table["project"].locations().is_empty());
    }

    #[test]
    fn test_tables_are_shared() {
        assert!(Arc::ptr_eq(&patterns(), &patterns()));
        assert!(Arc::ptr_eq(&exceptions(), &exceptions()));
    }

    #[test]
    fn test_builtin_breaks() {
        let set = patterns();
        assert_eq!(set.break_points("hyphenation", 2, 3), vec![2, 6]);
        assert_eq!(set.break_points("cupidity", 2, 3), vec![2, 5]);
    }
}
