//! Knuth-Liang hyphenation data layer
//!
//! This crate holds the deterministic parts of the hyphenation pipeline:
//! parsing Liang patterns and exception words, matching patterns against a
//! word to find its break points, and splitting running text into spans that
//! may or may not be hyphenated. It performs no I/O; sources are passed in
//! as strings.
//!
//! # Example
//!
//! ```rust
//! use shyphen_core::{insert_separators, PatternSet, Tokenizer};
//!
//! let patterns = PatternSet::parse("hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n").unwrap();
//!
//! let mut output = String::new();
//! for span in Tokenizer::new("hyphenation!", '-') {
//!     if span.is_hyphenatable() {
//!         let points = patterns.break_points(span.text, 2, 3);
//!         output.push_str(&insert_separators(span.text, &points, '-'));
//!     } else {
//!         output.push_str(span.text);
//!     }
//! }
//! assert_eq!(output, "hy-phen-ation!");
//! ```

pub mod defaults;
pub mod error;
pub mod exception;
pub mod exception_set;
pub mod pattern;
pub mod pattern_set;
pub mod source;
pub mod tokenizer;
pub mod types;

pub use error::{PatternError, Result};
pub use exception::{insert_separators, Exception, Locations};
pub use exception_set::{ExceptionSet, ExceptionTable};
pub use pattern::{Pattern, Priorities};
pub use pattern_set::PatternSet;
pub use tokenizer::{Span, SpanKind, Tokenizer};
