//! Thread-safe soft hyphenation
//!
//! This crate wraps the pattern and exception tables of `shyphen-core` in a
//! [`Hyphenator`] that inserts separators into running text, caches results
//! per word and can be reconfigured at runtime.
//!
//! # Example
//!
//! ```rust
//! use shyphen_engine::Hyphenator;
//!
//! # fn main() -> shyphen_engine::Result<()> {
//! let hyphenator = Hyphenator::new();
//! hyphenator.set_separator('-')?;
//!
//! assert_eq!(hyphenator.hyphenate("hyphenation"), "hy-phen-ation");
//! assert_eq!(hyphenator.unhyphenate("hy-phen-ation"), "hyphenation");
//!
//! hyphenator.add_custom_exceptions(["pro-ject"]);
//! assert_eq!(hyphenator.hyphenate("project"), "pro-ject");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod error;
pub mod hyphenator;
pub mod input;

// Re-export key types
pub use cache::ResultCache;
pub use config::{DataConfig, EngineConfig, HyphenationConfig, SOFT_HYPHEN};
pub use error::{EngineError, Result};
pub use hyphenator::{Hyphenator, HyphenatorBuilder};
pub use input::Source;

// Re-export from core for convenience
pub use shyphen_core::{PatternError, PatternSet, Span, SpanKind, Tokenizer};
