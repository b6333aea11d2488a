//! Splitting text into hyphenatable and non-hyphenatable spans

use std::iter::FusedIterator;

use crate::types::is_letter;

/// Hyphen that glues two letter runs into a compound
const HYPHEN: char = '-';

/// Whether the engine may insert separators into a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// A maximal run of letters
    Hyphenatable,
    /// Anything else, including compounds such as `pre-hyphenated`
    NonHyphenatable,
}

/// A slice of the input with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// The text of the span, borrowed from the input
    pub text: &'a str,
    /// Classification
    pub kind: SpanKind,
}

impl<'a> Span<'a> {
    /// Whether the span may receive separators
    pub fn is_hyphenatable(&self) -> bool {
        self.kind == SpanKind::Hyphenatable
    }
}

/// Lazy single-pass span iterator.
///
/// A `-` or the separator between two letters joins both letter runs into
/// one non-hyphenatable span, so already hyphenated words pass through
/// untouched. Concatenating all spans yields the input.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    position: usize,
    separator: char,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `text`, treating `separator` like `-`
    pub fn new(text: &'a str, separator: char) -> Self {
        Self {
            text,
            position: 0,
            separator,
        }
    }

    fn is_joiner(&self, ch: char) -> bool {
        ch == HYPHEN || ch == self.separator
    }

    /// Byte length of the letter run (with glued compounds) at the start of
    /// `rest`, and whether any joiner was crossed
    fn scan_letters(&self, rest: &str) -> (usize, bool) {
        let mut chars = rest.char_indices().peekable();
        let mut end = 0;
        let mut glued = false;

        while let Some((index, ch)) = chars.next() {
            if is_letter(ch) {
                end = index + ch.len_utf8();
                continue;
            }
            if self.is_joiner(ch) {
                if let Some(&(_, next)) = chars.peek() {
                    if is_letter(next) {
                        glued = true;
                        continue;
                    }
                }
            }
            break;
        }

        (end, glued)
    }

    fn scan_other(rest: &str) -> usize {
        rest.char_indices()
            .find(|&(_, ch)| is_letter(ch))
            .map_or(rest.len(), |(index, _)| index)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let rest = &text[self.position..];
        let first = rest.chars().next()?;

        let (len, kind) = if is_letter(first) {
            let (len, glued) = self.scan_letters(rest);
            let kind = if glued {
                SpanKind::NonHyphenatable
            } else {
                SpanKind::Hyphenatable
            };
            (len, kind)
        } else {
            (Self::scan_other(rest), SpanKind::NonHyphenatable)
        };

        self.position += len;
        Some(Span {
            text: &rest[..len],
            kind,
        })
    }
}

impl FusedIterator for Tokenizer<'_> {}
