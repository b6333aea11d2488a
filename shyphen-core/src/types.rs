//! Core types for pattern parsing and tokenization

/// Coarse character classification for fast lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// Alphabetic character
    Letter,
    /// Priority digit `1`..=`9`, carrying its value
    Digit(u8),
    /// Period, the word-boundary anchor in patterns
    Period,
    /// Other character (including `0`)
    Other,
}

impl Class {
    /// Classify a character
    pub fn from_char(ch: char) -> Self {
        match ch {
            '1'..='9' => Class::Digit(ch as u8 - b'0'),
            '.' => Class::Period,
            c if c.is_alphabetic() => Class::Letter,
            _ => Class::Other,
        }
    }

    /// Whether this is a letter
    #[inline]
    pub fn is_letter(self) -> bool {
        self == Class::Letter
    }

    /// Whether this is a priority digit
    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self, Class::Digit(_))
    }
}

/// Check whether a character is a letter
#[inline]
pub fn is_letter(ch: char) -> bool {
    Class::from_char(ch).is_letter()
}

/// Lowercase a single character, keeping character counts stable.
///
/// Characters whose lowercase form expands to several characters keep only
/// the first one, so offsets computed on the folded word map one-to-one onto
/// the original word.
#[inline]
pub fn fold_case(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Lowercase a word with [`fold_case`]
pub fn fold_word(word: &str) -> String {
    word.chars().map(fold_case).collect()
}
