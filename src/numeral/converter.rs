//! Validation and conversion of Roman numerals to arabic values
//!
//! The converter works on canonical numerals (see
//! [`LatinNumberNormalizer`](super::LatinNumberNormalizer)). Tokens that are
//! not numerals, or are ill-formed numerals, are not an error: they simply
//! have no value and the filter leaves them untouched.

use super::tables::{HUNDRED_THOUSAND, is_main_letter, is_numeral_letter, letter_value};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Arabic value of a well-formed Roman numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumeralValue(u64);

impl NumeralValue {
    /// Returns the integer value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NumeralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of one reduction step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepKind {
    /// A letter that may repeat up to three times (`I X C M`, ...)
    Main,
    /// A letter that may not repeat (`V L D`, ...)
    Help,
    /// A subtractive pair such as `IX`
    Subtraction,
}

/// Converts Roman numerals to arabic values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatinNumberConverter {
    strict: bool,
}

impl LatinNumberConverter {
    /// Creates a converter; `strict` enables the subtraction-distance rules
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Creates a converter with strict validation enabled
    pub fn strict() -> Self {
        Self::new(true)
    }

    /// Returns whether strict validation is enabled
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Converts a token to its arabic value
    ///
    /// Returns `None` if the token contains characters outside the numeral
    /// alphabet, violates the ordering or repetition rules, or (in strict
    /// mode) subtracts too far. The empty token has value 0.
    pub fn convert(&self, token: &str) -> Option<NumeralValue> {
        if !token.chars().all(is_numeral_letter) {
            return None;
        }
        let letters: SmallVec<[(char, u64); 16]> = token
            .chars()
            .filter_map(|c| letter_value(c).map(|value| (c, u64::from(value))))
            .collect();
        self.reduce(&letters).map(NumeralValue)
    }

    /// Converts a token, falling back to the token itself
    ///
    /// This is the rewrite applied by the convert filter: the decimal string
    /// of the value, or the original text when there is no value.
    pub fn format<'a>(&self, token: &'a str) -> Cow<'a, str> {
        match self.convert(token) {
            Some(value) => {
                let arabic = value.to_string();
                if arabic == token {
                    Cow::Borrowed(token)
                } else {
                    Cow::Owned(arabic)
                }
            }
            None => Cow::Borrowed(token),
        }
    }

    /// Left-to-right reduction over validated letters
    fn reduce(&self, letters: &[(char, u64)]) -> Option<u64> {
        let hundred_thousand = u64::from(letter_value(HUNDRED_THOUSAND)?);
        let mut max_value = hundred_thousand + 1;
        let mut previous = hundred_thousand;
        let mut run = 0usize;
        let mut total = 0u64;

        let mut i = 0;
        while i < letters.len() {
            let (letter, value) = letters[i];
            let next = letters.get(i + 1).copied();

            let (current, kind) = match next {
                Some((_, next_value)) if value < next_value => {
                    if !is_main_letter(letter) {
                        return None;
                    }
                    (next_value - value, StepKind::Subtraction)
                }
                _ if is_main_letter(letter) => (value, StepKind::Main),
                _ => (value, StepKind::Help),
            };

            // values must not grow from left to right
            if previous < current {
                return None;
            }

            if self.strict {
                match (kind, next) {
                    (StepKind::Subtraction, Some((_, next_value))) => {
                        if max_value < next_value || next_value / value > 10 {
                            return None;
                        }
                    }
                    _ => {
                        if max_value < value {
                            return None;
                        }
                    }
                }
            }

            if i > 0 && kind != StepKind::Subtraction && previous == current {
                run += 1;
                match kind {
                    StepKind::Main if run == 3 => return None,
                    StepKind::Help if run == 1 => return None,
                    _ => {}
                }
            } else {
                run = 0;
            }

            total += current;
            previous = current;
            if kind == StepKind::Subtraction {
                max_value = value;
                i += 2;
            } else {
                i += 1;
            }
        }

        Some(total)
    }
}
