//! Token filters for Latin text
//!
//! Each filter wraps an upstream [`TokenStream`] and is itself a stream, so
//! filters chain the same way the host chains its own stages. Tokens marked
//! as keywords are passed through unchanged by every filter.

use crate::numeral::{LatinNumberConverter, LatinNumberNormalizer};
use crate::stemmer::{ReadingKind, StemAlternator, StemReading};
use crate::token::{Token, TokenStream, TokenType};
use std::borrow::Cow;
use tracing::trace;

/// Rewrites archaic numeral notation to canonical Roman letters, one token in, one out
#[derive(Debug, Clone)]
pub struct LatinNumberNormalizationFilter<S> {
    input: S,
    normalizer: LatinNumberNormalizer,
}

impl<S: TokenStream> LatinNumberNormalizationFilter<S> {
    /// Wraps an upstream stream
    pub fn new(input: S) -> Self {
        Self {
            input,
            normalizer: LatinNumberNormalizer::new(),
        }
    }

    /// Returns the upstream stream
    pub fn into_inner(self) -> S {
        self.input
    }
}

impl<S: TokenStream> TokenStream for LatinNumberNormalizationFilter<S> {
    fn next_token(&mut self) -> Option<Token> {
        let mut token = self.input.next_token()?;
        if token.keyword {
            return Some(token);
        }
        let normalized = self.normalizer.normalize(&token.text);
        if normalized != token.text {
            trace!(from = %token.text, to = %normalized, "normalized numeral");
            token.set_text(normalized);
        }
        Some(token)
    }
}

/// Replaces well-formed Roman numerals with their arabic value
///
/// Anything that is not a valid numeral keeps its text.
#[derive(Debug, Clone)]
pub struct LatinNumberConvertFilter<S> {
    input: S,
    converter: LatinNumberConverter,
}

impl<S: TokenStream> LatinNumberConvertFilter<S> {
    /// Wraps an upstream stream; `strict` enables the subtraction-distance rules
    pub fn new(input: S, strict: bool) -> Self {
        Self::with_converter(input, LatinNumberConverter::new(strict))
    }

    /// Wraps an upstream stream with a preconfigured converter
    pub fn with_converter(input: S, converter: LatinNumberConverter) -> Self {
        Self { input, converter }
    }

    /// Returns whether strict validation is enabled
    pub fn is_strict(&self) -> bool {
        self.converter.is_strict()
    }

    /// Returns the upstream stream
    pub fn into_inner(self) -> S {
        self.input
    }
}

impl<S: TokenStream> TokenStream for LatinNumberConvertFilter<S> {
    fn next_token(&mut self) -> Option<Token> {
        let mut token = self.input.next_token()?;
        if token.keyword {
            return Some(token);
        }
        if let Cow::Owned(arabic) = self.converter.format(&token.text) {
            trace!(from = %token.text, to = %arabic, "converted numeral");
            token.set_text(arabic);
        }
        Some(token)
    }
}

/// Emits a noun stem and a verb stem for every word
///
/// The noun reading keeps the position increment of the input token and is
/// typed [`TokenType::LatinNoun`]. The verb reading follows at the same
/// position (increment 0) with the same offsets, typed
/// [`TokenType::LatinVerb`].
#[derive(Debug)]
pub struct LatinStemFilter<S> {
    input: S,
    alternator: StemAlternator,
    /// Input token whose verb reading is still owed
    current: Option<Token>,
}

impl<S: TokenStream> LatinStemFilter<S> {
    /// Wraps an upstream stream
    pub fn new(input: S) -> Self {
        Self {
            input,
            alternator: StemAlternator::new(),
            current: None,
        }
    }

    /// Returns true if a verb reading is buffered
    pub fn has_pending(&self) -> bool {
        !self.alternator.is_idle()
    }

    /// Returns the upstream stream, dropping any buffered reading
    pub fn into_inner(self) -> S {
        self.input
    }

    fn reading_token(mut template: Token, reading: StemReading) -> Token {
        template.set_text(reading.text);
        match reading.kind {
            ReadingKind::Noun => template.with_type(TokenType::LatinNoun),
            ReadingKind::Verb => template
                .with_type(TokenType::LatinVerb)
                .with_position_increment(0),
        }
    }
}

impl<S: TokenStream> TokenStream for LatinStemFilter<S> {
    fn next_token(&mut self) -> Option<Token> {
        if let Some(reading) = self.alternator.next_reading() {
            if let Some(template) = self.current.take() {
                return Some(Self::reading_token(template, reading));
            }
        }

        let token = self.input.next_token()?;
        if token.keyword {
            return Some(token);
        }

        trace!(word = %token.text, "stemming word");
        let noun = self.alternator.start(&token.text);
        let output = Self::reading_token(token.clone(), noun);
        self.current = Some(token);
        Some(output)
    }
}
