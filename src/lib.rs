//! # Latin Analysis
//!
//! Token filters for indexing and searching Latin text: Roman numeral
//! normalization and conversion, and a rule-based noun/verb stemmer.
//!
//! ## Overview
//!
//! The crate plugs into a pull-based token pipeline. A host tokenizer yields
//! [`Token`]s through the [`TokenStream`] trait and each filter in this crate
//! wraps an upstream stream:
//!
//! - **Numeral normalization**: apostrophus writing (`CIↃ`, `IↃↃ`, ...) and
//!   Unicode number forms (`Ⅻ`, `ↀ`, ...) become canonical letters
//! - **Numeral conversion**: well-formed Roman numerals become arabic
//!   numbers, with an optional strict mode for subtraction distances
//! - **Stemming**: every word yields a noun stem and a verb stem at the
//!   same position, after `v`/`j` canonicalization and enclitic `-que`
//!   removal
//!
//! The core never fails. Tokens that are not numerals, or cannot be
//! stemmed, come out unchanged.
//!
//! ## Basic Usage
//!
//! ```rust
//! use latin_analysis::{
//!     LatinNumberConvertFilter, LatinNumberNormalizationFilter, Token, VecTokenStream,
//!     collect_tokens,
//! };
//!
//! let input = VecTokenStream::new(vec![
//!     Token::word("anno", 0, 4),
//!     Token::word("CIↃXCIX", 5, 14),
//!     Token::word("MCCCC", 15, 20),
//! ]);
//! let stream = LatinNumberConvertFilter::new(LatinNumberNormalizationFilter::new(input), false);
//! let texts: Vec<String> = collect_tokens(stream).into_iter().map(|t| t.text).collect();
//! assert_eq!(texts, vec!["anno", "1099", "MCCCC"]);
//! ```
//!
//! ## Stemming
//!
//! ```rust
//! use latin_analysis::{LatinStemFilter, Token, TokenType, VecTokenStream, collect_tokens};
//!
//! let tokens = collect_tokens(LatinStemFilter::new(VecTokenStream::new(vec![
//!     Token::word("filivs", 0, 6),
//! ])));
//! assert_eq!(tokens[0].text, "fil");
//! assert_eq!(tokens[0].token_type, TokenType::LatinNoun);
//! assert_eq!(tokens[1].text, "filiu");
//! assert_eq!(tokens[1].position_increment, 0);
//! ```
//!
//! ## Configuration
//!
//! Filters can also be named in a JSON analyzer configuration and built
//! through a [`FilterRegistry`]; see the [`factory`] module.

pub mod error;
pub mod factory;
pub mod filter;
pub mod numeral;
pub mod stemmer;
pub mod token;

#[cfg(test)]
mod error_tests;

// Re-export main types
pub use error::{AnalysisError, Result};
pub use token::{BoxedTokenStream, Token, TokenStream, TokenType, VecTokenStream, collect_tokens};

// Re-export the processing core
pub use numeral::{LatinNumberConverter, LatinNumberNormalizer, NumeralValue};
pub use stemmer::{AlternationState, LatinStemmer, ReadingKind, StemAlternator, StemReading};

// Re-export filters
pub use filter::{LatinNumberConvertFilter, LatinNumberNormalizationFilter, LatinStemFilter};

// Re-export the configuration surface
pub use factory::{
    Analyzer, AnalyzerConfig, FactoryConstructor, FilterArgs, FilterRegistry, FilterSpec,
    LatinNumberConvertFilterFactory, LatinNumberNormalizationFilterFactory,
    LatinStemFilterFactory, TokenFilterFactory,
};
