//! Latin stemming
//!
//! [`LatinStemmer`] holds the suffix rules; [`StemAlternator`] turns one word
//! into its noun reading followed by its verb reading.

pub mod alternator;
pub mod latin;
pub mod rules;

pub use alternator::{AlternationState, ReadingKind, StemAlternator, StemReading};
pub use latin::LatinStemmer;
