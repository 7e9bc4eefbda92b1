//! Roman numeral normalization and conversion
//!
//! Two independent stages. [`LatinNumberNormalizer`] rewrites apostrophus
//! writing and Unicode number forms into canonical letters;
//! [`LatinNumberConverter`] validates a canonical numeral and yields its
//! arabic value. Callers compose them: normalize first, then convert.

pub mod converter;
pub mod normalizer;
pub mod tables;

pub use converter::{LatinNumberConverter, NumeralValue};
pub use normalizer::LatinNumberNormalizer;
