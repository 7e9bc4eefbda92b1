//! Normalization of apostrophus writing and legacy numeral glyphs
//!
//! Turns archaic notations into the canonical alphabet understood by
//! [`LatinNumberConverter`](super::LatinNumberConverter): `I V X L C D M`
//! plus the four large-value glyphs. Nothing is validated here.

use super::tables::{APOSTROPHUS_PATTERNS, glyph_expansion};

/// Rewrites archaic Roman numeral notation into canonical letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatinNumberNormalizer;

impl LatinNumberNormalizer {
    /// Creates a normalizer
    pub fn new() -> Self {
        Self
    }

    /// Normalizes a token
    ///
    /// Apostrophus sequences are reduced first, then every legacy glyph is
    /// expanded to its ASCII letters. Characters outside both tables pass
    /// through unchanged, so the output may be longer than the input.
    pub fn normalize(&self, token: &str) -> String {
        let reduced = Self::reduce_apostrophus(token);
        Self::expand_glyphs(&reduced)
    }

    /// Replaces apostrophus sequences, most specific pattern first
    pub fn reduce_apostrophus(token: &str) -> String {
        let mut current = token.to_string();
        for (pattern, replacement) in APOSTROPHUS_PATTERNS.iter() {
            if current.contains(pattern) {
                current = current.replace(pattern, replacement);
            }
        }
        current
    }

    /// Expands single-character number forms into ASCII letters
    pub fn expand_glyphs(token: &str) -> String {
        let mut expanded = String::with_capacity(token.len());
        for c in token.chars() {
            match glyph_expansion(c) {
                Some(letters) => expanded.push_str(letters),
                None => expanded.push(c),
            }
        }
        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(token: &str) -> String {
        LatinNumberNormalizer::new().normalize(token)
    }

    #[test]
    fn test_apostrophus_single_patterns() {
        assert_eq!(normalize("CCCIↃↃↃ"), "\u{2188}");
        assert_eq!(normalize("IↃↃↃ"), "\u{2187}");
        assert_eq!(normalize("CCIↃↃ"), "\u{2182}");
        assert_eq!(normalize("IↃↃ"), "\u{2181}");
        assert_eq!(normalize("CIↃ"), "M");
        assert_eq!(normalize("IↃ"), "D");
        assert_eq!(normalize("ↀ"), "M");
    }

    #[test]
    fn test_apostrophus_sequence() {
        assert_eq!(
            normalize("CCCIↃↃↃIↃↃↃCCIↃↃIↃↃCIↃIↃ"),
            "\u{2188}\u{2187}\u{2182}\u{2181}MD"
        );
    }

    #[test]
    fn test_uppercase_glyphs() {
        assert_eq!(normalize("Ⅰ"), "I");
        assert_eq!(normalize("Ⅳ"), "IV");
        assert_eq!(normalize("Ⅷ"), "VIII");
        assert_eq!(normalize("Ⅻ"), "XII");
        assert_eq!(normalize("Ⅿ"), "M");
        assert_eq!(
            normalize("ⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩⅪⅫⅬⅭⅮⅯ"),
            "IIIIIIIVVVIVIIVIIIIXXXIXIILCDM"
        );
    }

    #[test]
    fn test_lowercase_glyphs() {
        assert_eq!(normalize("ⅰ"), "i");
        assert_eq!(normalize("ⅸ"), "ix");
        assert_eq!(normalize("ⅿ"), "m");
        assert_eq!(
            normalize("ⅰⅱⅲⅳⅴⅵⅶⅷⅸⅹⅺⅻⅼⅽⅾⅿ"),
            "iiiiiiivvviviiviiiixxxixiilcdm"
        );
    }

    #[test]
    fn test_special_glyphs() {
        assert_eq!(normalize("Ↄ"), "C");
        assert_eq!(normalize("ↄ"), "c");
        assert_eq!(normalize("\u{2185}"), "VI");
        assert_eq!(normalize("\u{2186}"), "L");
    }

    #[test]
    fn test_apostrophus_then_glyphs() {
        assert_eq!(normalize("CCCIↃↃↃⅫ"), "\u{2188}XII");
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(normalize("filius"), "filius");
        assert_eq!(normalize("XIV"), "XIV");
        assert_eq!(normalize("aⅣb"), "aIVb");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["CCCIↃↃↃⅫ", "ⅿⅽⅿ", "IↃↃ", "Ↄ", "MCMXC", "ↀↀ", "quid"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "normalizing {input:?} twice");
        }
    }
}
