//! Static lookup tables for Roman numeral handling
//!
//! All tables are compile-time constants and are shared by every filter
//! instance without synchronization.

/// ROMAN NUMERAL FIVE THOUSAND
pub const FIVE_THOUSAND: char = '\u{2181}';
/// ROMAN NUMERAL TEN THOUSAND
pub const TEN_THOUSAND: char = '\u{2182}';
/// ROMAN NUMERAL FIFTY THOUSAND
pub const FIFTY_THOUSAND: char = '\u{2187}';
/// ROMAN NUMERAL ONE HUNDRED THOUSAND
pub const HUNDRED_THOUSAND: char = '\u{2188}';
/// ROMAN NUMERAL REVERSED ONE HUNDRED, the closing stroke of apostrophus writing
pub const REVERSED_C: char = '\u{2183}';
/// ROMAN NUMERAL ONE THOUSAND C D
pub const THOUSAND_CD: char = '\u{2180}';

/// Returns the value of a canonical numeral letter, folding ASCII case
///
/// The four large-value glyphs have no case and are matched as-is.
#[inline]
pub const fn letter_value(c: char) -> Option<u32> {
    match c.to_ascii_lowercase() {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        FIVE_THOUSAND => Some(5000),
        TEN_THOUSAND => Some(10000),
        FIFTY_THOUSAND => Some(50000),
        HUNDRED_THOUSAND => Some(100000),
        _ => None,
    }
}

/// Returns true for letters that may start a subtractive pair
///
/// These are the powers of ten: `I X C M`, ten thousand and one hundred thousand.
#[inline]
pub const fn is_main_letter(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'i' | 'x' | 'c' | 'm' | TEN_THOUSAND | HUNDRED_THOUSAND
    )
}

/// Returns true if the character belongs to the numeral alphabet
#[inline]
pub const fn is_numeral_letter(c: char) -> bool {
    letter_value(c).is_some()
}

/// Apostrophus rewrites, most specific first
///
/// Each entry is applied as a replace-all over the result of the previous
/// entry, so longer patterns must precede the patterns they contain.
pub static APOSTROPHUS_PATTERNS: [(&str, &str); 7] = [
    ("CCCI\u{2183}\u{2183}\u{2183}", "\u{2188}"),
    ("I\u{2183}\u{2183}\u{2183}", "\u{2187}"),
    ("CCI\u{2183}\u{2183}", "\u{2182}"),
    ("I\u{2183}\u{2183}", "\u{2181}"),
    ("CI\u{2183}", "M"),
    ("\u{2180}", "M"),
    ("I\u{2183}", "D"),
];

/// Returns the ASCII expansion of a legacy numeral glyph
#[inline]
pub const fn glyph_expansion(c: char) -> Option<&'static str> {
    let expansion = match c {
        // uppercase number forms
        '\u{2160}' => "I",
        '\u{2161}' => "II",
        '\u{2162}' => "III",
        '\u{2163}' => "IV",
        '\u{2164}' => "V",
        '\u{2165}' => "VI",
        '\u{2166}' => "VII",
        '\u{2167}' => "VIII",
        '\u{2168}' => "IX",
        '\u{2169}' => "X",
        '\u{216A}' => "XI",
        '\u{216B}' => "XII",
        '\u{216C}' => "L",
        '\u{216D}' => "C",
        '\u{216E}' => "D",
        '\u{216F}' => "M",
        // lowercase number forms
        '\u{2170}' => "i",
        '\u{2171}' => "ii",
        '\u{2172}' => "iii",
        '\u{2173}' => "iv",
        '\u{2174}' => "v",
        '\u{2175}' => "vi",
        '\u{2176}' => "vii",
        '\u{2177}' => "viii",
        '\u{2178}' => "ix",
        '\u{2179}' => "x",
        '\u{217A}' => "xi",
        '\u{217B}' => "xii",
        '\u{217C}' => "l",
        '\u{217D}' => "c",
        '\u{217E}' => "d",
        '\u{217F}' => "m",
        // reversed hundred
        '\u{2183}' => "C",
        '\u{2184}' => "c",
        // six late form, fifty early form
        '\u{2185}' => "VI",
        '\u{2186}' => "L",
        _ => return None,
    };
    Some(expansion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values_fold_ascii_case() {
        for (upper, value) in [
            ('I', 1),
            ('V', 5),
            ('X', 10),
            ('L', 50),
            ('C', 100),
            ('D', 500),
            ('M', 1000),
        ] {
            assert_eq!(letter_value(upper), Some(value));
            assert_eq!(letter_value(upper.to_ascii_lowercase()), Some(value));
        }
    }

    #[test]
    fn test_large_value_glyphs() {
        assert_eq!(letter_value(FIVE_THOUSAND), Some(5000));
        assert_eq!(letter_value(TEN_THOUSAND), Some(10000));
        assert_eq!(letter_value(FIFTY_THOUSAND), Some(50000));
        assert_eq!(letter_value(HUNDRED_THOUSAND), Some(100000));
    }

    #[test]
    fn test_non_numeral_letters() {
        for c in ['a', 'S', '1', ' ', '\u{2160}', REVERSED_C, THOUSAND_CD] {
            assert_eq!(letter_value(c), None, "{c:?} should not have a value");
            assert!(!is_numeral_letter(c));
        }
    }

    #[test]
    fn test_main_and_help_letters() {
        for c in ['I', 'x', 'C', 'm', TEN_THOUSAND, HUNDRED_THOUSAND] {
            assert!(is_main_letter(c), "{c:?} is a main letter");
        }
        for c in ['V', 'l', 'D', FIVE_THOUSAND, FIFTY_THOUSAND] {
            assert!(!is_main_letter(c), "{c:?} is a help letter");
        }
    }

    #[test]
    fn test_glyph_expansions() {
        assert_eq!(glyph_expansion('\u{2163}'), Some("IV"));
        assert_eq!(glyph_expansion('\u{2167}'), Some("VIII"));
        assert_eq!(glyph_expansion('\u{217F}'), Some("m"));
        assert_eq!(glyph_expansion('\u{2185}'), Some("VI"));
        assert_eq!(glyph_expansion(HUNDRED_THOUSAND), None);
        assert_eq!(glyph_expansion('X'), None);
    }

    #[test]
    fn test_apostrophus_patterns_longest_first() {
        // every pattern must come before any later pattern it contains
        for (i, (pattern, _)) in APOSTROPHUS_PATTERNS.iter().enumerate() {
            for (later, _) in &APOSTROPHUS_PATTERNS[i + 1..] {
                assert!(
                    !later.contains(pattern),
                    "{pattern} would consume part of {later}"
                );
            }
        }
    }
}
