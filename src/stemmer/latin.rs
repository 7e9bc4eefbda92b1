//! Rule-based Latin stemmer
//!
//! Stateless. Every operation folds ASCII case for matching but keeps the
//! caller's casing in the output; letters substituted by a rule are always a
//! lowercase `i`.

use super::rules::{NOUN_RULES, SuffixAction, SuffixRule, VERB_RULES, is_que_exception};
use smallvec::SmallVec;

/// Per-call working copy of a word
type Scratch = SmallVec<[char; 24]>;

/// Suffix-stripping stemmer for Latin nouns and verbs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatinStemmer;

impl LatinStemmer {
    /// Creates a stemmer
    pub fn new() -> Self {
        Self
    }

    /// Replaces `v` with `u` and `j` with `i`, preserving case
    pub fn replace_vj(word: &str) -> String {
        word.chars()
            .map(|c| match c {
                'V' => 'U',
                'v' => 'u',
                'J' => 'I',
                'j' => 'i',
                other => other,
            })
            .collect()
    }

    /// Decides how much of a word remains after removing an enclitic `-que`
    ///
    /// Returns `None` for the fixed exceptions (`atque`, `quisque`, ...) that
    /// must not be stemmed at all, the length without `que` for other words
    /// ending in `que`, and the full length otherwise. Lengths count
    /// characters.
    pub fn stem_que_suffix(&self, word: &str) -> Option<usize> {
        let folded = word.to_ascii_lowercase();
        if is_que_exception(&folded) {
            return None;
        }
        let len = word.chars().count();
        if folded.ends_with("que") {
            Some(len - 3)
        } else {
            Some(len)
        }
    }

    /// Stems a word read as a noun
    pub fn stem_as_noun(&self, word: &str) -> String {
        Self::apply_rules(word, NOUN_RULES)
    }

    /// Stems a word read as a verb
    pub fn stem_as_verb(&self, word: &str) -> String {
        Self::apply_rules(word, VERB_RULES)
    }

    fn apply_rules(word: &str, table: &[SuffixRule]) -> String {
        let mut chars: Scratch = word.chars().collect();
        let kept = Self::rewrite(&mut chars, table);
        chars[..kept].iter().collect()
    }

    /// Applies the first rule that fires and returns the number of characters kept
    fn rewrite(chars: &mut Scratch, table: &[SuffixRule]) -> usize {
        let len = chars.len();
        let Some(rule) = table
            .iter()
            .find(|rule| Self::fires(chars.as_slice(), rule))
        else {
            return len;
        };
        match rule.action {
            SuffixAction::Strip(n) => len - n,
            SuffixAction::ReplaceWithI { from_end, strip } => {
                chars[len - from_end] = 'i';
                len - strip
            }
            SuffixAction::Delegate(sub_table) => Self::rewrite(chars, sub_table),
        }
    }

    fn fires(chars: &[char], rule: &SuffixRule) -> bool {
        chars.len() >= rule.min_len
            && rule
                .suffixes
                .iter()
                .any(|suffix| ends_with_folded(chars, suffix))
    }
}

/// Suffix test folding ASCII case; `suffix` must be lowercase
fn ends_with_folded(chars: &[char], suffix: &str) -> bool {
    let suffix_len = suffix.len();
    if suffix_len > chars.len() {
        return false;
    }
    chars[chars.len() - suffix_len..]
        .iter()
        .zip(suffix.chars())
        .all(|(c, s)| c.to_ascii_lowercase() == s)
}
