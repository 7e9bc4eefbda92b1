//! Suffix rule tables and the `-que` exception list
//!
//! A rule fires when the word ends with one of its suffixes (ASCII case
//! folded) and has at least `min_len` characters. Tables are scanned top to
//! bottom and the first rule that fires decides the outcome.

/// What to do with a word once a rule has fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixAction {
    /// Drop this many trailing characters
    Strip(usize),
    /// Overwrite the character `from_end` positions from the end with `i`,
    /// then drop `strip` trailing characters
    ReplaceWithI { from_end: usize, strip: usize },
    /// Resolve with a sub-table; its outcome is final even if nothing fires
    Delegate(&'static [SuffixRule]),
}

/// One row of a suffix table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Suffixes, lowercase
    pub suffixes: &'static [&'static str],
    /// Minimum word length in characters
    pub min_len: usize,
    /// Rewrite applied when the rule fires
    pub action: SuffixAction,
}

impl SuffixRule {
    const fn new(suffixes: &'static [&'static str], min_len: usize, action: SuffixAction) -> Self {
        Self {
            suffixes,
            min_len,
            action,
        }
    }
}

/// Noun endings, longest group first
pub static NOUN_RULES: &[SuffixRule] = &[
    SuffixRule::new(
        &["ibus", "arum", "erum", "orum", "ebus"],
        6,
        SuffixAction::Strip(4),
    ),
    SuffixRule::new(&["ius", "uum", "ium"], 5, SuffixAction::Strip(3)),
    SuffixRule::new(
        &[
            "ae", "am", "as", "em", "es", "ia", "is", "nt", "os", "ud", "um", "us", "ei", "ui",
            "im",
        ],
        4,
        SuffixAction::Strip(2),
    ),
    SuffixRule::new(&["a", "e", "i", "o", "u"], 3, SuffixAction::Strip(1)),
];

/// `iuntur erunt untur iunt unt` become a stem ending in `i`
pub const VERB_SUFFIX_TO_I: &[SuffixRule] = &[
    SuffixRule::new(&["iuntur"], 8, SuffixAction::Strip(5)),
    SuffixRule::new(
        &["erunt", "untur"],
        7,
        SuffixAction::ReplaceWithI {
            from_end: 5,
            strip: 4,
        },
    ),
    SuffixRule::new(&["iunt"], 6, SuffixAction::Strip(3)),
    SuffixRule::new(
        &["unt"],
        5,
        SuffixAction::ReplaceWithI {
            from_end: 3,
            strip: 2,
        },
    ),
];

/// `beris bor bo` become a stem ending in `bi`
pub const VERB_SUFFIX_TO_BI: &[SuffixRule] = &[
    SuffixRule::new(
        &["beris"],
        7,
        SuffixAction::ReplaceWithI {
            from_end: 4,
            strip: 3,
        },
    ),
    SuffixRule::new(
        &["bor"],
        5,
        SuffixAction::ReplaceWithI {
            from_end: 2,
            strip: 1,
        },
    ),
    SuffixRule::new(
        &["bo"],
        4,
        SuffixAction::ReplaceWithI {
            from_end: 1,
            strip: 0,
        },
    ),
];

/// Verb endings
pub static VERB_RULES: &[SuffixRule] = &[
    SuffixRule::new(
        &["iuntur", "erunt", "untur", "iunt", "unt"],
        0,
        SuffixAction::Delegate(VERB_SUFFIX_TO_I),
    ),
    SuffixRule::new(
        &["beris", "bor", "bo"],
        0,
        SuffixAction::Delegate(VERB_SUFFIX_TO_BI),
    ),
    SuffixRule::new(
        &["ero"],
        5,
        SuffixAction::ReplaceWithI {
            from_end: 1,
            strip: 0,
        },
    ),
    SuffixRule::new(&["mini", "ntur", "stis"], 6, SuffixAction::Strip(4)),
    SuffixRule::new(
        &["mus", "mur", "ris", "sti", "tis", "tur"],
        5,
        SuffixAction::Strip(3),
    ),
    SuffixRule::new(&["ns", "nt", "ri"], 4, SuffixAction::Strip(2)),
    SuffixRule::new(&["m", "r", "s", "t"], 3, SuffixAction::Strip(1)),
];

/// Words ending in `que` where `que` is not the enclitic conjunction
pub static QUE_EXCEPTIONS: &[&str] = &[
    "atque",
    "quoque",
    "neque",
    "itaque",
    "absque",
    "apsque",
    "abusque",
    "adaeque",
    "adusque",
    "denique",
    "deque",
    "susque",
    "oblique",
    "peraeque",
    "plenisque",
    "quandoque",
    "quisque",
    "quaeque",
    "cuiusque",
    "cuique",
    "quemque",
    "quamque",
    "quaque",
    "quique",
    "quorumque",
    "quarumque",
    "quibusque",
    "quosque",
    "quasque",
    "quotusquisque",
    "quousque",
    "ubique",
    "undique",
    "usque",
    "uterque",
    "utique",
    "utroque",
    "utribique",
    "torque",
    "coque",
    "concoque",
    "contorque",
    "detorque",
    "decoque",
    "excoque",
    "extorque",
    "obtorque",
    "optorque",
    "retorque",
    "recoque",
    "attorque",
    "incoque",
    "intorque",
    "praetorque",
];

/// Returns true if a lowercase word is a `-que` exception
pub fn is_que_exception(lowercase: &str) -> bool {
    QUE_EXCEPTIONS.contains(&lowercase)
}
