//! Noun/verb alternation over one input word
//!
//! Each word is read twice: first as a noun, then as a verb. The alternator
//! is a small state machine that buffers the canonical word between the two
//! readings, so one input always produces exactly two outputs.

use super::latin::LatinStemmer;
use crate::error::{AnalysisError, Result};

/// Which reading of a word a stem represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingKind {
    Noun,
    Verb,
}

/// One stem candidate emitted by the alternator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemReading {
    /// Stemmed text
    pub text: String,
    /// Reading the stem was produced under
    pub kind: ReadingKind,
}

/// Alternation state for the word currently being read
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlternationState {
    /// No word buffered
    #[default]
    Idle,
    /// Word buffered, noun reading not yet emitted
    NounPending {
        /// Canonical word (`v`/`j` replaced)
        word: String,
        /// Characters left after `-que` removal; `None` means do not stem
        stem_len: Option<usize>,
    },
    /// Noun reading emitted, verb reading pending
    VerbPending {
        word: String,
        stem_len: Option<usize>,
    },
}

/// Drives [`LatinStemmer`] to emit a noun reading and then a verb reading
#[derive(Debug, Clone, Default)]
pub struct StemAlternator {
    stemmer: LatinStemmer,
    state: AlternationState,
}

impl StemAlternator {
    /// Creates an idle alternator
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns both readings of a single word
    pub fn readings(word: &str) -> [StemReading; 2] {
        let alternator = Self::new();
        let (word, stem_len) = alternator.canonical(word);
        [
            alternator.reading(&word, stem_len, ReadingKind::Noun),
            alternator.reading(&word, stem_len, ReadingKind::Verb),
        ]
    }

    /// Buffers a new word
    ///
    /// Fails if readings of the previous word have not all been taken.
    pub fn begin(&mut self, word: &str) -> Result<()> {
        if !self.is_idle() {
            return Err(AnalysisError::ReadingsPending {
                word: word.to_string(),
            });
        }
        let (word, stem_len) = self.canonical(word);
        self.state = AlternationState::NounPending { word, stem_len };
        Ok(())
    }

    /// Buffers a word and emits its noun reading right away
    ///
    /// Any word still pending is dropped. The verb reading follows from
    /// [`next_reading`](Self::next_reading).
    pub fn start(&mut self, word: &str) -> StemReading {
        let (word, stem_len) = self.canonical(word);
        let noun = self.reading(&word, stem_len, ReadingKind::Noun);
        self.state = AlternationState::VerbPending { word, stem_len };
        noun
    }

    /// Emits the next reading of the buffered word
    ///
    /// Yields the noun reading, then the verb reading, then `None` until a
    /// new word is started.
    pub fn next_reading(&mut self) -> Option<StemReading> {
        match std::mem::take(&mut self.state) {
            AlternationState::Idle => None,
            AlternationState::NounPending { word, stem_len } => {
                let reading = self.reading(&word, stem_len, ReadingKind::Noun);
                self.state = AlternationState::VerbPending { word, stem_len };
                Some(reading)
            }
            AlternationState::VerbPending { word, stem_len } => {
                Some(self.reading(&word, stem_len, ReadingKind::Verb))
            }
        }
    }

    /// Returns true if no word is buffered
    pub fn is_idle(&self) -> bool {
        matches!(self.state, AlternationState::Idle)
    }

    /// Current state
    pub fn state(&self) -> &AlternationState {
        &self.state
    }

    /// Drops any buffered word
    pub fn reset(&mut self) {
        self.state = AlternationState::Idle;
    }

    /// Canonical spelling and `-que` decision for a raw word
    fn canonical(&self, word: &str) -> (String, Option<usize>) {
        let word = LatinStemmer::replace_vj(word);
        let stem_len = self.stemmer.stem_que_suffix(&word);
        (word, stem_len)
    }

    fn reading(&self, word: &str, stem_len: Option<usize>, kind: ReadingKind) -> StemReading {
        let text = match stem_len {
            None => word.to_string(),
            Some(len) => {
                let prefix: String = word.chars().take(len).collect();
                match kind {
                    ReadingKind::Noun => self.stemmer.stem_as_noun(&prefix),
                    ReadingKind::Verb => self.stemmer.stem_as_verb(&prefix),
                }
            }
        };
        StemReading { text, kind }
    }
}
