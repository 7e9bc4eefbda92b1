//! Tokens and token streams at the host pipeline boundary
//!
//! The host tokenizer supplies words one at a time through [`TokenStream`];
//! filters in this crate wrap an upstream stream and hand transformed tokens
//! back in the same pull-based fashion.

use std::collections::VecDeque;
use std::fmt;

/// Type metadata carried by a token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TokenType {
    /// Plain word as produced by a tokenizer
    #[default]
    Word,
    /// Noun reading emitted by the stem filter
    LatinNoun,
    /// Verb reading emitted by the stem filter
    LatinVerb,
    /// Any other type assigned by the host
    Other(String),
}

impl TokenType {
    /// Returns the string form used in host type metadata
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Word => "word",
            TokenType::LatinNoun => "LATIN_NOUN",
            TokenType::LatinVerb => "LATIN_VERB",
            TokenType::Other(name) => name,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical token and its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Term text
    pub text: String,
    /// Start offset in the original text
    pub start_offset: usize,
    /// End offset (exclusive) in the original text
    pub end_offset: usize,
    /// Position advance relative to the previous token
    pub position_increment: u32,
    /// Type metadata
    pub token_type: TokenType,
    /// Set by keyword marking: the token must not be transformed
    pub keyword: bool,
}

impl Token {
    /// Creates a plain word token covering `start..end`
    pub fn word(text: impl Into<String>, start_offset: usize, end_offset: usize) -> Self {
        Self {
            text: text.into(),
            start_offset,
            end_offset,
            position_increment: 1,
            token_type: TokenType::Word,
            keyword: false,
        }
    }

    /// Marks the token as protected from transformation
    pub fn with_keyword(mut self, keyword: bool) -> Self {
        self.keyword = keyword;
        self
    }

    /// Sets the position increment
    pub fn with_position_increment(mut self, increment: u32) -> Self {
        self.position_increment = increment;
        self
    }

    /// Sets the token type
    pub fn with_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Replaces the term text, keeping all other attributes
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Length of the term in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Pull-based source of tokens
pub trait TokenStream {
    /// Returns the next token, or `None` at end of stream
    fn next_token(&mut self) -> Option<Token>;
}

/// Boxed stream used where filters are chained dynamically
pub type BoxedTokenStream = Box<dyn TokenStream>;

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn next_token(&mut self) -> Option<Token> {
        (**self).next_token()
    }
}

impl<S: TokenStream + ?Sized> TokenStream for &mut S {
    fn next_token(&mut self) -> Option<Token> {
        (**self).next_token()
    }
}

/// A stream over an owned sequence of tokens
#[derive(Debug, Clone, Default)]
pub struct VecTokenStream {
    tokens: VecDeque<Token>,
}

impl VecTokenStream {
    /// Creates a stream yielding the given tokens in order
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Number of tokens not yet pulled
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenStream for VecTokenStream {
    fn next_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }
}

impl FromIterator<Token> for VecTokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Drains a stream into a vector
pub fn collect_tokens<S: TokenStream>(mut stream: S) -> Vec<Token> {
    let mut tokens = Vec::new();
    while let Some(token) = stream.next_token() {
        tokens.push(token);
    }
    tokens
}
