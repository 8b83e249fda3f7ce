//! Rename pattern language
//!
//! A pattern is literal text interleaved with `{...}` directives:
//!
//! | Directive   | Expands to                                           |
//! |-------------|------------------------------------------------------|
//! | `{o}`       | the original file name                               |
//! | `{p}`       | the file name without its last extension             |
//! | `{e}`       | the last extension (empty when there is none)        |
//! | `{i}`       | the one-based position of the file in the plan       |
//! | `{c<chars>}`| `chars[(position - 1) % len]`                        |
//!
//! `{{` writes a literal `{`. Directives with an unknown lead character are
//! dropped without error; a `{` that is never closed is a `PatternError`.
//!
//! # Examples
//!
//! ```
//! use renamr::index::ItemIndex;
//! use renamr::pattern::Pattern;
//!
//! let pattern: Pattern = "{i}_{p}.bak".parse().unwrap();
//! let first = ItemIndex::from_zero_based(0).unwrap();
//! assert_eq!(pattern.generate("notes.txt", first), "1_notes.bak");
//! ```

pub mod element;
pub mod error;

pub use element::{Element, Token};
pub use error::PatternError;

use std::fmt;
use std::str::FromStr;

use crate::index::ItemIndex;

/// Pattern used when none is configured: keep every name as it is
pub const DEFAULT_PATTERN: &str = "{o}";

/// A compiled rename pattern
///
/// Immutable once built; changing the pattern of a session replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    elements: Vec<Element>,
}

impl Pattern {
    /// Compile a raw pattern string.
    ///
    /// # Errors
    /// Returns `PatternError::Unclosed` if a `{` is not followed by a `}`.
    pub fn compile(raw: &str) -> Result<Self, PatternError> {
        let mut elements = Vec::new();
        let mut literal = String::new();
        let mut open_at: Option<usize> = None;
        let mut pos = 0;

        while let Some(ch) = raw[pos..].chars().next() {
            match (open_at.take(), ch) {
                (Some(_), '{') => literal.push('{'),
                (Some(brace), _) => {
                    let close = raw[pos..]
                        .find('}')
                        .map(|rel| pos + rel)
                        .ok_or(PatternError::Unclosed { offset: brace })?;
                    flush_literal(&mut literal, &mut elements);
                    push_directive(&mut elements, &raw[pos..close], &raw[brace..=close]);
                    pos = close + 1;
                    continue;
                }
                (None, '{') => open_at = Some(pos),
                (None, _) => literal.push(ch),
            }
            pos += ch.len_utf8();
        }

        if let Some(brace) = open_at {
            return Err(PatternError::Unclosed { offset: brace });
        }
        flush_literal(&mut literal, &mut elements);

        Ok(Self { elements })
    }

    /// Build the new name for `original_name` at position `index`
    #[must_use]
    pub fn generate(&self, original_name: &str, index: ItemIndex) -> String {
        self.elements
            .iter()
            .map(|element| element.generate(original_name, index))
            .collect()
    }

    /// Source text that compiles back to an equivalent pattern
    #[must_use]
    pub fn raw(&self) -> String {
        self.elements.iter().map(Element::raw).collect()
    }

    /// Compiled elements in order
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether the pattern produces empty names for every file
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn flush_literal(literal: &mut String, elements: &mut Vec<Element>) {
    if !literal.is_empty() {
        elements.push(Element::Static(std::mem::take(literal)));
    }
}

fn push_directive(elements: &mut Vec<Element>, body: &str, source: &str) {
    match Token::parse(body) {
        Some(token) => elements.push(Element::Token {
            token,
            raw: source.to_string(),
        }),
        None => tracing::debug!(directive = source, "ignoring unknown pattern directive"),
    }
}

/// Compile a raw pattern string.
///
/// # Errors
/// Returns `PatternError::Unclosed` if a `{` is not followed by a `}`.
pub fn compile(raw: &str) -> Result<Pattern, PatternError> {
    Pattern::compile(raw)
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self {
            elements: vec![Element::Token {
                token: Token::Original,
                raw: DEFAULT_PATTERN.to_string(),
            }],
        }
    }
}
