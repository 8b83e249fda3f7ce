//! Pattern elements: literal runs and `{...}` directives

use crate::index::ItemIndex;

/// A directive recognised inside `{...}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{o}` - full original file name
    Original,
    /// `{p}` - file name without its last extension
    Pure,
    /// `{e}` - text after the last `.`
    Extension,
    /// `{i}` - one-based position in the plan
    Index,
    /// `{c<chars>}` - character picked by position modulo the sequence length
    Cycle(Vec<char>),
}

impl Token {
    /// Parse the body of a directive (the text between the braces).
    ///
    /// Unknown lead characters, an empty body and an empty cycle set yield
    /// `None`: such directives contribute nothing to the pattern.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        let mut chars = body.chars();
        let token = match chars.next()? {
            'o' => Self::Original,
            'p' => Self::Pure,
            'e' => Self::Extension,
            'i' => Self::Index,
            'c' => {
                let set: Vec<char> = chars.collect();
                if set.is_empty() {
                    return None;
                }
                Self::Cycle(set)
            }
            _ => return None,
        };
        Some(token)
    }

    /// Expand the directive for one file
    #[must_use]
    pub fn generate(&self, original_name: &str, index: ItemIndex) -> String {
        match self {
            Self::Original => original_name.to_string(),
            Self::Pure => pure_name(original_name).to_string(),
            Self::Extension => extension(original_name).to_string(),
            Self::Index => index.to_string(),
            Self::Cycle(set) => set[index.zero_based() % set.len()].to_string(),
        }
    }
}

/// One piece of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Literal text, stored unescaped
    Static(String),
    /// A directive together with its verbatim `{...}` source
    Token { token: Token, raw: String },
}

impl Element {
    /// Text this element contributes for one file
    #[must_use]
    pub fn generate(&self, original_name: &str, index: ItemIndex) -> String {
        match self {
            Self::Static(text) => text.clone(),
            Self::Token { token, .. } => token.generate(original_name, index),
        }
    }

    /// Source text that compiles back to an equivalent element
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Static(text) => text.replace('{', "{{"),
            Self::Token { raw, .. } => raw.clone(),
        }
    }
}

/// File name with the last `.extension` stripped
#[must_use]
pub fn pure_name(name: &str) -> &str {
    name.rfind('.').map_or(name, |dot| &name[..dot])
}

/// Text after the last `.`, empty when there is none
#[must_use]
pub fn extension(name: &str) -> &str {
    name.rfind('.').map_or("", |dot| &name[dot + 1..])
}
