//! Data model for scraped API documentation — format-agnostic.

use std::fmt;

/// A normalized class or function name (see [`crate::ident::normalize`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Identifier(String);

impl Identifier {
    /// Normalize a raw scraped name.
    pub fn normalize(raw: &str) -> Self {
        Identifier(crate::ident::normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the index page's class table.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    /// Link to the class page, relative to the documentation root
    pub url: String,
    pub name: Identifier,
    pub summary: String,
}

/// Class-level stub metadata.
#[derive(Debug, Clone)]
pub struct ClassHeader {
    pub name: Identifier,
    pub summary: String,
}

impl From<&ClassEntry> for ClassHeader {
    fn from(entry: &ClassEntry) -> Self {
        ClassHeader {
            name: entry.name.clone(),
            summary: entry.summary.clone(),
        }
    }
}

/// One row of a class page's brief function table.
#[derive(Debug, Clone)]
pub struct ShortEntry {
    pub name: Identifier,
    pub desc: String,
}

/// Everything navigation extracts from one class page.
///
/// `summaries[i]` and `details[i]` describe the same function.
#[derive(Debug, Default)]
pub struct ClassPage {
    pub summaries: Vec<ShortEntry>,
    /// Raw text of each detailed entry
    pub details: Vec<String>,
}

/// Declared type of a parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    Integer,
    Boolean,
    String,
    Function,
    Any,
    /// Any other token, emitted as-is. Empty means "no type".
    Raw(String),
}

impl TypeTag {
    /// Map a canonical type token onto its tag.
    pub fn parse(token: &str) -> Self {
        match token {
            "integer" => TypeTag::Integer,
            "boolean" => TypeTag::Boolean,
            "string" => TypeTag::String,
            "function" => TypeTag::Function,
            "any" => TypeTag::Any,
            other => TypeTag::Raw(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Integer => "integer",
            TypeTag::Boolean => "boolean",
            TypeTag::String => "string",
            TypeTag::Function => "function",
            TypeTag::Any => "any",
            TypeTag::Raw(token) => token.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed entry of a "Parameters:" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    pub name: String,
    pub ty: TypeTag,
    pub desc: String,
}

/// Parsed entry of a "Returns:" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnRecord {
    pub ty: TypeTag,
    pub desc: String,
}

/// A single documented function, ready to be rendered.
#[derive(Debug, Clone, Default)]
pub struct FunctionDoc {
    pub name: Identifier,
    /// Brief table summary; already folded into `long_desc` when needed
    pub short_desc: String,
    /// Never empty once assembled
    pub long_desc: Vec<String>,
    pub usage: Vec<String>,
    pub parameters: Vec<ParameterRecord>,
    pub returns: Vec<ReturnRecord>,
}
