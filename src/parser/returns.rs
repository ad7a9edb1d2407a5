//! "Returns:" section parser.
//!
//! A return value is either a bare type line followed by a description line,
//! or a single prose line whose type is inferred (see [`iterator_type`]).

use super::sections::content_lines;
use crate::model::{ReturnRecord, TypeTag};

/// Upstream spellings of return types. "the" is left over from prose
/// returns like "the name of ..." and documents a string.
const FIXUPS: &[(&str, &str)] = &[("the", "string"), ("bool", "boolean"), ("int", "integer")];

/// Offset from the start of "iterator" to the element type in phrases like
/// "returns an iterator of <Type>".
const ITERATOR_TYPE_OFFSET: usize = 12;

enum State {
    Type,
    Desc { ty: TypeTag },
}

/// Parse the body of a "Returns:" section.
pub fn parse(text: &str) -> Vec<ReturnRecord> {
    let mut returns = Vec::new();
    let mut state = State::Type;

    for line in content_lines(text) {
        state = match state {
            State::Type if line.split_whitespace().nth(1).is_some() => {
                returns.push(ReturnRecord {
                    ty: TypeTag::parse(iterator_type(line)),
                    desc: line.to_string(),
                });
                State::Type
            }
            State::Type => State::Desc {
                ty: resolve_type(line),
            },
            State::Desc { ty } => {
                returns.push(ReturnRecord {
                    ty,
                    desc: line.to_string(),
                });
                State::Type
            }
        };
    }

    if let State::Desc { ty } = state {
        returns.push(ReturnRecord {
            ty,
            desc: String::new(),
        });
    }

    returns
}

/// Element type named after "iterator" in a prose return line, or "".
///
/// This is a fixed-offset heuristic tied to the upstream phrasing
/// "iterator of <Type>"; other phrasings yield garbage or nothing.
pub fn iterator_type(line: &str) -> &str {
    line.find("iterator")
        .and_then(|pos| line.get(pos + ITERATOR_TYPE_OFFSET..))
        .unwrap_or_default()
}

fn resolve_type(token: &str) -> TypeTag {
    let token = FIXUPS
        .iter()
        .find(|&&(from, _)| from == token)
        .map_or(token, |&(_, to)| to);
    TypeTag::parse(token)
}
