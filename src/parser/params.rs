//! "Parameters:" section parser — positional state machine.
//!
//! Each parameter spans up to three non-blank lines: name, type, description.
//! Two shapes short-circuit that layout:
//!
//! - a multi-word second line is a description with no declared type (`any`)
//! - a `function` type is a callback whose description swallows the rest of
//!   the section, which ends parsing

use crate::model::{ParameterRecord, TypeTag};

/// Abbreviations found in upstream parameter types.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("func", "function"),
    ("int", "integer"),
    ("bool", "boolean"),
];

enum State {
    Name,
    Type { name: String },
    Desc { name: String, ty: TypeTag },
}

enum Step {
    Next(State),
    Emit(ParameterRecord),
    /// Callback parameter; its description is the rest of the block
    Absorb { name: String },
}

fn step(state: State, line: &str) -> Step {
    match state {
        State::Name => Step::Next(State::Type {
            name: line.to_string(),
        }),
        State::Type { name } => {
            if line.split_whitespace().nth(1).is_some() {
                return Step::Emit(ParameterRecord {
                    name,
                    ty: TypeTag::Any,
                    desc: line.to_string(),
                });
            }
            match resolve_type(line) {
                TypeTag::Function => Step::Absorb { name },
                ty => Step::Next(State::Desc { name, ty }),
            }
        }
        State::Desc { name, ty } => Step::Emit(ParameterRecord {
            name,
            ty,
            desc: line.to_string(),
        }),
    }
}

fn resolve_type(token: &str) -> TypeTag {
    let token = ABBREVIATIONS
        .iter()
        .find(|&&(short, _)| short == token)
        .map_or(token, |&(_, full)| full);
    TypeTag::parse(token)
}

/// Parse the body of a "Parameters:" section.
pub fn parse(text: &str) -> Vec<ParameterRecord> {
    let lines: Vec<&str> = text.lines().collect();
    let mut params = Vec::new();
    let mut state = State::Name;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match step(state, line) {
            Step::Next(next) => state = next,
            Step::Emit(record) => {
                params.push(record);
                state = State::Name;
            }
            Step::Absorb { name } => {
                let desc: String = lines[i + 1..]
                    .iter()
                    .map(|rest| format!(" {}", rest.trim()))
                    .collect();
                params.push(ParameterRecord {
                    name,
                    ty: TypeTag::Function,
                    desc,
                });
                return params;
            }
        }
    }

    // Section ended mid-record; keep what was documented
    match state {
        State::Name => {}
        State::Type { name } => params.push(ParameterRecord {
            name,
            ty: TypeTag::Any,
            desc: String::new(),
        }),
        State::Desc { name, ty } => params.push(ParameterRecord {
            name,
            ty,
            desc: String::new(),
        }),
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, ty: TypeTag, desc: &str) -> ParameterRecord {
        ParameterRecord {
            name: name.to_string(),
            ty,
            desc: desc.to_string(),
        }
    }

    #[test]
    fn name_type_desc() {
        assert_eq!(
            parse("x\nint\ndoes a thing"),
            vec![param("x", TypeTag::Integer, "does a thing")]
        );
    }

    #[test]
    fn several_params_with_blank_lines() {
        let text = "\n  who\n  string\n  the target\n\n  loud\n  bool\n  shout it\n";
        assert_eq!(
            parse(text),
            vec![
                param("who", TypeTag::String, "the target"),
                param("loud", TypeTag::Boolean, "shout it"),
            ]
        );
    }

    #[test]
    fn multi_word_second_line_is_untyped() {
        assert_eq!(
            parse("value\nanything you like\nn\nint\ncount"),
            vec![
                param("value", TypeTag::Any, "anything you like"),
                param("n", TypeTag::Integer, "count"),
            ]
        );
    }

    #[test]
    fn callback_absorbs_remaining_lines() {
        assert_eq!(
            parse("cb\nfunc\nfirst line\nsecond line"),
            vec![param("cb", TypeTag::Function, " first line second line")]
        );
    }

    #[test]
    fn callback_ends_parsing() {
        let params = parse("cb\nfunction\ncalled per item\nother\nint\nnever parsed");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].ty, TypeTag::Function);
        assert_eq!(params[0].desc, " called per item other int never parsed");
    }

    #[test]
    fn unknown_type_kept_raw() {
        assert_eq!(
            parse("ch\nCharacter\nthe actor"),
            vec![param("ch", TypeTag::Raw("Character".into()), "the actor")]
        );
    }

    #[test]
    fn trailing_partial_records_are_kept() {
        assert_eq!(parse("x"), vec![param("x", TypeTag::Any, "")]);
        assert_eq!(parse("x\nint"), vec![param("x", TypeTag::Integer, "")]);
    }

    #[test]
    fn empty_block() {
        assert!(parse("").is_empty());
        assert!(parse("\n   \n").is_empty());
    }
}
