//! Documentation-block parser — one raw detail blob in, one [`FunctionDoc`] out.

pub mod params;
pub mod returns;
pub mod sections;

use crate::model::{FunctionDoc, Identifier, ParameterRecord, ReturnRecord};
use sections::{content_lines, Sections};

/// Parse a function's detailed blob and combine it with its brief entry.
pub fn parse_function(name: Identifier, short_desc: &str, blob: &str) -> FunctionDoc {
    let sections = sections::split(blob);
    let parameters = sections.parameters.map(params::parse).unwrap_or_default();
    let returns = sections.returns.map(returns::parse).unwrap_or_default();
    assemble(name, short_desc, &sections, parameters, returns)
}

/// Build a [`FunctionDoc`] from already-parsed parts.
///
/// When the description section has no text, the brief summary stands in so
/// every stub carries at least one description line.
pub fn assemble(
    name: Identifier,
    short_desc: &str,
    sections: &Sections<'_>,
    parameters: Vec<ParameterRecord>,
    returns: Vec<ReturnRecord>,
) -> FunctionDoc {
    let mut long_desc: Vec<String> = content_lines(sections.desc).map(str::to_string).collect();
    if long_desc.is_empty() {
        long_desc.push(short_desc.to_string());
    }

    let usage: Vec<String> = sections
        .usage
        .map(|text| content_lines(text).map(str::to_string).collect())
        .unwrap_or_default();

    FunctionDoc {
        name,
        short_desc: short_desc.to_string(),
        long_desc,
        usage,
        parameters,
        returns,
    }
}
