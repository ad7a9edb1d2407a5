//! Lua annotation stub renderer.
//!
//! Emits the `---@meta` / `---@class` / `---@param` / `---@return` comment
//! grammar understood by Lua language servers. Text is passed through as-is.

use crate::model::*;

/// Render the stub preamble declaring a class table.
pub fn render_class_header(header: &ClassHeader) -> String {
    let name = &header.name;
    let mut out = String::new();
    out.push_str(&format!("---@meta {}\n", name));
    out.push_str("---\n");
    out.push_str(&format!("---{}\n", header.summary));
    out.push_str(&format!("---@class {}\n", name));
    out.push_str(&format!("{} = {{}}\n", name));
    out.push('\n');
    out
}

/// Render one function stub belonging to `class`.
pub fn render_function(class: &Identifier, func: &FunctionDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in &func.long_desc {
        lines.push(format!("---{}", line));
    }

    if !func.usage.is_empty() {
        lines.push("---".to_string());
        lines.push("---Usage:".to_string());
        lines.push("---```".to_string());
        for line in &func.usage {
            lines.push(format!("---    {}", line));
        }
        lines.push("---```".to_string());
    }

    for param in &func.parameters {
        lines.push(render_param(param));
    }

    for ret in &func.returns {
        lines.push(render_return(ret));
    }

    lines.push(format!("function {}.{} end", class, func.name));

    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out
}

/// Render a class header followed by its functions, in order.
pub fn render_class(header: &ClassHeader, functions: &[FunctionDoc]) -> String {
    let mut out = render_class_header(header);
    for func in functions {
        out.push_str(&render_function(&header.name, func));
    }
    out
}

fn render_param(param: &ParameterRecord) -> String {
    let line = if param.ty.is_empty() {
        format!("---@param {} {}", param.name, param.desc)
    } else {
        format!("---@param {} {} {}", param.name, param.ty, param.desc)
    };
    without_dangling_space(line, &param.desc)
}

fn render_return(ret: &ReturnRecord) -> String {
    let line = if ret.ty.is_empty() {
        format!("---@return # {}", ret.desc)
    } else {
        format!("---@return {} # {}", ret.ty, ret.desc)
    };
    without_dangling_space(line, &ret.desc)
}

/// Records kept without a description would otherwise end in a separator.
fn without_dangling_space(mut line: String, desc: &str) -> String {
    if desc.is_empty() {
        line.truncate(line.trim_end().len());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn account() -> ClassHeader {
        ClassHeader {
            name: Identifier::normalize("account"),
            summary: "Player account.".to_string(),
        }
    }

    #[test]
    fn class_header() {
        assert_eq!(
            render_class_header(&account()),
            "---@meta Account\n---\n---Player account.\n---@class Account\nAccount = {}\n\n"
        );
    }

    #[test]
    fn end_to_end_class() {
        let func = parser::parse_function(
            Identifier::normalize("GetGold"),
            "Gets gold.",
            "Gets gold.\nReturns:\nint\namount of gold",
        );
        let out = render_class(&account(), &[func]);
        assert!(out.starts_with("---@meta Account\n"));
        assert!(out.contains("---Gets gold.\n---@return integer # amount of gold\nfunction Account.GetGold end\n\n"));
    }

    #[test]
    fn usage_block() {
        let func = FunctionDoc {
            name: Identifier::normalize("greet"),
            long_desc: vec!["Greets.".to_string()],
            usage: vec!["obj:greet()".to_string()],
            ..Default::default()
        };
        assert_eq!(
            render_function(&Identifier::normalize("npc"), &func),
            "---Greets.\n---\n---Usage:\n---```\n---    obj:greet()\n---```\nfunction Npc.Greet end\n\n"
        );
    }

    #[test]
    fn param_and_return_lines() {
        let func = FunctionDoc {
            name: Identifier::normalize("give"),
            long_desc: vec!["Gives.".to_string()],
            parameters: vec![
                ParameterRecord {
                    name: "n".to_string(),
                    ty: TypeTag::Integer,
                    desc: "amount".to_string(),
                },
                ParameterRecord {
                    name: "why".to_string(),
                    ty: TypeTag::Raw(String::new()),
                    desc: "reason".to_string(),
                },
            ],
            returns: vec![
                ReturnRecord {
                    ty: TypeTag::Boolean,
                    desc: "ok".to_string(),
                },
                ReturnRecord {
                    ty: TypeTag::Raw(String::new()),
                    desc: "a note".to_string(),
                },
            ],
            ..Default::default()
        };
        let out = render_function(&Identifier::normalize("bank"), &func);
        assert_eq!(
            out,
            "---Gives.\n---@param n integer amount\n---@param why reason\n---@return boolean # ok\n---@return # a note\nfunction Bank.Give end\n\n"
        );
    }

    #[test]
    fn partial_records_have_no_trailing_space() {
        let func = parser::parse_function(
            Identifier::normalize("peek"),
            "Peeks.",
            "Peeks.\nParameters:\nx\nReturns:\nint",
        );
        let out = render_function(&Identifier::normalize("box"), &func);
        assert!(out.contains("---@param x any\n"), "got: {}", out);
        assert!(out.contains("---@return integer #\n"), "got: {}", out);
        assert!(out.lines().all(|line| line == line.trim_end()));
    }
}
