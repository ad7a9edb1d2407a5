//! Keyword sectioning of a detailed documentation blob.
//!
//! A blob is free text optionally followed by `Usage:`, `Returns:` and
//! `Parameters:` sections in any order. Each anchor's first occurrence is
//! located independently; the present anchors are then sorted by offset and
//! every section runs to the next anchor (or the end of the blob).

use regex::Regex;
use std::sync::LazyLock;

static RE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Usage:|Returns:|Parameters:").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Usage,
    Returns,
    Parameters,
}

impl Anchor {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Usage:" => Some(Anchor::Usage),
            "Returns:" => Some(Anchor::Returns),
            "Parameters:" => Some(Anchor::Parameters),
            _ => None,
        }
    }
}

/// A blob partitioned into its description and optional keyword sections.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    pub desc: &'a str,
    pub usage: Option<&'a str>,
    pub returns: Option<&'a str>,
    pub parameters: Option<&'a str>,
}

/// Partition `blob` at its keyword anchors.
pub fn split(blob: &str) -> Sections<'_> {
    // (keyword start, body start, anchor), first occurrence of each anchor
    let mut found: Vec<(usize, usize, Anchor)> = Vec::with_capacity(3);
    for m in RE_ANCHOR.find_iter(blob) {
        if let Some(anchor) = Anchor::from_keyword(m.as_str()) {
            if !found.iter().any(|&(_, _, a)| a == anchor) {
                found.push((m.start(), m.end(), anchor));
            }
        }
    }
    found.sort_by_key(|&(start, _, _)| start);

    let mut sections = Sections {
        desc: found.first().map_or(blob, |&(start, _, _)| &blob[..start]),
        ..Default::default()
    };

    for (i, &(_, body_start, anchor)) in found.iter().enumerate() {
        let end = found.get(i + 1).map_or(blob.len(), |&(start, _, _)| start);
        let body = &blob[body_start..end];
        match anchor {
            Anchor::Usage => sections.usage = Some(body),
            Anchor::Returns => sections.returns = Some(body),
            Anchor::Parameters => sections.parameters = Some(body),
        }
    }

    sections
}

/// Trimmed, non-blank lines of a section.
pub fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_anchors_is_all_description() {
        let blob = "Just a description.\nSpanning lines.";
        assert_eq!(
            split(blob),
            Sections {
                desc: blob,
                usage: None,
                returns: None,
                parameters: None,
            }
        );
    }

    #[test]
    fn default_order() {
        let s = split("Desc\nParameters:\nx\nint\nthe x\nReturns:\nbool\nok\nUsage:\nfoo(1)\n");
        assert_eq!(s.desc, "Desc\n");
        assert_eq!(s.parameters, Some("\nx\nint\nthe x\n"));
        assert_eq!(s.returns, Some("\nbool\nok\n"));
        assert_eq!(s.usage, Some("\nfoo(1)\n"));
    }

    #[test]
    fn reversed_order_keeps_sections_apart() {
        let s = split("Desc\nUsage:\nfoo()\nReturns:\nint\ncount\nParameters:\nx\nany thing\n");
        assert_eq!(s.desc, "Desc\n");
        assert_eq!(s.usage, Some("\nfoo()\n"));
        assert_eq!(s.returns, Some("\nint\ncount\n"));
        assert_eq!(s.parameters, Some("\nx\nany thing\n"));
        for section in [s.usage, s.returns, s.parameters].into_iter().flatten() {
            assert!(!section.contains(':'), "leaked anchor into {:?}", section);
        }
    }

    #[test]
    fn returns_before_usage() {
        let s = split("Gets it.\nReturns:\nstring\nthe name\nUsage:\nlocal n = x:getName()");
        assert_eq!(s.returns, Some("\nstring\nthe name\n"));
        assert_eq!(s.usage, Some("\nlocal n = x:getName()"));
        assert_eq!(s.parameters, None);
    }

    #[test]
    fn anchor_at_start_has_empty_description() {
        let s = split("Returns:\nint\namount");
        assert_eq!(s.desc, "");
        assert_eq!(s.returns, Some("\nint\namount"));
    }

    #[test]
    fn only_first_occurrence_counts() {
        let s = split("Intro\nReturns:\nint\nsee Returns: below");
        assert_eq!(s.returns, Some("\nint\nsee Returns: below"));
    }

    #[test]
    fn content_lines_skip_blanks() {
        let lines: Vec<&str> = content_lines("\n  a  \n\n\t\nb\r\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }
}
