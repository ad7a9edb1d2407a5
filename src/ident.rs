//! Identifier normalization for class and function names.
//!
//! Scraped names use `_` as a word divider and lowercase module names; stub
//! identifiers drop the divider and start with a capital. The game's own
//! namespace ("lotj", or its alias "core") is always spelled `LOTJ`.

/// Separator removed from raw names.
const SEPARATOR: char = '_';

/// Fixed spelling of the reserved namespace.
const RESERVED: &str = "LOTJ";

/// Normalize a raw name into a stub identifier.
pub fn normalize(raw: &str) -> String {
    let word: String = raw.chars().filter(|&c| c != SEPARATOR).collect();

    if is_reserved(&word) {
        // "lotj" and "core" are both four bytes long
        return format!("{}{}", RESERVED, word.get(4..).unwrap_or_default());
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_reserved(word: &str) -> bool {
    word.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("lotj"))
        || word.eq_ignore_ascii_case("core")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lotj_prefix() {
        assert_eq!(normalize("lotjFoo"), "LOTJFoo");
        assert_eq!(normalize("LotJ"), "LOTJ");
        assert_eq!(normalize("lotj_util"), "LOTJutil");
    }

    #[test]
    fn core_alias() {
        assert_eq!(normalize("core"), "LOTJ");
        assert_eq!(normalize("CORE"), "LOTJ");
    }

    #[test]
    fn core_prefix_is_not_reserved() {
        assert_eq!(normalize("coreutils"), "Coreutils");
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(normalize("widget"), "Widget");
        assert_eq!(normalize("getGold"), "GetGold");
    }

    #[test]
    fn strips_every_separator() {
        assert_eq!(normalize("get_max_hp"), "Getmaxhp");
        assert_eq!(normalize("_x_"), "X");
    }

    #[test]
    fn empty_and_short_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("a"), "A");
        assert_eq!(normalize("é"), "É");
    }
}
