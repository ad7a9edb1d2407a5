//! LDoc page navigation.
//!
//! Index page: the first `<table>` lists classes, one per row, with a
//! `td.name` link and a `td.summary` cell.
//!
//! Class page: `table.function_list` holds the brief entries (name +
//! summary); `dl.function` holds the detailed entries, one `<dd>` per
//! function, in the same order.

use crate::model::{ClassEntry, ClassPage, Identifier, ShortEntry};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Extract the class table from the index page.
pub fn parse_index(html: &str) -> Vec<ClassEntry> {
    let document = Html::parse_document(html);
    let table = selector("table");
    let row = selector("tr");
    let name_link = selector("td.name a");
    let summary = selector("td.summary");

    let Some(table) = document.select(&table).next() else {
        return Vec::new();
    };

    table
        .select(&row)
        .filter_map(|tr| {
            let link = tr.select(&name_link).next()?;
            let url = link.value().attr("href")?.to_string();
            Some(ClassEntry {
                url,
                name: Identifier::normalize(&element_text(link)),
                summary: first_text(tr, &summary),
            })
        })
        .collect()
}

/// Extract the aligned brief and detailed function lists from a class page.
pub fn parse_class_page(html: &str) -> ClassPage {
    let document = Html::parse_document(html);
    let rows = selector("table.function_list tr");
    let name_link = selector(".name a");
    let summary = selector(".summary");
    let details = selector("dl.function dd");

    let summaries = document
        .select(&rows)
        .filter_map(|tr| {
            let link = tr.select(&name_link).next()?;
            Some(ShortEntry {
                name: Identifier::normalize(&element_text(link)),
                desc: first_text(tr, &summary),
            })
        })
        .collect();

    let details = document
        .select(&details)
        .map(|dd| dd.text().collect::<String>())
        .collect();

    ClassPage { summaries, details }
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Element text collapsed onto a single line.
fn element_text(el: ElementRef<'_>) -> String {
    collapse_whitespace(&el.text().collect::<String>())
}

pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text.trim(), " ").into_owned()
}
