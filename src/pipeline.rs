//! Per-class orchestration: fetch, parse, render, sink.
//!
//! Classes are independent. Each one is rendered into a single buffer (header
//! first, then its functions in page order) and handed to the sink once, so
//! concurrent classes never interleave and a failing class only loses its own
//! functions.

use crate::error::StubError;
use crate::model::*;
use crate::parser;
use crate::render;
use crate::scrape::{html, Fetcher};
use crate::sink::StubSink;
use rayon::prelude::*;

/// Index entries sharing one normalized class identifier.
#[derive(Debug)]
pub struct ClassGroup {
    pub header: ClassHeader,
    pub entries: Vec<ClassEntry>,
}

/// Result of processing one [`ClassGroup`].
#[derive(Debug)]
pub struct ClassOutcome {
    pub name: Identifier,
    pub functions: usize,
    pub errors: Vec<StubError>,
}

/// Group index entries by identifier, keeping first-seen order.
///
/// Distinct pages can normalize to the same identifier ("lotj" and "core");
/// they share one stub whose header comes from the first entry.
pub fn group_classes(entries: Vec<ClassEntry>) -> Vec<ClassGroup> {
    let mut groups: Vec<ClassGroup> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.header.name == entry.name) {
            Some(group) => group.entries.push(entry),
            None => groups.push(ClassGroup {
                header: ClassHeader::from(&entry),
                entries: vec![entry],
            }),
        }
    }
    groups
}

/// Parse every function documented on a class page.
pub fn class_functions(class: &Identifier, page: &ClassPage) -> Result<Vec<FunctionDoc>, StubError> {
    if page.summaries.len() != page.details.len() {
        return Err(StubError::AlignmentMismatch {
            class: class.to_string(),
            summaries: page.summaries.len(),
            details: page.details.len(),
        });
    }

    Ok(page
        .summaries
        .iter()
        .zip(&page.details)
        .map(|(short, blob)| parser::parse_function(short.name.clone(), &short.desc, blob))
        .collect())
}

/// Fetch and render one class group into its complete stub text.
pub fn render_group(fetcher: &dyn Fetcher, group: &ClassGroup) -> (String, usize, Vec<StubError>) {
    let name = &group.header.name;
    let mut out = render::render_class_header(&group.header);
    let mut count = 0;
    let mut errors = Vec::new();

    for entry in &group.entries {
        tracing::debug!("{}: '{}' - {}", entry.name, entry.url, entry.summary);
        let functions = fetcher
            .fetch(&entry.url)
            .and_then(|page| class_functions(name, &html::parse_class_page(&page)));
        match functions {
            Ok(functions) => {
                for func in &functions {
                    tracing::debug!("{}.{}: {}", name, func.name, func.short_desc);
                    out.push_str(&render::render_function(name, func));
                }
                count += functions.len();
            }
            Err(e) => {
                tracing::warn!("skipping functions of {}: {}", name, e);
                errors.push(e);
            }
        }
    }

    (out, count, errors)
}

/// Render and sink one class group.
pub fn process_group(fetcher: &dyn Fetcher, sink: &StubSink, group: &ClassGroup) -> ClassOutcome {
    let name = group.header.name.clone();
    let (text, functions, mut errors) = render_group(fetcher, group);

    match sink.write(&name, &text) {
        Ok(path) => tracing::info!("added {} functions to {}", functions, path.display()),
        Err(e) => {
            tracing::warn!("{}", e);
            errors.push(e);
        }
    }

    ClassOutcome {
        name,
        functions,
        errors,
    }
}

/// Process all groups on a pool of `jobs` threads (0 = one per CPU).
pub fn run(
    fetcher: &dyn Fetcher,
    sink: &StubSink,
    groups: &[ClassGroup],
    jobs: usize,
) -> anyhow::Result<Vec<ClassOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    Ok(pool.install(|| {
        groups
            .par_iter()
            .map(|group| process_group(fetcher, sink, group))
            .collect()
    }))
}
