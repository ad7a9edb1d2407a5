//! luastub — generate Lua annotation stubs from LDoc API documentation.
//!
//! Scrapes the class index and every class page of a documentation site,
//! parses each function's free-form docs into parameters, returns and usage,
//! and writes one `---@meta` stub file per class for Lua language servers.
//!
//! - **site mode**: `luastub -o LotJLuaAPI [https://lotj.github.io/lua-docs/ | saved-dir]`
//! - **stdin mode**: `luastub --stdin --class account < account.html`

mod error;
mod ident;
mod logger;
mod model;
mod parser;
mod pipeline;
mod render;
mod scrape;
mod sink;

use anyhow::{bail, Context, Result};
use clap::Parser;
use model::{ClassHeader, Identifier};
use scrape::{html, HttpConfig};
use sink::StubSink;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "luastub",
    about = "Generate Lua annotation stubs from LDoc API documentation"
)]
struct Cli {
    /// Documentation root: an http(s) URL or a directory of saved pages
    #[arg(default_value = scrape::DEFAULT_SOURCE)]
    source: String,

    /// Output directory for the generated stubs
    #[arg(short = 'o', long, default_value = "LotJLuaAPI")]
    output: PathBuf,

    /// User-Agent header sent with HTTP requests
    #[arg(long, default_value = scrape::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Number of classes processed concurrently (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 0)]
    jobs: usize,

    /// Read a single class page from stdin and print its stub to stdout
    #[arg(long, requires = "class")]
    stdin: bool,

    /// Class name for --stdin
    #[arg(long)]
    class: Option<String>,

    /// Class summary for --stdin
    #[arg(long, default_value = "")]
    summary: String,

    /// Debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet, cli.no_color);

    if cli.stdin {
        return stdin_mode(&cli);
    }

    site_mode(&cli)
}

/// stdin mode: one saved class page in, its stub on stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let class = cli
        .class
        .as_deref()
        .context("--class is required with --stdin")?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let header = ClassHeader {
        name: Identifier::normalize(class),
        summary: html::collapse_whitespace(&cli.summary),
    };
    let page = html::parse_class_page(&input);
    let functions = pipeline::class_functions(&header.name, &page)?;
    print!("{}", render::render_class(&header, &functions));
    Ok(())
}

/// site mode: scrape the index and every class page, write one stub per class.
fn site_mode(cli: &Cli) -> Result<()> {
    let http = HttpConfig {
        user_agent: &cli.user_agent,
        timeout: Duration::from_secs(cli.timeout),
    };
    let fetcher = scrape::open_source(&cli.source, &http);

    let index = fetcher
        .fetch("")
        .with_context(|| format!("failed to load class index from {}", cli.source))?;
    let classes = html::parse_index(&index);
    if classes.is_empty() {
        bail!("no classes found in index of {}", cli.source);
    }
    tracing::info!("found {} classes in {}", classes.len(), cli.source);

    let sink = StubSink::prepare(&cli.output)?;
    let groups = pipeline::group_classes(classes);
    let outcomes = pipeline::run(fetcher.as_ref(), &sink, &groups, cli.jobs)?;

    let functions: usize = outcomes.iter().map(|o| o.functions).sum();
    tracing::info!(
        "wrote {} stubs with {} functions to {}",
        outcomes.len(),
        functions,
        cli.output.display()
    );

    let failed: Vec<_> = outcomes.iter().filter(|o| !o.errors.is_empty()).collect();
    if !failed.is_empty() {
        for outcome in &failed {
            for e in &outcome.errors {
                tracing::error!("{}: {}", outcome.name, e);
            }
        }
        bail!("{} of {} classes had errors", failed.len(), outcomes.len());
    }

    Ok(())
}
