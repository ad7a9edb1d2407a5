//! Page retrieval — dispatch by documentation source.
//!
//! A source is either the published site (fetched over HTTP) or a directory
//! of saved pages laid out the same way (`index.html` plus the class pages
//! at their relative links).

pub mod html;

use crate::error::StubError;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Published API documentation.
pub const DEFAULT_SOURCE: &str = "https://lotj.github.io/lua-docs/";

/// Some documentation hosts reject requests without a browser agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Retrieves raw pages by link relative to the documentation root.
pub trait Fetcher: Sync {
    /// Fetch `page`, or the index page when `page` is empty.
    fn fetch(&self, page: &str) -> Result<String, StubError>;
}

/// HTTP retrieval options.
pub struct HttpConfig<'a> {
    pub user_agent: &'a str,
    pub timeout: Duration,
}

/// Create a fetcher for the given source (URL or directory).
pub fn open_source(source: &str, http: &HttpConfig) -> Box<dyn Fetcher> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Box::new(HttpFetcher::new(source, http))
    } else {
        Box::new(DirFetcher {
            root: PathBuf::from(source),
        })
    }
}

pub struct HttpFetcher {
    base: String,
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(base: &str, config: &HttpConfig) -> Self {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let agent = ureq::AgentBuilder::new()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build();
        HttpFetcher { base, agent }
    }

    fn url(&self, page: &str) -> String {
        format!("{}{}", self.base, page)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, page: &str) -> Result<String, StubError> {
        let url = self.url(page);
        tracing::debug!("GET {}", url);
        let fail = |message: String| StubError::Fetch {
            url: url.clone(),
            message,
        };
        self.agent
            .get(&url)
            .call()
            .map_err(|e| fail(e.to_string()))?
            .into_string()
            .map_err(|e| fail(e.to_string()))
    }
}

/// Saved copy of the documentation on disk.
pub struct DirFetcher {
    pub root: PathBuf,
}

impl Fetcher for DirFetcher {
    fn fetch(&self, page: &str) -> Result<String, StubError> {
        let path = if page.is_empty() {
            self.root.join("index.html")
        } else {
            self.root.join(page)
        };
        tracing::debug!("reading {}", path.display());
        fs::read_to_string(&path).map_err(|e| StubError::Fetch {
            url: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
