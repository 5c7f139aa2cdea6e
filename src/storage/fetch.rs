//! Remote resources and the HTTP fetcher
//!
//! A [`Resource`] is a logical key plus a format. It maps purely onto a
//! URL and onto a cache key, so the same resource always lands in the same
//! cache file.

use std::fmt;

use reqwest::blocking::Client as HttpClient;
use reqwest::StatusCode;
use thiserror::Error;

use super::config::RemoteConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Formats the index is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    Xml,
    Ascii,
}

impl IndexFormat {
    pub const ALL: [IndexFormat; 2] = [IndexFormat::Xml, IndexFormat::Ascii];

    /// Remote and cache file name
    pub fn file_name(&self) -> &'static str {
        match self {
            IndexFormat::Xml => "rfc-index.xml",
            IndexFormat::Ascii => "rfc-index.txt",
        }
    }
}

/// Formats a single RFC can be downloaded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum DocumentFormat {
    #[default]
    #[value(name = "txt")]
    Text,
    #[value(name = "ps")]
    PostScript,
    #[value(name = "pdf")]
    Pdf,
}

impl DocumentFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Text => "txt",
            DocumentFormat::PostScript => "ps",
            DocumentFormat::Pdf => "pdf",
        }
    }
}

/// Something that can be fetched and cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Index(IndexFormat),
    Document { number: u32, format: DocumentFormat },
}

impl Resource {
    pub fn document(number: u32, format: DocumentFormat) -> Self {
        Resource::Document { number, format }
    }

    /// Builds the URL for this resource
    pub fn url(&self, remote: &RemoteConfig) -> String {
        match self {
            Resource::Index(format) => format!(
                "{}/{}",
                remote.index_base_url.trim_end_matches('/'),
                format.file_name()
            ),
            Resource::Document { number, format } => format!(
                "{}/rfc{}.{}",
                remote.document_base_url.trim_end_matches('/'),
                number,
                format.extension()
            ),
        }
    }

    /// Builds the cache key: a fixed name per index format, the decimal
    /// number for text documents, `<n>.<ext>` for other document formats
    pub fn cache_key(&self) -> String {
        match self {
            Resource::Index(format) => format.file_name().to_string(),
            Resource::Document {
                number,
                format: DocumentFormat::Text,
            } => number.to_string(),
            Resource::Document { number, format } => format!("{}.{}", number, format.extension()),
        }
    }

    /// Recognises cache keys produced by [`Resource::cache_key`]
    pub fn from_cache_key(key: &str) -> Option<Self> {
        if let Some(format) = IndexFormat::ALL.into_iter().find(|f| f.file_name() == key) {
            return Some(Resource::Index(format));
        }

        let (number, format) = match key.split_once('.') {
            None => (key, DocumentFormat::Text),
            Some((number, "ps")) => (number, DocumentFormat::PostScript),
            Some((number, "pdf")) => (number, DocumentFormat::Pdf),
            Some(_) => return None,
        };
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let number = number.parse().ok()?;
        Some(Resource::Document { number, format })
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Index(format) => write!(f, "index ({})", format.file_name()),
            Resource::Document { number, format } => {
                write!(f, "RFC {} ({})", number, format.extension())
            }
        }
    }
}

/// Retrieves the full body of a resource
pub trait Fetcher {
    fn fetch(&self, resource: &Resource) -> Result<Vec<u8>, FetchError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, resource: &Resource) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(resource)
    }
}

/// Blocking HTTP fetcher
pub struct HttpFetcher {
    client: HttpClient,
    remote: RemoteConfig,
}

impl HttpFetcher {
    pub fn new(remote: RemoteConfig) -> Result<Self, FetchError> {
        let client = HttpClient::builder()
            .timeout(remote.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, remote })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, resource: &Resource) -> Result<Vec<u8>, FetchError> {
        let url = resource.url(&self.remote);
        tracing::info!(%url, "fetching {resource}");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = response
            .bytes()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        tracing::debug!(%url, bytes = body.len(), "fetched {resource}");
        Ok(body.to_vec())
    }
}
