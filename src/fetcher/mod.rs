//! The fetch-and-save core: one HTTP GET, a handful of guard conditions,
//! at most one file written.

mod client;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use md5::{Digest, Md5};
use thiserror::Error;
use url::Url;

pub use client::{HttpClient, HttpResponse, UreqClient};

#[cfg(test)]
pub use client::MockClient;

/// Folder used when the caller does not pick one.
pub const DEFAULT_FOLDER: &str = "Fetched_Images";

/// Identifying header sent with every request.
pub const USER_AGENT: &str = "UbuntuFetcher/1.0 (Respectful Client)";

/// Hard cap on how long a single request may block.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a fetch yielded no file. Every failure path lands here; nothing
/// panics or propagates past [`ImageFetcher::fetch`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("connection error: {0}")]
    Network(String),

    #[error("the URL does not point to an image (type: {0})")]
    NotAnImage(String),

    #[error("{0} already exists, skipping download")]
    Duplicate(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

pub struct ImageFetcher<T: HttpClient> {
    client: T,
    folder: PathBuf,
}

impl ImageFetcher<UreqClient> {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self::with_client(folder, UreqClient::new())
    }
}

impl<T: HttpClient> ImageFetcher<T> {
    pub fn with_client(folder: impl Into<PathBuf>, client: T) -> Self {
        ImageFetcher {
            client,
            folder: folder.into(),
        }
    }

    /// Fetches `url` and saves the body under the configured folder.
    ///
    /// Returns the filename written on success. The folder is created on
    /// demand; an already-present filename is treated as a duplicate and
    /// skipped, never overwritten. The filesystem doubles as the
    /// deduplication ledger here, so the existence check is the only
    /// record of past fetches.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        fs::create_dir_all(&self.folder)
            .map_err(|err| FetchError::Unexpected(err.to_string()))?;

        let (body, content_type) = match self.client.get(url) {
            HttpResponse::Transport(detail) => {
                tracing::warn!(url, %detail, "connection error");
                return Err(FetchError::Network(detail));
            }
            HttpResponse::Status(code) => {
                tracing::warn!(url, code, "request failed");
                return Err(FetchError::Network(format!("HTTP status {code}")));
            }
            HttpResponse::Ok { body, content_type } => {
                (body, content_type.unwrap_or_default())
            }
        };

        if !content_type.contains("image") {
            tracing::warn!(url, %content_type, "skipping non-image response");
            return Err(FetchError::NotAnImage(content_type));
        }

        let filename = filename_for(url);
        let filepath = self.folder.join(&filename);

        if filepath.exists() {
            tracing::info!(url, %filename, "duplicate detected");
            return Err(FetchError::Duplicate(filename));
        }

        fs::write(&filepath, &body).map_err(|err| {
            tracing::error!(url, path = %filepath.display(), %err, "write failed");
            FetchError::Unexpected(err.to_string())
        })?;

        tracing::info!(url, path = %filepath.display(), "image saved");

        Ok(filename)
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

/// Filename for a URL: its last path segment, or a synthesized
/// `image_<8-hex>.jpg` when the path ends in a slash or is absent. The hex
/// prefix comes from the MD5 of the URL string exactly as given, so the
/// fallback is stable across runs.
fn filename_for(url: &str) -> String {
    let last_segment = Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|segment| !segment.is_empty());

    match last_segment {
        Some(name) => name,
        None => {
            let digest = hex::encode(Md5::digest(url.as_bytes()));
            format!("image_{}.jpg", &digest[..8])
        }
    }
}
