//! The fetch primitive: transfer one URL into a local directory.

use crate::http::HttpClient;
use crate::runtime::Runtime;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Url;
use std::path::{Path, PathBuf};

/// Retrieves a remote file into a directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` into `dest_dir`, naming the file after the last URL path
    /// segment. Returns the path of the written file.
    async fn fetch(&self, url: &str, dest_dir: &Path) -> Result<PathBuf>;
}

/// [`Fetcher`] that downloads over HTTP(S).
///
/// The body is streamed into `<file>.part` and renamed into place once
/// complete, so an interrupted transfer never looks like a finished tarball.
pub struct HttpFetcher<R: Runtime> {
    runtime: R,
    http_client: HttpClient,
}

impl<R: Runtime> HttpFetcher<R> {
    pub fn new(runtime: R, http_client: HttpClient) -> Self {
        Self {
            runtime,
            http_client,
        }
    }

    fn discard_partial(&self, part: &Path) {
        if self.runtime.is_file(part) {
            if let Err(e) = self.runtime.remove_file(part) {
                warn!("Failed to remove partial download {:?}: {}", part, e);
            }
        }
    }
}

#[async_trait]
impl<R: Runtime> Fetcher for HttpFetcher<R> {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str, dest_dir: &Path) -> Result<PathBuf> {
        let file_name = file_name_from_url(url)?;
        let target = dest_dir.join(&file_name);
        let part = dest_dir.join(format!("{}.part", file_name));

        info!("Downloading {} to {:?}...", url, target);

        let result = self
            .http_client
            .download_file(url, || {
                self.runtime
                    .create_file(&part)
                    .with_context(|| format!("Failed to create temporary file at {:?}", part))
            })
            .await;

        if let Err(e) = result {
            self.discard_partial(&part);
            return Err(e.context(format!("Failed to download {}", url)));
        }

        if let Err(e) = self.runtime.rename(&part, &target) {
            self.discard_partial(&part);
            return Err(e);
        }

        info!("Download complete.");
        Ok(target)
    }
}

/// File name a URL will be saved under: its last non-empty path segment.
pub fn file_name_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid download URL: {}", url))?;
    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Download URL has no file name: {}", url))
}
