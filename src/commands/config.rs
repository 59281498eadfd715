use anyhow::Result;
use log::debug;
use reqwest::{Client, Url};

use std::path::PathBuf;

use crate::{
    download::{Fetcher, HttpFetcher},
    error::UsageError,
    http::HttpClient,
    runtime::{RealRuntime, Runtime},
};

const USER_AGENT: &str = concat!("thirdparty-fetch/", env!("THIRDPARTY_FETCH_VERSION"));

pub struct Config<R: Runtime, F: Fetcher> {
    pub runtime: R,
    pub fetcher: F,
    pub tarballs_dir: PathBuf,
    /// Base URL replacing every package's upstream location
    pub mirror: Option<String>,
}

impl Config<RealRuntime, HttpFetcher<RealRuntime>> {
    pub fn new(tarballs_dir: PathBuf, mirror: Option<String>) -> Result<Self> {
        let mirror = mirror.map(validate_mirror).transpose()?;
        if let Some(mirror) = &mirror {
            debug!("Fetching all tarballs from mirror {}", mirror);
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let fetcher = HttpFetcher::new(RealRuntime, HttpClient::new(client));

        Ok(Self {
            runtime: RealRuntime,
            fetcher,
            tarballs_dir,
            mirror,
        })
    }
}

fn validate_mirror(mirror: String) -> Result<String, UsageError> {
    match Url::parse(&mirror) {
        // Tarball names are appended to the path, so the base must end there
        Ok(url) if !url.cannot_be_a_base() && url.query().is_none() && url.fragment().is_none() => {
            Ok(mirror)
        }
        _ => Err(UsageError::InvalidMirror(mirror)),
    }
}
