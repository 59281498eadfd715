use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    download::Fetcher,
    error::UsageError,
    package::Package,
    platform::Platform,
    runtime::Runtime,
};

pub mod config;

use config::Config;

/// What happened to one package during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A file with the tarball's name was already in the directory.
    AlreadyPresent(PathBuf),
    /// The tarball was downloaded to the given path.
    Fetched(PathBuf),
}

/// Downloads every tarball `platform_str` needs into `tarballs_dir`.
#[tracing::instrument(skip(tarballs_dir, mirror))]
pub async fn fetch(
    platform_str: &str,
    tarballs_dir: PathBuf,
    mirror: Option<String>,
) -> Result<Vec<FetchOutcome>> {
    // An unknown platform is reported before any other invocation problem
    let platform = platform_str.parse::<Platform>()?;
    let config = Config::new(tarballs_dir, mirror)?;
    run(platform, config).await
}

/// Checks the output directory, then fetches the platform's package set.
///
/// A missing output directory never triggers a download.
#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime, F: Fetcher>(
    platform: Platform,
    config: Config<R, F>,
) -> Result<Vec<FetchOutcome>> {
    if !config.runtime.is_dir(&config.tarballs_dir) {
        return Err(UsageError::MissingOutputDirectory(config.tarballs_dir).into());
    }

    debug!(
        "Fetching {} packages for {} into {:?}",
        platform.packages().len(),
        platform,
        config.tarballs_dir
    );

    fetch_packages(
        &config.runtime,
        &config.fetcher,
        platform.packages(),
        &config.tarballs_dir,
        config.mirror.as_deref(),
    )
    .await
}

/// Fetches each package whose tarball is not yet in `tarballs_dir`, in order.
///
/// A file with the expected name counts as downloaded; its content is not
/// checked. The first fetch failure aborts the remaining packages.
pub async fn fetch_packages<R: Runtime, F: Fetcher>(
    runtime: &R,
    fetcher: &F,
    packages: &[&Package],
    tarballs_dir: &Path,
    mirror: Option<&str>,
) -> Result<Vec<FetchOutcome>> {
    let mut outcomes = Vec::with_capacity(packages.len());

    for package in packages {
        let tarball = tarballs_dir.join(package.tarball_name());

        if runtime.is_file(&tarball) {
            println!("     skipped {} (already downloaded)", package);
            outcomes.push(FetchOutcome::AlreadyPresent(tarball));
            continue;
        }

        let url = match mirror {
            Some(base) => package.download_url_from(base),
            None => package.download_url(),
        };
        println!(" downloading {} from {}", package, url);

        let written = fetcher.fetch(&url, tarballs_dir).await?;
        outcomes.push(FetchOutcome::Fetched(written));
    }

    Ok(outcomes)
}
