use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use thirdparty_fetch::{commands::fetch, error::exit_code};

/// thirdparty-fetch - Third-party source tarball downloader
///
/// Downloads the source tarballs a target platform's build depends on into
/// an existing directory. Tarballs already present are skipped.
///
/// Examples:
///   thirdparty-fetch mingw ./tarballs   # Fetch the MinGW package set
#[derive(Parser, Debug)]
#[command(author, version = env!("THIRDPARTY_FETCH_VERSION"), about)]
struct Cli {
    /// Target platform: Win32, x64 or mingw
    #[arg(value_name = "PLATFORM")]
    pub platform: String,

    /// Existing directory the tarballs are stored in
    #[arg(value_name = "TARBALLS_DIR")]
    pub tarballs_dir: PathBuf,

    /// Fetch every tarball from this base URL instead of upstream (also via THIRDPARTY_MIRROR)
    #[arg(long = "mirror", env = "THIRDPARTY_MIRROR", value_name = "URL")]
    pub mirror: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match fetch(&cli.platform, cli.tarballs_dir, cli.mirror).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}
