//! Third-party package descriptors.
//!
//! Every package the build depends on is described by a static [`Package`]
//! record. A descriptor knows how upstream names its source tarball and where
//! upstream publishes it; nothing here touches the filesystem or the network.

mod registry;

use std::fmt;

pub use registry::{DIRECTX, FREETYPE, GLEW, LIBPNG, LIBXML2, SDL, SDL_IMAGE, SDL_TTF, TCL, ZLIB};

/// How upstream spells the tarball file for a given name and version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TarballNaming {
    /// `{name}-{version}.tar.gz`
    Default,
    /// `{name}-{version}-src.tgz`
    SrcTgz,
    /// `{name}{version}-src.tar.gz`
    JoinedSrc,
    /// `{name}{version}_mgw.tar.gz`
    JoinedMingw,
}

impl TarballNaming {
    pub fn file_name(self, name: &str, version: &str) -> String {
        match self {
            TarballNaming::Default => format!("{}-{}.tar.gz", name, version),
            TarballNaming::SrcTgz => format!("{}-{}-src.tgz", name, version),
            TarballNaming::JoinedSrc => format!("{}{}-src.tar.gz", name, version),
            TarballNaming::JoinedMingw => format!("{}{}_mgw.tar.gz", name, version),
        }
    }
}

/// An upstream source package pinned to one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub version: &'static str,
    /// Directory URL the tarball is published under.
    pub base_url: &'static str,
    pub naming: TarballNaming,
}

impl Package {
    /// Canonical file name of the source tarball.
    pub fn tarball_name(&self) -> String {
        self.naming.file_name(self.name, self.version)
    }

    /// Full upstream URL of the source tarball.
    pub fn download_url(&self) -> String {
        self.download_url_from(self.base_url)
    }

    /// URL of the tarball when served from `base` instead of upstream.
    pub fn download_url_from(&self, base: &str) -> String {
        join_url(base, &self.tarball_name())
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Joins a directory URL and a file name with exactly one `/` between them.
pub fn join_url(base: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file_name.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(naming: TarballNaming) -> Package {
        Package {
            name: "foo",
            version: "1.0",
            base_url: "http://example.com/dist",
            naming,
        }
    }

    #[test]
    fn test_default_naming() {
        assert_eq!(package(TarballNaming::Default).tarball_name(), "foo-1.0.tar.gz");
    }

    #[test]
    fn test_override_namings() {
        assert_eq!(package(TarballNaming::SrcTgz).tarball_name(), "foo-1.0-src.tgz");
        assert_eq!(
            package(TarballNaming::JoinedSrc).tarball_name(),
            "foo1.0-src.tar.gz"
        );
        assert_eq!(
            package(TarballNaming::JoinedMingw).tarball_name(),
            "foo1.0_mgw.tar.gz"
        );
    }

    #[test]
    fn test_tarball_name_is_stable() {
        let pkg = package(TarballNaming::JoinedSrc);
        assert_eq!(pkg.tarball_name(), pkg.tarball_name());
    }

    #[test]
    fn test_join_url_single_slash() {
        let expected = "http://example.com/dist/foo-1.0.tar.gz";
        assert_eq!(join_url("http://example.com/dist", "foo-1.0.tar.gz"), expected);
        assert_eq!(join_url("http://example.com/dist/", "foo-1.0.tar.gz"), expected);
        assert_eq!(join_url("http://example.com/dist//", "foo-1.0.tar.gz"), expected);
        assert_eq!(join_url("http://example.com/dist/", "/foo-1.0.tar.gz"), expected);
    }

    #[test]
    fn test_download_url() {
        let pkg = package(TarballNaming::SrcTgz);
        assert_eq!(
            pkg.download_url(),
            "http://example.com/dist/foo-1.0-src.tgz"
        );
    }

    #[test]
    fn test_download_url_from_mirror() {
        let pkg = package(TarballNaming::Default);
        assert_eq!(
            pkg.download_url_from("http://127.0.0.1:1234/"),
            "http://127.0.0.1:1234/foo-1.0.tar.gz"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(package(TarballNaming::Default).to_string(), "foo 1.0");
    }
}
