//! Target platform selection.
//!
//! Each build target needs a fixed, ordered set of third-party packages.
//! The order only affects the progress output.

use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;
use crate::package::{
    DIRECTX, FREETYPE, GLEW, LIBPNG, LIBXML2, Package, SDL, SDL_IMAGE, SDL_TTF, TCL, ZLIB,
};

static WINDOWS_PACKAGES: [&Package; 9] = [
    &GLEW, &ZLIB, &LIBPNG, &TCL, &SDL, &SDL_IMAGE, &SDL_TTF, &FREETYPE, &LIBXML2,
];

static MINGW_PACKAGES: [&Package; 10] = [
    &GLEW, &ZLIB, &LIBPNG, &TCL, &SDL, &SDL_IMAGE, &SDL_TTF, &FREETYPE, &LIBXML2, &DIRECTX,
];

/// Build target whose third-party tarballs should be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Win32,
    X64,
    Mingw,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Win32, Platform::X64, Platform::Mingw];

    /// Identifier as given on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Win32 => "Win32",
            Platform::X64 => "x64",
            Platform::Mingw => "mingw",
        }
    }

    /// Packages needed by this platform, in fetch order.
    pub fn packages(self) -> &'static [&'static Package] {
        match self {
            Platform::Win32 | Platform::X64 => &WINDOWS_PACKAGES,
            // MinGW has no DirectX SDK of its own
            Platform::Mingw => &MINGW_PACKAGES,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UsageError::UnknownPlatform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(platform: Platform) -> Vec<&'static str> {
        platform.packages().iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_parse_known_platforms() {
        assert_eq!("Win32".parse::<Platform>().unwrap(), Platform::Win32);
        assert_eq!("x64".parse::<Platform>().unwrap(), Platform::X64);
        assert_eq!("mingw".parse::<Platform>().unwrap(), Platform::Mingw);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        for bad in ["win32", "X64", "MinGW", "", " mingw"] {
            assert!(bad.parse::<Platform>().is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_parse_unknown_platform() {
        let err = "unknown".parse::<Platform>().unwrap_err();
        assert_eq!(err, UsageError::UnknownPlatform("unknown".to_string()));
        assert!(err.to_string().contains("\"unknown\""));
    }

    #[test]
    fn test_display_round_trips_parse() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_windows_package_order() {
        let expected = vec![
            "glew",
            "zlib",
            "libpng",
            "tcl",
            "SDL",
            "SDL_image",
            "SDL_ttf",
            "freetype",
            "libxml2",
        ];
        assert_eq!(names(Platform::Win32), expected);
        assert_eq!(names(Platform::X64), expected);
    }

    #[test]
    fn test_mingw_adds_directx() {
        let win32 = names(Platform::Win32);
        let mingw = names(Platform::Mingw);

        assert_eq!(mingw.len(), win32.len() + 1);
        assert_eq!(&mingw[..win32.len()], win32.as_slice());
        assert_eq!(mingw.last(), Some(&"dx"));
    }

    #[test]
    fn test_every_platform_selects_packages() {
        for platform in Platform::ALL {
            assert!(!platform.packages().is_empty());
        }
    }
}
