//! Pinned upstream releases.

use super::{Package, TarballNaming};

pub static GLEW: Package = Package {
    name: "glew",
    version: "1.5.1",
    base_url: "http://downloads.sourceforge.net/glew",
    naming: TarballNaming::SrcTgz,
};

pub static ZLIB: Package = Package {
    name: "zlib",
    version: "1.2.3",
    base_url: "http://downloads.sourceforge.net/libpng",
    naming: TarballNaming::Default,
};

pub static LIBPNG: Package = Package {
    name: "libpng",
    version: "1.2.34",
    base_url: "http://downloads.sourceforge.net/libpng",
    naming: TarballNaming::Default,
};

pub static TCL: Package = Package {
    name: "tcl",
    version: "8.5.6",
    base_url: "http://downloads.sourceforge.net/tcl",
    naming: TarballNaming::JoinedSrc,
};

pub static SDL: Package = Package {
    name: "SDL",
    version: "1.2.13",
    base_url: "http://www.libsdl.org/release",
    naming: TarballNaming::Default,
};

pub static SDL_IMAGE: Package = Package {
    name: "SDL_image",
    version: "1.2.7",
    base_url: "http://www.libsdl.org/projects/SDL_image/release",
    naming: TarballNaming::Default,
};

pub static SDL_TTF: Package = Package {
    name: "SDL_ttf",
    version: "2.0.9",
    base_url: "http://www.libsdl.org/projects/SDL_ttf/release",
    naming: TarballNaming::Default,
};

pub static FREETYPE: Package = Package {
    name: "freetype",
    version: "2.3.7",
    base_url: "http://nongnu.askapache.com/freetype",
    naming: TarballNaming::Default,
};

pub static LIBXML2: Package = Package {
    name: "libxml2",
    version: "2.7.2",
    base_url: "http://xmlsoft.org/sources",
    naming: TarballNaming::Default,
};

/// DirectX 7 headers and import libraries packaged for MinGW.
pub static DIRECTX: Package = Package {
    name: "dx",
    version: "70",
    base_url: "http://alleg.sourceforge.net/files",
    naming: TarballNaming::JoinedMingw,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_tarball_names() {
        assert_eq!(GLEW.tarball_name(), "glew-1.5.1-src.tgz");
        assert_eq!(ZLIB.tarball_name(), "zlib-1.2.3.tar.gz");
        assert_eq!(LIBPNG.tarball_name(), "libpng-1.2.34.tar.gz");
        assert_eq!(TCL.tarball_name(), "tcl8.5.6-src.tar.gz");
        assert_eq!(SDL.tarball_name(), "SDL-1.2.13.tar.gz");
        assert_eq!(SDL_IMAGE.tarball_name(), "SDL_image-1.2.7.tar.gz");
        assert_eq!(SDL_TTF.tarball_name(), "SDL_ttf-2.0.9.tar.gz");
        assert_eq!(FREETYPE.tarball_name(), "freetype-2.3.7.tar.gz");
        assert_eq!(LIBXML2.tarball_name(), "libxml2-2.7.2.tar.gz");
        assert_eq!(DIRECTX.tarball_name(), "dx70_mgw.tar.gz");
    }

    #[test]
    fn test_upstream_urls() {
        assert_eq!(
            GLEW.download_url(),
            "http://downloads.sourceforge.net/glew/glew-1.5.1-src.tgz"
        );
        assert_eq!(
            ZLIB.download_url(),
            "http://downloads.sourceforge.net/libpng/zlib-1.2.3.tar.gz"
        );
        assert_eq!(
            TCL.download_url(),
            "http://downloads.sourceforge.net/tcl/tcl8.5.6-src.tar.gz"
        );
        assert_eq!(
            SDL_IMAGE.download_url(),
            "http://www.libsdl.org/projects/SDL_image/release/SDL_image-1.2.7.tar.gz"
        );
        assert_eq!(
            DIRECTX.download_url(),
            "http://alleg.sourceforge.net/files/dx70_mgw.tar.gz"
        );
    }

    #[test]
    fn test_name_version_pairs_are_unique() {
        let all = [
            &GLEW, &ZLIB, &LIBPNG, &TCL, &SDL, &SDL_IMAGE, &SDL_TTF, &FREETYPE, &LIBXML2, &DIRECTX,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(
                    (a.name, a.version) != (b.name, b.version),
                    "duplicate descriptor {}",
                    a
                );
                assert_ne!(a.tarball_name(), b.tarball_name());
            }
        }
    }
}
