// alcloader/src/platform.rs
//
//! Mapping from the logical OpenAL library name to platform file names.

use crate::Error;

/// The platforms OpenAL is known to ship for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    /// Any Unix that isn't an Apple platform.
    Linux,
    MacOS,
}

/// The logical name of the OpenAL library and the file names it may be installed under,
/// most preferred first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LibraryNames {
    pub logical: &'static str,
    pub file_names: &'static [&'static str],
}

impl Platform {
    /// Returns the platform this crate was compiled for.
    pub fn current() -> Result<Platform, Error> {
        if cfg!(target_os = "windows") {
            Ok(Platform::Windows)
        } else if cfg!(target_os = "macos") {
            Ok(Platform::MacOS)
        } else if cfg!(all(unix, not(target_os = "ios"))) {
            Ok(Platform::Linux)
        } else {
            Err(Error::UnsupportedOnThisPlatform)
        }
    }

    pub fn library_names(self) -> LibraryNames {
        match self {
            Platform::Windows => LibraryNames {
                logical: "OpenAL32",
                file_names: &["OpenAL32.dll", "soft_oal.dll"],
            },
            Platform::Linux => LibraryNames {
                logical: "openal",
                file_names: &["libopenal.so.1", "libopenal.so"],
            },
            Platform::MacOS => LibraryNames {
                logical: "openal",
                file_names: &[
                    "libopenal.dylib",
                    "libopenal.1.dylib",
                    "/System/Library/Frameworks/OpenAL.framework/OpenAL",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;

    #[test]
    fn test_every_platform_has_candidates() {
        for platform in [Platform::Windows, Platform::Linux, Platform::MacOS] {
            let names = platform.library_names();
            assert!(!names.logical.is_empty());
            assert!(!names.file_names.is_empty());
        }
    }

    #[test]
    fn test_logical_names() {
        assert_eq!(Platform::Windows.library_names().logical, "OpenAL32");
        assert_eq!(Platform::Linux.library_names().logical, "openal");
        assert_eq!(Platform::MacOS.library_names().logical, "openal");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_current_platform_on_linux() {
        assert_eq!(Platform::current(), Ok(Platform::Linux));
    }
}
