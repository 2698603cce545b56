// alcloader/src/info.rs
//
//! ALC version information.

use std::fmt::{self, Display, Formatter};

/// The minor versions defined for each major ALC version, starting at major version 1.
static ALC_VERSIONS: [&[u8]; 1] = [
    &[0, 1], // ALC 1
];

/// The ALC version a device reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ALCVersion {
    pub major: u8,
    pub minor: u8,
}

impl ALCVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> ALCVersion {
        ALCVersion { major, minor }
    }

    /// Builds a version from the raw integers a device returns for `ALC_MAJOR_VERSION` and
    /// `ALC_MINOR_VERSION`. Negative values clamp to zero.
    pub(crate) fn from_raw(major: i32, minor: i32) -> ALCVersion {
        let clamp = |value: i32| value.clamp(0, u8::MAX as i32) as u8;
        ALCVersion::new(clamp(major), clamp(minor))
    }

    /// The capability token for this version, e.g. `OpenALC11` for 1.1.
    pub fn token(&self) -> String {
        format!("OpenALC{}{}", self.major, self.minor)
    }

    /// Every defined version not newer than `self`, lowest first.
    ///
    /// Callers test for "at least version X.Y" by the presence of the X.Y token, so this emits
    /// the whole gapless prefix rather than only the exact version.
    pub fn supported_versions(&self) -> Vec<ALCVersion> {
        let mut versions = vec![];
        for (index, minors) in ALC_VERSIONS.iter().enumerate() {
            let major = index as u8 + 1;
            for &minor in minors.iter() {
                if major < self.major || (major == self.major && minor <= self.minor) {
                    versions.push(ALCVersion::new(major, minor));
                }
            }
        }
        versions
    }

    /// The tokens of [`ALCVersion::supported_versions`].
    pub fn version_tokens(&self) -> Vec<String> {
        self.supported_versions().iter().map(ALCVersion::token).collect()
    }
}

impl Display for ALCVersion {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::{ALCVersion, ALC_VERSIONS};

    #[test]
    fn test_tokens_accumulate_up_to_reported_version() {
        assert_eq!(ALCVersion::new(1, 1).version_tokens(), vec!["OpenALC10", "OpenALC11"]);
        assert_eq!(ALCVersion::new(1, 0).version_tokens(), vec!["OpenALC10"]);
    }

    #[test]
    fn test_tokens_for_versions_outside_the_table() {
        assert!(ALCVersion::new(0, 9).version_tokens().is_empty());
        assert!(ALCVersion::new(0, 0).version_tokens().is_empty());
        // A newer major version implies every version we know about.
        assert_eq!(ALCVersion::new(2, 0).version_tokens(), vec!["OpenALC10", "OpenALC11"]);
        assert_eq!(ALCVersion::new(1, 7).version_tokens(), vec!["OpenALC10", "OpenALC11"]);
    }

    #[test]
    fn test_supported_versions_are_exactly_the_defined_prefix() {
        let defined: Vec<ALCVersion> = ALC_VERSIONS.iter()
                                                   .enumerate()
                                                   .flat_map(|(index, minors)| {
            minors.iter().map(move |&minor| ALCVersion::new(index as u8 + 1, minor))
        }).collect();
        assert_eq!(defined, vec![ALCVersion::new(1, 0), ALCVersion::new(1, 1)]);

        for major in 0..4u8 {
            for minor in 0..4u8 {
                let reported = ALCVersion::new(major, minor);
                let expected: Vec<ALCVersion> =
                    defined.iter().cloned().filter(|version| *version <= reported).collect();
                assert_eq!(reported.supported_versions(), expected);
            }
        }
    }

    #[test]
    fn test_from_raw_clamps() {
        assert_eq!(ALCVersion::from_raw(-1, 300), ALCVersion::new(0, 255));
        assert_eq!(ALCVersion::from_raw(1, 1).to_string(), "1.1");
    }
}
