use std::fmt;
use std::str::FromStr;

/// A named release channel an upgrade may be pinned to.
///
/// Names are matched exactly (upper-case), the same way they appear in rule documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VersionStream {
    /// Any newer version, including major bumps.
    Major,
    /// Same major version.
    Minor,
    /// Same major and minor version.
    Micro,
    /// Same major, minor and micro version; only the qualifier may change.
    Qualifier,
}

impl VersionStream {
    pub const ALL: [VersionStream; 4] = [
        VersionStream::Major,
        VersionStream::Minor,
        VersionStream::Micro,
        VersionStream::Qualifier,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VersionStream::Major => "MAJOR",
            VersionStream::Minor => "MINOR",
            VersionStream::Micro => "MICRO",
            VersionStream::Qualifier => "QUALIFIER",
        }
    }

    /// Whether `candidate` stays within this stream relative to `current`.
    pub fn contains(self, candidate: &str, current: &str) -> bool {
        let candidate = NumericParts::parse(candidate);
        let current = NumericParts::parse(current);
        match self {
            VersionStream::Major => true,
            VersionStream::Minor => candidate.major == current.major,
            VersionStream::Micro => {
                candidate.major == current.major && candidate.minor == current.minor
            }
            VersionStream::Qualifier => {
                candidate.major == current.major
                    && candidate.minor == current.minor
                    && candidate.micro == current.micro
            }
        }
    }
}

impl fmt::Display for VersionStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown version stream '{0}' (expected MAJOR|MINOR|MICRO|QUALIFIER)")]
pub struct UnknownStream(pub String);

impl FromStr for VersionStream {
    type Err = UnknownStream;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionStream::ALL
            .into_iter()
            .find(|stream| stream.as_str() == s)
            .ok_or_else(|| UnknownStream(s.to_string()))
    }
}

/// Leading numeric components of a version string; missing components are `None`.
///
/// `7.1.0.Final` -> (7, 1, 0), `2.3-SNAPSHOT` -> (2, 3, None).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
struct NumericParts {
    major: Option<u64>,
    minor: Option<u64>,
    micro: Option<u64>,
}

impl NumericParts {
    fn parse(version: &str) -> Self {
        let mut numbers = version
            .split(['.', '-', '_'])
            .map_while(|segment| segment.parse::<u64>().ok());
        NumericParts {
            major: numbers.next(),
            minor: numbers.next(),
            micro: numbers.next(),
        }
    }
}
