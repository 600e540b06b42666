//! Target family classification.
//!
//! The host triplet is matched against known substrings exactly once, when
//! the toolchain is built. Everything downstream branches on the resulting
//! [`TargetClass`] instead of re-inspecting the triplet.

use std::fmt;

/// The target family a triplet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetClass {
    /// MinGW cross target.
    Windows,
    /// Apple iOS.
    Ios,
    /// Apple macOS (never iOS).
    MacOs,
    Android,
    /// Kobo e-reader, a resource-constrained embedded Linux handheld.
    KoboHandheld,
    /// Any other Linux or BSD.
    Unix,
}

/// Triplet substrings per class, in priority order.
///
/// Android and Kobo triplets also contain `-linux`, so they must be tested
/// before [`TargetClass::Unix`].
const PATTERNS: &[(TargetClass, &[&str])] = &[
    (TargetClass::Windows, &["mingw32"]),
    (TargetClass::Ios, &["-ios"]),
    (TargetClass::MacOs, &["-darwin", "-apple-macos"]),
    (TargetClass::Android, &["-android"]),
    (TargetClass::KoboHandheld, &["-kobo-linux-"]),
    (TargetClass::Unix, &["-linux", "-freebsd", "-netbsd", "-openbsd"]),
];

impl TargetClass {
    /// Classify a host triplet. The first matching family wins.
    pub fn classify(triplet: &str) -> Option<Self> {
        PATTERNS
            .iter()
            .find(|(_, needles)| needles.iter().any(|n| triplet.contains(n)))
            .map(|(class, _)| *class)
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TargetClass::Windows => "Windows",
            TargetClass::Ios => "iOS",
            TargetClass::MacOs => "macOS",
            TargetClass::Android => "Android",
            TargetClass::KoboHandheld => "Kobo",
            TargetClass::Unix => "UNIX",
        }
    }
}

impl fmt::Display for TargetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_triplets() {
        let cases = [
            ("x86_64-w64-mingw32", TargetClass::Windows),
            ("i686-w64-mingw32", TargetClass::Windows),
            ("aarch64-apple-ios", TargetClass::Ios),
            ("x86_64-apple-ios-simulator", TargetClass::Ios),
            ("x86_64-apple-darwin", TargetClass::MacOs),
            ("aarch64-apple-macos11", TargetClass::MacOs),
            ("aarch64-linux-android", TargetClass::Android),
            ("armv7a-linux-androideabi", TargetClass::Android),
            ("armv7a-kobo-linux-musleabihf", TargetClass::KoboHandheld),
            ("x86_64-linux-gnu", TargetClass::Unix),
            ("aarch64-unknown-linux-gnu", TargetClass::Unix),
            ("x86_64-unknown-freebsd", TargetClass::Unix),
        ];
        for (triplet, expected) in cases {
            assert_eq!(TargetClass::classify(triplet), Some(expected), "{triplet}");
        }
    }

    #[test]
    fn unknown_triplets() {
        assert_eq!(TargetClass::classify("thumbv7em-none-eabihf"), None);
        assert_eq!(TargetClass::classify("wasm32-unknown-unknown"), None);
        assert_eq!(TargetClass::classify(""), None);
    }

    #[test]
    fn labels() {
        assert_eq!(TargetClass::MacOs.to_string(), "macOS");
        assert_eq!(TargetClass::Unix.label(), "UNIX");
    }
}
