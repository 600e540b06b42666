//! Per-platform selection of the third-party library set.
//!
//! [`select_profile`] is a pure function of the target class and the
//! requested optional features. It returns a fresh [`Profile`]: the ordered
//! library sequence plus the preprocessor-flag edits the platform needs.
//! Sequence order is build order; later libraries may link against earlier
//! ones.

use serde::Deserialize;

use thirdparty_libs::LibraryId;
use thirdparty_toolchain::{FlagOverride, TargetClass};

/// Libraries built for every platform unless the platform removes them.
pub const BASE_LIBRARIES: [LibraryId; 7] = [
    LibraryId::Zlib,
    LibraryId::Libfmt,
    LibraryId::Libsodium,
    LibraryId::Openssl,
    LibraryId::Cares,
    LibraryId::Curl,
    LibraryId::Lua,
];

/// Cross toolchain built before anything else for the Kobo.
pub const KOBO_BOOTSTRAP: [LibraryId; 5] = [
    LibraryId::Binutils,
    LibraryId::LinuxHeaders,
    LibraryId::GccBootstrap,
    LibraryId::Musl,
    LibraryId::Gcc,
];

/// Kobo-only libraries built after the base set.
pub const KOBO_EXTRAS: [LibraryId; 6] = [
    LibraryId::Freetype,
    LibraryId::Libpng,
    LibraryId::Libjpeg,
    LibraryId::Libsalsa,
    LibraryId::Libusb,
    LibraryId::SimpleUsbModeSwitch,
];

/// Geospatial raster stack used by GeoTIFF terrain support.
pub const GEOTIFF_LIBRARIES: [LibraryId; 4] = [
    LibraryId::Sqlite3,
    LibraryId::Proj,
    LibraryId::Libtiff,
    LibraryId::Libgeotiff,
];

/// Scientific data format libraries used by the SkySight weather overlay.
pub const NETCDF_LIBRARIES: [LibraryId; 2] = [LibraryId::Netcdf, LibraryId::NetcdfCxx];

/// Optional features that pull in extra libraries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Features {
    /// GeoTIFF terrain support.
    pub geotiff: bool,
    /// SkySight weather overlay; implies the GeoTIFF libraries.
    pub skysight: bool,
}

impl Features {
    /// Features a platform enables on its own.
    pub fn platform_default(class: TargetClass) -> Self {
        match class {
            TargetClass::Windows | TargetClass::Android => Features {
                geotiff: false,
                skysight: true,
            },
            _ => Features::default(),
        }
    }

    /// Union of two feature sets.
    pub fn union(self, other: Features) -> Self {
        Features {
            geotiff: self.geotiff || other.geotiff,
            skysight: self.skysight || other.skysight,
        }
    }
}

/// The library sequence and flag edits for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Libraries in build order.
    pub libraries: Vec<LibraryId>,
    /// Edits applied to the preprocessor flags before any build starts.
    pub cppflag_overrides: Vec<FlagOverride>,
    /// Features in effect after applying platform defaults.
    pub features: Features,
}

/// Compose the profile for a target class.
///
/// `requested` can only add features on top of the platform defaults.
/// macOS builds nothing regardless of features.
pub fn select_profile(class: TargetClass, requested: Features) -> Profile {
    let mut libraries: Vec<LibraryId> = Vec::new();
    let mut cppflag_overrides = Vec::new();
    let features = Features::platform_default(class).union(requested);

    match class {
        TargetClass::Windows => {
            // Schannel replaces OpenSSL.
            libraries.extend(BASE_LIBRARIES.iter().filter(|id| **id != LibraryId::Openssl));
            // Some libraries (such as curl) want the min()/max() macros, and
            // _FORTIFY_SOURCE is broken with mingw.
            cppflag_overrides.push(FlagOverride::StripSubstring("-DNOMINMAX".into()));
            cppflag_overrides.push(FlagOverride::Append("-D_FORTIFY_SOURCE=0".into()));
        }
        TargetClass::Ios => {
            libraries.extend(BASE_LIBRARIES);
            libraries.push(LibraryId::Sdl2);
        }
        TargetClass::MacOs => {
            return Profile {
                libraries,
                cppflag_overrides,
                features: Features::default(),
            };
        }
        TargetClass::Android => {
            // The OS ships zlib.
            libraries.extend(BASE_LIBRARIES.iter().filter(|id| **id != LibraryId::Zlib));
        }
        TargetClass::KoboHandheld => {
            libraries.extend(KOBO_BOOTSTRAP);
            libraries.extend(BASE_LIBRARIES);
            libraries.extend(KOBO_EXTRAS);
        }
        TargetClass::Unix => {
            libraries.extend(NETCDF_LIBRARIES);
        }
    }

    // GeoTIFF first: the SkySight libraries sit on top of it.
    if features.geotiff || features.skysight {
        append_missing(&mut libraries, &GEOTIFF_LIBRARIES);
    }
    if features.skysight {
        append_missing(&mut libraries, &NETCDF_LIBRARIES);
    }

    Profile {
        libraries,
        cppflag_overrides,
        features,
    }
}

fn append_missing(libraries: &mut Vec<LibraryId>, group: &[LibraryId]) {
    for id in group {
        if !libraries.contains(id) {
            libraries.push(*id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thirdparty_toolchain::apply_overrides;

    const NONE: Features = Features {
        geotiff: false,
        skysight: false,
    };
    const ALL: Features = Features {
        geotiff: true,
        skysight: true,
    };

    fn concat(parts: &[&[LibraryId]]) -> Vec<LibraryId> {
        parts.iter().flat_map(|p| p.iter().copied()).collect()
    }

    #[test]
    fn unix_replaces_base_with_netcdf() {
        let p = select_profile(TargetClass::Unix, NONE);
        assert_eq!(p.libraries, [LibraryId::Netcdf, LibraryId::NetcdfCxx]);
        assert!(p.cppflag_overrides.is_empty());
        assert_eq!(p.features, NONE);
    }

    #[test]
    fn unix_with_geotiff_does_not_repeat_netcdf() {
        let p = select_profile(TargetClass::Unix, ALL);
        assert_eq!(
            p.libraries,
            concat(&[&NETCDF_LIBRARIES, &GEOTIFF_LIBRARIES])
        );
    }

    #[test]
    fn kobo_bootstrap_base_then_extras() {
        let p = select_profile(TargetClass::KoboHandheld, NONE);
        assert_eq!(
            p.libraries,
            concat(&[&KOBO_BOOTSTRAP, &BASE_LIBRARIES, &KOBO_EXTRAS])
        );
        assert_eq!(
            &p.libraries[..5],
            [
                LibraryId::Binutils,
                LibraryId::LinuxHeaders,
                LibraryId::GccBootstrap,
                LibraryId::Musl,
                LibraryId::Gcc,
            ]
        );
    }

    #[test]
    fn windows_drops_openssl_and_fixes_flags() {
        let p = select_profile(TargetClass::Windows, NONE);
        assert!(!p.libraries.contains(&LibraryId::Openssl));
        assert!(p.libraries.contains(&LibraryId::Curl));

        let flags = apply_overrides("-DNOMINMAX -DUNICODE", &p.cppflag_overrides);
        assert!(!flags.contains("-DNOMINMAX"));
        assert!(flags.contains("-D_FORTIFY_SOURCE=0"));
        assert!(flags.contains("-DUNICODE"));
    }

    #[test]
    fn windows_enables_skysight_after_base() {
        let p = select_profile(TargetClass::Windows, NONE);
        assert!(p.features.skysight);
        let base: Vec<LibraryId> = BASE_LIBRARIES
            .iter()
            .copied()
            .filter(|id| *id != LibraryId::Openssl)
            .collect();
        assert_eq!(
            p.libraries,
            concat(&[&base, &GEOTIFF_LIBRARIES, &NETCDF_LIBRARIES])
        );
    }

    #[test]
    fn ios_adds_sdl() {
        let p = select_profile(TargetClass::Ios, NONE);
        assert_eq!(p.libraries, concat(&[&BASE_LIBRARIES, &[LibraryId::Sdl2]]));
    }

    #[test]
    fn macos_is_always_empty() {
        for features in [NONE, ALL] {
            let p = select_profile(TargetClass::MacOs, features);
            assert!(p.libraries.is_empty());
            assert!(p.cppflag_overrides.is_empty());
        }
    }

    #[test]
    fn android_drops_zlib_and_enables_skysight() {
        let p = select_profile(TargetClass::Android, NONE);
        assert!(!p.libraries.contains(&LibraryId::Zlib));
        assert!(p.libraries.contains(&LibraryId::Openssl));
        assert_eq!(&p.libraries[p.libraries.len() - 2..], NETCDF_LIBRARIES);
    }

    #[test]
    fn android_sequence_is_exact() {
        let p = select_profile(TargetClass::Android, NONE);
        let base: Vec<LibraryId> = BASE_LIBRARIES
            .iter()
            .copied()
            .filter(|id| *id != LibraryId::Zlib)
            .collect();
        assert_eq!(
            p.libraries,
            concat(&[&base, &GEOTIFF_LIBRARIES, &NETCDF_LIBRARIES])
        );
        assert!(p.cppflag_overrides.is_empty());
    }

    #[test]
    fn geotiff_alone_skips_netcdf() {
        let p = select_profile(
            TargetClass::Ios,
            Features {
                geotiff: true,
                skysight: false,
            },
        );
        assert!(p.libraries.ends_with(&GEOTIFF_LIBRARIES));
        assert!(!p.libraries.contains(&LibraryId::Netcdf));
    }

    #[test]
    fn geotiff_group_precedes_netcdf_group() {
        let p = select_profile(TargetClass::KoboHandheld, ALL);
        let pos = |id: LibraryId| p.libraries.iter().position(|l| *l == id).unwrap();
        assert!(pos(LibraryId::Libgeotiff) < pos(LibraryId::Netcdf));
        assert!(pos(LibraryId::SimpleUsbModeSwitch) < pos(LibraryId::Sqlite3));
    }

    #[test]
    fn features_deserialize_with_defaults() {
        let f: Features = toml::from_str("geotiff = true").unwrap();
        assert_eq!(
            f,
            Features {
                geotiff: true,
                skysight: false
            }
        );
    }
}
