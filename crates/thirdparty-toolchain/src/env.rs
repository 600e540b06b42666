//! Environment overlay for child build processes.
//!
//! The overlay is computed once from a snapshot of the caller's environment
//! and applied to each spawned [`Command`]. The process environment itself
//! is never modified.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, ToolchainError};

/// Variables removed from every child environment.
///
/// An outer `make` passes `--no-builtin-rules --no-builtin-variables`
/// through these, which breaks the zlib Makefile (and maybe others).
pub const SUPPRESSED_VARS: &[&str] = &["MAKEFLAGS", "MFLAGS"];

/// Variable removals and assignments layered over the inherited environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    removed: Vec<String>,
    set: Vec<(String, OsString)>,
}

impl EnvOverlay {
    /// Overlay for building into `install_prefix`, given the caller's
    /// environment as `(name, value)` pairs.
    ///
    /// Fails if `<prefix>/bin` cannot be joined into a `PATH` value.
    pub fn for_prefix<I>(vars: I, install_prefix: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut overlay = EnvOverlay::default();
        let mut path = None;

        for (name, value) in vars {
            let Some(name) = name.to_str() else { continue };
            if SUPPRESSED_VARS.contains(&name) {
                log::info!("dropping {name} from the build environment");
                overlay.removed.push(name.to_string());
            } else if name == "PATH" {
                path = Some(value);
            }
        }

        overlay.set(
            "PKG_CONFIG_LIBDIR",
            install_prefix.join("lib").join("pkgconfig"),
        );

        let bin = install_prefix.join("bin");
        let mut dirs: Vec<PathBuf> = vec![bin.clone()];
        if let Some(path) = &path {
            dirs.extend(std::env::split_paths(path));
        }
        let joined =
            std::env::join_paths(dirs).map_err(|_| ToolchainError::InvalidPrefix { path: bin })?;
        overlay.set("PATH", joined);

        Ok(overlay)
    }

    /// Add or replace an assignment.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OsString>) {
        let name = name.into();
        let value = value.into();
        match self.set.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.set.push((name, value)),
        }
    }

    /// Variables this overlay removes.
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    /// Value assigned to `name`, if the overlay sets it.
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.set
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_os_str())
    }

    /// Layer this overlay onto a command.
    pub fn apply(&self, cmd: &mut Command) {
        for name in &self.removed {
            cmd.env_remove(name);
        }
        for (name, value) in &self.set {
            cmd.env(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
        pairs
            .iter()
            .map(|(k, v)| (OsString::from(k), OsString::from(v)))
            .collect()
    }

    #[test]
    fn makeflags_is_removed() {
        let env = vars(&[("MAKEFLAGS", "--no-builtin-rules"), ("HOME", "/root")]);
        let overlay = EnvOverlay::for_prefix(env, Path::new("/lib/x86_64-linux-gnu")).unwrap();
        assert_eq!(overlay.removed(), ["MAKEFLAGS".to_string()]);
    }

    #[test]
    fn nothing_removed_without_makeflags() {
        let overlay = EnvOverlay::for_prefix(vars(&[]), Path::new("/p")).unwrap();
        assert!(overlay.removed().is_empty());
    }

    #[test]
    fn prefix_bin_goes_first_on_path() {
        let env = vars(&[("PATH", "/usr/bin:/bin")]);
        let overlay = EnvOverlay::for_prefix(env, Path::new("/p")).unwrap();
        let path = overlay.get("PATH").unwrap();
        let dirs: Vec<PathBuf> = std::env::split_paths(path).collect();
        assert_eq!(dirs[0], PathBuf::from("/p/bin"));
        assert_eq!(&dirs[1..], [PathBuf::from("/usr/bin"), PathBuf::from("/bin")]);
    }

    #[cfg(unix)]
    #[test]
    fn prefix_with_path_separator_is_rejected() {
        let env = vars(&[("PATH", "/usr/bin:/bin")]);
        let err = EnvOverlay::for_prefix(env, Path::new("/tmp/a:b/x86_64-linux-gnu")).unwrap_err();
        match err {
            ToolchainError::InvalidPrefix { path } => {
                assert_eq!(path, Path::new("/tmp/a:b/x86_64-linux-gnu/bin"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pkg_config_is_confined_to_prefix() {
        let overlay = EnvOverlay::for_prefix(vars(&[]), Path::new("/p")).unwrap();
        assert_eq!(
            overlay.get("PKG_CONFIG_LIBDIR"),
            Some(OsStr::new("/p/lib/pkgconfig"))
        );
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut overlay = EnvOverlay::default();
        overlay.set("CC", "gcc");
        overlay.set("CC", "clang");
        assert_eq!(overlay.get("CC"), Some(OsStr::new("clang")));
    }

    #[test]
    fn apply_reaches_the_command() {
        let env = vars(&[("MAKEFLAGS", "-j4")]);
        let overlay = EnvOverlay::for_prefix(env, Path::new("/p")).unwrap();
        let mut cmd = Command::new("true");
        overlay.apply(&mut cmd);
        let envs: Vec<(&OsStr, Option<&OsStr>)> = cmd.get_envs().collect();
        assert!(envs.contains(&(OsStr::new("MAKEFLAGS"), None)));
        assert!(envs.contains(&(
            OsStr::new("PKG_CONFIG_LIBDIR"),
            Some(OsStr::new("/p/lib/pkgconfig"))
        )));
    }
}
