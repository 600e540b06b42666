//! The resolved cross toolchain.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::args::ToolchainArgs;
use crate::env::EnvOverlay;
use crate::error::{Result, ToolchainError};
use crate::flags::{apply_overrides, FlagOverride};
use crate::target::TargetClass;

/// Paths, flags and tools for building libraries for one target triplet.
///
/// Built once per invocation. The only later change is
/// [`Toolchain::with_cppflag_overrides`], which consumes the value before
/// any library is built.
#[derive(Debug, Clone)]
pub struct Toolchain {
    lib_path: PathBuf,
    tarball_path: PathBuf,
    src_path: PathBuf,
    build_path: PathBuf,
    install_prefix: PathBuf,
    host_triplet: String,
    class: TargetClass,
    cflags: String,
    cxxflags: String,
    cppflags: String,
    ldflags: String,
    cc: String,
    cxx: String,
    ar: String,
    arflags: String,
    ranlib: String,
    strip: String,
    windres: String,
    make_jobs: usize,
    env: EnvOverlay,
}

impl Toolchain {
    /// Resolve a toolchain against the caller's environment.
    ///
    /// `source_root` is the project checkout; a relative `LIB_PATH` is
    /// resolved against it.
    pub fn new(source_root: &Path, args: ToolchainArgs) -> Result<Self> {
        Self::with_environment(source_root, args, std::env::vars_os())
    }

    /// Resolve a toolchain against an explicit environment snapshot.
    pub fn with_environment<I>(source_root: &Path, args: ToolchainArgs, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let lib_path = if args.lib_path.is_absolute() {
            args.lib_path.clone()
        } else {
            source_root.join(&args.lib_path)
        };
        let build_path = lib_path.join("build");
        let install_prefix = lib_path.join(&args.host_triplet);

        let class = TargetClass::classify(&args.host_triplet).ok_or_else(|| {
            ToolchainError::UnrecognizedTarget {
                triplet: args.host_triplet.clone(),
                build_path: build_path.clone(),
                install_prefix: install_prefix.clone(),
            }
        })?;

        let output = source_root.join("output");
        let cppflags = format!(
            "-isystem {} -DNDEBUG {}",
            install_prefix.join("include").display(),
            args.cppflags.trim()
        );
        let ldflags = format!(
            "-L{} {}",
            install_prefix.join("lib").display(),
            args.arch_ldflags.trim()
        );
        let env = EnvOverlay::for_prefix(vars, &install_prefix)?;
        let make_jobs = std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1);

        Ok(Self {
            lib_path,
            tarball_path: output.join("download"),
            src_path: output.join("src"),
            build_path,
            install_prefix,
            host_triplet: args.host_triplet,
            class,
            cflags: args.arch_cflags.trim().to_string(),
            cxxflags: args.arch_cflags.trim().to_string(),
            cppflags: cppflags.trim_end().to_string(),
            ldflags: ldflags.trim_end().to_string(),
            cc: args.cc,
            cxx: args.cxx,
            ar: args.ar,
            arflags: args.arflags,
            ranlib: args.ranlib,
            strip: args.strip,
            windres: args.windres,
            make_jobs,
            env,
        })
    }

    /// Apply platform preprocessor-flag edits, producing the final toolchain.
    ///
    /// The edits run on the derived flags, so the prefix `-isystem` and
    /// `-DNDEBUG` are kept even where a platform rewrites the user's
    /// `CPPFLAGS`.
    pub fn with_cppflag_overrides(mut self, overrides: &[FlagOverride]) -> Self {
        if !overrides.is_empty() {
            self.cppflags = apply_overrides(&self.cppflags, overrides);
            log::debug!("CPPFLAGS now: {}", self.cppflags);
        }
        self
    }

    /// Set the parallel job count passed to `make`/`cmake --build`.
    pub fn with_make_jobs(mut self, jobs: usize) -> Self {
        self.make_jobs = jobs.max(1);
        self
    }

    /// Library root given on the command line, made absolute.
    pub fn lib_path(&self) -> &Path {
        &self.lib_path
    }

    /// Directory holding downloaded source tarballs.
    pub fn tarball_path(&self) -> &Path {
        &self.tarball_path
    }

    /// Directory tarballs are extracted into.
    pub fn src_path(&self) -> &Path {
        &self.src_path
    }

    /// Shared scratch directory for out-of-tree builds.
    pub fn build_path(&self) -> &Path {
        &self.build_path
    }

    /// Per-target install prefix, `<lib_path>/<host_triplet>`.
    pub fn install_prefix(&self) -> &Path {
        &self.install_prefix
    }

    pub fn host_triplet(&self) -> &str {
        &self.host_triplet
    }

    pub fn class(&self) -> TargetClass {
        self.class
    }

    pub fn cflags(&self) -> &str {
        &self.cflags
    }

    pub fn cxxflags(&self) -> &str {
        &self.cxxflags
    }

    pub fn cppflags(&self) -> &str {
        &self.cppflags
    }

    pub fn ldflags(&self) -> &str {
        &self.ldflags
    }

    pub fn cc(&self) -> &str {
        &self.cc
    }

    pub fn cxx(&self) -> &str {
        &self.cxx
    }

    pub fn ar(&self) -> &str {
        &self.ar
    }

    pub fn arflags(&self) -> &str {
        &self.arflags
    }

    pub fn ranlib(&self) -> &str {
        &self.ranlib
    }

    pub fn strip(&self) -> &str {
        &self.strip
    }

    pub fn windres(&self) -> &str {
        &self.windres
    }

    pub fn make_jobs(&self) -> usize {
        self.make_jobs
    }

    /// Environment overlay for child build processes.
    pub fn env(&self) -> &EnvOverlay {
        &self.env
    }

    /// Extracted source directory of a library.
    pub fn library_src_dir(&self, base: &str) -> PathBuf {
        self.src_path.join(base)
    }

    /// Out-of-tree build directory of a library.
    pub fn library_build_dir(&self, base: &str) -> PathBuf {
        self.build_path.join(base)
    }

    /// Expand `{prefix}`, `{triplet}`, tool and flag placeholders.
    pub fn expand(&self, template: &str) -> String {
        let prefix = self.install_prefix.display().to_string();
        let pairs: [(&str, &str); 11] = [
            ("{prefix}", &prefix),
            ("{triplet}", &self.host_triplet),
            ("{cc}", &self.cc),
            ("{cxx}", &self.cxx),
            ("{ar}", &self.ar),
            ("{arflags}", &self.arflags),
            ("{ranlib}", &self.ranlib),
            ("{strip}", &self.strip),
            ("{cflags}", &self.cflags),
            ("{cppflags}", &self.cppflags),
            ("{ldflags}", &self.ldflags),
        ];
        pairs
            .iter()
            .fold(template.to_string(), |acc, (key, value)| acc.replace(key, value))
    }
}
