//! Data-driven build recipes.
//!
//! A [`Recipe`] describes where a library's source lives and which build
//! system drives it. Building means: unpack the tarball from the tarball
//! cache (downloading is not handled here), then run the configure, make
//! and install steps with the toolchain's environment overlay applied.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use thirdparty_toolchain::{TargetClass, Toolchain};

use crate::error::{LibraryError, Result};
use crate::id::LibraryId;
use crate::library::Library;

/// `make` arguments for the default target.
pub const MAKE_ALL: &[&str] = &[];

/// `make` arguments for the conventional install target.
pub const MAKE_INSTALL: &[&str] = &["install"];

/// How a library's source tree is configured, compiled and installed.
///
/// All argument lists may contain toolchain placeholders such as
/// `{prefix}` or `{triplet}`; see [`Toolchain::expand`].
#[derive(Debug, Clone)]
pub enum BuildSystem {
    /// GNU `configure`, run out of tree.
    ///
    /// With `host` set, the library is cross-compiled for the target
    /// (`--host`, static only, toolchain tools in the environment).
    /// Without it, the package is a cross tool that runs on the build
    /// machine and its arguments name the target themselves.
    Autotools {
        host: bool,
        args: &'static [&'static str],
        make: &'static [&'static str],
        install: &'static [&'static str],
    },
    /// A project-specific configure script, run in the source tree.
    Configure {
        script: &'static str,
        args: &'static [&'static str],
        make: &'static [&'static str],
        install: &'static [&'static str],
    },
    /// CMake with the Makefile generator, out of tree.
    CMake { options: &'static [&'static str] },
    /// A plain Makefile in the source tree.
    Make {
        make: &'static [&'static str],
        install: &'static [&'static str],
    },
}

impl BuildSystem {
    fn out_of_tree(&self) -> bool {
        matches!(self, BuildSystem::Autotools { .. } | BuildSystem::CMake { .. })
    }
}

/// Build description of one library.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: LibraryId,
    pub version: &'static str,
    /// File name inside the tarball cache.
    pub tarball: &'static str,
    /// Top-level directory the tarball unpacks to.
    pub base: &'static str,
    /// File whose presence under the install prefix marks the library
    /// as installed. May use `{triplet}`.
    pub installed: &'static str,
    pub system: BuildSystem,
    /// Extra configure arguments (or CMake options, or make variables)
    /// for one target class.
    pub class_args: &'static [(TargetClass, &'static [&'static str])],
}

impl Recipe {
    /// Marker file checked by [`Library::is_installed`].
    pub fn installed_path(&self, toolchain: &Toolchain) -> PathBuf {
        toolchain
            .install_prefix()
            .join(toolchain.expand(self.installed))
    }

    /// Unpack the source tarball unless the tree is already there.
    ///
    /// Returns the source directory.
    pub fn unpack(&self, toolchain: &Toolchain) -> Result<PathBuf> {
        let src = toolchain.library_src_dir(self.base);
        if src.is_dir() {
            log::debug!("{} already unpacked at {}", self.id, src.display());
            return Ok(src);
        }

        let tarball = toolchain.tarball_path().join(self.tarball);
        if !tarball.is_file() {
            return Err(LibraryError::MissingTarball { path: tarball });
        }

        let dest = toolchain.src_path();
        fs::create_dir_all(dest).map_err(|source| LibraryError::Io {
            path: dest.to_path_buf(),
            source,
        })?;

        log::info!("unpacking {}", tarball.display());
        let mut tar = Command::new("tar");
        tar.arg("-xf").arg(&tarball).arg("-C").arg(dest);
        run(&mut tar, toolchain)?;

        if !src.is_dir() {
            return Err(LibraryError::BadArchive {
                tarball,
                expected: src,
            });
        }
        Ok(src)
    }

    /// The configure, build and install commands, in order, for a source
    /// tree at `src`. Nothing is spawned.
    pub fn commands(&self, toolchain: &Toolchain, src: &Path) -> Vec<Command> {
        let extra = self.class_args(toolchain);
        let build = toolchain.library_build_dir(self.id.name());

        match &self.system {
            BuildSystem::Autotools {
                host,
                args,
                make,
                install,
            } => {
                let mut configure = Command::new(src.join("configure"));
                configure.arg(format!("--prefix={}", toolchain.install_prefix().display()));
                if *host {
                    configure
                        .arg(format!("--host={}", toolchain.host_triplet()))
                        .args(["--enable-static", "--disable-shared"]);
                    tool_env(&mut configure, toolchain);
                }
                configure
                    .args(expand_all(toolchain, args))
                    .args(extra)
                    .current_dir(&build);

                vec![
                    configure,
                    make_cmd(toolchain, &build, make),
                    install_cmd(toolchain, &build, install),
                ]
            }
            BuildSystem::Configure {
                script,
                args,
                make,
                install,
            } => {
                let mut configure = Command::new(src.join(script));
                configure
                    .args(expand_all(toolchain, args))
                    .args(extra)
                    .current_dir(src);
                tool_env(&mut configure, toolchain);

                vec![
                    configure,
                    make_cmd(toolchain, src, make),
                    install_cmd(toolchain, src, install),
                ]
            }
            BuildSystem::CMake { options } => {
                let mut configure = Command::new("cmake");
                configure
                    .args(["-G", "Unix Makefiles", "-S"])
                    .arg(src)
                    .arg("-B")
                    .arg(&build)
                    .args(cmake_toolchain_args(toolchain))
                    .args(expand_all(toolchain, options))
                    .args(extra);

                let mut compile = Command::new("cmake");
                compile
                    .arg("--build")
                    .arg(&build)
                    .arg(format!("-j{}", toolchain.make_jobs()));

                let mut install = Command::new("cmake");
                install.arg("--install").arg(&build);

                vec![configure, compile, install]
            }
            BuildSystem::Make { make, install } => {
                let mut compile = make_cmd(toolchain, src, make);
                compile.args(extra);
                vec![compile, install_cmd(toolchain, src, install)]
            }
        }
    }

    fn class_args(&self, toolchain: &Toolchain) -> Vec<String> {
        self.class_args
            .iter()
            .filter(|(class, _)| *class == toolchain.class())
            .flat_map(|(_, args)| expand_all(toolchain, args))
            .collect()
    }
}

impl Library for Recipe {
    fn id(&self) -> LibraryId {
        self.id
    }

    fn is_installed(&self, toolchain: &Toolchain) -> bool {
        self.installed_path(toolchain).exists()
    }

    fn build(&self, toolchain: &Toolchain) -> Result<()> {
        log::info!("building {} {}", self.id, self.version);
        let src = self.unpack(toolchain)?;

        if self.system.out_of_tree() {
            let build = toolchain.library_build_dir(self.id.name());
            reset_dir(&build)?;
        }

        for mut cmd in self.commands(toolchain, &src) {
            run(&mut cmd, toolchain)?;
        }
        Ok(())
    }
}

/// Remove leftovers of an earlier attempt and recreate the directory.
fn reset_dir(dir: &Path) -> Result<()> {
    let io = |source: std::io::Error| LibraryError::Io {
        path: dir.to_path_buf(),
        source,
    };
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(io)?;
    }
    fs::create_dir_all(dir).map_err(io)
}

fn expand_all(toolchain: &Toolchain, args: &[&str]) -> Vec<String> {
    args.iter().map(|a| toolchain.expand(a)).collect()
}

fn make_cmd(toolchain: &Toolchain, dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("make");
    cmd.arg(format!("-j{}", toolchain.make_jobs()))
        .args(expand_all(toolchain, args))
        .current_dir(dir);
    cmd
}

fn install_cmd(toolchain: &Toolchain, dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("make");
    cmd.args(expand_all(toolchain, args)).current_dir(dir);
    cmd
}

/// Compiler, tools and flags for configure scripts that read them from
/// the environment. Empty values are left unset.
fn tool_env(cmd: &mut Command, toolchain: &Toolchain) {
    let vars = [
        ("CC", toolchain.cc()),
        ("CXX", toolchain.cxx()),
        ("AR", toolchain.ar()),
        ("ARFLAGS", toolchain.arflags()),
        ("RANLIB", toolchain.ranlib()),
        ("STRIP", toolchain.strip()),
        ("CFLAGS", toolchain.cflags()),
        ("CXXFLAGS", toolchain.cxxflags()),
        ("CPPFLAGS", toolchain.cppflags()),
        ("LDFLAGS", toolchain.ldflags()),
    ];
    for (name, value) in vars {
        if !value.is_empty() {
            cmd.env(name, value);
        }
    }
    if toolchain.class() == TargetClass::Windows && !toolchain.windres().is_empty() {
        cmd.env("RC", toolchain.windres());
    }
}

fn cmake_system_name(class: TargetClass) -> Option<&'static str> {
    match class {
        TargetClass::Windows => Some("Windows"),
        TargetClass::Ios => Some("iOS"),
        TargetClass::MacOs => Some("Darwin"),
        TargetClass::Android => Some("Android"),
        TargetClass::KoboHandheld => Some("Linux"),
        TargetClass::Unix => None,
    }
}

fn cmake_toolchain_args(toolchain: &Toolchain) -> Vec<String> {
    let prefix = toolchain.install_prefix().display().to_string();
    let mut args = vec![
        format!("-DCMAKE_INSTALL_PREFIX={prefix}"),
        "-DCMAKE_INSTALL_LIBDIR=lib".to_string(),
        "-DCMAKE_BUILD_TYPE=Release".to_string(),
        "-DBUILD_SHARED_LIBS=OFF".to_string(),
        format!("-DCMAKE_FIND_ROOT_PATH={prefix}"),
        format!("-DCMAKE_PREFIX_PATH={prefix}"),
        format!(
            "-DCMAKE_C_FLAGS={}",
            join_flags(toolchain.cflags(), toolchain.cppflags())
        ),
        format!(
            "-DCMAKE_CXX_FLAGS={}",
            join_flags(toolchain.cxxflags(), toolchain.cppflags())
        ),
        format!("-DCMAKE_EXE_LINKER_FLAGS={}", toolchain.ldflags()),
    ];
    if let Some(system) = cmake_system_name(toolchain.class()) {
        args.push(format!("-DCMAKE_SYSTEM_NAME={system}"));
    }

    let tools = [
        ("CMAKE_C_COMPILER", toolchain.cc()),
        ("CMAKE_CXX_COMPILER", toolchain.cxx()),
        ("CMAKE_AR", toolchain.ar()),
        ("CMAKE_RANLIB", toolchain.ranlib()),
        ("CMAKE_STRIP", toolchain.strip()),
    ];
    for (name, value) in tools {
        if !value.is_empty() {
            args.push(format!("-D{name}={value}"));
        }
    }
    if toolchain.class() == TargetClass::Windows && !toolchain.windres().is_empty() {
        args.push(format!("-DCMAKE_RC_COMPILER={}", toolchain.windres()));
    }
    args
}

fn join_flags(a: &str, b: &str) -> String {
    format!("{a} {b}").trim().to_string()
}

/// Run one build step with the toolchain's environment overlay.
fn run(cmd: &mut Command, toolchain: &Toolchain) -> Result<()> {
    toolchain.env().apply(cmd);
    let program = cmd.get_program().to_string_lossy().into_owned();
    log::debug!("running {cmd:?}");

    let status = cmd.status().map_err(|source| LibraryError::Spawn {
        program: program.clone(),
        source,
    })?;
    if !status.success() {
        return Err(LibraryError::CommandFailed { program, status });
    }
    Ok(())
}
