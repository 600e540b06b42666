//! The twelve positional configuration values.

use std::path::PathBuf;

use crate::error::{Result, ToolchainError};

/// Names of the positional values, in command-line order.
pub const ARG_NAMES: [&str; 12] = [
    "LIB_PATH",
    "HOST_TRIPLET",
    "ARCH_CFLAGS",
    "CPPFLAGS",
    "ARCH_LDFLAGS",
    "CC",
    "CXX",
    "AR",
    "ARFLAGS",
    "RANLIB",
    "STRIP",
    "WINDRES",
];

/// Number of positional values the toolchain needs.
pub const ARG_COUNT: usize = ARG_NAMES.len();

/// Raw toolchain inputs as given on the command line.
///
/// Values are kept verbatim; flags may be empty or start with `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainArgs {
    pub lib_path: PathBuf,
    pub host_triplet: String,
    pub arch_cflags: String,
    pub cppflags: String,
    pub arch_ldflags: String,
    pub cc: String,
    pub cxx: String,
    pub ar: String,
    pub arflags: String,
    pub ranlib: String,
    pub strip: String,
    pub windres: String,
}

impl ToolchainArgs {
    /// Build from positional values, checking the count first.
    pub fn from_values<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let values: [String; ARG_COUNT] =
            values.try_into().map_err(|v: Vec<String>| ToolchainError::Arity {
                expected: ARG_COUNT,
                actual: v.len(),
            })?;

        let [lib_path, host_triplet, arch_cflags, cppflags, arch_ldflags, cc, cxx, ar, arflags, ranlib, strip, windres] =
            values;

        Ok(Self {
            lib_path: PathBuf::from(lib_path),
            host_triplet,
            arch_cflags,
            cppflags,
            arch_ldflags,
            cc,
            cxx,
            ar,
            arflags,
            ranlib,
            strip,
            windres,
        })
    }

    /// Pair each value with its positional name, for diagnostics.
    pub fn named(&self) -> [(&'static str, String); ARG_COUNT] {
        let values = [
            self.lib_path.display().to_string(),
            self.host_triplet.clone(),
            self.arch_cflags.clone(),
            self.cppflags.clone(),
            self.arch_ldflags.clone(),
            self.cc.clone(),
            self.cxx.clone(),
            self.ar.clone(),
            self.arflags.clone(),
            self.ranlib.clone(),
            self.strip.clone(),
            self.windres.clone(),
        ];
        std::array::from_fn(|i| (ARG_NAMES[i], values[i].clone()))
    }
}

/// Usage text listing every expected positional value.
pub fn usage(program: &str) -> String {
    let mut text = format!("Usage: {program} {}\n", ARG_NAMES.join(" "));
    for (i, name) in ARG_NAMES.iter().enumerate() {
        text.push_str(&format!("  arg {:>2}  {name}\n", i + 1));
    }
    text
}
