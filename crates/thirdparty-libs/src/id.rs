//! Stable library identifiers.

use std::fmt;

/// Identifier of a known third-party library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LibraryId {
    Zlib,
    Libfmt,
    Libsodium,
    Openssl,
    Cares,
    Curl,
    Lua,
    Sdl2,
    Binutils,
    LinuxHeaders,
    GccBootstrap,
    Musl,
    Gcc,
    Freetype,
    Libpng,
    Libjpeg,
    Libsalsa,
    Libusb,
    SimpleUsbModeSwitch,
    Sqlite3,
    Proj,
    Libtiff,
    Libgeotiff,
    Netcdf,
    NetcdfCxx,
}

impl LibraryId {
    /// Every known library.
    pub const ALL: [LibraryId; 25] = [
        LibraryId::Zlib,
        LibraryId::Libfmt,
        LibraryId::Libsodium,
        LibraryId::Openssl,
        LibraryId::Cares,
        LibraryId::Curl,
        LibraryId::Lua,
        LibraryId::Sdl2,
        LibraryId::Binutils,
        LibraryId::LinuxHeaders,
        LibraryId::GccBootstrap,
        LibraryId::Musl,
        LibraryId::Gcc,
        LibraryId::Freetype,
        LibraryId::Libpng,
        LibraryId::Libjpeg,
        LibraryId::Libsalsa,
        LibraryId::Libusb,
        LibraryId::SimpleUsbModeSwitch,
        LibraryId::Sqlite3,
        LibraryId::Proj,
        LibraryId::Libtiff,
        LibraryId::Libgeotiff,
        LibraryId::Netcdf,
        LibraryId::NetcdfCxx,
    ];

    /// Kebab-case name, also used for the library's build directory.
    pub fn name(self) -> &'static str {
        match self {
            LibraryId::Zlib => "zlib",
            LibraryId::Libfmt => "libfmt",
            LibraryId::Libsodium => "libsodium",
            LibraryId::Openssl => "openssl",
            LibraryId::Cares => "cares",
            LibraryId::Curl => "curl",
            LibraryId::Lua => "lua",
            LibraryId::Sdl2 => "sdl2",
            LibraryId::Binutils => "binutils",
            LibraryId::LinuxHeaders => "linux-headers",
            LibraryId::GccBootstrap => "gcc-bootstrap",
            LibraryId::Musl => "musl",
            LibraryId::Gcc => "gcc",
            LibraryId::Freetype => "freetype",
            LibraryId::Libpng => "libpng",
            LibraryId::Libjpeg => "libjpeg",
            LibraryId::Libsalsa => "libsalsa",
            LibraryId::Libusb => "libusb",
            LibraryId::SimpleUsbModeSwitch => "simple-usbmodeswitch",
            LibraryId::Sqlite3 => "sqlite3",
            LibraryId::Proj => "proj",
            LibraryId::Libtiff => "libtiff",
            LibraryId::Libgeotiff => "libgeotiff",
            LibraryId::Netcdf => "netcdf",
            LibraryId::NetcdfCxx => "netcdfcxx",
        }
    }
}

impl fmt::Display for LibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
