//! Built-in recipes for every known library.

use thirdparty_toolchain::TargetClass;

use crate::id::LibraryId;
use crate::recipe::{BuildSystem, Recipe, MAKE_ALL, MAKE_INSTALL};

/// Recipes for all [`LibraryId::ALL`] entries.
pub static RECIPES: &[Recipe] = &[
    Recipe {
        id: LibraryId::Zlib,
        version: "1.3.1",
        tarball: "zlib-1.3.1.tar.xz",
        base: "zlib-1.3.1",
        installed: "lib/libz.a",
        system: BuildSystem::CMake {
            options: &["-DZLIB_BUILD_EXAMPLES=OFF"],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Libfmt,
        version: "11.0.2",
        tarball: "fmt-11.0.2.tar.gz",
        base: "fmt-11.0.2",
        installed: "lib/libfmt.a",
        system: BuildSystem::CMake {
            options: &["-DFMT_DOC=OFF", "-DFMT_TEST=OFF"],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Libsodium,
        version: "1.0.20",
        tarball: "libsodium-1.0.20.tar.gz",
        base: "libsodium-1.0.20",
        installed: "lib/libsodium.a",
        system: BuildSystem::Autotools {
            host: true,
            args: &["--disable-ssp", "--disable-pie"],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Openssl,
        version: "3.3.2",
        tarball: "openssl-3.3.2.tar.gz",
        base: "openssl-3.3.2",
        installed: "lib/libssl.a",
        system: BuildSystem::Configure {
            script: "Configure",
            args: &[
                "--prefix={prefix}",
                "--libdir=lib",
                "no-shared",
                "no-module",
                "no-tests",
                "no-engine",
                "no-async",
            ],
            make: &["build_libs"],
            install: &["install_dev"],
        },
        class_args: &[
            (TargetClass::Android, &["android-arm64"]),
            (TargetClass::Ios, &["ios64-xcrun"]),
            (TargetClass::KoboHandheld, &["linux-armv4"]),
            (TargetClass::Unix, &["linux-generic64"]),
        ],
    },
    Recipe {
        id: LibraryId::Cares,
        version: "1.34.2",
        tarball: "c-ares-1.34.2.tar.gz",
        base: "c-ares-1.34.2",
        installed: "lib/libcares.a",
        system: BuildSystem::CMake {
            options: &[
                "-DCARES_STATIC=ON",
                "-DCARES_SHARED=OFF",
                "-DCARES_BUILD_TOOLS=OFF",
            ],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Curl,
        version: "8.10.1",
        tarball: "curl-8.10.1.tar.xz",
        base: "curl-8.10.1",
        installed: "lib/libcurl.a",
        system: BuildSystem::Autotools {
            host: true,
            args: &[
                "--enable-ares",
                "--disable-ldap",
                "--disable-manual",
                "--without-libpsl",
                "--without-brotli",
                "--without-zstd",
                "--without-nghttp2",
            ],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[
            (TargetClass::Windows, &["--with-schannel"]),
            (TargetClass::Ios, &["--with-openssl"]),
            (TargetClass::Android, &["--with-openssl"]),
            (TargetClass::KoboHandheld, &["--with-openssl"]),
            (TargetClass::Unix, &["--with-openssl"]),
        ],
    },
    Recipe {
        id: LibraryId::Lua,
        version: "5.4.7",
        tarball: "lua-5.4.7.tar.gz",
        base: "lua-5.4.7",
        installed: "lib/liblua.a",
        system: BuildSystem::Make {
            make: &[
                "generic",
                "CC={cc}",
                "AR={ar} rcu",
                "RANLIB={ranlib}",
                "MYCFLAGS={cflags} {cppflags}",
                "MYLDFLAGS={ldflags}",
            ],
            install: &["install", "INSTALL_TOP={prefix}"],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Sdl2,
        version: "2.30.8",
        tarball: "SDL2-2.30.8.tar.gz",
        base: "SDL2-2.30.8",
        installed: "lib/libSDL2.a",
        system: BuildSystem::CMake {
            options: &["-DSDL_SHARED=OFF", "-DSDL_STATIC=ON", "-DSDL_TEST=OFF"],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Binutils,
        version: "2.43",
        tarball: "binutils-2.43.tar.xz",
        base: "binutils-2.43",
        installed: "bin/{triplet}-as",
        system: BuildSystem::Autotools {
            host: false,
            args: &[
                "--target={triplet}",
                "--with-sysroot={prefix}",
                "--disable-nls",
                "--disable-werror",
                "--disable-multilib",
                "--disable-gprofng",
            ],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::LinuxHeaders,
        version: "5.4.284",
        tarball: "linux-5.4.284.tar.xz",
        base: "linux-5.4.284",
        installed: "include/linux/version.h",
        system: BuildSystem::Make {
            make: &["ARCH=arm", "headers"],
            install: &["ARCH=arm", "INSTALL_HDR_PATH={prefix}", "headers_install"],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::GccBootstrap,
        version: "14.2.0",
        tarball: "gcc-14.2.0.tar.xz",
        base: "gcc-14.2.0",
        installed: "bin/{triplet}-gcc",
        system: BuildSystem::Autotools {
            host: false,
            args: &[
                "--target={triplet}",
                "--with-sysroot={prefix}",
                "--enable-languages=c",
                "--without-headers",
                "--with-newlib",
                "--disable-shared",
                "--disable-threads",
                "--disable-multilib",
                "--disable-nls",
                "--disable-libssp",
                "--disable-libgomp",
                "--disable-libquadmath",
                "--disable-libatomic",
            ],
            make: &["all-gcc", "all-target-libgcc"],
            install: &["install-gcc", "install-target-libgcc"],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Musl,
        version: "1.2.5",
        tarball: "musl-1.2.5.tar.gz",
        base: "musl-1.2.5",
        installed: "lib/libc.a",
        system: BuildSystem::Autotools {
            host: false,
            args: &[
                "--target={triplet}",
                "--disable-shared",
                "CROSS_COMPILE={triplet}-",
                "CC={triplet}-gcc",
                "CFLAGS={cflags}",
            ],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Gcc,
        version: "14.2.0",
        tarball: "gcc-14.2.0.tar.xz",
        base: "gcc-14.2.0",
        installed: "{triplet}/lib/libstdc++.a",
        system: BuildSystem::Autotools {
            host: false,
            args: &[
                "--target={triplet}",
                "--with-sysroot={prefix}",
                "--with-native-system-header-dir=/include",
                "--enable-languages=c,c++",
                "--enable-static",
                "--disable-shared",
                "--disable-multilib",
                "--disable-nls",
                "--disable-libsanitizer",
                "--disable-libgomp",
            ],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Freetype,
        version: "2.13.3",
        tarball: "freetype-2.13.3.tar.xz",
        base: "freetype-2.13.3",
        installed: "lib/libfreetype.a",
        system: BuildSystem::Autotools {
            host: true,
            args: &[
                "--without-bzip2",
                "--without-png",
                "--without-harfbuzz",
                "--without-brotli",
            ],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Libpng,
        version: "1.6.44",
        tarball: "libpng-1.6.44.tar.xz",
        base: "libpng-1.6.44",
        installed: "lib/libpng16.a",
        system: BuildSystem::Autotools {
            host: true,
            args: &["--disable-tools"],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[(TargetClass::KoboHandheld, &["--enable-arm-neon"])],
    },
    Recipe {
        id: LibraryId::Libjpeg,
        version: "3.0.4",
        tarball: "libjpeg-turbo-3.0.4.tar.gz",
        base: "libjpeg-turbo-3.0.4",
        installed: "lib/libjpeg.a",
        system: BuildSystem::CMake {
            options: &["-DENABLE_SHARED=OFF", "-DWITH_TURBOJPEG=OFF"],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Libsalsa,
        version: "0.1.6",
        tarball: "salsa-lib-0.1.6.tar.gz",
        base: "salsa-lib-0.1.6",
        installed: "lib/libasound.a",
        system: BuildSystem::Autotools {
            host: true,
            args: &[
                "--disable-4bit",
                "--disable-user-elem",
                "--enable-pcm",
                "--disable-mixer",
                "--disable-hwdep",
                "--disable-tlv",
                "--disable-timer",
                "--disable-conf",
            ],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Libusb,
        version: "1.0.27",
        tarball: "libusb-1.0.27.tar.bz2",
        base: "libusb-1.0.27",
        installed: "lib/libusb-1.0.a",
        system: BuildSystem::Autotools {
            host: true,
            args: &["--disable-udev"],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::SimpleUsbModeSwitch,
        version: "1.2.3",
        tarball: "simple-usbmodeswitch-1.2.3.tar.bz2",
        base: "simple-usbmodeswitch-1.2.3",
        installed: "sbin/simple-usbmodeswitch",
        system: BuildSystem::Make {
            make: &[
                "CC={cc}",
                "CFLAGS={cflags} {cppflags}",
                "LDFLAGS={ldflags}",
                "LIBS=-lusb-1.0 -lpthread",
            ],
            install: &["install", "DESTDIR={prefix}", "PREFIX="],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Sqlite3,
        version: "3.46.1",
        tarball: "sqlite-autoconf-3460100.tar.gz",
        base: "sqlite-autoconf-3460100",
        installed: "lib/libsqlite3.a",
        system: BuildSystem::Autotools {
            host: true,
            args: &["--disable-readline", "--disable-editline"],
            make: MAKE_ALL,
            install: MAKE_INSTALL,
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Proj,
        version: "9.5.0",
        tarball: "proj-9.5.0.tar.gz",
        base: "proj-9.5.0",
        installed: "lib/libproj.a",
        system: BuildSystem::CMake {
            options: &[
                "-DENABLE_TIFF=OFF",
                "-DENABLE_CURL=OFF",
                "-DBUILD_APPS=OFF",
                "-DBUILD_TESTING=OFF",
            ],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Libtiff,
        version: "4.7.0",
        tarball: "tiff-4.7.0.tar.xz",
        base: "tiff-4.7.0",
        installed: "lib/libtiff.a",
        system: BuildSystem::CMake {
            options: &[
                "-Dtiff-tools=OFF",
                "-Dtiff-tests=OFF",
                "-Dtiff-docs=OFF",
                "-Dwebp=OFF",
                "-Dzstd=OFF",
                "-Dlzma=OFF",
                "-Djbig=OFF",
            ],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Libgeotiff,
        version: "1.7.3",
        tarball: "libgeotiff-1.7.3.tar.gz",
        base: "libgeotiff-1.7.3",
        installed: "lib/libgeotiff.a",
        system: BuildSystem::CMake {
            options: &["-DWITH_UTILITIES=OFF", "-DWITH_JPEG=OFF", "-DWITH_ZLIB=OFF"],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::Netcdf,
        version: "4.9.2",
        tarball: "netcdf-c-4.9.2.tar.gz",
        base: "netcdf-c-4.9.2",
        installed: "lib/libnetcdf.a",
        system: BuildSystem::CMake {
            options: &[
                "-DENABLE_DAP=OFF",
                "-DENABLE_NETCDF_4=OFF",
                "-DENABLE_TESTS=OFF",
                "-DBUILD_UTILITIES=OFF",
                "-DENABLE_BYTERANGE=OFF",
            ],
        },
        class_args: &[],
    },
    Recipe {
        id: LibraryId::NetcdfCxx,
        version: "4.3.1",
        tarball: "netcdf-cxx4-4.3.1.tar.gz",
        base: "netcdf-cxx4-4.3.1",
        installed: "lib/libnetcdf-cxx4.a",
        system: BuildSystem::CMake {
            options: &["-DNCXX_ENABLE_TESTS=OFF", "-DENABLE_DOXYGEN=OFF"],
        },
        class_args: &[],
    },
];
