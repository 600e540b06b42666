//! `thirdparty`: builds the third-party native libraries for one target.
//!
//! ```text
//! thirdparty LIB_PATH HOST_TRIPLET ARCH_CFLAGS CPPFLAGS ARCH_LDFLAGS CC CXX AR ARFLAGS RANLIB STRIP WINDRES
//! ```
//!
//! Libraries are installed into `LIB_PATH/HOST_TRIPLET`. Libraries already
//! present there are skipped, so an interrupted run can simply be repeated.

mod config;

use std::process;

use anyhow::Result;
use clap::Parser;

use thirdparty_build::{InstallState, Orchestrator};
use thirdparty_libs::Catalog;
use thirdparty_profile::select_profile;
use thirdparty_toolchain::{usage, Toolchain, ToolchainArgs};

use config::ThirdpartyConfig;

#[derive(Parser)]
#[command(
    name = "thirdparty",
    about = "Build the third-party libraries for one target triplet",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// LIB_PATH HOST_TRIPLET ARCH_CFLAGS CPPFLAGS ARCH_LDFLAGS CC CXX AR ARFLAGS RANLIB STRIP WINDRES
    #[arg(
        value_name = "ARG",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    values: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Positional values only: `--help` is just a one-value call.
    let Ok(cli) = Cli::try_parse() else {
        usage_error()
    };
    let Ok(args) = ToolchainArgs::from_values(cli.values) else {
        usage_error()
    };

    if let Err(e) = run(args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn usage_error() -> ! {
    eprint!("{}", usage("thirdparty"));
    process::exit(1);
}

fn run(args: ToolchainArgs) -> Result<()> {
    for (name, value) in args.named() {
        log::debug!("arg {name:<12}: {value}");
    }

    let cwd = std::env::current_dir()?;
    let toolchain = Toolchain::new(&cwd, args)?;
    log::info!(
        "toolchain: {} ({})",
        toolchain.class(),
        toolchain.host_triplet()
    );

    let config = ThirdpartyConfig::load(toolchain.lib_path())?;
    let profile = select_profile(toolchain.class(), config.features);
    let toolchain = toolchain.with_cppflag_overrides(&profile.cppflag_overrides);

    if profile.libraries.is_empty() {
        log::info!("no third-party libraries needed for {}", toolchain.class());
        return Ok(());
    }

    let names: Vec<&str> = profile.libraries.iter().map(|id| id.name()).collect();
    log::info!("libraries: {}", names.join(", "));
    log::debug!("features: {:?}", profile.features);

    let catalog = Catalog::builtin();
    let orchestrator = Orchestrator::new(&catalog);
    let status = orchestrator.status(&toolchain, &profile.libraries)?;
    let pending = status
        .iter()
        .filter(|(_, state)| *state == InstallState::NotInstalled)
        .count();
    log::info!(
        "{pending} of {} libraries to build into {}",
        status.len(),
        toolchain.install_prefix().display()
    );

    let summary = orchestrator.run(&toolchain, &profile.libraries)?;
    log::info!(
        "done: {} built, {} already installed",
        summary.built.len(),
        summary.skipped.len()
    );
    Ok(())
}
