//! The build loop.

use std::time::Instant;

use thirdparty_libs::{Catalog, Library, LibraryId};
use thirdparty_toolchain::Toolchain;

use crate::error::{BuildError, Result};

/// Install state of one entry before a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// Present in the install prefix; a run will skip it.
    Installed,
    /// Missing; a run will build it.
    NotInstalled,
}

/// Outcome of a successful run, in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Libraries that were already installed.
    pub skipped: Vec<LibraryId>,
    /// Libraries built by this run.
    pub built: Vec<LibraryId>,
}

/// Builds a library sequence against one toolchain.
pub struct Orchestrator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Orchestrator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Orchestrator { catalog }
    }

    /// Look up every entry before touching anything.
    fn resolve(&self, sequence: &[LibraryId]) -> Result<Vec<(LibraryId, &'a dyn Library)>> {
        sequence
            .iter()
            .map(|id| {
                self.catalog
                    .get(*id)
                    .map(|lib| (*id, lib))
                    .ok_or(BuildError::Unregistered(*id))
            })
            .collect()
    }

    /// Install state of each entry, without building anything.
    pub fn status(
        &self,
        toolchain: &Toolchain,
        sequence: &[LibraryId],
    ) -> Result<Vec<(LibraryId, InstallState)>> {
        Ok(self
            .resolve(sequence)?
            .into_iter()
            .map(|(id, lib)| {
                let state = if lib.is_installed(toolchain) {
                    InstallState::Installed
                } else {
                    InstallState::NotInstalled
                };
                (id, state)
            })
            .collect())
    }

    /// Build every missing library, in order, stopping at the first failure.
    pub fn run(&self, toolchain: &Toolchain, sequence: &[LibraryId]) -> Result<RunSummary> {
        let libraries = self.resolve(sequence)?;
        let total = libraries.len();
        let mut summary = RunSummary::default();

        for (index, (id, lib)) in libraries.into_iter().enumerate() {
            let step = format!("[{}/{total}] {id}", index + 1);

            if lib.is_installed(toolchain) {
                log::info!("{step}: already installed");
                summary.skipped.push(id);
                continue;
            }

            log::info!("{step}: building");
            let start = Instant::now();
            if let Err(source) = lib.build(toolchain) {
                log::error!("{step}: failed after {:.1?}", start.elapsed());
                return Err(BuildError::Failed { id, source });
            }

            log::info!("{step}: built in {:.1?}", start.elapsed());
            if !lib.is_installed(toolchain) {
                log::warn!("{step}: build succeeded but the install check still fails");
            }
            summary.built.push(id);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::path::Path;
    use std::process::Command;
    use std::rc::Rc;

    use thirdparty_libs::LibraryError;
    use thirdparty_toolchain::ToolchainArgs;

    /// Shared fake filesystem and call log.
    #[derive(Default)]
    struct World {
        installed: HashSet<LibraryId>,
        failing: HashSet<LibraryId>,
        checks: Vec<LibraryId>,
        builds: Vec<LibraryId>,
    }

    struct Fake {
        id: LibraryId,
        world: Rc<RefCell<World>>,
    }

    impl Library for Fake {
        fn id(&self) -> LibraryId {
            self.id
        }

        fn is_installed(&self, _toolchain: &Toolchain) -> bool {
            let mut world = self.world.borrow_mut();
            world.checks.push(self.id);
            world.installed.contains(&self.id)
        }

        fn build(&self, _toolchain: &Toolchain) -> thirdparty_libs::Result<()> {
            let mut world = self.world.borrow_mut();
            world.builds.push(self.id);
            if world.failing.contains(&self.id) {
                let status = Command::new("false").status().unwrap();
                return Err(LibraryError::CommandFailed {
                    program: "make".into(),
                    status,
                });
            }
            world.installed.insert(self.id);
            Ok(())
        }
    }

    const SEQUENCE: [LibraryId; 5] = [
        LibraryId::Zlib,
        LibraryId::Libfmt,
        LibraryId::Libsodium,
        LibraryId::Openssl,
        LibraryId::Curl,
    ];

    fn setup() -> (Catalog, Rc<RefCell<World>>) {
        let world = Rc::new(RefCell::new(World::default()));
        let mut catalog = Catalog::new();
        for id in SEQUENCE {
            catalog.insert(Box::new(Fake {
                id,
                world: Rc::clone(&world),
            }));
        }
        (catalog, world)
    }

    fn toolchain() -> Toolchain {
        let args = ToolchainArgs::from_values([
            "lib",
            "x86_64-linux-gnu",
            "",
            "",
            "",
            "cc",
            "c++",
            "ar",
            "rcs",
            "ranlib",
            "strip",
            "",
        ])
        .unwrap();
        Toolchain::with_environment(Path::new("/src/app"), args, Vec::new()).unwrap()
    }

    #[test]
    fn builds_everything_in_order() {
        let (catalog, world) = setup();
        let summary = Orchestrator::new(&catalog).run(&toolchain(), &SEQUENCE).unwrap();
        assert_eq!(summary.built, SEQUENCE);
        assert!(summary.skipped.is_empty());
        assert_eq!(world.borrow().builds, SEQUENCE);
    }

    #[test]
    fn installed_prefix_is_skipped() {
        let (catalog, world) = setup();
        world.borrow_mut().installed.extend(&SEQUENCE[..2]);

        let summary = Orchestrator::new(&catalog).run(&toolchain(), &SEQUENCE).unwrap();
        assert_eq!(summary.skipped, SEQUENCE[..2]);
        assert_eq!(summary.built, SEQUENCE[2..]);
        assert_eq!(world.borrow().builds, SEQUENCE[2..]);
    }

    #[test]
    fn second_run_builds_nothing() {
        let (catalog, world) = setup();
        let orchestrator = Orchestrator::new(&catalog);
        let tc = toolchain();
        orchestrator.run(&tc, &SEQUENCE).unwrap();
        world.borrow_mut().builds.clear();

        let summary = orchestrator.run(&tc, &SEQUENCE).unwrap();
        assert!(summary.built.is_empty());
        assert_eq!(summary.skipped, SEQUENCE);
        assert!(world.borrow().builds.is_empty());
    }

    #[test]
    fn first_failure_stops_the_run() {
        let (catalog, world) = setup();
        world.borrow_mut().failing.insert(LibraryId::Libsodium);

        let err = Orchestrator::new(&catalog)
            .run(&toolchain(), &SEQUENCE)
            .unwrap_err();
        match err {
            BuildError::Failed { id, .. } => assert_eq!(id, LibraryId::Libsodium),
            other => panic!("unexpected error: {other}"),
        }
        let world = world.borrow();
        assert_eq!(world.builds, SEQUENCE[..3]);
        assert!(!world.checks.contains(&LibraryId::Openssl));
        assert!(!world.installed.contains(&LibraryId::Curl));
    }

    #[test]
    fn rerun_resumes_at_failed_entry() {
        let (catalog, world) = setup();
        let orchestrator = Orchestrator::new(&catalog);
        let tc = toolchain();
        world.borrow_mut().failing.insert(LibraryId::Openssl);
        assert!(orchestrator.run(&tc, &SEQUENCE).is_err());

        {
            let mut w = world.borrow_mut();
            w.failing.clear();
            w.builds.clear();
        }
        let summary = orchestrator.run(&tc, &SEQUENCE).unwrap();
        assert_eq!(summary.skipped, SEQUENCE[..3]);
        assert_eq!(summary.built, SEQUENCE[3..]);
        assert_eq!(world.borrow().builds, SEQUENCE[3..]);
    }

    #[test]
    fn unregistered_library_aborts_before_checks() {
        let (catalog, world) = setup();
        let sequence = [LibraryId::Zlib, LibraryId::Sdl2];
        let err = Orchestrator::new(&catalog)
            .run(&toolchain(), &sequence)
            .unwrap_err();
        assert!(matches!(err, BuildError::Unregistered(LibraryId::Sdl2)));
        assert!(world.borrow().checks.is_empty());
    }

    #[test]
    fn empty_sequence_is_a_no_op() {
        let (catalog, world) = setup();
        let summary = Orchestrator::new(&catalog).run(&toolchain(), &[]).unwrap();
        assert_eq!(summary, RunSummary::default());
        assert!(world.borrow().checks.is_empty());
    }

    #[test]
    fn status_checks_without_building() {
        let (catalog, world) = setup();
        world.borrow_mut().installed.insert(LibraryId::Libfmt);

        let states = Orchestrator::new(&catalog)
            .status(&toolchain(), &SEQUENCE[..2])
            .unwrap();
        assert_eq!(
            states,
            [
                (LibraryId::Zlib, InstallState::NotInstalled),
                (LibraryId::Libfmt, InstallState::Installed),
            ]
        );
        assert!(world.borrow().builds.is_empty());
    }
}
