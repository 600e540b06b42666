//! Sequential, resumable build of a library sequence.
//!
//! The [`Orchestrator`] walks the sequence strictly in order. Each library is
//! checked first and built only when missing; the first build failure ends
//! the run. Re-running after a partial run therefore resumes at the first
//! library that is not yet installed.

pub mod error;
pub mod orchestrator;

pub use error::{BuildError, Result};
pub use orchestrator::{InstallState, Orchestrator, RunSummary};
