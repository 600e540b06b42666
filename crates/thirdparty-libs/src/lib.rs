//! Catalog of the third-party libraries the application links against.
//!
//! Every library is reached through the [`Library`] capability trait, which
//! offers exactly two operations: an install check and a build. The built-in
//! implementation is the data-driven [`Recipe`]; tests substitute their own
//! implementations through [`Catalog::insert`].

pub mod catalog;
pub mod error;
pub mod id;
pub mod library;
pub mod recipe;
pub mod recipes;

pub use catalog::Catalog;
pub use error::{LibraryError, Result};
pub use id::LibraryId;
pub use library::Library;
pub use recipe::{BuildSystem, Recipe};
pub use recipes::RECIPES;
