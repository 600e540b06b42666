//! Registry mapping library identifiers to their capabilities.

use std::collections::HashMap;

use crate::id::LibraryId;
use crate::library::Library;
use crate::recipes::RECIPES;

/// Registry of buildable libraries, keyed by [`LibraryId`].
#[derive(Default)]
pub struct Catalog {
    entries: HashMap<LibraryId, Box<dyn Library>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the built-in recipe for every known library.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for recipe in RECIPES {
            catalog.insert(Box::new(recipe.clone()));
        }
        catalog
    }

    /// Register a library, returning the one it replaces.
    pub fn insert(&mut self, library: Box<dyn Library>) -> Option<Box<dyn Library>> {
        self.entries.insert(library.id(), library)
    }

    /// Look up a library.
    pub fn get(&self, id: LibraryId) -> Option<&dyn Library> {
        self.entries.get(&id).map(|b| b.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use thirdparty_toolchain::Toolchain;

    struct Stub(LibraryId);

    impl Library for Stub {
        fn id(&self) -> LibraryId {
            self.0
        }

        fn is_installed(&self, _toolchain: &Toolchain) -> bool {
            true
        }

        fn build(&self, _toolchain: &Toolchain) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn builtin_covers_every_library() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), LibraryId::ALL.len());
        for id in LibraryId::ALL {
            assert_eq!(catalog.get(id).map(|l| l.id()), Some(id));
        }
    }

    #[test]
    fn insert_replaces_entry() {
        let mut catalog = Catalog::builtin();
        let replaced = catalog.insert(Box::new(Stub(LibraryId::Zlib)));
        assert!(replaced.is_some());
        assert_eq!(catalog.len(), LibraryId::ALL.len());
    }

    #[test]
    fn empty_catalog() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.insert(Box::new(Stub(LibraryId::Lua))).is_none());
        assert!(catalog.get(LibraryId::Lua).is_some());
        assert!(catalog.get(LibraryId::Curl).is_none());
    }
}
