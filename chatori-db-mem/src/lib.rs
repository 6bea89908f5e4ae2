//! # chatori-db-mem
//!
//! In-memory document store for Chatori. Holds the same collections as
//! the hosted backend ("Stalls", "Reviews", "Users", "Dishes") and
//! offers an atomic transaction primitive for multi-document writes.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chatori_core::usecases as uc;

mod repo_impl;

pub use repo_impl::Store;

#[derive(Clone, Default)]
pub struct Connections {
    // A single writer at a time; concurrent readers share a snapshot
    // view guarded by the lock.
    state: Arc<RwLock<Store>>,
}

impl std::fmt::Debug for Connections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connections").finish_non_exhaustive()
    }
}

impl Connections {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly {
            store: self.state.read(),
        }
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite {
            store: self.state.write(),
        }
    }
}

pub struct DbReadOnly<'a> {
    store: RwLockReadGuard<'a, Store>,
}

impl DbReadOnly<'_> {
    pub fn inner(&self) -> &Store {
        &self.store
    }
}

pub struct DbReadWrite<'a> {
    store: RwLockWriteGuard<'a, Store>,
}

impl DbReadWrite<'_> {
    pub fn inner(&self) -> &Store {
        &self.store
    }

    /// Runs `f` against a working copy of the store. The copy replaces
    /// the live state only if `f` succeeds; on error every write of the
    /// closure is discarded.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&Store) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let working_copy = self.store.clone();
        match f(&working_copy) {
            Ok(result) => {
                *self.store = working_copy;
                Ok(result)
            }
            Err(err) => Err(err.into()),
        }
    }
}
