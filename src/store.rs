// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Durable storage for the device state.
//!
//! [`StateStore`] is the seam between the [`Television`](crate::Television)
//! and wherever its single record lives. [`CsvFileStore`] is the real
//! backend; [`MemoryStore`] keeps the record in memory and counts writes.
//!
//! Storage errors never reach the device: [`load_or_default`] and
//! [`save_best_effort`] log them and carry on.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::codec;
use crate::error::{Error, PersistError};
use crate::state::DeviceState;

/// Default file name of the stored record, relative to the working directory.
pub const DEFAULT_STATE_PATH: &str = "tv_state.csv";

/// Reads and writes exactly one [`DeviceState`] record.
pub trait StateStore {
    /// Loads the stored state.
    ///
    /// # Errors
    ///
    /// Returns error if the record is absent, unreadable or malformed.
    fn load(&self) -> Result<DeviceState, Error>;

    /// Overwrites the stored state.
    ///
    /// # Errors
    ///
    /// Returns error if the record cannot be written.
    fn save(&self, state: &DeviceState) -> Result<(), Error>;
}

/// Loads from `store`, falling back to [`DeviceState::DEFAULT`] on any error.
///
/// The cause is logged at `warn` level.
pub fn load_or_default<S: StateStore + ?Sized>(store: &S) -> DeviceState {
    match store.load() {
        Ok(state) => {
            tracing::debug!(%state, "Loaded stored device state");
            state
        }
        Err(e) => {
            tracing::warn!(error = %e, "Loading default state");
            DeviceState::DEFAULT
        }
    }
}

/// Saves to `store`, logging instead of returning any failure.
///
/// Returns `true` if the write succeeded.
pub fn save_best_effort<S: StateStore + ?Sized>(store: &S, state: &DeviceState) -> bool {
    match store.save(state) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "Failed to save device state");
            false
        }
    }
}

/// Stores the record as a CSV file at a fixed path.
///
/// Each save truncates and rewrites the whole file.
///
/// # Examples
///
/// ```no_run
/// use tv_remote::store::{CsvFileStore, StateStore};
///
/// let store = CsvFileStore::new("tv_state.csv");
/// let state = store.load()?;
/// # Ok::<(), tv_remote::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CsvFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_PATH)
    }
}

impl StateStore for CsvFileStore {
    fn load(&self) -> Result<DeviceState, Error> {
        let file = fs::File::open(&self.path).map_err(PersistError::Io)?;
        Ok(codec::read_state(file)?)
    }

    fn save(&self, state: &DeviceState) -> Result<(), Error> {
        let file = fs::File::create(&self.path).map_err(PersistError::Io)?;
        codec::write_state(file, state)?;
        tracing::trace!(path = %self.path.display(), %state, "Saved device state");
        Ok(())
    }
}

/// In-memory store holding the encoded bytes of the last save.
///
/// Useful in tests: it counts writes and can be told to reject them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    bytes: Option<Vec<u8>>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStore {
    /// Creates an empty store; loading from it fails until the first save.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with raw record bytes.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.inner.lock().bytes = Some(bytes.into());
        store
    }

    /// Creates a store pre-seeded with an encoded `state`.
    ///
    /// The seeding write is not counted.
    #[must_use]
    pub fn with_state(state: &DeviceState) -> Self {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = codec::write_state(&mut buf, state);
        Self::with_bytes(buf)
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.lock().writes
    }

    /// Raw bytes of the last save, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.inner.lock().bytes.clone()
    }

    /// Makes subsequent saves fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().fail_writes = fail;
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<DeviceState, Error> {
        let inner = self.inner.lock();
        let bytes = inner.bytes.as_deref().ok_or_else(|| {
            PersistError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no record stored",
            ))
        })?;
        Ok(codec::read_state(bytes)?)
    }

    fn save(&self, state: &DeviceState) -> Result<(), Error> {
        let mut inner = self.inner.lock();
        if inner.fail_writes {
            return Err(PersistError::Rejected("writes disabled".to_string()).into());
        }
        let mut buf = Vec::new();
        codec::write_state(&mut buf, state)?;
        inner.bytes = Some(buf);
        inner.writes += 1;
        Ok(())
    }
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn load(&self) -> Result<DeviceState, Error> {
        (**self).load()
    }

    fn save(&self, state: &DeviceState) -> Result<(), Error> {
        (**self).save(state)
    }
}

impl<S: StateStore + ?Sized> StateStore for std::sync::Arc<S> {
    fn load(&self) -> Result<DeviceState, Error> {
        (**self).load()
    }

    fn save(&self, state: &DeviceState) -> Result<(), Error> {
        (**self).save(state)
    }
}
