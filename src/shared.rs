// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thread-safe handle to a [`Television`].
//!
//! The television assumes a single writer. When more than one thread
//! needs to drive it, wrap it in a [`SharedTelevision`]: each call runs
//! under one lock, so operations and their saves never interleave.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::device::Television;
use crate::state::DeviceState;
use crate::store::StateStore;

/// Cloneable, lock-protected [`Television`].
///
/// # Examples
///
/// ```
/// use tv_remote::{SharedTelevision, Television};
/// use tv_remote::store::MemoryStore;
///
/// let shared = SharedTelevision::new(Television::new(MemoryStore::new()));
/// let other = shared.clone();
///
/// std::thread::spawn(move || other.with(|tv| tv.toggle_power()))
///     .join()
///     .unwrap();
///
/// assert!(shared.snapshot().power());
/// ```
#[derive(Debug)]
pub struct SharedTelevision<S: StateStore> {
    inner: Arc<Mutex<Television<S>>>,
}

impl<S: StateStore> Clone for SharedTelevision<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: StateStore> SharedTelevision<S> {
    /// Takes ownership of `television`.
    pub fn new(television: Television<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(television)),
        }
    }

    /// Runs `f` with exclusive access to the television.
    pub fn with<R>(&self, f: impl FnOnce(&mut Television<S>) -> R) -> R {
        let mut tv = self.inner.lock();
        f(&mut tv)
    }

    /// Returns the current state.
    #[must_use]
    pub fn snapshot(&self) -> DeviceState {
        self.inner.lock().state()
    }
}
