// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The television state machine.
//!
//! [`Television`] owns one [`DeviceState`], enforces the transition rules,
//! and writes the resulting state to its [`StateStore`] before every
//! mutating call returns.
//!
//! # Transition Rules
//!
//! | Operation        | Powered off              | Powered on                          |
//! |------------------|--------------------------|-------------------------------------|
//! | `toggle_power`   | turns on                 | turns off                           |
//! | `toggle_mute`    | no change                | flips mute                          |
//! | `channel_up`     | no change                | next channel, 9 wraps to 0          |
//! | `channel_down`   | no change                | previous channel, 0 wraps to 9      |
//! | `volume_up`      | +1 up to 100             | unmutes, +1 up to 100               |
//! | `volume_down`    | -1 down to 0             | unmutes, -1 down to 0               |
//! | `set_channel(n)` | rejected                 | accepted if `0 <= n <= 9`           |
//!
//! Every operation except a rejected `set_channel` persists, even when the
//! state did not change.

use std::fmt;
use std::path::PathBuf;

use crate::state::DeviceState;
use crate::store::{self, CsvFileStore, StateStore};
use crate::types::{Channel, Volume};

/// A simulated television.
///
/// # Examples
///
/// ```
/// use tv_remote::Television;
/// use tv_remote::store::MemoryStore;
///
/// let mut tv = Television::new(MemoryStore::new());
/// assert_eq!(tv.describe(), "Power = False, Channel = 0, Volume = 0");
///
/// tv.toggle_power();
/// tv.volume_up();
/// tv.toggle_mute();
/// assert_eq!(tv.describe(), "Power = True, Channel = 0, Volume = 0");
///
/// tv.toggle_mute();
/// assert_eq!(tv.describe(), "Power = True, Channel = 0, Volume = 1");
///
/// assert!(tv.set_channel(5));
/// assert!(!tv.set_channel(99));
/// assert_eq!(tv.channel().value(), 5);
/// ```
#[derive(Debug)]
pub struct Television<S: StateStore = CsvFileStore> {
    state: DeviceState,
    store: S,
}

impl Television<CsvFileStore> {
    /// Opens a television backed by the CSV file at `path`.
    ///
    /// A missing or unreadable file yields [`DeviceState::DEFAULT`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(CsvFileStore::new(path))
    }
}

impl<S: StateStore> Television<S> {
    /// Lowest channel.
    pub const MIN_CHANNEL: Channel = Channel::MIN;
    /// Highest channel.
    pub const MAX_CHANNEL: Channel = Channel::MAX;
    /// Lowest volume.
    pub const MIN_VOLUME: Volume = Volume::MIN;
    /// Highest volume.
    pub const MAX_VOLUME: Volume = Volume::MAX;

    /// Creates a television, restoring its state from `store`.
    ///
    /// Falls back to [`DeviceState::DEFAULT`] if nothing valid is stored.
    pub fn new(store: S) -> Self {
        let state = store::load_or_default(&store);
        Self { state, store }
    }

    // ========== Mutating Operations ==========

    /// Switches the set on or off.
    pub fn toggle_power(&mut self) {
        let next = self.state.with_power(!self.state.power());
        self.commit("toggle_power", next);
    }

    /// Flips mute. Ignored while off.
    pub fn toggle_mute(&mut self) {
        let mut next = self.state;
        if next.power() {
            next = next.with_muted(!next.muted());
        }
        self.commit("toggle_mute", next);
    }

    /// Tunes to the next channel, wrapping 9 to 0. Ignored while off.
    pub fn channel_up(&mut self) {
        let mut next = self.state;
        if next.power() {
            next = next.with_channel(next.channel().next());
        }
        self.commit("channel_up", next);
    }

    /// Tunes to the previous channel, wrapping 0 to 9. Ignored while off.
    pub fn channel_down(&mut self) {
        let mut next = self.state;
        if next.power() {
            next = next.with_channel(next.channel().prev());
        }
        self.commit("channel_down", next);
    }

    /// Raises the volume one step, stopping at 100.
    ///
    /// While on, this also clears mute. The level itself moves even when
    /// the set is off.
    pub fn volume_up(&mut self) {
        let next = self.unmuted_if_on();
        let next = next.with_volume(next.volume().step_up());
        self.commit("volume_up", next);
    }

    /// Lowers the volume one step, stopping at 0.
    ///
    /// While on, this also clears mute. The level itself moves even when
    /// the set is off.
    pub fn volume_down(&mut self) {
        let next = self.unmuted_if_on();
        let next = next.with_volume(next.volume().step_down());
        self.commit("volume_down", next);
    }

    /// Tunes directly to channel `n`.
    ///
    /// Returns `false`, leaving the state untouched and unsaved, if the set
    /// is off or `n` is outside 0-9.
    pub fn set_channel(&mut self, n: i64) -> bool {
        if !self.state.power() {
            tracing::debug!(requested = n, "Ignoring set_channel while powered off");
            return false;
        }
        match Channel::new(n) {
            Ok(channel) => {
                let next = self.state.with_channel(channel);
                self.commit("set_channel", next);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected set_channel");
                false
            }
        }
    }

    // ========== Accessors ==========

    /// Returns `true` if the set is on.
    #[must_use]
    pub fn power(&self) -> bool {
        self.state.power()
    }

    /// Returns the current channel.
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.state.channel()
    }

    /// Returns the stored volume, regardless of mute.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.state.volume()
    }

    /// Returns `true` if muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.state.muted()
    }

    /// Returns a snapshot of the full state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// One-line summary showing power, channel and effective volume.
    #[must_use]
    pub fn describe(&self) -> String {
        self.state.to_string()
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the television, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn unmuted_if_on(&self) -> DeviceState {
        if self.state.power() && self.state.muted() {
            self.state.with_muted(false)
        } else {
            self.state
        }
    }

    fn commit(&mut self, op: &'static str, next: DeviceState) {
        if next != self.state {
            tracing::debug!(op, from = %self.state, to = %next, "State changed");
        }
        self.state = next;
        store::save_best_effort(&self.store, &self.state);
    }
}

impl<S: StateStore> fmt::Display for Television<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}
