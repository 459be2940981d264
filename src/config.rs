// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote panel configuration.

use std::path::{Path, PathBuf};

use crate::display::DEFAULT_CHANNELS_PATH;
use crate::store::DEFAULT_STATE_PATH;

/// File locations used by a [`RemotePanel`](crate::display::RemotePanel).
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tv_remote::PanelConfig;
///
/// let config = PanelConfig::new()
///     .with_state_path("/tmp/tv_state.csv")
///     .with_channels_path("/srv/tv/channels.csv");
///
/// assert_eq!(config.state_path(), Path::new("/tmp/tv_state.csv"));
/// assert_eq!(config.channels_path(), Path::new("/srv/tv/channels.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    state_path: PathBuf,
    channels_path: PathBuf,
}

impl PanelConfig {
    /// Creates a configuration using `tv_state.csv` and `channels.csv` in
    /// the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            channels_path: PathBuf::from(DEFAULT_CHANNELS_PATH),
        }
    }

    /// Sets where the device state record is stored.
    #[must_use]
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Sets where the channel guide is read from.
    #[must_use]
    pub fn with_channels_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.channels_path = path.into();
        self
    }

    /// Returns the device state record path.
    #[must_use]
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Returns the channel guide path.
    #[must_use]
    pub fn channels_path(&self) -> &Path {
        &self.channels_path
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}
