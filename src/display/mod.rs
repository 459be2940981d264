// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display adapter for the television.
//!
//! This is the layer a user interface sits on. It forwards button presses
//! to the [`Television`](crate::Television), decides which channels are
//! worth stopping on, and turns the device state into a [`PanelView`].
//!
//! - [`ChannelGuide`] - Channel to image lookup, loaded once at startup
//! - [`RemotePanel`] - Button handlers over a television and a guide
//! - [`PanelView`] - What the screen shows

mod guide;
mod panel;

pub use guide::{ChannelGuide, DEFAULT_CHANNELS_PATH, DEFAULT_IMAGE};
pub use panel::{NO_IMAGE_TEXT, PanelView, RemotePanel};
