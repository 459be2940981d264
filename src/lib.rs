// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tv_remote` - A television remote-control simulator.
//!
//! The heart of the crate is [`Television`], a small state machine over
//! power, channel, volume and mute. Every change it makes is written to a
//! [`StateStore`](store::StateStore) so the set comes back the way it was
//! left.
//!
//! # Features
//!
//! - **Device**: power, mute, cyclic channels 0-9, saturating volume 0-100
//! - **Persistence**: one flat CSV record, rewritten after each operation
//! - **Display adapter**: channel guide with images, headless [`RemotePanel`](display::RemotePanel)
//! - **Sharing**: [`SharedTelevision`] for multi-threaded callers
//!
//! Storage problems never surface as errors from the device. A missing or
//! corrupt record restores the default state; a failed write is logged and
//! the in-memory state carries on.
//!
//! # Quick Start
//!
//! ```no_run
//! use tv_remote::Television;
//!
//! // Restores tv_state.csv, or starts off / channel 0 / volume 0
//! let mut tv = Television::open("tv_state.csv");
//!
//! tv.toggle_power();
//! tv.volume_up();
//! assert!(tv.set_channel(5));
//! println!("{}", tv.describe());
//! ```
//!
//! ## With a remote panel
//!
//! ```no_run
//! use tv_remote::PanelConfig;
//! use tv_remote::display::RemotePanel;
//!
//! let mut panel = RemotePanel::open(&PanelConfig::new());
//! panel.press_power();
//! panel.press_channel_up(); // skips channels without an image
//! println!("{}", panel.view());
//! ```

pub mod codec;
mod config;
mod device;
pub mod display;
pub mod error;
mod shared;
pub mod state;
pub mod store;
pub mod types;

pub use config::PanelConfig;
pub use device::Television;
pub use error::{Error, ParseError, PersistError, Result, ValueError};
pub use shared::SharedTelevision;
pub use state::DeviceState;
pub use types::{Channel, Volume};
