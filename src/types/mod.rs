// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for television control.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so a [`DeviceState`](crate::state::DeviceState) built from them
//! cannot violate its bounds.
//!
//! # Types
//!
//! - [`Channel`] - Tuner position (0-9), cyclic
//! - [`Volume`] - Speaker level (0-100), saturating

mod channel;
mod volume;

pub use channel::Channel;
pub use volume::Volume;
