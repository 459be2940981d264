// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! The [`DeviceState`] struct is the single value a
//! [`Television`](crate::Television) owns and persists.
//!
//! # Examples
//!
//! ```
//! use tv_remote::state::DeviceState;
//! use tv_remote::types::Volume;
//!
//! let state = DeviceState::DEFAULT
//!     .with_power(true)
//!     .with_volume(Volume::new(12).unwrap());
//!
//! assert!(state.power());
//! assert_eq!(state.effective_volume(), 12);
//! ```

mod device_state;

pub use device_state::DeviceState;
