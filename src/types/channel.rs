// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel number type.
//!
//! This module provides a type-safe representation of the tuner position,
//! ensuring values are always within the valid range of 0-9.

use std::fmt;

use crate::error::ValueError;

/// Television channel number (0-9).
///
/// Stepping past either end wraps around, so channels form a cycle of
/// [`Channel::COUNT`] positions.
///
/// # Examples
///
/// ```
/// use tv_remote::types::Channel;
///
/// let ch = Channel::new(9).unwrap();
/// assert_eq!(ch.next(), Channel::MIN);
/// assert_eq!(Channel::MIN.prev(), Channel::MAX);
///
/// // Invalid values return error
/// assert!(Channel::new(10).is_err());
/// assert!(Channel::new(-1).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct Channel(u8);

impl Channel {
    /// Lowest channel.
    pub const MIN: Self = Self(0);

    /// Highest channel.
    pub const MAX: Self = Self(9);

    /// Number of distinct channels.
    pub const COUNT: u8 = Self::MAX.0 + 1;

    /// Creates a new channel.
    ///
    /// Accepts any integer so that raw external input can be validated
    /// without a lossy cast first.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside 0-9.
    pub fn new(value: i64) -> Result<Self, ValueError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX.0 => Ok(Self(v)),
            _ => Err(ValueError::OutOfRange {
                min: i64::from(Self::MIN.0),
                max: i64::from(Self::MAX.0),
                actual: value,
            }),
        }
    }

    /// Returns the channel number.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the following channel, wrapping 9 to 0.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// Returns the preceding channel, wrapping 0 to 9.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Channel {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel.0
    }
}
