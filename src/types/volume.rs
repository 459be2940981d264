// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume level type.

use std::fmt;

use crate::error::ValueError;

/// Speaker volume (0-100).
///
/// Stepping stops at either end like a physical dial; it never wraps and
/// never errors.
///
/// # Examples
///
/// ```
/// use tv_remote::types::Volume;
///
/// let vol = Volume::new(99).unwrap();
/// assert_eq!(vol.step_up().value(), 100);
/// assert_eq!(Volume::MAX.step_up(), Volume::MAX);
/// assert_eq!(Volume::MIN.step_down(), Volume::MIN);
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
pub struct Volume(u8);

impl Volume {
    /// Silent.
    pub const MIN: Self = Self(0);

    /// Loudest.
    pub const MAX: Self = Self(100);

    /// Creates a new volume level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside 0-100.
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

    /// Returns the volume level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// One step louder, saturating at [`Volume::MAX`].
    #[must_use]
    pub const fn step_up(self) -> Self {
        if self.0 < Self::MAX.0 {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// One step quieter, saturating at [`Volume::MIN`].
    #[must_use]
    pub const fn step_down(self) -> Self {
        if self.0 > Self::MIN.0 {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Volume {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}
