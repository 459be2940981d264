// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state snapshot.

use std::fmt;

use crate::types::{Channel, Volume};

/// Complete state of a television at one point in time.
///
/// This is a plain value: the [`Television`](crate::Television) replaces it
/// wholesale on each mutation and persists it. Range invariants are carried
/// by [`Channel`] and [`Volume`], so every `DeviceState` is valid.
///
/// Muting never touches the stored volume; use
/// [`effective_volume`](Self::effective_volume) for what the viewer hears.
///
/// # Examples
///
/// ```
/// use tv_remote::state::DeviceState;
/// use tv_remote::types::{Channel, Volume};
///
/// let state = DeviceState::new(true, Channel::new(4).unwrap(), Volume::new(30).unwrap(), true);
/// assert_eq!(state.volume().value(), 30);
/// assert_eq!(state.effective_volume(), 0);
/// assert_eq!(state.to_string(), "Power = True, Channel = 4, Volume = 0");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    power: bool,
    channel: Channel,
    volume: Volume,
    muted: bool,
}

impl DeviceState {
    /// State used when nothing valid has been stored: off, channel 0,
    /// volume 0, unmuted.
    pub const DEFAULT: Self = Self {
        power: false,
        channel: Channel::MIN,
        volume: Volume::MIN,
        muted: false,
    };

    /// Creates a state from its four fields.
    #[must_use]
    pub const fn new(power: bool, channel: Channel, volume: Volume, muted: bool) -> Self {
        Self {
            power,
            channel,
            volume,
            muted,
        }
    }

    /// Returns `true` if the set is switched on.
    #[must_use]
    pub const fn power(&self) -> bool {
        self.power
    }

    /// Returns the current channel.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns the stored volume, regardless of mute.
    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns `true` if the mute flag is set.
    #[must_use]
    pub const fn muted(&self) -> bool {
        self.muted
    }

    /// Volume as presented to the viewer: 0 while muted, otherwise the
    /// stored volume.
    #[must_use]
    pub const fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume.value() }
    }

    /// Returns a copy with `power` replaced.
    #[must_use]
    pub const fn with_power(mut self, power: bool) -> Self {
        self.power = power;
        self
    }

    /// Returns a copy with `channel` replaced.
    #[must_use]
    pub const fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    /// Returns a copy with `volume` replaced.
    #[must_use]
    pub const fn with_volume(mut self, volume: Volume) -> Self {
        self.volume = volume;
        self
    }

    /// Returns a copy with `muted` replaced.
    #[must_use]
    pub const fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }
}

/// Renders the one-line summary, e.g. `Power = True, Channel = 3, Volume = 12`.
///
/// Booleans use the same `True`/`False` spelling as the stored record.
impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Power = {}, Channel = {}, Volume = {}",
            if self.power { "True" } else { "False" },
            self.channel,
            self.effective_volume()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vol(v: i64) -> Volume {
        Volume::new(v).unwrap()
    }

    #[test]
    fn default_is_off_and_silent() {
        let state = DeviceState::default();
        assert_eq!(state, DeviceState::DEFAULT);
        assert!(!state.power());
        assert_eq!(state.channel(), Channel::MIN);
        assert_eq!(state.volume(), Volume::MIN);
        assert!(!state.muted());
    }

    #[test]
    fn effective_volume_respects_mute() {
        let state = DeviceState::DEFAULT.with_volume(vol(25));
        assert_eq!(state.effective_volume(), 25);

        let muted = state.with_muted(true);
        assert_eq!(muted.effective_volume(), 0);
        assert_eq!(muted.volume().value(), 25);
    }

    #[test]
    fn display_format() {
        assert_eq!(
            DeviceState::DEFAULT.to_string(),
            "Power = False, Channel = 0, Volume = 0"
        );

        let state = DeviceState::new(true, Channel::MAX, vol(57), false);
        assert_eq!(state.to_string(), "Power = True, Channel = 9, Volume = 57");
    }

    #[test]
    fn with_methods_touch_one_field() {
        let base = DeviceState::new(true, Channel::new(2).unwrap(), vol(10), false);
        let changed = base.with_channel(Channel::new(8).unwrap());
        assert_eq!(changed.channel().value(), 8);
        assert_eq!(changed.power(), base.power());
        assert_eq!(changed.volume(), base.volume());
        assert_eq!(changed.muted(), base.muted());
    }

    #[test]
    fn json_snapshot() {
        let state = DeviceState::new(true, Channel::new(3).unwrap(), vol(40), false);
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "power": true,
                "channel": 3,
                "volume": 40,
                "muted": false
            })
        );

        let back: DeviceState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn json_rejects_out_of_range_channel() {
        let json = serde_json::json!({
            "power": true,
            "channel": 12,
            "volume": 40,
            "muted": false
        });
        assert!(serde_json::from_value::<DeviceState>(json).is_err());
    }
}
