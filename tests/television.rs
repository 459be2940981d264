// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the television state machine and its persistence.

use std::fs;

use tv_remote::store::{CsvFileStore, MemoryStore, StateStore};
use tv_remote::{Channel, DeviceState, Television, Volume};

fn fresh() -> Television<MemoryStore> {
    Television::new(MemoryStore::new())
}

fn powered() -> Television<MemoryStore> {
    let mut tv = fresh();
    tv.toggle_power();
    tv
}

// ============================================================================
// Behaviour carried over from the original remote
// ============================================================================

mod behaviour {
    use super::*;

    #[test]
    fn init() {
        let tv = fresh();
        assert_eq!(tv.describe(), "Power = False, Channel = 0, Volume = 0");
    }

    #[test]
    fn power() {
        let mut tv = fresh();
        tv.toggle_power();
        assert!(tv.describe().contains("Power = True"));
        tv.toggle_power();
        assert!(tv.describe().contains("Power = False"));
    }

    #[test]
    fn mute() {
        let mut tv = fresh();
        tv.toggle_power();
        tv.volume_up();
        tv.toggle_mute();
        assert!(tv.describe().contains("Volume = 0"));
        tv.toggle_mute();
        assert!(tv.describe().contains("Volume = 1"));
    }

    #[test]
    fn channel_up() {
        let mut tv = fresh();
        tv.channel_up();
        assert!(tv.describe().contains("Channel = 0"));

        tv.toggle_power();
        let max = Television::<MemoryStore>::MAX_CHANNEL;
        assert!(tv.set_channel(i64::from(max.value())));
        tv.channel_up();
        assert_eq!(tv.channel().value(), 0);
    }

    #[test]
    fn channel_down() {
        let mut tv = fresh();
        tv.channel_down();
        assert!(tv.describe().contains("Channel = 0"));

        tv.toggle_power();
        tv.channel_down();
        assert!(tv.describe().contains("Channel = 9"));
        tv.channel_down();
        assert!(tv.describe().contains("Channel = 8"));
    }

    #[test]
    fn volume_up() {
        let mut tv = powered();
        tv.volume_up();
        assert!(tv.describe().contains("Volume = 1"));
        tv.toggle_mute();
        tv.volume_up();
        assert!(tv.describe().contains("Volume = 2"));

        for _ in 0..200 {
            tv.volume_up();
        }
        assert_eq!(tv.volume(), Television::<MemoryStore>::MAX_VOLUME);
        tv.volume_up();
        assert_eq!(tv.volume(), Volume::MAX);
    }

    #[test]
    fn volume_down() {
        let mut tv = powered();
        tv.volume_up();
        tv.volume_up();
        tv.volume_down();
        assert!(tv.describe().contains("Volume = 1"));
        tv.toggle_mute();
        tv.volume_down();
        assert!(tv.describe().contains("Volume = 0"));
        assert!(!tv.is_muted());
        tv.volume_down();
        assert!(tv.describe().contains("Volume = 0"));
    }

    #[test]
    fn set_channel() {
        let mut tv = powered();
        assert!(tv.set_channel(5));
        assert_eq!(tv.channel().value(), 5);

        assert!(!tv.set_channel(99));
        assert_eq!(tv.channel().value(), 5);
    }
}

// ============================================================================
// Invariants over operation sequences
// ============================================================================

mod invariants {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Power,
        Mute,
        Up,
        Down,
        VolUp,
        VolDown,
        Set(i64),
    }

    fn apply(tv: &mut Television<MemoryStore>, op: Op) {
        match op {
            Op::Power => tv.toggle_power(),
            Op::Mute => tv.toggle_mute(),
            Op::Up => tv.channel_up(),
            Op::Down => tv.channel_down(),
            Op::VolUp => tv.volume_up(),
            Op::VolDown => tv.volume_down(),
            Op::Set(n) => {
                tv.set_channel(n);
            }
        }
    }

    /// Deterministic operation stream from a small linear congruential generator.
    fn ops(seed: u64, len: usize) -> Vec<Op> {
        let mut x = seed;
        (0..len)
            .map(|_| {
                x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let r = x >> 33;
                match r % 7 {
                    0 => Op::Power,
                    1 => Op::Mute,
                    2 => Op::Up,
                    3 => Op::Down,
                    4 => Op::VolUp,
                    5 => Op::VolDown,
                    #[allow(clippy::cast_possible_wrap)]
                    _ => Op::Set((r % 25) as i64 - 7),
                }
            })
            .collect()
    }

    #[test]
    fn ranges_hold_after_every_step() {
        for seed in 0..20 {
            let mut tv = fresh();
            for op in ops(seed, 500) {
                apply(&mut tv, op);
                assert!(tv.channel().value() <= 9, "{op:?} broke channel");
                assert!(tv.volume().value() <= 100, "{op:?} broke volume");
            }
        }
    }

    #[test]
    fn only_toggle_power_changes_power() {
        for seed in 100..110 {
            let mut tv = fresh();
            for op in ops(seed, 300) {
                let before = tv.power();
                apply(&mut tv, op);
                if !matches!(op, Op::Power) {
                    assert_eq!(tv.power(), before, "{op:?} changed power");
                }
            }
        }
    }

    #[test]
    fn stored_record_tracks_memory() {
        let mut tv = fresh();
        for op in ops(7, 200) {
            apply(&mut tv, op);
            assert_eq!(tv.store().load().unwrap(), tv.state());
        }
    }

    #[test]
    fn up_then_down_restores_every_channel() {
        let mut tv = powered();
        for n in 0..=9 {
            assert!(tv.set_channel(n));
            tv.channel_up();
            tv.channel_down();
            assert_eq!(i64::from(tv.channel().value()), n);
        }
    }

    #[test]
    fn powered_off_freezes_channel_and_mute() {
        let stored = DeviceState::new(
            false,
            Channel::new(4).unwrap(),
            Volume::new(10).unwrap(),
            true,
        );
        let mut tv = Television::new(MemoryStore::with_state(&stored));

        tv.channel_up();
        tv.channel_down();
        tv.channel_down();
        tv.toggle_mute();
        assert!(!tv.set_channel(2));

        assert_eq!(tv.channel().value(), 4);
        assert!(tv.is_muted());
    }

    #[test]
    fn toggle_power_twice_touches_nothing_else() {
        let stored = DeviceState::new(
            true,
            Channel::new(6).unwrap(),
            Volume::new(70).unwrap(),
            true,
        );
        let mut tv = Television::new(MemoryStore::with_state(&stored));
        tv.toggle_power();
        tv.toggle_power();
        assert_eq!(tv.state(), stored);
    }
}

// ============================================================================
// File-backed persistence
// ============================================================================

mod file_store {
    use super::*;

    #[test]
    fn state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tv_state.csv");

        {
            let mut tv = Television::open(&path);
            tv.toggle_power();
            tv.set_channel(7);
            for _ in 0..12 {
                tv.volume_up();
            }
            tv.toggle_mute();
        }

        let tv = Television::open(&path);
        assert!(tv.power());
        assert_eq!(tv.channel().value(), 7);
        assert_eq!(tv.volume().value(), 12);
        assert!(tv.is_muted());
        assert_eq!(tv.describe(), "Power = True, Channel = 7, Volume = 0");
    }

    #[test]
    fn file_contents_after_operation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tv_state.csv");

        let mut tv = Television::open(&path);
        tv.toggle_power();
        tv.volume_up();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "power,channel,volume,muted\r\nTrue,0,1,False\r\n"
        );
    }

    #[test]
    fn no_op_still_writes_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tv_state.csv");

        let mut tv = Television::open(&path);
        assert!(!path.exists());
        tv.channel_up();
        assert!(path.exists());
    }

    #[test]
    fn rejected_set_channel_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tv_state.csv");

        let mut tv = Television::open(&path);
        assert!(!tv.set_channel(3));
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_records_fall_back_to_default() {
        let cases = [
            "",
            "power,channel,volume,muted\n",
            "power,channel,muted\nTrue,3,False\n",
            "power,channel,volume,muted\nTrue,three,5,False\n",
            "power,channel,volume,muted\nTrue,3,loud,False\n",
            "power,channel,volume,muted\nTrue,15,5,False\n",
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tv_state.csv");

        for case in cases {
            fs::write(&path, case).unwrap();
            let tv = Television::open(&path);
            assert_eq!(tv.state(), DeviceState::DEFAULT, "input {case:?}");
        }
    }

    #[test]
    fn lowercase_booleans_read_as_false() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tv_state.csv");
        fs::write(&path, "power,channel,volume,muted\ntrue,2,9,true\n").unwrap();

        let tv = Television::open(&path);
        assert!(!tv.power());
        assert!(!tv.is_muted());
        assert_eq!(tv.channel().value(), 2);
        assert_eq!(tv.volume().value(), 9);
    }

    #[test]
    fn unwritable_location_keeps_working_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvFileStore::new(dir.path().join("no-such-dir").join("tv_state.csv"));

        let mut tv = Television::new(store);
        tv.toggle_power();
        tv.volume_up();
        assert!(tv.set_channel(1));
        assert_eq!(tv.describe(), "Power = True, Channel = 1, Volume = 1");
        assert!(tv.store().load().is_err());
    }
}
