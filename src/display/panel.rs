// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Button handlers and render model for the remote.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::PanelConfig;
use crate::device::Television;
use crate::display::ChannelGuide;
use crate::store::{CsvFileStore, StateStore};
use crate::types::{Channel, Volume};

/// Text shown instead of a picture when the guide has no image.
pub const NO_IMAGE_TEXT: &str = "No image available";

/// A headless remote control: buttons in, [`PanelView`] out.
///
/// The panel holds no authoritative state of its own. Each press calls
/// into the [`Television`]; [`view`](Self::view) re-reads it.
///
/// Channel up/down skip channels that have no image in the
/// [`ChannelGuide`], trying at most one full cycle.
///
/// # Examples
///
/// ```
/// use tv_remote::display::{ChannelGuide, PanelView, RemotePanel};
/// use tv_remote::store::MemoryStore;
/// use tv_remote::types::Channel;
/// use tv_remote::Television;
///
/// let guide: ChannelGuide = [(Channel::new(2).unwrap(), "two.png"), (Channel::new(7).unwrap(), "seven.png")]
///     .into_iter()
///     .collect();
/// let mut panel = RemotePanel::new(Television::new(MemoryStore::new()), guide);
///
/// assert_eq!(panel.view(), PanelView::Off);
///
/// panel.press_power();
/// panel.press_channel_up();
/// assert_eq!(panel.television().channel().value(), 2);
/// panel.press_channel_down();
/// assert_eq!(panel.television().channel().value(), 7);
/// ```
#[derive(Debug)]
pub struct RemotePanel<S: StateStore = CsvFileStore> {
    television: Television<S>,
    guide: ChannelGuide,
}

impl RemotePanel<CsvFileStore> {
    /// Opens the television and channel guide named by `config`.
    ///
    /// Neither file has to exist: the television falls back to its default
    /// state and the guide to empty.
    #[must_use]
    pub fn open(config: &PanelConfig) -> Self {
        Self::new(
            Television::open(config.state_path()),
            ChannelGuide::load_or_empty(config.channels_path()),
        )
    }
}

impl<S: StateStore> RemotePanel<S> {
    /// Creates a panel driving `television`, using `guide` for pictures.
    pub fn new(television: Television<S>, guide: ChannelGuide) -> Self {
        Self { television, guide }
    }

    /// Returns the television.
    #[must_use]
    pub fn television(&self) -> &Television<S> {
        &self.television
    }

    /// Returns the channel guide.
    #[must_use]
    pub fn guide(&self) -> &ChannelGuide {
        &self.guide
    }

    /// Splits the panel into its television and guide.
    pub fn into_parts(self) -> (Television<S>, ChannelGuide) {
        (self.television, self.guide)
    }

    /// Power button.
    pub fn press_power(&mut self) {
        self.television.toggle_power();
    }

    /// Mute button.
    pub fn press_mute(&mut self) {
        self.television.toggle_mute();
    }

    /// Volume up button.
    pub fn press_volume_up(&mut self) {
        self.television.volume_up();
    }

    /// Volume down button.
    pub fn press_volume_down(&mut self) {
        self.television.volume_down();
    }

    /// Channel up button; skips channels without an image.
    pub fn press_channel_up(&mut self) {
        self.seek(Television::channel_up);
    }

    /// Channel down button; skips channels without an image.
    pub fn press_channel_down(&mut self) {
        self.seek(Television::channel_down);
    }

    /// Number button `n`.
    ///
    /// Returns `true` if the television switched to `n`. Does nothing while
    /// the set is off.
    pub fn press_digit(&mut self, n: i64) -> bool {
        if !self.television.power() {
            return false;
        }
        self.television.set_channel(n)
    }

    /// Builds what the screen should show right now.
    #[must_use]
    pub fn view(&self) -> PanelView {
        let state = self.television.state();
        if !state.power() {
            return PanelView::Off;
        }
        PanelView::On {
            channel: state.channel(),
            volume: state.volume(),
            muted: state.muted(),
            image: self.guide.image(state.channel()).map(Path::to_path_buf),
        }
    }

    fn seek(&mut self, step: fn(&mut Television<S>)) {
        for _ in 0..Channel::COUNT {
            step(&mut self.television);
            if self.guide.contains(self.television.channel()) {
                return;
            }
        }
        tracing::trace!(
            channel = %self.television.channel(),
            "No channel with an image found"
        );
    }
}

/// Render model of the remote's screen.
///
/// # Examples
///
/// ```
/// use tv_remote::display::PanelView;
/// use tv_remote::types::{Channel, Volume};
///
/// let view = PanelView::On {
///     channel: Channel::new(3).unwrap(),
///     volume: Volume::new(20).unwrap(),
///     muted: true,
///     image: None,
/// };
/// assert_eq!(view.channel_text(), "Channel: 3");
/// assert_eq!(view.volume_bar(), 20);
/// assert!(!view.volume_bar_enabled());
/// assert_eq!(view.mute_label(), "Muted");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// The set is switched off: blank screen, disabled volume bar.
    Off,
    /// The set is switched on.
    On {
        /// Current channel.
        channel: Channel,
        /// Stored volume; the bar keeps showing it while muted.
        volume: Volume,
        /// Mute flag.
        muted: bool,
        /// Picture for the channel, if the guide lists one.
        image: Option<PathBuf>,
    },
}

impl PanelView {
    /// Channel label text.
    #[must_use]
    pub fn channel_text(&self) -> String {
        match self {
            Self::Off => "TV Off".to_string(),
            Self::On { channel, .. } => format!("Channel: {channel}"),
        }
    }

    /// Volume bar position.
    #[must_use]
    pub fn volume_bar(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On { volume, .. } => volume.value(),
        }
    }

    /// Whether the volume bar is active.
    #[must_use]
    pub fn volume_bar_enabled(&self) -> bool {
        matches!(self, Self::On { muted: false, .. })
    }

    /// Mute button label.
    #[must_use]
    pub fn mute_label(&self) -> &'static str {
        if self.is_muted() { "Muted" } else { "Mute" }
    }

    /// Whether the mute button is highlighted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        matches!(self, Self::On { muted: true, .. })
    }

    /// Picture to draw, if any.
    #[must_use]
    pub fn image(&self) -> Option<&Path> {
        match self {
            Self::On {
                image: Some(path), ..
            } => Some(path.as_path()),
            _ => None,
        }
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::On { .. } = self else {
            return write!(f, "{}", self.channel_text());
        };

        write!(f, "{} | Volume: ", self.channel_text())?;
        let filled = usize::from(self.volume_bar() / 10);
        let bar = format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled));
        if self.volume_bar_enabled() {
            write!(f, "[{bar}] {}", self.volume_bar())?;
        } else {
            write!(f, "({bar}) {}", self.volume_bar())?;
        }
        write!(f, " | {} | ", self.mute_label())?;
        match self.image() {
            Some(path) => write!(f, "{}", path.display()),
            None => write!(f, "{NO_IMAGE_TEXT}"),
        }
    }
}
