// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel to image lookup table.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, ParseError, PersistError};
use crate::types::Channel;

/// Default file name of the channel guide.
pub const DEFAULT_CHANNELS_PATH: &str = "channels.csv";

/// Image shown by [`ChannelGuide::image_or_default`] for unlisted channels.
pub const DEFAULT_IMAGE: &str = "assets/default.png";

#[derive(Debug, Deserialize)]
struct GuideRow {
    channel_number: String,
    image_path: String,
}

/// Which channels have a picture, and where it is.
///
/// Loaded from a CSV file with `channel_number` and `image_path` columns.
/// Channels missing from the guide are skipped by the panel's up/down
/// buttons.
///
/// # Examples
///
/// ```
/// use tv_remote::display::ChannelGuide;
/// use tv_remote::types::Channel;
///
/// let csv = "channel_number,image_path\n1,img/news.png\n4,img/sport.png\n";
/// let guide = ChannelGuide::from_reader(csv.as_bytes()).unwrap();
///
/// let one = Channel::new(1).unwrap();
/// assert!(guide.contains(one));
/// assert_eq!(guide.image(one).unwrap().to_str(), Some("img/news.png"));
/// assert!(guide.image(Channel::new(2).unwrap()).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelGuide {
    images: BTreeMap<Channel, PathBuf>,
}

impl ChannelGuide {
    /// Creates an empty guide.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a guide from the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or any row is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = fs::File::open(path.as_ref()).map_err(PersistError::Io)?;
        Ok(Self::from_reader(file)?)
    }

    /// Reads a guide from `path`, returning an empty guide on any error.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(guide) => {
                tracing::info!(path = %path.display(), channels = guide.len(), "Loaded channel guide");
                guide
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Error loading channels");
                Self::new()
            }
        }
    }

    /// Parses a guide from CSV text.
    ///
    /// Rows naming a channel outside 0-9 are ignored. A later row for the
    /// same channel replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a row lacks a column or its `channel_number`
    /// is not an integer. Nothing is kept from a failed read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut guide = Self::new();

        for row in rdr.deserialize::<GuideRow>() {
            let row = row?;
            let number: i64 = row.channel_number.trim().parse().map_err(|e| {
                ParseError::InvalidValue {
                    field: "channel_number".to_string(),
                    message: format!("{e}"),
                }
            })?;
            match Channel::new(number) {
                Ok(channel) => guide.insert(channel, row.image_path),
                Err(e) => tracing::debug!(error = %e, "Skipping guide row"),
            }
        }
        Ok(guide)
    }

    /// Adds or replaces the image for `channel`.
    pub fn insert(&mut self, channel: Channel, image: impl Into<PathBuf>) {
        self.images.insert(channel, image.into());
    }

    /// Returns the image for `channel`, if listed.
    #[must_use]
    pub fn image(&self, channel: Channel) -> Option<&Path> {
        self.images.get(&channel).map(PathBuf::as_path)
    }

    /// Returns the image for `channel`, or [`DEFAULT_IMAGE`].
    #[must_use]
    pub fn image_or_default(&self, channel: Channel) -> &Path {
        self.image(channel).unwrap_or_else(|| Path::new(DEFAULT_IMAGE))
    }

    /// Returns `true` if `channel` is listed.
    #[must_use]
    pub fn contains(&self, channel: Channel) -> bool {
        self.images.contains_key(&channel)
    }

    /// Number of listed channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if no channel is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Listed channels in ascending order.
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.images.keys().copied()
    }
}

impl<P: Into<PathBuf>> FromIterator<(Channel, P)> for ChannelGuide {
    fn from_iter<I: IntoIterator<Item = (Channel, P)>>(iter: I) -> Self {
        let mut guide = Self::new();
        for (channel, image) in iter {
            guide.insert(channel, image);
        }
        guide
    }
}
