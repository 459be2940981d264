// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat-record encoding of [`DeviceState`].
//!
//! A stored state is a CSV document with a header row naming
//! [`FIELDNAMES`] and exactly one data row:
//!
//! ```text
//! power,channel,volume,muted
//! True,3,12,False
//! ```
//!
//! Booleans are written as `True`/`False`. When reading, only the exact
//! text `True` is true; anything else is false. Integers are base-10.
//!
//! The functions here are strict and return errors. The fallback to
//! [`DeviceState::DEFAULT`] lives in [`crate::store::load_or_default`].

use std::io::{Read, Write};

use serde::Serialize;

use crate::error::{ParseError, PersistError};
use crate::state::DeviceState;
use crate::types::{Channel, Volume};

/// Column names of the stored record, in write order.
pub const FIELDNAMES: [&str; 4] = ["power", "channel", "volume", "muted"];

/// Canonical text for a true boolean.
pub const TRUE_LITERAL: &str = "True";

/// Canonical text for a false boolean.
pub const FALSE_LITERAL: &str = "False";

/// Textual form of one [`DeviceState`], field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistedRecord {
    /// `True` or `False`.
    pub power: String,
    /// Base-10 channel number.
    pub channel: String,
    /// Base-10 volume level.
    pub volume: String,
    /// `True` or `False`.
    pub muted: String,
}

/// Converts a state to its textual record.
#[must_use]
pub fn encode(state: &DeviceState) -> PersistedRecord {
    PersistedRecord {
        power: bool_text(state.power()).to_string(),
        channel: state.channel().to_string(),
        volume: state.volume().to_string(),
        muted: bool_text(state.muted()).to_string(),
    }
}

/// Parses a textual record back into a state.
///
/// # Errors
///
/// Returns `ParseError::InvalidValue` if `channel` or `volume` is not an
/// integer or lies outside its range.
pub fn decode(record: &PersistedRecord) -> Result<DeviceState, ParseError> {
    let channel = parse_int("channel", &record.channel)?;
    let channel = Channel::new(channel).map_err(|e| invalid("channel", e))?;

    let volume = parse_int("volume", &record.volume)?;
    let volume = Volume::new(volume).map_err(|e| invalid("volume", e))?;

    Ok(DeviceState::new(
        record.power == TRUE_LITERAL,
        channel,
        volume,
        record.muted == TRUE_LITERAL,
    ))
}

/// Reads the header and first data row from `reader`.
///
/// Columns are matched by name, so their order does not matter and extra
/// columns are ignored. Rows after the first are ignored.
///
/// # Errors
///
/// - `ParseError::Csv` if the input is not valid CSV
/// - `ParseError::EmptyRecord` if there is no data row
/// - `ParseError::MissingField` if a column is absent from the header or
///   the row is too short to contain it
pub fn read_record<R: Read>(reader: R) -> Result<PersistedRecord, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let row = rdr.records().next().ok_or(ParseError::EmptyRecord)??;

    let field = |name: &str| -> Result<String, ParseError> {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|idx| row.get(idx))
            .map(str::to_string)
            .ok_or_else(|| ParseError::MissingField(name.to_string()))
    };

    Ok(PersistedRecord {
        power: field("power")?,
        channel: field("channel")?,
        volume: field("volume")?,
        muted: field("muted")?,
    })
}

/// Writes `record` as a header row plus one data row, CRLF-terminated.
///
/// # Errors
///
/// Returns `PersistError` if serialization or the underlying write fails.
pub fn write_record<W: Write>(writer: W, record: &PersistedRecord) -> Result<(), PersistError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

/// Reads and decodes a state in one step.
///
/// # Errors
///
/// Returns any error from [`read_record`] or [`decode`].
pub fn read_state<R: Read>(reader: R) -> Result<DeviceState, ParseError> {
    decode(&read_record(reader)?)
}

/// Encodes and writes a state in one step.
///
/// # Errors
///
/// Returns any error from [`write_record`].
pub fn write_state<W: Write>(writer: W, state: &DeviceState) -> Result<(), PersistError> {
    write_record(writer, &encode(state))
}

const fn bool_text(value: bool) -> &'static str {
    if value { TRUE_LITERAL } else { FALSE_LITERAL }
}

fn parse_int(field: &str, text: &str) -> Result<i64, ParseError> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| invalid(field, e))
}

fn invalid(field: &str, err: impl std::fmt::Display) -> ParseError {
    ParseError::InvalidValue {
        field: field.to_string(),
        message: err.to_string(),
    }
}
