// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terminal remote control.
//!
//! Reads one command per line from stdin and prints the screen after each:
//!
//! ```text
//! power | mute | up | down | + | - | 0-9 | status | help | quit
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tv_remote::PanelConfig;
use tv_remote::display::{DEFAULT_CHANNELS_PATH, RemotePanel};
use tv_remote::store::DEFAULT_STATE_PATH;

#[derive(Parser, Debug)]
#[command(name = "tv-remote", version, about = "Television remote-control simulator")]
struct Params {
    /// Where the device state is stored.
    #[arg(long, default_value = DEFAULT_STATE_PATH)]
    state: PathBuf,
    /// Channel guide with `channel_number,image_path` rows.
    #[arg(long, default_value = DEFAULT_CHANNELS_PATH)]
    channels: PathBuf,
    /// Print `status` as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
    Digit(i64),
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "power" | "p" => Ok(Self::Power),
            "mute" | "m" => Ok(Self::Mute),
            "up" | "u" => Ok(Self::ChannelUp),
            "down" | "d" => Ok(Self::ChannelDown),
            "+" | "vol+" => Ok(Self::VolumeUp),
            "-" | "vol-" => Ok(Self::VolumeDown),
            "status" | "s" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => other
                .parse::<i64>()
                .map(Self::Digit)
                .map_err(|_| format!("unknown command: {other}")),
        }
    }
}

const HELP: &str = "commands: power, mute, up, down, +, -, 0-9, status, help, quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let params = Params::parse();
    let config = PanelConfig::new()
        .with_state_path(params.state)
        .with_channels_path(params.channels);

    tracing::info!(
        state = %config.state_path().display(),
        channels = %config.channels_path().display(),
        "Starting remote"
    );

    let mut panel = RemotePanel::open(&config);
    let mut out = io::stdout().lock();
    writeln!(out, "{}", panel.view())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Power => panel.press_power(),
            Command::Mute => panel.press_mute(),
            Command::ChannelUp => panel.press_channel_up(),
            Command::ChannelDown => panel.press_channel_down(),
            Command::VolumeUp => panel.press_volume_up(),
            Command::VolumeDown => panel.press_volume_down(),
            Command::Digit(n) => {
                if !panel.press_digit(n) {
                    writeln!(out, "channel {n} not available")?;
                }
            }
            Command::Status => {
                let tv = panel.television();
                if params.json {
                    writeln!(out, "{}", serde_json::to_string(&tv.state())?)?;
                } else {
                    writeln!(out, "{}", tv.describe())?;
                }
                continue;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        writeln!(out, "{}", panel.view())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("power".parse::<Command>(), Ok(Command::Power));
        assert_eq!(" UP ".parse::<Command>(), Ok(Command::ChannelUp));
        assert_eq!("+".parse::<Command>(), Ok(Command::VolumeUp));
        assert_eq!("7".parse::<Command>(), Ok(Command::Digit(7)));
        assert_eq!("42".parse::<Command>(), Ok(Command::Digit(42)));
        assert!("jump".parse::<Command>().is_err());
    }

    #[test]
    fn params_defaults() {
        let params = Params::parse_from(["tv-remote"]);
        assert_eq!(params.state, PathBuf::from("tv_state.csv"));
        assert_eq!(params.channels, PathBuf::from("channels.csv"));
        assert!(!params.json);
    }
}
