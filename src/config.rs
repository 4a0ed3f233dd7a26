//! Construction-time configuration.
//!
//! Everything here is supplied once, before polling starts; there is no
//! runtime reconfiguration. Defaults match the Olympus RS24 handset: state
//! byte at frame index 2, bit 0 ignored (on the RS24 it flags "no button
//! pressed" and is just noise for diffing), 8-byte frames, 8 ms interval.
//!
//! A whole configuration can be loaded from a TOML or JSON [`Profile`]:
//!
//! ```toml
//! [device]
//! vid = 0x07b4
//! pid = 0x0202
//! frame_len = 8
//!
//! [poll]
//! ignore_mask = 0x01
//! frame_index = 2
//! interval_ms = 8
//!
//! [[buttons]]
//! mask = 0x02
//! name = "LISTEN"
//!
//! [[buttons]]
//! mask = 0x04
//! name = "REW"
//! ```
//!
//! Buttons are an array, not a table, so profile order is map order.

use crate::buttonmap::ButtonMap;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which HID device the `hid` backend opens, and how big its frames are.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSelector {
    /// USB Vendor ID.
    pub vid: u16,
    /// USB Product ID.
    pub pid: u16,
    /// Frame (interrupt packet) size in bytes.
    pub frame_len: usize,
}

impl Default for DeviceSelector {
    fn default() -> Self {
        // Olympus RS24.
        Self {
            vid: 0x07b4,
            pid: 0x0202,
            frame_len: 8,
        }
    }
}

/// How the poll loop interprets each frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Bits forced to zero before state comparison.
    pub ignore_mask: u8,
    /// Byte offset within each frame carrying the button state.
    pub frame_index: usize,
    /// Sleep between reads, for sources that cannot declare their own
    /// interrupt interval.
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            ignore_mask: 0x01,
            frame_index: 2,
            interval_ms: 8,
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Serializable bundle of selector, poll config, and button map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub device: DeviceSelector,
    pub poll: PollConfig,
    pub buttons: ButtonMap,
}

impl Profile {
    /// The built-in RS24 profile: LISTEN/REW/FF with default masks.
    pub fn rs24_default() -> Self {
        Self {
            buttons: ButtonMap::rs24_default(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }
}
