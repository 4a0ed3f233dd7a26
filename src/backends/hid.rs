//! `hidapi`-backed frame source.
//!
//! Opens one interrupt-IN style HID device by VID/PID and reads fixed-size
//! frames from it. `hidapi` does not surface the endpoint descriptor's
//! `wMaxPacketSize`/`bInterval`, so frame length and poll interval come from
//! the [`DeviceSelector`](crate::config::DeviceSelector) and
//! [`PollConfig`](crate::config::PollConfig) instead, with defaults matching
//! the Olympus RS24.

use crate::config::DeviceSelector;
use crate::error::Error;
use crate::source::FrameSource;
use hidapi::{HidApi, HidDevice};
use std::time::Duration;

pub struct HidFrameSource {
    id: String,
    name: String,
    raw: HidDevice,
    frame_len: usize,
    poll_interval: Duration,
}

impl HidFrameSource {
    /// Opens the device described by `selector`.
    ///
    /// Fails with [`Error::DeviceNotFound`] when no matching device can be
    /// opened. There is no retry; plugging the device in and restarting is
    /// the supported recovery.
    pub fn open(selector: &DeviceSelector, poll_interval: Duration) -> Result<Self, Error> {
        let api = HidApi::new()?;
        Self::open_with(&api, selector, poll_interval)
    }

    /// Same as [`open`](Self::open), reusing an existing `HidApi` context.
    pub fn open_with(
        api: &HidApi,
        selector: &DeviceSelector,
        poll_interval: Duration,
    ) -> Result<Self, Error> {
        let raw = api.open(selector.vid, selector.pid).map_err(|_| {
            Error::DeviceNotFound {
                vid: selector.vid,
                pid: selector.pid,
            }
        })?;

        let name = raw
            .get_product_string()
            .ok()
            .flatten()
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(Self {
            id: format!("{:04x}:{:04x}", selector.vid, selector.pid),
            name,
            raw,
            frame_len: selector.frame_len,
            poll_interval,
        })
    }
}

impl FrameSource for HidFrameSource {
    fn read_frame(&mut self) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; self.frame_len];
        let n = self.raw.read(&mut buf)?;
        buf.truncate(n);

        #[cfg(feature = "debug-log")]
        println!("{} reported {} byte(s): {:?}", self.name, n, &buf);

        Ok(buf)
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}
