//! Frame-source backends for `buttonup`.
//!
//! Implementations of [`FrameSource`](crate::source::FrameSource):
//! - **`hid`** (feature, default) — real USB HID handsets via `hidapi`.
//! - **scripted** — canned frame sequences for tests and demos.
//!
//! buttonup reads button frames; it does not create virtual devices.

#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub mod hid;

pub mod scripted;
