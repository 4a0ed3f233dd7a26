//! buttonup — polling button-state mapper for USB HID handsets.
//!
//! Polls a frame source for fixed-size button frames, diffs the masked state
//! byte between polls, and dispatches registered handlers per
//! (button, transition) pair, with a `Both` wildcard fallback.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backends;
pub mod buttonmap;
pub mod config;
pub mod detector;
pub mod error;
pub mod event;
pub mod poller;
pub mod registry;
pub mod source;

pub use buttonmap::{ButtonDesc, ButtonMap};
pub use config::{DeviceSelector, PollConfig, Profile};
pub use error::Error;
pub use event::{ButtonEvent, Transition};
pub use poller::{Poller, StopHandle};
pub use registry::{Handler, HandlerRegistry};
pub use source::FrameSource;
