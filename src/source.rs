//! The frame source seam.
//!
//! Device discovery, configuration, and endpoint negotiation live behind this
//! trait; the core only sees fixed-size byte frames arriving at the source's
//! declared interval.

use crate::error::Error;
use std::time::Duration;

/// A device (or stand-in) that yields one raw frame per poll tick.
pub trait FrameSource {
    /// Blocks until one full frame is available, or fails with an I/O error.
    ///
    /// Errors are fatal to the caller's poll loop; no retry happens below
    /// this seam.
    fn read_frame(&mut self) -> Result<Vec<u8>, Error>;

    /// Interval the poll loop should sleep between reads. Supplied once by
    /// the source (for real hardware, derived from the device's declared
    /// interrupt interval) and treated as a constant.
    fn poll_interval(&self) -> Duration;

    /// Human-readable source name, for demos and diagnostics.
    fn name(&self) -> &str;

    /// Stable source identifier, e.g. `"07b4:0202"`.
    fn id(&self) -> &str;
}
