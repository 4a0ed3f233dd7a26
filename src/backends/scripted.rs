//! In-memory frame source for tests and demos.

use crate::error::Error;
use crate::source::FrameSource;
use std::collections::VecDeque;
use std::time::Duration;

enum Step {
    Frame(Vec<u8>),
    Fail,
}

/// Replays a canned sequence of frames, then fails.
///
/// Each [`read_frame`](FrameSource::read_frame) pops the next queued step. An
/// explicit [`fail`](Self::fail) step reads as [`Error::ScriptedRead`],
/// simulating a device I/O error mid-run; an empty queue reads as
/// [`Error::SourceExhausted`], which gives demo/test loops a deterministic
/// end.
pub struct ScriptedSource {
    id: String,
    name: String,
    steps: VecDeque<Step>,
    poll_interval: Duration,
}

impl ScriptedSource {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            steps: VecDeque::new(),
            // Scripted runs should not dawdle between frames.
            poll_interval: Duration::ZERO,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Queues a full raw frame.
    pub fn feed(&mut self, frame: impl Into<Vec<u8>>) -> &mut Self {
        self.steps.push_back(Step::Frame(frame.into()));
        self
    }

    /// Queues a frame whose state byte (RS24 layout, index 2) is `state`.
    pub fn feed_state(&mut self, state: u8) -> &mut Self {
        self.feed([0x00, 0x00, state, 0x00])
    }

    /// Queues a simulated read failure.
    pub fn fail(&mut self) -> &mut Self {
        self.steps.push_back(Step::Fail);
        self
    }

    /// Steps still queued.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl FrameSource for ScriptedSource {
    fn read_frame(&mut self) -> Result<Vec<u8>, Error> {
        match self.steps.pop_front() {
            Some(Step::Frame(frame)) => Ok(frame),
            Some(Step::Fail) => Err(Error::ScriptedRead),
            None => Err(Error::SourceExhausted),
        }
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
