//! The poll loop.
//!
//! One logical thread of control: read a frame, mask the state byte, diff
//! against the previous state, dispatch each edge, sleep, repeat. The only
//! suspension points are the blocking read and the inter-poll sleep. Handlers
//! run inline, so a slow handler directly throttles the effective poll rate.

use crate::buttonmap::ButtonMap;
use crate::config::PollConfig;
use crate::detector::detect;
use crate::error::Error;
use crate::event::Transition;
use crate::registry::HandlerRegistry;
use crate::source::FrameSource;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Cloneable cancellation token for [`Poller::start`].
///
/// `stop()` is sticky: the loop finishes its current iteration (including the
/// sleep) and then returns `Ok(())`. Stopping holds no resources and leaves
/// no state to corrupt.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the loop to stop after the in-flight iteration.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owns the frame source, button map, handler registry, and the previous
/// masked state. Single-threaded by construction; nothing here is shared.
pub struct Poller<S: FrameSource> {
    source: S,
    map: ButtonMap,
    config: PollConfig,
    registry: HandlerRegistry,
    previous: u8,
    stop: StopHandle,
}

impl<S: FrameSource> Poller<S> {
    pub fn new(source: S, map: ButtonMap, config: PollConfig) -> Self {
        Self {
            source,
            map,
            config,
            registry: HandlerRegistry::new(),
            // Starts at "nothing held", so a button already down at startup
            // reports a Press on the very first frame.
            previous: 0,
            stop: StopHandle::new(),
        }
    }

    /// Registers a handler for `(name, transition)`; see
    /// [`HandlerRegistry::register`].
    pub fn register_handler(
        &mut self,
        name: impl Into<String>,
        transition: Transition,
        handler: impl FnMut(&str, Transition) + Send + 'static,
    ) {
        self.registry.register(name, transition, handler);
    }

    /// Registers a stdout handler under the `Both` wildcard for every mapped
    /// button. Handy for demos and quick diagnostics.
    pub fn register_logger(&mut self) {
        let names: Vec<String> = self.map.names().map(str::to_string).collect();
        for name in names {
            self.registry.register(name, Transition::Both, |name, t| {
                println!("[button] {name} {t:?}");
            });
        }
    }

    /// Token that stops the loop from another thread (or a handler).
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Runs the loop until stopped or until an unrecovered error.
    ///
    /// Per iteration: blocking read, mask the state byte, detect edges,
    /// dispatch each in map order, store the new state, sleep the source's
    /// poll interval. Read errors propagate immediately; nothing is retried.
    pub fn start(&mut self) -> Result<(), Error> {
        let interval = self.source.poll_interval();

        while !self.stop.is_stopped() {
            let frame = self.source.read_frame()?;
            let byte = *frame
                .get(self.config.frame_index)
                .ok_or(Error::FrameTooShort {
                    len: frame.len(),
                    index: self.config.frame_index,
                })?;
            let current = byte & !self.config.ignore_mask;

            for event in detect(self.previous, current, &self.map) {
                self.registry.dispatch(&event.name, event.transition);
            }

            self.previous = current;

            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }

        Ok(())
    }
}
