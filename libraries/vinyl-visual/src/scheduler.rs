//! Frame scheduling
//!
//! The render loop is "call this closure once per frame for the lifetime of
//! the host". Browsers drive it from `requestAnimationFrame`; native hosts
//! and tests use [`FixedRateScheduler`].

use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Repeatedly invokes a frame callback
///
/// There is no cancellation: once started, the loop runs until the host
/// goes away (or the scheduler's own limit, if it has one).
pub trait FrameScheduler {
    /// Start invoking `frame`
    fn start(&mut self, frame: Box<dyn FnMut()>);
}

/// Fixed-interval loop on the calling thread
///
/// Blocks until `frame_limit` frames have run; with no limit it never
/// returns.
#[derive(Debug, Clone)]
pub struct FixedRateScheduler {
    interval: Duration,
    frame_limit: Option<u64>,
}

impl FixedRateScheduler {
    /// ~60 frames per second, unbounded
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_micros(16_667))
    }

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_limit: None,
        }
    }

    /// Stop after `frames` invocations
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn start(&mut self, mut frame: Box<dyn FnMut()>) {
        debug!(
            "Starting fixed-rate frame loop ({:?} interval, limit {:?})",
            self.interval, self.frame_limit
        );

        let mut frames = 0u64;
        loop {
            if self.frame_limit.is_some_and(|limit| frames >= limit) {
                break;
            }

            let started = Instant::now();
            frame();
            frames += 1;

            if let Some(remaining) = self.interval.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        }
    }
}
