//! Listening-time accumulation
//!
//! Counts whole seconds of actual playback and periodically flushes whole
//! minutes into a remote running total. Flushing is best-effort telemetry:
//! a failed or skipped flush retains the seconds for a later retry, and
//! nothing survives the session if no flush ever succeeds.

use aria_core::traits::ListeningSink;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Accumulator for listened seconds with rate-limited minute flushing
#[derive(Debug)]
pub struct ListenTimer {
    /// Whole seconds accumulated since the last successful flush
    seconds: u64,

    /// When the last successful flush happened
    last_flush: Instant,

    /// Minimum wall-clock gap between flushes
    flush_interval: Duration,
}

impl ListenTimer {
    /// Create a timer; `now` seeds the flush clock
    pub fn new(now: Instant, flush_interval: Duration) -> Self {
        Self {
            seconds: 0,
            last_flush: now,
            flush_interval,
        }
    }

    /// Seconds accumulated and not yet flushed
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Record one elapsed second of playback.
    ///
    /// The caller only invokes this while something is actually playing;
    /// the timer itself has no notion of transport state.
    pub fn tick(&mut self) {
        self.seconds += 1;
    }

    /// Flush whole minutes if the flush window has elapsed.
    ///
    /// Returns the number of minutes flushed (0 when skipped or failed).
    /// On success the counter keeps its sub-minute remainder and the flush
    /// clock restarts; on failure everything is retained for the next
    /// qualifying tick.
    pub fn try_flush(&mut self, now: Instant, sink: &mut dyn ListeningSink) -> u64 {
        if now.duration_since(self.last_flush) < self.flush_interval {
            return 0;
        }
        self.flush_pending(now, sink)
    }

    /// Flush whole minutes regardless of the flush window.
    ///
    /// Used at session close for one final best-effort write.
    pub fn flush_pending(&mut self, now: Instant, sink: &mut dyn ListeningSink) -> u64 {
        let minutes = self.seconds / 60;
        if minutes == 0 {
            return 0;
        }

        match sink.add_minutes(minutes) {
            Ok(()) => {
                self.seconds -= minutes * 60;
                self.last_flush = now;
                debug!(minutes, remainder = self.seconds, "Flushed listening minutes");
                minutes
            }
            Err(e) => {
                warn!(error = %e, "Listening-minutes flush failed, will retry");
                0
            }
        }
    }
}
