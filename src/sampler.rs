//! Fixed-interval sample scheduler.
//!
//! Holds the only piece of state that survives between cycles: the
//! timestamp of the last sample.  The main loop polls [`SampleScheduler::due`]
//! as often as it likes; the scheduler answers `true` at most once per
//! interval and otherwise returns immediately.
//!
//! All arithmetic is on a wrapping `u32` millisecond counter (≈ 49.7 days
//! per wrap), so the interval stays correct across the rollover.

use log::debug;

/// Elapsed-time gate for the sampling loop.
#[derive(Debug, Clone)]
pub struct SampleScheduler {
    interval_ms: u32,
    /// Uptime at which the last sample was started.  Starts at boot (0),
    /// so the first sample is due one full interval after power-up.
    last_sample_ms: u32,
    samples_started: u64,
}

impl SampleScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_sample_ms: 0,
            samples_started: 0,
        }
    }

    /// Has a full interval elapsed since the last sample?  If so, record
    /// `now_ms` as the new sample time and return `true`.
    pub fn due(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_sample_ms) < self.interval_ms {
            return false;
        }
        self.last_sample_ms = now_ms;
        self.samples_started += 1;
        debug!("Sampler: cycle {} due at {}ms", self.samples_started, now_ms);
        true
    }

    /// Milliseconds until the next sample is due (0 if overdue).
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.interval_ms
            .saturating_sub(now_ms.wrapping_sub(self.last_sample_ms))
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn last_sample_ms(&self) -> u32 {
        self.last_sample_ms
    }

    /// Number of times [`due`](Self::due) has returned `true`.
    pub fn samples_started(&self) -> u64 {
        self.samples_started
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
