//! Runtime diagnostics.
//!
//! [`RuntimeStats`] counts what the sampling loop has done since boot
//! (cycles, failed reads, alerts, failure streaks).  [`RuntimeMetrics`]
//! adds platform numbers (free heap) when a summary is logged.  Nothing
//! here is persisted; a reset starts every counter from zero.

use log::{error, info};

use crate::logic::Recommendation;

/// Log a stats summary every this many sampling cycles.
pub const STATS_LOG_EVERY_CYCLES: u64 = 20;

// ───────────────────────────────────────────────────────────────
// Sampling counters
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    /// Sampling cycles started (valid + invalid).
    pub cycles: u64,
    /// Cycles that produced a valid reading.
    pub reports: u64,
    /// Cycles skipped because the DHT22 returned NaN.
    pub failed_reads: u64,
    /// Valid cycles that recommended closing the window.
    pub alerts: u64,
    /// Consecutive failed reads up to now (0 after any success).
    pub failure_streak: u32,
    /// Longest failure streak seen since boot.
    pub worst_failure_streak: u32,
    /// Recommendation from the last valid cycle.
    pub last_recommendation: Option<Recommendation>,
}

impl RuntimeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, recommendation: Recommendation) {
        self.cycles += 1;
        self.reports += 1;
        if recommendation.is_alert() {
            self.alerts += 1;
        }
        self.failure_streak = 0;
        self.last_recommendation = Some(recommendation);
    }

    pub fn record_failure(&mut self) {
        self.cycles += 1;
        self.failed_reads += 1;
        self.failure_streak = self.failure_streak.saturating_add(1);
        self.worst_failure_streak = self.worst_failure_streak.max(self.failure_streak);
    }

    /// Percentage of cycles that produced a valid reading (100 before the
    /// first cycle).
    pub fn success_rate_percent(&self) -> f32 {
        if self.cycles == 0 {
            return 100.0;
        }
        self.reports as f32 * 100.0 / self.cycles as f32
    }

    /// True when a summary should be logged after the current cycle.
    pub fn summary_due(&self) -> bool {
        self.cycles > 0 && self.cycles % STATS_LOG_EVERY_CYCLES == 0
    }

    pub fn log_summary(&self, metrics: &RuntimeMetrics) {
        info!(
            "STATS | cycles={} ok={} failed={} ({:.0}% ok) | alerts={} | \
             streak={} worst={} | last={:?} | up={}s heap_free={}B min={}B",
            self.cycles,
            self.reports,
            self.failed_reads,
            self.success_rate_percent(),
            self.alerts,
            self.failure_streak,
            self.worst_failure_streak,
            self.last_recommendation,
            metrics.uptime_ms / 1000,
            metrics.heap_free,
            metrics.heap_min_free,
        );
    }
}

// ───────────────────────────────────────────────────────────────
// Platform metrics
// ───────────────────────────────────────────────────────────────

/// Platform snapshot collected on demand.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeMetrics {
    pub uptime_ms: u32,
    pub heap_free: u32,
    pub heap_min_free: u32,
}

impl RuntimeMetrics {
    #[cfg(feature = "espidf")]
    pub fn collect(uptime_ms: u32) -> Self {
        use esp_idf_svc::sys::{esp_get_free_heap_size, esp_get_minimum_free_heap_size};
        // SAFETY: both are read-only heap statistics queries.
        let heap_free = unsafe { esp_get_free_heap_size() };
        let heap_min_free = unsafe { esp_get_minimum_free_heap_size() };
        Self {
            uptime_ms,
            heap_free,
            heap_min_free,
        }
    }

    #[cfg(not(feature = "espidf"))]
    pub fn collect(uptime_ms: u32) -> Self {
        // Synthetic values so host runs exercise the same log paths.
        let heap_free: u32 = 280_000;
        Self {
            uptime_ms,
            heap_free,
            heap_min_free: (heap_free as f32 * 0.9) as u32,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Panic hook
// ───────────────────────────────────────────────────────────────

/// Install a panic hook that logs the panic reason before the default
/// handler resets the chip.
pub fn install_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        let reason = if let Some(msg) = info.payload().downcast_ref::<&str>() {
            *msg
        } else if let Some(msg) = info.payload().downcast_ref::<String>() {
            msg.as_str()
        } else {
            "unknown panic"
        };
        match info.location() {
            Some(loc) => error!("PANIC: {} at {}:{}", reason, loc.file(), loc.line()),
            None => error!("PANIC: {}", reason),
        }
    }));
}
