//! Monitor service — the hexagonal core.
//!
//! [`MonitorService`] owns the sample scheduler, the comfort thresholds and
//! the runtime counters.  One call to [`MonitorService::poll`] runs at most
//! one sampling cycle:
//!
//! ```text
//!            ┌──────────────── interval not elapsed ───────────────┐
//!            ▼                                                      │
//!   IDLE ──[due]──▶ SAMPLING ──[valid]────▶ REPORT_OK ────▶ IDLE ───┘
//!                       │
//!                       └─────[NaN]──────▶ REPORT_ERROR ──▶ IDLE
//! ```
//!
//! All I/O flows through port traits injected at call sites, so the whole
//! cycle is testable with mock adapters.

use log::{info, warn};

use crate::config::SystemConfig;
use crate::diagnostics::{RuntimeMetrics, RuntimeStats};
use crate::error::{Error, Result, SensorError};
use crate::logic::{Reading, Recommendation, Thresholds};
use crate::sampler::SampleScheduler;

use super::events::{AppEvent, SampleReport};
use super::ports::{EventSink, IndicatorPort, SensorPort};

/// What a single [`MonitorService::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Interval not yet elapsed; nothing was read.
    Idle,
    /// Valid reading reported; indicators now show `alert`.
    ReportedOk { alert: bool },
    /// Invalid reading; error reported, indicators untouched.
    ReportedError,
}

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

pub struct MonitorService {
    thresholds: Thresholds,
    scheduler: SampleScheduler,
    stats: RuntimeStats,
    /// What the indicators currently show (`None` until the first valid
    /// reading).
    shown: Option<Recommendation>,
}

impl MonitorService {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            thresholds: config.thresholds,
            scheduler: SampleScheduler::new(config.sample_interval_ms),
            stats: RuntimeStats::new(),
            shown: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Initialise the sensors, blank the indicators and announce startup.
    ///
    /// On failure nothing is emitted and the error is returned to the
    /// caller.
    pub fn start(
        &mut self,
        hw: &mut (impl SensorPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        hw.initialize()?;
        hw.all_off();
        self.shown = None;
        sink.emit(&AppEvent::Started);
        info!(
            "MonitorService started (interval={}ms)",
            self.scheduler.interval_ms()
        );
        Ok(())
    }

    // ── Per-poll orchestration ────────────────────────────────

    /// Run one sampling cycle if the interval has elapsed, otherwise return
    /// [`CycleOutcome::Idle`] immediately.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`IndicatorPort`].
    pub fn poll(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) -> CycleOutcome {
        if !self.scheduler.due(now_ms) {
            return CycleOutcome::Idle;
        }
        let outcome = self.sample(now_ms, hw, sink);

        if self.stats.summary_due() {
            self.stats.log_summary(&RuntimeMetrics::collect(now_ms));
        }
        outcome
    }

    fn sample(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) -> CycleOutcome {
        // 1. Read every sensor
        let reading = Reading::new(
            hw.read_temperature(),
            hw.read_humidity(),
            hw.read_air_quality(),
        );

        // 2. Validate: a NaN skips the cycle, indicators keep their state
        if !reading.is_valid() {
            warn!(
                "{} (cycle {}, streak {})",
                Error::from(SensorError::InvalidReading),
                self.scheduler.samples_started(),
                self.stats.failure_streak + 1
            );
            self.stats.record_failure();
            sink.emit(&AppEvent::SensorReadFailed {
                timestamp_ms: now_ms,
            });
            return CycleOutcome::ReportedError;
        }

        let issues = reading.plausibility_issues();
        if issues.any() {
            warn!(
                "Implausible reading: T={:.1}F RH={:.1}% AQ={} ({:?})",
                reading.temperature_f, reading.humidity_pct, reading.air_quality, issues
            );
        }

        // 3. Evaluate
        let flags = self.thresholds.flags(&reading);
        let recommendation = Recommendation::from_alert(!flags.is_empty());

        // 4. Indicators
        hw.set_alert(recommendation.is_alert());
        if self.shown != Some(recommendation) {
            info!("Recommendation: {:?} -> {}", self.shown, recommendation);
            self.shown = Some(recommendation);
        }

        // 5. Report
        self.stats.record_success(recommendation);
        sink.emit(&AppEvent::Sample(SampleReport {
            reading,
            timestamp_ms: now_ms,
            flags,
            recommendation,
        }));

        CycleOutcome::ReportedOk {
            alert: recommendation.is_alert(),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// What the indicators currently show.
    pub fn shown(&self) -> Option<Recommendation> {
        self.shown
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    /// Milliseconds until the next cycle is due.
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.scheduler.remaining_ms(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHw {
        temp: f32,
        alert: Option<bool>,
    }

    impl SensorPort for FixedHw {
        fn initialize(&mut self) -> Result<()> {
            Ok(())
        }
        fn read_temperature(&mut self) -> f32 {
            self.temp
        }
        fn read_humidity(&mut self) -> f32 {
            45.0
        }
        fn read_air_quality(&mut self) -> u16 {
            700
        }
    }

    impl IndicatorPort for FixedHw {
        fn set_alert(&mut self, alert: bool) {
            self.alert = Some(alert);
        }
        fn all_off(&mut self) {
            self.alert = None;
        }
    }

    struct NullSink;

    impl EventSink for NullSink {
        fn emit(&mut self, _event: &AppEvent) {}
    }

    #[test]
    fn idle_until_interval_elapsed() {
        let mut svc = MonitorService::new(&SystemConfig::DEFAULT);
        let mut hw = FixedHw {
            temp: 70.0,
            alert: None,
        };
        assert_eq!(svc.poll(100, &mut hw, &mut NullSink), CycleOutcome::Idle);
        assert_eq!(svc.stats().cycles, 0);
        assert_eq!(
            svc.poll(3000, &mut hw, &mut NullSink),
            CycleOutcome::ReportedOk { alert: false }
        );
        assert_eq!(hw.alert, Some(false));
        assert_eq!(svc.shown(), Some(Recommendation::StayOpen));
    }

    #[test]
    fn remaining_tracks_scheduler() {
        let svc = MonitorService::new(&SystemConfig::DEFAULT);
        assert_eq!(svc.remaining_ms(1000), 2000);
    }
}
