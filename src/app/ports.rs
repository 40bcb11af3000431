//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensors, indicators, report sinks, clock) implement these
//! traits.  The [`MonitorService`](super::service::MonitorService) consumes
//! them via generics, so the domain core never touches hardware directly and
//! every decision can be exercised on the host with mocks.

use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
///
/// Reads are infallible at the type level, matching the sensors
/// themselves: the DHT22 getters report a failed read as `f32::NAN`, the
/// MQ-135 has no failure signal at all.  Validation is the caller's job.
pub trait SensorPort {
    /// Configure pins and the sensor driver.  Called once before sampling.
    fn initialize(&mut self) -> Result<()>;

    /// Temperature in °F, or NaN on a failed read.
    fn read_temperature(&mut self) -> f32;

    /// Relative humidity in %, or NaN on a failed read.
    fn read_humidity(&mut self) -> f32;

    /// Raw air-quality reading (proportional, higher = cleaner).
    fn read_air_quality(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → status LEDs)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the two status lines.
///
/// After any `set_alert` call exactly one of "alert" / "ok" is lit.
pub trait IndicatorPort {
    /// `true` → alert on, ok off; `false` → alert off, ok on.
    fn set_alert(&mut self, alert: bool);

    /// Both indicators off (boot state, before the first valid reading).
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond uptime, wrapping at `u32::MAX`.
pub trait ClockPort {
    fn uptime_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → serial / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide how they are rendered (JSON line,
/// text block, log record).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
