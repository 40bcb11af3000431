//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide how to render them on the serial link.

use crate::logic::{AlertFlags, Reading, Recommendation};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Sensors initialised; emitted exactly once at boot.
    Started,

    /// A valid reading was taken and evaluated.
    Sample(SampleReport),

    /// The DHT22 returned NaN; the cycle was skipped.
    SensorReadFailed { timestamp_ms: u32 },
}

/// Everything the reporters need about one valid cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleReport {
    pub reading: Reading,
    /// Uptime at which the cycle started.
    pub timestamp_ms: u32,
    pub flags: AlertFlags,
    pub recommendation: Recommendation,
}
