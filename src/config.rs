//! System configuration parameters
//!
//! All tunable parameters for the SmartWindow monitor.  There is no
//! runtime configuration surface: every value here is fixed at build time
//! and immutable for the life of the process.

use serde::Serialize;

use crate::logic::Thresholds;

/// Lowest comfortable temperature (°F, inclusive).
pub const TEMP_MIN: f32 = 60.0;
/// Highest comfortable temperature (°F, inclusive).
pub const TEMP_MAX: f32 = 78.0;
/// Highest comfortable relative humidity (%, inclusive).
pub const HUMIDITY_MAX: f32 = 70.0;
/// Lowest acceptable MQ-135 raw reading (inclusive).  Lower = dirtier air.
pub const AIR_QUALITY_MIN: u16 = 500;

/// Sampling period (milliseconds).
pub const SAMPLE_INTERVAL_MS: u32 = 3000;
/// Serial console baud rate.
pub const SERIAL_BAUD: u32 = 115_200;
/// Delay after power-up before touching the sensors (DHT22 settle time).
pub const STARTUP_SETTLE_MS: u32 = 2000;

/// How readings are rendered on the serial link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// One JSON object per line (machine consumers).
    Json,
    /// Human-readable blocks (interactive terminal).
    Text,
}

/// Core system configuration
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SystemConfig {
    // --- Comfort thresholds ---
    pub thresholds: Thresholds,

    // --- Timing ---
    /// Sensor sample interval (milliseconds)
    pub sample_interval_ms: u32,
    /// Power-up settle delay (milliseconds)
    pub startup_settle_ms: u32,

    // --- Serial ---
    pub serial_baud: u32,
    pub report_format: ReportFormat,
}

impl SystemConfig {
    /// The firmware's build-time configuration.
    pub const DEFAULT: Self = Self {
        thresholds: Thresholds::DEFAULT,
        sample_interval_ms: SAMPLE_INTERVAL_MS,
        startup_settle_ms: STARTUP_SETTLE_MS,
        serial_baud: SERIAL_BAUD,
        report_format: ReportFormat::Json,
    };
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
