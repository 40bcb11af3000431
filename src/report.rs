//! Serial report rendering.
//!
//! Two renderers share one rounding rule (one decimal, half away from
//! zero):
//!
//! - **JSON lines** for machine consumers, built from `#[derive(Serialize)]`
//!   structs so key order is fixed by field order.
//! - **Text blocks** for a human on a terminal, rendered into fixed-capacity
//!   `heapless::String`s.
//!
//! ```text
//! {"status":"System initialized"}
//! {"temp":70.0,"humidity":45.0,"air_quality":700,"timestamp":3000}
//! {"error":"Sensor read failed"}
//! ```

use core::fmt::Write as _;

use serde::Serialize;

use crate::logic::{AlertFlags, Reading, Recommendation};

/// Message carried by the one-time startup line.
pub const STATUS_INITIALIZED: &str = "System initialized";
/// Message carried by the error line for an invalid reading.
pub const SENSOR_READ_FAILED: &str = "Sensor read failed";

/// Capacity of one rendered text block.
pub const TEXT_BLOCK_CAP: usize = 512;
pub type TextBlock = heapless::String<TEXT_BLOCK_CAP>;

/// Round to one decimal place, half away from zero.
pub fn round1(value: f32) -> f64 {
    (f64::from(value) * 10.0).round() / 10.0
}

// ═══════════════════════════════════════════════════════════════
//  JSON lines
// ═══════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct ReadingLine {
    temp: f64,
    humidity: f64,
    air_quality: u16,
    timestamp: u32,
}

#[derive(Serialize)]
struct StatusLine {
    status: &'static str,
}

#[derive(Serialize)]
struct ErrorLine {
    error: &'static str,
}

/// `{"temp":..,"humidity":..,"air_quality":..,"timestamp":..}`
///
/// `reading` must be valid; NaN has no JSON representation.
pub fn json_reading(reading: &Reading, timestamp_ms: u32) -> serde_json::Result<String> {
    serde_json::to_string(&ReadingLine {
        temp: round1(reading.temperature_f),
        humidity: round1(reading.humidity_pct),
        air_quality: reading.air_quality,
        timestamp: timestamp_ms,
    })
}

/// `{"status":"System initialized"}`
pub fn json_status() -> serde_json::Result<String> {
    serde_json::to_string(&StatusLine {
        status: STATUS_INITIALIZED,
    })
}

/// `{"error":"Sensor read failed"}`
pub fn json_sensor_error() -> serde_json::Result<String> {
    serde_json::to_string(&ErrorLine {
        error: SENSOR_READ_FAILED,
    })
}

// ═══════════════════════════════════════════════════════════════
//  Text blocks
// ═══════════════════════════════════════════════════════════════

const BANNER: &str = "\n\
╔═══════════════════════════════════════╗\n\
║  SMART WINDOW MONITORING SYSTEM v1.0  ║\n\
║     Multi-Sensor Environmental Demo   ║\n\
╚═══════════════════════════════════════╝\n";

const READINGS_OPEN: &str = "══════════════ READINGS ══════════════";
const READINGS_CLOSE: &str = "═════════════════════════════════════";

/// Startup banner.
pub fn text_header() -> &'static str {
    BANNER
}

/// Readings block for one valid sample.
pub fn text_reading(reading: &Reading) -> Result<TextBlock, core::fmt::Error> {
    let mut out = TextBlock::new();
    writeln!(out, "{READINGS_OPEN}")?;
    writeln!(out, "Temperature: {:.1}°F", round1(reading.temperature_f))?;
    writeln!(out, "Humidity:    {:.1}%", round1(reading.humidity_pct))?;
    writeln!(out, "Air Quality: {}", reading.air_quality)?;
    writeln!(out, "{READINGS_CLOSE}")?;
    Ok(out)
}

/// Recommendation block, listing each tripped condition on an alert.
pub fn text_recommendation(
    recommendation: Recommendation,
    flags: AlertFlags,
) -> Result<TextBlock, core::fmt::Error> {
    let mut out = TextBlock::new();
    writeln!(out, "RECOMMENDATION: {recommendation}")?;
    match recommendation {
        Recommendation::CloseWindow => {
            writeln!(out, "   Environmental conditions not optimal")?;
            for reason in flags.reasons() {
                writeln!(out, "   - {reason}")?;
            }
        }
        Recommendation::StayOpen => writeln!(out, "   All conditions acceptable")?,
    }
    Ok(out)
}
