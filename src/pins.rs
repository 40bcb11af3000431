//! GPIO / peripheral pin assignments for the SmartWindow board (ESP32 DevKit).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

/// DHT22 single-wire data line (external 10 kΩ pull-up, internal pull-up
/// enabled as well).
pub const DHT22_DATA_GPIO: i32 = 15;

/// MQ-135 analog output via resistive divider.
/// ADC1 channel 6 (GPIO 34 on ESP32, input-only pin).
pub const MQ135_ADC_GPIO: i32 = 34;

// ---------------------------------------------------------------------------
// Status indicators
// ---------------------------------------------------------------------------

/// Red LED: conditions not optimal, close the window.
pub const LED_ALERT_GPIO: i32 = 13;
/// Green LED: all conditions acceptable.
pub const LED_OK_GPIO: i32 = 12;
