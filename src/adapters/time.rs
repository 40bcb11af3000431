//! ESP32 time adapter.
//!
//! Millisecond uptime for the sample scheduler.
//!
//! - **`feature = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(feature = "espidf")`** — uses `std::time::Instant` for
//!   host-side testing and simulation.

use crate::app::ports::ClockPort;

/// Time adapter for the ESP32 platform.
#[derive(Debug, Clone, Copy)]
pub struct Esp32TimeAdapter {
    #[cfg(not(feature = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(feature = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Microseconds since boot (monotonic).
    #[cfg(feature = "espidf")]
    pub fn uptime_us(&self) -> u64 {
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since adapter creation (monotonic).
    #[cfg(not(feature = "espidf"))]
    pub fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl ClockPort for Esp32TimeAdapter {
    /// Truncated to `u32`: wraps after ~49.7 days.
    fn uptime_ms(&self) -> u32 {
        (self.uptime_us() / 1000) as u32
    }
}
