//! SmartWindow Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single cooperative sampling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          SerialReportSink     Esp32Time       │
//! │  (Sensor+Indicator)       (EventSink)          (ClockPort)     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            MonitorService (pure logic)                 │    │
//! │  │  SampleScheduler · Thresholds · RuntimeStats           │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::{error, info};

use smartwindow::adapters::hardware::HardwareAdapter;
use smartwindow::adapters::serial_sink::SerialReportSink;
use smartwindow::adapters::time::Esp32TimeAdapter;
use smartwindow::app::ports::ClockPort;
use smartwindow::app::service::MonitorService;
use smartwindow::config::SystemConfig;
use smartwindow::diagnostics;
use smartwindow::drivers::{hw_init, status_led::StatusLeds};
use smartwindow::error::Error;
use smartwindow::pins;
use smartwindow::sensors::{dht22::Dht22, mq135::Mq135Sensor};

/// Yield between polls so the idle task can feed the task watchdog.
const POLL_YIELD_MS: u32 = 10;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  SmartWindow v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    diagnostics::install_panic_handler();

    let config = SystemConfig::DEFAULT;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 2. Let the sensors settle after power-up ──────────────
    FreeRtos::delay_ms(config.startup_settle_ms);

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(|e| {
        error!("HAL init failed: {}", e);
        Error::from(e)
    })?;

    let peripherals = Peripherals::take()?;
    let mut dht_line = PinDriver::input_output_od(peripherals.pins.gpio15)?;
    dht_line.set_pull(Pull::Up)?;
    info!("DHT22 on GPIO{}", pins::DHT22_DATA_GPIO);

    let clock = Esp32TimeAdapter::new();
    let mut hw = HardwareAdapter::new(
        Dht22::new(dht_line, Ets),
        Mq135Sensor::new(hw_init::ADC1_CH_MQ135),
        StatusLeds::new(pins::LED_ALERT_GPIO, pins::LED_OK_GPIO),
        clock,
    );
    let mut sink = SerialReportSink::new(std::io::stdout(), config.report_format);

    // ── 4. Application core ───────────────────────────────────
    let mut app = MonitorService::new(&config);
    app.start(&mut hw, &mut sink)
        .inspect_err(|e| error!("Sensor init failed: {}", e))?;

    info!("System ready. Entering sampling loop.");

    // ── 5. Sampling loop ──────────────────────────────────────
    loop {
        app.poll(clock.uptime_ms(), &mut hw, &mut sink);
        FreeRtos::delay_ms(POLL_YIELD_MS);
    }
}
