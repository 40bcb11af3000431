//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the DHT22 and MQ-135 drivers plus the status LEDs, exposing them
//! through [`SensorPort`] and [`IndicatorPort`].  This is the only module
//! in the system that touches actual hardware.  On non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.
//!
//! A failed DHT22 measurement surfaces as `f32::NAN` from both
//! temperature and humidity getters; the service treats that as a skipped
//! cycle.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::{debug, info, warn};

use crate::app::ports::{ClockPort, IndicatorPort, SensorPort};
use crate::drivers::status_led::{LedState, StatusLeds};
use crate::error::{Result, SensorError};
use crate::sensors::dht22::{Dht22, Dht22Error, Measurement};
use crate::sensors::mq135::Mq135Sensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P, D, C> {
    dht: Dht22<P, D>,
    mq135: Mq135Sensor,
    leds: StatusLeds,
    clock: C,
}

impl<P, D, C> HardwareAdapter<P, D, C>
where
    P: InputPin + OutputPin,
    D: DelayNs,
    C: ClockPort,
{
    pub fn new(dht: Dht22<P, D>, mq135: Mq135Sensor, leds: StatusLeds, clock: C) -> Self {
        Self {
            dht,
            mq135,
            leds,
            clock,
        }
    }

    pub fn led_state(&self) -> LedState {
        self.leds.state()
    }

    /// Current DHT22 frame, or `None` if the last measurement failed.
    fn measurement(&mut self) -> Option<Measurement> {
        let now = self.clock.uptime_ms();
        let taken = self.dht.measurements();

        // Bit timing is in the tens of microseconds; keep interrupts out.
        #[cfg(feature = "espidf")]
        let result = esp_idf_hal::interrupt::free(|| self.dht.read(now));
        #[cfg(not(feature = "espidf"))]
        let result = self.dht.read(now);

        let fresh = self.dht.measurements() != taken;
        match result {
            Ok(m) => {
                if fresh {
                    debug!("DHT22: {:.1}C {:.1}%", m.celsius, m.humidity_pct);
                }
                Some(m)
            }
            Err(e) => {
                if fresh {
                    warn!("{}", e);
                }
                None
            }
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<P, D, C> SensorPort for HardwareAdapter<P, D, C>
where
    P: InputPin + OutputPin,
    D: DelayNs,
    C: ClockPort,
{
    fn initialize(&mut self) -> Result<()> {
        self.dht.begin().map_err(|e: Dht22Error| {
            warn!("{}", e);
            SensorError::PinFault
        })?;
        info!("Sensors initialized (DHT22 + MQ-135)");
        Ok(())
    }

    fn read_temperature(&mut self) -> f32 {
        self.measurement().map_or(f32::NAN, |m| m.fahrenheit())
    }

    fn read_humidity(&mut self) -> f32 {
        self.measurement().map_or(f32::NAN, |m| m.humidity_pct)
    }

    fn read_air_quality(&mut self) -> u16 {
        self.mq135.read()
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<P, D, C> IndicatorPort for HardwareAdapter<P, D, C> {
    fn set_alert(&mut self, alert: bool) {
        self.leds.set_alert(alert);
    }

    fn all_off(&mut self) {
        self.leds.off();
    }
}
