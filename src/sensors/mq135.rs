//! MQ-135 air-quality sensor.
//!
//! The module's analog output is read raw through ADC1 (12-bit, 0-4095)
//! and reported as-is: higher means cleaner air on this board's divider.
//! No ppm conversion or warm-up compensation is applied.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the ADC1 oneshot channel initialised by hw_init.
//! On host/test: hw_init serves a per-channel injectable value.

use crate::drivers::hw_init;

/// Full scale of the 12-bit converter.
pub const ADC_MAX: u16 = 4095;

/// Inject the raw value the host build reads for the MQ-135.
#[cfg(not(feature = "espidf"))]
pub fn sim_set_air_quality_adc(raw: u16) {
    hw_init::sim_set_adc1(hw_init::ADC1_CH_MQ135, raw);
}

pub struct Mq135Sensor {
    channel: u32,
    total_reads: u32,
}

impl Mq135Sensor {
    pub fn new(channel: u32) -> Self {
        Self {
            channel,
            total_reads: 0,
        }
    }

    pub fn read(&mut self) -> u16 {
        self.total_reads = self.total_reads.saturating_add(1);
        hw_init::adc1_read(self.channel).min(ADC_MAX)
    }

    pub fn total_reads(&self) -> u32 {
        self.total_reads
    }
}
