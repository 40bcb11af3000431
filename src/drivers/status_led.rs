//! Red / green status indicator pair.
//!
//! Two plain GPIO outputs.  After [`StatusLeds::set_alert`] exactly one
//! of them is lit; [`StatusLeds::off`] darkens both (boot state).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIOs configured by hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

/// Lit state of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    Off,
    Alert,
    Ok,
}

pub struct StatusLeds {
    alert_gpio: i32,
    ok_gpio: i32,
    state: LedState,
}

impl StatusLeds {
    pub fn new(alert_gpio: i32, ok_gpio: i32) -> Self {
        Self {
            alert_gpio,
            ok_gpio,
            state: LedState::Off,
        }
    }

    pub fn set_alert(&mut self, alert: bool) {
        hw_init::gpio_write(self.alert_gpio, alert);
        hw_init::gpio_write(self.ok_gpio, !alert);
        self.state = if alert { LedState::Alert } else { LedState::Ok };
    }

    pub fn off(&mut self) {
        hw_init::gpio_write(self.alert_gpio, false);
        hw_init::gpio_write(self.ok_gpio, false);
        self.state = LedState::Off;
    }

    pub fn state(&self) -> LedState {
        self.state
    }
}
