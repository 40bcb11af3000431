//! DHT22 (AM2302) temperature / humidity sensor driver.
//!
//! Single-wire protocol on one open-drain line with a pull-up:
//!
//! ```text
//!  host start       sensor response        40 data bits (MSB first)
//! ‾‾‾\________/‾‾‾‾\________/‾‾‾‾‾‾‾‾\_____/‾‾‾\_____/‾‾‾‾‾‾‾\__ ...
//!     ≥ 1 ms   20-40µs  80 µs    80 µs   50 µs 26µs 50 µs  70 µs
//!                                             "0"          "1"
//! ```
//!
//! A bit is `1` when its high pulse is longer than the low pulse before
//! it, which makes decoding independent of the absolute loop speed.  The
//! frame is `RH_hi RH_lo T_hi T_lo checksum`; temperature bit 15 is the
//! sign.
//!
//! The sensor must not be polled faster than every 2 s.  A measurement
//! (including a failed one) is reused if asked for again inside that
//! window, so the temperature and humidity of one sampling cycle always
//! come from the same frame.
//!
//! Generic over `embedded-hal` 1.0 pin and delay traits; on the ESP32 the
//! pin is an open-drain `PinDriver` and the delay is `Ets`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Minimum time between two real measurements.
pub const MIN_INTERVAL_MS: u32 = 2000;
/// Host start pulse length (datasheet: at least 1 ms).
const START_LOW_US: u32 = 1100;
/// Give up on any single level after this long.
const PULSE_TIMEOUT_US: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dht22Error {
    /// The sensor did not answer or a bit took too long.
    Timeout,
    /// Frame received but the checksum byte does not match.
    Checksum,
    /// The data line could not be driven or sampled.
    Pin,
}

impl core::fmt::Display for Dht22Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Timeout => write!(f, "DHT22 timeout"),
            Self::Checksum => write!(f, "DHT22 checksum mismatch"),
            Self::Pin => write!(f, "DHT22 data line fault"),
        }
    }
}

/// One decoded frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub celsius: f32,
    pub humidity_pct: f32,
}

impl Measurement {
    pub fn fahrenheit(&self) -> f32 {
        self.celsius * 1.8 + 32.0
    }
}

/// Decode a raw 5-byte frame.
pub fn decode(frame: [u8; 5]) -> Result<Measurement, Dht22Error> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(Dht22Error::Checksum);
    }
    let humidity_pct = f32::from(u16::from_be_bytes([frame[0], frame[1]])) / 10.0;
    let magnitude = f32::from(u16::from_be_bytes([frame[2] & 0x7F, frame[3]])) / 10.0;
    let celsius = if frame[2] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };
    Ok(Measurement {
        celsius,
        humidity_pct,
    })
}

pub struct Dht22<P, D> {
    pin: P,
    delay: D,
    /// Uptime and outcome of the last real measurement.
    last: Option<(u32, Result<Measurement, Dht22Error>)>,
    measurements: u32,
}

impl<P, D> Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            pin,
            delay,
            last: None,
            measurements: 0,
        }
    }

    /// Release the line to its idle-high state.
    pub fn begin(&mut self) -> Result<(), Dht22Error> {
        self.pin.set_high().map_err(|_| Dht22Error::Pin)
    }

    /// Latest measurement, taking a new one only if the previous is older
    /// than [`MIN_INTERVAL_MS`].
    pub fn read(&mut self, now_ms: u32) -> Result<Measurement, Dht22Error> {
        if let Some((at, result)) = self.last {
            if now_ms.wrapping_sub(at) < MIN_INTERVAL_MS {
                return result;
            }
        }
        let result = self.measure();
        self.last = Some((now_ms, result));
        self.measurements = self.measurements.wrapping_add(1);
        result
    }

    /// Number of real (non-cached) measurements taken.
    pub fn measurements(&self) -> u32 {
        self.measurements
    }

    fn measure(&mut self) -> Result<Measurement, Dht22Error> {
        // Start signal, then hand the line back to the pull-up.
        self.pin.set_low().map_err(|_| Dht22Error::Pin)?;
        self.delay.delay_us(START_LOW_US);
        self.pin.set_high().map_err(|_| Dht22Error::Pin)?;

        // Sensor response: pulls low, then high, ~80 µs each.
        self.pulse(true)?;
        self.pulse(false)?;
        self.pulse(true)?;

        let mut frame = [0u8; 5];
        for byte in &mut frame {
            for _ in 0..8 {
                let low = self.pulse(false)?;
                let high = self.pulse(true)?;
                *byte = (*byte << 1) | u8::from(high > low);
            }
        }
        decode(frame)
    }

    /// Microseconds (approximately) the line stays at `high`.
    fn pulse(&mut self, high: bool) -> Result<u32, Dht22Error> {
        let mut us = 0;
        while self.pin.is_high().map_err(|_| Dht22Error::Pin)? == high {
            if us >= PULSE_TIMEOUT_US {
                return Err(Dht22Error::Timeout);
            }
            self.delay.delay_us(1);
            us += 1;
        }
        Ok(us)
    }
}
