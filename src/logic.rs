//! Comfort decision logic.
//!
//! Maps one [`Reading`] to an alert: close the window when the temperature
//! leaves `[temp_min, temp_max]`, the humidity rises above `humidity_max`,
//! or the MQ-135 value drops below `air_quality_min`.
//!
//! [`Thresholds::flags`] reports *which* conditions tripped as a bitmask so
//! the reporter can explain the recommendation; [`evaluate`] is the boolean
//! view of the same check.  Nothing here keeps state between cycles.

use core::fmt;

use serde::Serialize;

use crate::config::{AIR_QUALITY_MIN, HUMIDITY_MAX, TEMP_MAX, TEMP_MIN};

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// One sample of every sensor, taken in a single cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Degrees Fahrenheit.  NaN when the DHT22 read failed.
    pub temperature_f: f32,
    /// Relative humidity (%).  NaN when the DHT22 read failed.
    pub humidity_pct: f32,
    /// Raw 12-bit MQ-135 ADC value (0 – 4095).  Higher = cleaner air.
    pub air_quality: u16,
}

/// Physically plausible bounds used by the health check.
const PLAUSIBLE_TEMP_F: core::ops::RangeInclusive<f32> = 0.0..=150.0;
const PLAUSIBLE_HUMIDITY: core::ops::RangeInclusive<f32> = 0.0..=100.0;
const ADC_MAX: u16 = 4095;

impl Reading {
    pub const fn new(temperature_f: f32, humidity_pct: f32, air_quality: u16) -> Self {
        Self {
            temperature_f,
            humidity_pct,
            air_quality,
        }
    }

    /// A reading is usable only if the DHT22 produced both quantities.
    pub fn is_valid(&self) -> bool {
        !self.temperature_f.is_nan() && !self.humidity_pct.is_nan()
    }

    /// Cheap-sensor sanity check.  Only meaningful on a valid reading.
    ///
    /// The issues are diagnostic: an implausible value is still reported
    /// and evaluated like any other.
    pub fn plausibility_issues(&self) -> PlausibilityIssues {
        PlausibilityIssues {
            temperature: !PLAUSIBLE_TEMP_F.contains(&self.temperature_f),
            humidity: !PLAUSIBLE_HUMIDITY.contains(&self.humidity_pct),
            air_quality: self.air_quality > ADC_MAX,
        }
    }
}

/// Result of [`Reading::plausibility_issues`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlausibilityIssues {
    pub temperature: bool,
    pub humidity: bool,
    pub air_quality: bool,
}

impl PlausibilityIssues {
    pub fn any(&self) -> bool {
        self.temperature || self.humidity || self.air_quality
    }
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Comfort limits.  All bounds are inclusive on the "good" side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub temp_min: f32,
    pub temp_max: f32,
    pub humidity_max: f32,
    pub air_quality_min: u16,
}

impl Thresholds {
    pub const DEFAULT: Self = Self {
        temp_min: TEMP_MIN,
        temp_max: TEMP_MAX,
        humidity_max: HUMIDITY_MAX,
        air_quality_min: AIR_QUALITY_MIN,
    };

    /// Which comfort conditions does `reading` violate?
    ///
    /// The caller must have checked [`Reading::is_valid`]; NaN inputs give
    /// an unspecified (but non-panicking) result.
    pub fn flags(&self, reading: &Reading) -> AlertFlags {
        let mut flags = AlertFlags::NONE;
        if reading.temperature_f < self.temp_min {
            flags |= AlertFlags::TEMP_LOW;
        }
        if reading.temperature_f > self.temp_max {
            flags |= AlertFlags::TEMP_HIGH;
        }
        if reading.humidity_pct > self.humidity_max {
            flags |= AlertFlags::HUMIDITY_HIGH;
        }
        if reading.air_quality < self.air_quality_min {
            flags |= AlertFlags::AIR_POOR;
        }
        flags
    }

    /// `true` when the window should be closed.
    pub fn evaluate(&self, reading: &Reading) -> bool {
        !self.flags(reading).is_empty()
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Evaluate raw scalars against the build-time thresholds.
pub fn evaluate(temperature_f: f32, humidity_pct: f32, air_quality: u16) -> bool {
    Thresholds::DEFAULT.evaluate(&Reading::new(temperature_f, humidity_pct, air_quality))
}

// ---------------------------------------------------------------------------
// Alert flags
// ---------------------------------------------------------------------------

/// Bitmask of tripped comfort conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertFlags(u8);

impl AlertFlags {
    pub const NONE: Self = Self(0);
    pub const TEMP_LOW: Self = Self(0b0000_0001);
    pub const TEMP_HIGH: Self = Self(0b0000_0010);
    pub const HUMIDITY_HIGH: Self = Self(0b0000_0100);
    pub const AIR_POOR: Self = Self(0b0000_1000);

    const ALL: [Self; 4] = [
        Self::TEMP_LOW,
        Self::TEMP_HIGH,
        Self::HUMIDITY_HIGH,
        Self::AIR_POOR,
    ];

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Human-readable reasons for every set flag, in a fixed order.
    pub fn reasons(self) -> impl Iterator<Item = &'static str> {
        Self::ALL
            .into_iter()
            .filter(move |f| self.contains(*f))
            .map(Self::reason)
    }

    fn reason(self) -> &'static str {
        match self {
            Self::TEMP_LOW => "Temperature too low",
            Self::TEMP_HIGH => "Temperature too high",
            Self::HUMIDITY_HIGH => "Humidity too high",
            Self::AIR_POOR => "Air quality poor",
            _ => "Multiple conditions",
        }
    }
}

impl core::ops::BitOr for AlertFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for AlertFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// What the monitor tells the occupant to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    CloseWindow,
    StayOpen,
}

impl Recommendation {
    pub fn from_alert(alert: bool) -> Self {
        if alert { Self::CloseWindow } else { Self::StayOpen }
    }

    pub fn is_alert(self) -> bool {
        self == Self::CloseWindow
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloseWindow => write!(f, "CLOSE WINDOW"),
            Self::StayOpen => write!(f, "WINDOW CAN STAY OPEN"),
        }
    }
}
