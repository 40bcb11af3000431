//! Mock hardware adapter for integration tests.
//!
//! Replays scripted sensor values and records every indicator call so
//! tests can assert on the full command history without touching real
//! GPIO registers.

use std::collections::VecDeque;

use smartwindow::app::events::AppEvent;
use smartwindow::app::ports::{EventSink, IndicatorPort, SensorPort};
use smartwindow::error::{Error, Result, SensorError};

// ── Indicator call record ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCall {
    SetAlert(bool),
    AllOff,
}

/// One scripted sensor cycle: temperature, humidity, air quality.
pub type Script = (f32, f32, u16);

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    script: VecDeque<Script>,
    current: Script,
    pub fail_init: bool,
    pub calls: Vec<IndicatorCall>,
    pub reads: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            current: (70.0, 45.0, 700),
            fail_init: false,
            calls: Vec::new(),
            reads: 0,
        }
    }

    /// Queue values for the next cycles; once drained the last one repeats.
    pub fn push(&mut self, t: f32, h: f32, aq: u16) -> &mut Self {
        self.script.push_back((t, h, aq));
        self
    }

    /// `Some(true)` red, `Some(false)` green, `None` both off.
    pub fn lit(&self) -> Option<bool> {
        self.calls
            .iter()
            .rev()
            .map(|c| match c {
                IndicatorCall::SetAlert(a) => Some(*a),
                IndicatorCall::AllOff => None,
            })
            .next()
            .flatten()
    }
}

impl SensorPort for MockHardware {
    fn initialize(&mut self) -> Result<()> {
        if self.fail_init {
            return Err(Error::Sensor(SensorError::PinFault));
        }
        Ok(())
    }

    // A cycle always starts with the temperature read.
    fn read_temperature(&mut self) -> f32 {
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
        self.reads += 1;
        self.current.0
    }

    fn read_humidity(&mut self) -> f32 {
        self.current.1
    }

    fn read_air_quality(&mut self) -> u16 {
        self.current.2
    }
}

impl IndicatorPort for MockHardware {
    fn set_alert(&mut self, alert: bool) {
        self.calls.push(IndicatorCall::SetAlert(alert));
    }

    fn all_off(&mut self) {
        self.calls.push(IndicatorCall::AllOff);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
