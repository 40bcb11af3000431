//! Serial report sink adapter.
//!
//! Implements [`EventSink`] by rendering application events onto the serial
//! console, one JSON object per line or as human-readable text blocks
//! depending on [`ReportFormat`].  On the board the writer is `stdout`,
//! which ESP-IDF routes to UART0; tests pass a `Vec<u8>`.
//!
//! A failed write is logged and dropped.  The sampling loop never stalls on
//! the console.

use std::io::Write;

use log::warn;

use crate::app::events::{AppEvent, SampleReport};
use crate::app::ports::EventSink;
use crate::config::ReportFormat;
use crate::report;

/// Adapter that writes every [`AppEvent`] to a byte stream.
pub struct SerialReportSink<W: Write> {
    out: W,
    format: ReportFormat,
    lines_written: u32,
}

impl<W: Write> SerialReportSink<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self {
            out,
            format,
            lines_written: 0,
        }
    }

    /// Records successfully written (JSON lines or text blocks).
    pub fn lines_written(&self) -> u32 {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_json(event: &AppEvent) -> serde_json::Result<String> {
        match event {
            AppEvent::Started => report::json_status(),
            AppEvent::Sample(r) => report::json_reading(&r.reading, r.timestamp_ms),
            AppEvent::SensorReadFailed { .. } => report::json_sensor_error(),
        }
    }

    fn render_text(event: &AppEvent) -> Result<String, core::fmt::Error> {
        Ok(match event {
            AppEvent::Started => report::text_header().to_owned(),
            AppEvent::Sample(SampleReport {
                reading,
                flags,
                recommendation,
                ..
            }) => {
                let mut text = String::from(report::text_reading(reading)?.as_str());
                text.push_str(report::text_recommendation(*recommendation, *flags)?.as_str());
                text
            }
            AppEvent::SensorReadFailed { .. } => format!("ERROR: {}\n", report::SENSOR_READ_FAILED),
        })
    }

    fn write_record(&mut self, record: &str) -> std::io::Result<()> {
        match self.format {
            ReportFormat::Json => writeln!(self.out, "{record}")?,
            ReportFormat::Text => self.out.write_all(record.as_bytes())?,
        }
        self.out.flush()
    }
}

impl<W: Write> EventSink for SerialReportSink<W> {
    fn emit(&mut self, event: &AppEvent) {
        let record = match self.format {
            ReportFormat::Json => Self::render_json(event).map_err(|e| e.to_string()),
            ReportFormat::Text => Self::render_text(event).map_err(|e| e.to_string()),
        };
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("report render failed: {}", e);
                return;
            }
        };
        match self.write_record(&record) {
            Ok(()) => self.lines_written = self.lines_written.wrapping_add(1),
            Err(e) => warn!("serial write failed: {}", e),
        }
    }
}
