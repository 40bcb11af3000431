//! End-to-end serial output: service + JSON sink, as a host tool sees it.

use crate::mock_hw::MockHardware;

use smartwindow::adapters::serial_sink::SerialReportSink;
use smartwindow::app::service::MonitorService;
use smartwindow::config::{ReportFormat, SystemConfig};

fn run(hw: &mut MockHardware, polls: &[u32]) -> Vec<String> {
    let mut app = MonitorService::new(&SystemConfig::default());
    let mut sink = SerialReportSink::new(Vec::new(), ReportFormat::Json);
    app.start(hw, &mut sink).expect("mock init succeeds");
    for &now in polls {
        app.poll(now, hw, &mut sink);
    }
    String::from_utf8(sink.into_inner())
        .expect("utf-8 output")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn boot_then_reading_then_error() {
    let mut hw = MockHardware::new();
    hw.push(70.0, 45.0, 700).push(f32::NAN, 45.0, 700);
    let lines = run(&mut hw, &[0, 1500, 3000, 4500, 6000]);
    assert_eq!(
        lines,
        vec![
            r#"{"status":"System initialized"}"#,
            r#"{"temp":70.0,"humidity":45.0,"air_quality":700,"timestamp":3000}"#,
            r#"{"error":"Sensor read failed"}"#,
        ]
    );
}

#[test]
fn reading_lines_parse_as_json_objects() {
    let mut hw = MockHardware::new();
    hw.push(72.06, 68.94, 1234);
    let lines = run(&mut hw, &[3000]);
    let v: serde_json::Value = serde_json::from_str(&lines[1]).expect("valid json");
    assert_eq!(v["temp"], 72.1);
    assert_eq!(v["humidity"], 68.9);
    assert_eq!(v["air_quality"], 1234);
    assert_eq!(v["timestamp"], 3000);
    assert_eq!(v.as_object().map(|o| o.len()), Some(4));
}
