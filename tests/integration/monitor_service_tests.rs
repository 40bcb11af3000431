//! Integration tests for the MonitorService → indicators / events pipeline.
//!
//! Drive the service with a simulated millisecond clock and scripted sensor
//! values, then assert on the indicator history and emitted events.

use crate::mock_hw::{IndicatorCall, MockHardware, RecordingSink};

use smartwindow::app::events::{AppEvent, SampleReport};
use smartwindow::app::service::{CycleOutcome, MonitorService};
use smartwindow::config::SystemConfig;
use smartwindow::logic::{AlertFlags, Recommendation};

fn make_app(hw: &mut MockHardware) -> (MonitorService, RecordingSink) {
    let mut app = MonitorService::new(&SystemConfig::default());
    let mut sink = RecordingSink::new();
    app.start(hw, &mut sink).expect("mock init succeeds");
    (app, sink)
}

fn last_report(sink: &RecordingSink) -> SampleReport {
    sink.events
        .iter()
        .rev()
        .find_map(|e| match e {
            AppEvent::Sample(r) => Some(*r),
            _ => None,
        })
        .expect("a sample was reported")
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_blanks_indicators_and_announces() {
    let mut hw = MockHardware::new();
    let (app, sink) = make_app(&mut hw);
    assert_eq!(hw.calls, vec![IndicatorCall::AllOff]);
    assert_eq!(sink.events, vec![AppEvent::Started]);
    assert_eq!(app.shown(), None);
}

#[test]
fn failed_init_emits_nothing() {
    let mut hw = MockHardware::new();
    hw.fail_init = true;
    let mut app = MonitorService::new(&SystemConfig::default());
    let mut sink = RecordingSink::new();
    assert!(app.start(&mut hw, &mut sink).is_err());
    assert!(sink.events.is_empty());
    assert!(hw.calls.is_empty());
}

// ── Scheduling ────────────────────────────────────────────────

#[test]
fn samples_every_interval_only() {
    let mut hw = MockHardware::new();
    let (mut app, mut sink) = make_app(&mut hw);

    let mut now = 0;
    let mut cycles = 0;
    while now <= 9_500 {
        if app.poll(now, &mut hw, &mut sink) != CycleOutcome::Idle {
            cycles += 1;
        }
        now += 10;
    }
    // Due at 3000, 6000, 9000.
    assert_eq!(cycles, 3);
    assert_eq!(hw.reads, 3);
    assert_eq!(last_report(&sink).timestamp_ms, 9000);
}

#[test]
fn no_catch_up_after_stall() {
    let mut hw = MockHardware::new();
    let (mut app, mut sink) = make_app(&mut hw);
    assert_ne!(app.poll(20_000, &mut hw, &mut sink), CycleOutcome::Idle);
    assert_eq!(app.poll(20_010, &mut hw, &mut sink), CycleOutcome::Idle);
    assert_eq!(app.poll(22_999, &mut hw, &mut sink), CycleOutcome::Idle);
    assert_ne!(app.poll(23_000, &mut hw, &mut sink), CycleOutcome::Idle);
}

// ── Evaluation → indicators ───────────────────────────────────

#[test]
fn comfortable_reading_lights_green() {
    let mut hw = MockHardware::new();
    hw.push(70.0, 45.0, 700);
    let (mut app, mut sink) = make_app(&mut hw);

    assert_eq!(
        app.poll(3000, &mut hw, &mut sink),
        CycleOutcome::ReportedOk { alert: false }
    );
    assert_eq!(hw.lit(), Some(false));
    let r = last_report(&sink);
    assert_eq!(r.recommendation, Recommendation::StayOpen);
    assert_eq!(r.flags, AlertFlags::NONE);
    assert_eq!(r.timestamp_ms, 3000);
}

#[test]
fn each_threshold_alone_lights_red() {
    let cases = [
        (59.9, 45.0, 700, AlertFlags::TEMP_LOW),
        (78.1, 45.0, 700, AlertFlags::TEMP_HIGH),
        (70.0, 70.1, 700, AlertFlags::HUMIDITY_HIGH),
        (70.0, 45.0, 499, AlertFlags::AIR_POOR),
    ];
    for (t, h, aq, flag) in cases {
        let mut hw = MockHardware::new();
        hw.push(t, h, aq);
        let (mut app, mut sink) = make_app(&mut hw);
        assert_eq!(
            app.poll(3000, &mut hw, &mut sink),
            CycleOutcome::ReportedOk { alert: true },
            "T={t} H={h} AQ={aq}"
        );
        assert_eq!(hw.lit(), Some(true));
        let r = last_report(&sink);
        assert_eq!(r.flags, flag);
        assert_eq!(r.recommendation, Recommendation::CloseWindow);
    }
}

#[test]
fn exact_limits_are_acceptable() {
    for (t, h, aq) in [(60.0, 70.0, 500), (78.0, 70.0, 500)] {
        let mut hw = MockHardware::new();
        hw.push(t, h, aq);
        let (mut app, mut sink) = make_app(&mut hw);
        assert_eq!(
            app.poll(3000, &mut hw, &mut sink),
            CycleOutcome::ReportedOk { alert: false }
        );
    }
}

#[test]
fn indicators_switch_back_when_conditions_recover() {
    let mut hw = MockHardware::new();
    hw.push(85.0, 45.0, 700).push(70.0, 45.0, 700);
    let (mut app, mut sink) = make_app(&mut hw);

    app.poll(3000, &mut hw, &mut sink);
    assert_eq!(app.shown(), Some(Recommendation::CloseWindow));
    app.poll(6000, &mut hw, &mut sink);
    assert_eq!(app.shown(), Some(Recommendation::StayOpen));
    assert_eq!(
        hw.calls,
        vec![
            IndicatorCall::AllOff,
            IndicatorCall::SetAlert(true),
            IndicatorCall::SetAlert(false),
        ]
    );
}

// ── Invalid readings ──────────────────────────────────────────

#[test]
fn nan_skips_cycle_and_keeps_indicators() {
    let mut hw = MockHardware::new();
    hw.push(85.0, 45.0, 700).push(f32::NAN, 45.0, 700);
    let (mut app, mut sink) = make_app(&mut hw);

    app.poll(3000, &mut hw, &mut sink);
    let calls_before = hw.calls.len();

    assert_eq!(
        app.poll(6000, &mut hw, &mut sink),
        CycleOutcome::ReportedError
    );
    assert_eq!(hw.calls.len(), calls_before);
    assert_eq!(hw.lit(), Some(true));
    assert_eq!(app.shown(), Some(Recommendation::CloseWindow));
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::SensorReadFailed { timestamp_ms: 6000 })
    );
}

#[test]
fn nan_humidity_alone_is_invalid() {
    let mut hw = MockHardware::new();
    hw.push(70.0, f32::NAN, 700);
    let (mut app, mut sink) = make_app(&mut hw);
    assert_eq!(
        app.poll(3000, &mut hw, &mut sink),
        CycleOutcome::ReportedError
    );
    assert_eq!(hw.lit(), None);
    assert_eq!(app.shown(), None);
}

#[test]
fn failure_streak_resets_on_success() {
    let mut hw = MockHardware::new();
    hw.push(f32::NAN, f32::NAN, 700)
        .push(f32::NAN, f32::NAN, 700)
        .push(70.0, 45.0, 700);
    let (mut app, mut sink) = make_app(&mut hw);

    for now in [3000, 6000, 9000] {
        app.poll(now, &mut hw, &mut sink);
    }
    let stats = app.stats();
    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.failed_reads, 2);
    assert_eq!(stats.reports, 1);
    assert_eq!(stats.failure_streak, 0);
    assert_eq!(stats.worst_failure_streak, 2);
}

// ── Clock wrap ────────────────────────────────────────────────

#[test]
fn keeps_sampling_across_millis_wrap() {
    let mut hw = MockHardware::new();
    let (mut app, mut sink) = make_app(&mut hw);

    let before_wrap = u32::MAX - 1000;
    assert_ne!(app.poll(before_wrap, &mut hw, &mut sink), CycleOutcome::Idle);
    let after_wrap = before_wrap.wrapping_add(3000);
    assert!(after_wrap < before_wrap);
    assert_eq!(app.poll(after_wrap - 1, &mut hw, &mut sink), CycleOutcome::Idle);
    assert_ne!(app.poll(after_wrap, &mut hw, &mut sink), CycleOutcome::Idle);
}
