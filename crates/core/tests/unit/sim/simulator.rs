//! # Simulator Driver Tests
//!
//! `Simulator::run` against mocked and real tick sources.

use std::time::Duration;

use mipsviz_core::config::Config;
use mipsviz_core::pipeline::{ClockState, TickOutcome};
use mipsviz_core::sim::{
    FreeRunningTicker, IntervalTicker, RunOutcome, Simulator, StopReason, TickSource,
};
use pretty_assertions::assert_eq;

use crate::common::builder::*;
use crate::common::harness::{init_tracing, program};
use crate::common::mocks::MockTicker;

fn loaded(words: &[u32], config: Config) -> Simulator {
    init_tracing();
    let mut sim = Simulator::new(config);
    sim.load(program(words)).unwrap();
    sim
}

#[test]
fn runs_to_completion_pulling_one_tick_per_cycle() {
    let mut sim = loaded(&[lw(2, 0, 1), add(3, 2, 4)], Config::default());
    let mut source = MockTicker::new();
    let _ = source.expect_next_tick().times(7).return_const(true);

    let mut outcomes = Vec::new();
    let result = sim.run(&mut source, |_, o| outcomes.push(o)).unwrap();

    assert_eq!(
        result,
        RunOutcome {
            reason: StopReason::Finished,
            ticks: 7,
            cycle: 7,
        }
    );
    assert!(outcomes.contains(&TickOutcome::Bubble { cycle: 3, before: 1 }));
    assert_eq!(outcomes.last(), Some(&TickOutcome::Finished { cycle: 7 }));
}

#[test]
fn stops_when_source_is_exhausted() {
    let mut sim = loaded(&[add(3, 1, 2), NOP, NOP], Config::default());
    let mut remaining = 2;
    let mut source = MockTicker::new();
    let _ = source.expect_next_tick().times(3).returning(move || {
        remaining -= 1;
        remaining >= 0
    });

    let result = sim.run(&mut source, |_, _| {}).unwrap();
    assert_eq!(result.reason, StopReason::SourceExhausted);
    assert_eq!(result.ticks, 2);
    assert_eq!(result.cycle, 3);
    assert_eq!(sim.clock().state(), ClockState::Running);
}

#[test]
fn respects_tick_limit() {
    let mut config = Config::default();
    config.clock.max_ticks = Some(3);
    let mut sim = loaded(&[add(3, 1, 2), NOP, NOP], config);

    let result = sim.run(FreeRunningTicker, |_, _| {}).unwrap();
    assert_eq!(result.reason, StopReason::TickLimit);
    assert_eq!(result.ticks, 3);
    assert_eq!(sim.clock().current_cycle(), 4);

    let rest = sim.run(FreeRunningTicker, |_, _| {}).unwrap();
    assert_eq!(rest.reason, StopReason::TickLimit);
    assert_eq!(rest.ticks, 3);
    assert_eq!(rest.cycle, 7);
}

#[test]
fn paused_clock_returns_without_ticking() {
    let mut sim = loaded(&[NOP], Config::default());
    sim.clock_mut().pause().unwrap();
    let mut source = MockTicker::new();
    let _ = source.expect_next_tick().never();

    let result = sim.run(&mut source, |_, _| {}).unwrap();
    assert_eq!(result.reason, StopReason::Paused);
    assert_eq!(result.ticks, 0);
}

#[test]
fn observer_sees_every_tick() {
    let mut sim = loaded(&[NOP, NOP], Config::default());
    let mut cycles = Vec::new();
    let result = sim
        .run(FreeRunningTicker, |clock, _| cycles.push(clock.current_cycle()))
        .unwrap();

    assert_eq!(result.ticks, 6);
    assert_eq!(cycles, vec![2, 3, 4, 5, 6, 6]);
}

#[test]
fn run_while_idle_is_rejected() {
    init_tracing();
    let mut sim = Simulator::new(Config::default());
    let mut source = MockTicker::new();
    let _ = source.expect_next_tick().never();
    assert!(sim.run(&mut source, |_, _| {}).is_err());
}

#[test]
fn finished_clock_returns_immediately() {
    let mut sim = loaded(&[NOP], Config::default());
    let _ = sim.run(FreeRunningTicker, |_, _| {}).unwrap();

    let again = sim.run(FreeRunningTicker, |_, _| {}).unwrap();
    assert_eq!(again.reason, StopReason::Finished);
    assert_eq!(again.ticks, 0);
    assert_eq!(again.cycle, 5);
}

#[test]
fn snapshot_and_stats_follow_config() {
    let config = Config::from_json(r#"{ "display": { "register_names": "Abi" } }"#).unwrap();
    let mut sim = loaded(&[lw(2, 0, 1), add(3, 2, 4)], config);
    let _ = sim.run(FreeRunningTicker, |_, _| {}).unwrap();

    assert_eq!(sim.snapshot().instructions[1].text, "add $v1, $v0, $a0");
    let stats = sim.stats().unwrap();
    assert_eq!(stats.cycles, 7);
    assert_eq!(stats.stall_bubbles, 1);
}

#[test]
fn interval_ticker_always_ticks() {
    let mut ticker = IntervalTicker::from_millis(0);
    assert_eq!(ticker.interval(), Duration::ZERO);
    assert!(ticker.next_tick());

    let mut short = IntervalTicker::new(Duration::from_millis(1));
    assert!(short.next_tick());
}

#[test]
fn free_running_ticker_never_runs_dry() {
    let mut ticker = FreeRunningTicker;
    assert!((0..100).all(|_| ticker.next_tick()));
}
