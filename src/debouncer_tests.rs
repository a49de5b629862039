//! Tests for the trailing-edge debouncer

use super::*;
use proptest::prelude::*;

const DELAY_MS: u64 = 500;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Debouncer whose action records the label it was created with
fn labelled(label: &str) -> Debouncer<Vec<String>> {
    let mut debouncer = Debouncer::from_millis(DELAY_MS);
    let label = label.to_string();
    debouncer.set_action(move |fired: &mut Vec<String>| fired.push(label.clone()));
    debouncer
}

fn relabel(debouncer: &mut Debouncer<Vec<String>>, label: &str) {
    let label = label.to_string();
    debouncer.set_action(move |fired: &mut Vec<String>| fired.push(label.clone()));
}

#[test]
fn test_new_debouncer_is_idle() {
    let debouncer: Debouncer<()> = Debouncer::from_millis(DELAY_MS);
    assert!(!debouncer.is_pending());
    assert!(!debouncer.has_action());
    assert_eq!(debouncer.delay(), ms(DELAY_MS));
    assert_eq!(debouncer.time_until_fire(Instant::now()), None);
}

#[test]
fn test_does_not_fire_before_delay() {
    let start = Instant::now();
    let mut debouncer = labelled("a");
    let mut fired = Vec::new();

    debouncer.trigger_at(start);

    assert!(!debouncer.fire_due(start, &mut fired));
    assert!(!debouncer.fire_due(start + ms(DELAY_MS - 1), &mut fired));
    assert!(fired.is_empty());
    assert!(debouncer.is_pending());
}

#[test]
fn test_fires_once_after_delay() {
    let start = Instant::now();
    let mut debouncer = labelled("a");
    let mut fired = Vec::new();

    debouncer.trigger_at(start);

    assert!(debouncer.fire_due(start + ms(DELAY_MS), &mut fired));
    assert!(!debouncer.fire_due(start + ms(DELAY_MS * 3), &mut fired));
    assert_eq!(fired, vec!["a"]);
    assert!(!debouncer.is_pending());
}

#[test]
fn test_retrigger_restarts_quiet_period() {
    let start = Instant::now();
    let mut debouncer = labelled("a");
    let mut fired = Vec::new();

    debouncer.trigger_at(start);
    debouncer.trigger_at(start + ms(400));

    // The first schedule would have elapsed here, but it was replaced
    assert!(!debouncer.fire_due(start + ms(DELAY_MS), &mut fired));
    assert!(fired.is_empty());

    assert!(debouncer.fire_due(start + ms(400 + DELAY_MS), &mut fired));
    assert_eq!(fired.len(), 1);
}

#[test]
fn test_fire_uses_latest_action_not_action_at_schedule_time() {
    let start = Instant::now();
    let mut debouncer = labelled("Fra");
    let mut fired = Vec::new();

    debouncer.trigger_at(start);
    relabel(&mut debouncer, "France");

    assert!(debouncer.fire_due(start + ms(DELAY_MS), &mut fired));
    assert_eq!(fired, vec!["France"]);
}

#[test]
fn test_set_action_does_not_schedule() {
    let start = Instant::now();
    let mut debouncer = labelled("a");
    let mut fired = Vec::new();

    relabel(&mut debouncer, "b");

    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_due(start + ms(DELAY_MS * 10), &mut fired));
    assert!(fired.is_empty());
}

#[test]
fn test_cancel_drops_pending_schedule() {
    let start = Instant::now();
    let mut debouncer = labelled("a");
    let mut fired = Vec::new();

    debouncer.trigger_at(start);
    assert!(debouncer.cancel());
    assert!(!debouncer.cancel());

    assert!(!debouncer.fire_due(start + ms(DELAY_MS), &mut fired));
    assert!(fired.is_empty());
}

#[test]
fn test_fire_without_action_consumes_schedule() {
    let start = Instant::now();
    let mut debouncer: Debouncer<Vec<String>> = Debouncer::from_millis(DELAY_MS);
    let mut fired = Vec::new();

    debouncer.trigger_at(start);

    assert!(!debouncer.fire_due(start + ms(DELAY_MS), &mut fired));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_time_until_fire_counts_down_and_saturates() {
    let start = Instant::now();
    let mut debouncer = labelled("a");

    debouncer.trigger_at(start);

    assert_eq!(debouncer.time_until_fire(start), Some(ms(DELAY_MS)));
    assert_eq!(debouncer.time_until_fire(start + ms(200)), Some(ms(300)));
    assert_eq!(
        debouncer.time_until_fire(start + ms(DELAY_MS * 2)),
        Some(Duration::ZERO)
    );
}

#[test]
fn test_zero_delay_fires_on_next_poll() {
    let start = Instant::now();
    let mut debouncer: Debouncer<u32> = Debouncer::from_millis(0);
    debouncer.set_action(|count: &mut u32| *count += 1);
    let mut count = 0;

    debouncer.trigger_at(start);

    assert!(debouncer.fire_due(start, &mut count));
    assert_eq!(count, 1);
}

#[test]
fn test_debug_output_hides_closure() {
    let debouncer = labelled("a");
    let output = format!("{:?}", debouncer);
    assert!(output.contains("Debouncer"));
    assert!(output.contains("has_action: true"));
}

/// Drive a debouncer the way the event loop does: before each trigger the loop
/// gets a chance to fire, and a final poll long after the last trigger flushes
/// the trailing schedule.
fn simulate(gaps_ms: &[u64]) -> Vec<usize> {
    let start = Instant::now();
    let mut debouncer: Debouncer<Vec<usize>> = Debouncer::from_millis(DELAY_MS);
    let mut fired = Vec::new();
    let mut now = start;

    for (call, gap) in std::iter::once(&0).chain(gaps_ms.iter()).enumerate() {
        now += ms(*gap);
        debouncer.fire_due(now, &mut fired);
        debouncer.set_action(move |fired: &mut Vec<usize>| fired.push(call));
        debouncer.trigger_at(now);
    }

    debouncer.fire_due(now + ms(DELAY_MS), &mut fired);
    fired
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // A burst of calls closer together than the delay fires exactly once,
    // running the action registered by the last call in the burst.
    #[test]
    fn prop_burst_fires_once_with_latest_action(
        gaps in prop::collection::vec(0u64..DELAY_MS, 0..20)
    ) {
        let fired = simulate(&gaps);
        prop_assert_eq!(fired, vec![gaps.len()]);
    }

    // Calls spaced at least the delay apart each fire once, in order.
    #[test]
    fn prop_spaced_calls_fire_once_each(
        gaps in prop::collection::vec(DELAY_MS..DELAY_MS * 4, 0..20)
    ) {
        let fired = simulate(&gaps);
        let expected: Vec<usize> = (0..=gaps.len()).collect();
        prop_assert_eq!(fired, expected);
    }

    // Mixed spacing: one firing per quiet period, never two pending at once.
    #[test]
    fn prop_one_fire_per_quiet_period(
        gaps in prop::collection::vec(0u64..DELAY_MS * 2, 0..30)
    ) {
        let fired = simulate(&gaps);
        let quiet_periods = gaps.iter().filter(|gap| **gap >= DELAY_MS).count();
        prop_assert_eq!(fired.len(), quiet_periods + 1);
        prop_assert_eq!(fired.last().copied(), Some(gaps.len()));
    }
}
