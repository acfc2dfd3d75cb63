use super::*;

const RED: RgbColor = RgbColor::new(255, 0, 0);
const TEAL: RgbColor = RgbColor::new(10, 20, 30);

#[test]
fn disabled_never_paints() {
    let mut blink = Blink::disabled();

    assert_eq!(blink.initial_paint(), Some(Paint::Restore));
    for now in [0, 1, 250, 1_000, u32::MAX] {
        assert_eq!(blink.tick(now), None);
    }
    assert!(!blink.is_active());
}

#[test]
fn periodic_cycles_on_then_off() {
    let mut blink = Blink::periodic(TEAL, 250, 250, 0);
    assert_eq!(blink.initial_paint(), None);

    assert_eq!(blink.tick(0), Some(Paint::Show(TEAL)));
    assert_eq!(blink.tick(125), None);
    assert_eq!(blink.mode(), BlinkMode::On);

    assert_eq!(blink.tick(250), Some(Paint::Restore));
    assert_eq!(blink.tick(375), None);
    assert_eq!(blink.mode(), BlinkMode::Off);

    assert_eq!(blink.tick(500), Some(Paint::Show(TEAL)));
    assert_eq!(blink.tick(750), Some(Paint::Restore));
}

#[test]
fn periodic_counts_from_anchor() {
    let mut blink = Blink::periodic(TEAL, 1_000, 1_000, 5_000);

    assert_eq!(blink.tick(5_000), Some(Paint::Show(TEAL)));
    assert_eq!(blink.tick(5_999), None);
    assert_eq!(blink.tick(6_000), Some(Paint::Restore));
    assert_eq!(blink.tick(7_001), Some(Paint::Show(TEAL)));
}

#[test]
fn periodic_survives_tick_wrap() {
    let start = u32::MAX - 100;
    let mut blink = Blink::periodic(TEAL, 250, 250, start);

    assert_eq!(blink.tick(start), Some(Paint::Show(TEAL)));
    assert_eq!(blink.tick(start.wrapping_add(260)), Some(Paint::Restore));
    assert_eq!(blink.tick(start.wrapping_add(510)), Some(Paint::Show(TEAL)));
}

#[test]
fn single_shot_restores_once() {
    let mut blink = Blink::single(RED, 1_000, 1_000, 0);
    assert_eq!(blink.initial_paint(), Some(Paint::Show(RED)));

    assert_eq!(blink.tick(999), None);
    assert_eq!(blink.mode(), BlinkMode::Single);

    assert_eq!(blink.tick(1_001), Some(Paint::Restore));
    assert_eq!(blink.mode(), BlinkMode::Disabled);

    assert_eq!(blink.tick(2_000), None);
    assert_eq!(blink.tick(2_500), None);
    assert_eq!(blink.tick(100_000), None);
}

#[test]
fn zero_period_does_not_divide() {
    let mut blink = Blink::periodic(TEAL, 0, 0, 0);

    assert_eq!(blink.tick(0), None);
    assert_eq!(blink.tick(12_345), None);
}

#[test]
fn zero_on_time_stays_dark() {
    let mut blink = Blink::periodic(TEAL, 0, 500, 0);

    assert_eq!(blink.tick(0), None);
    assert_eq!(blink.tick(499), None);
    assert_eq!(blink.mode(), BlinkMode::Off);
}
