use super::*;

#[test]
fn holds_for_the_rest_of_the_minimum() {
    let timing = LoaderTiming {
        fallback_ms: 3000,
        min_display_ms: 1200,
    };
    assert_eq!(timing.remaining_display_ms(0), 1200);
    assert_eq!(timing.remaining_display_ms(450), 750);
    assert_eq!(timing.remaining_display_ms(1200), 0);
    assert_eq!(timing.remaining_display_ms(2999), 0);
}

#[test]
fn defaults_match_first_visit_timing() {
    let timing = LoaderTiming::default();
    assert_eq!(timing.fallback_ms, 3000);
    assert_eq!(timing.min_display_ms, 1200);
    assert_eq!(timing.remaining_display_ms(3000), 0);
}
