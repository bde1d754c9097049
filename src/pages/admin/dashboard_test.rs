use super::*;

#[test]
fn bar_percent_scales_to_largest() {
    assert_eq!(bar_percent(5, 10), 50);
    assert_eq!(bar_percent(10, 10), 100);
    assert_eq!(bar_percent(3, 7), 42);
}

#[test]
fn bar_percent_handles_empty_lessons() {
    assert_eq!(bar_percent(0, 0), 0);
}
