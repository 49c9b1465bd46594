use crate::{Clock, ManualClock};

use std::time::Duration;

#[test]
fn test_manual_clock_only_moves_when_advanced() {
    let clock = ManualClock::new();
    let start = clock.now();

    assert_eq!(clock.now(), start);

    clock.advance(Duration::from_secs(5));
    clock.advance(Duration::from_millis(250));

    assert_eq!(clock.now() - start, Duration::from_millis(5250));
}
