#![allow(clippy::float_cmp)]

use super::*;

// One dollar per tick: 10 ticks/s over a 365-day year.
const DOLLAR_PER_TICK: i64 = 315_360_000;

#[test]
fn per_tick_matches_annual_rate() {
    assert_eq!(per_tick(DOLLAR_PER_TICK), 1.0);
    assert_eq!(per_tick(0), 0.0);
}

#[test]
fn meter_does_not_run_without_growth() {
    let mut meter = LeakMeter::new(0);
    assert!(!meter.sync(0));
    meter.tick();
    assert_eq!(meter.lost(), 0.0);

    assert!(!meter.sync(-500));
    meter.tick();
    assert_eq!(meter.lost(), 0.0);
}

#[test]
fn meter_accumulates_while_running() {
    let mut meter = LeakMeter::new(DOLLAR_PER_TICK);
    for _ in 0..3 {
        meter.tick();
    }
    assert_eq!(meter.lost(), 3.0);
    assert_eq!(meter.display(), "$3.0000");
}

#[test]
fn changed_growth_resets_count() {
    let mut meter = LeakMeter::new(DOLLAR_PER_TICK);
    meter.tick();
    assert!(meter.sync(DOLLAR_PER_TICK));
    assert_eq!(meter.lost(), 1.0);

    assert!(meter.sync(36_000));
    assert_eq!(meter.lost(), 0.0);
    assert_eq!(meter.annual_growth(), 36_000);
}

#[test]
fn display_uses_four_decimals() {
    let mut meter = LeakMeter::new(36_000);
    meter.tick();
    // 36000 / 31536000 / 10 = 0.000114...
    assert_eq!(meter.display(), "$0.0001");
}

#[cfg(feature = "native")]
mod ticker {
    use std::time::Duration;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticker_never_starts_without_growth() {
        assert!(LeakTicker::start(0).is_none());
        assert!(LeakTicker::start(-1).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_advances_every_tick() {
        let ticker = LeakTicker::start(DOLLAR_PER_TICK).unwrap();
        assert_eq!(ticker.meter().lost(), 0.0);

        tokio::time::sleep(Duration::from_millis(1_050)).await;
        assert_eq!(ticker.meter().lost(), 10.0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_ticker_stops_incrementing() {
        let ticker = LeakTicker::start(DOLLAR_PER_TICK).unwrap();
        let rx = ticker.subscribe();

        tokio::time::sleep(Duration::from_millis(550)).await;
        drop(ticker);
        tokio::task::yield_now().await;
        let frozen = rx.borrow().lost();
        assert_eq!(frozen, 5.0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(rx.borrow().lost(), frozen);
        assert!(rx.has_changed().is_err(), "sender should be gone once the task is aborted");
    }
}
