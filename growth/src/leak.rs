//! "Revenue leaking" counter: money left on the table while the page is open.
//!
//! [`LeakMeter`] is the pure accumulator. [`LeakTicker`] drives it on a tokio
//! interval for native hosts; the browser drives the same meter from a
//! `gloo` interval.

#[cfg(test)]
#[path = "leak_test.rs"]
mod leak_test;

/// Tick period of the counter.
pub const TICK_MILLIS: u64 = 100;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;
#[allow(clippy::cast_precision_loss)]
const TICKS_PER_SECOND: f64 = 1000.0 / TICK_MILLIS as f64;

/// Amount added per tick for a given annualized growth.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn per_tick(annual_growth: i64) -> f64 {
    annual_growth as f64 / SECONDS_PER_YEAR / TICKS_PER_SECOND
}

/// Accumulated leak for the current growth figure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LeakMeter {
    annual_growth: i64,
    lost: f64,
}

impl LeakMeter {
    #[must_use]
    pub fn new(annual_growth: i64) -> Self {
        Self { annual_growth, lost: 0.0 }
    }

    /// Adopt a new growth figure. A changed figure restarts the count from
    /// zero. Returns whether the meter should be ticking.
    pub fn sync(&mut self, annual_growth: i64) -> bool {
        if annual_growth != self.annual_growth {
            self.annual_growth = annual_growth;
            self.lost = 0.0;
        }
        self.is_running()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.annual_growth > 0
    }

    pub fn tick(&mut self) {
        if self.is_running() {
            self.lost += per_tick(self.annual_growth);
        }
    }

    #[must_use]
    pub fn lost(&self) -> f64 {
        self.lost
    }

    #[must_use]
    pub fn annual_growth(&self) -> i64 {
        self.annual_growth
    }

    /// Four-decimal dollar read-out, e.g. `$0.0034`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.4}", self.lost)
    }
}

#[cfg(feature = "native")]
pub use ticker::LeakTicker;

#[cfg(feature = "native")]
mod ticker {
    use std::time::Duration;

    use tokio::sync::watch;
    use tokio::task::JoinHandle;
    use tokio::time::{Instant, MissedTickBehavior};
    use tracing::debug;

    use super::{LeakMeter, TICK_MILLIS};

    /// A running leak counter. Dropping it stops the interval task.
    pub struct LeakTicker {
        rx: watch::Receiver<LeakMeter>,
        task: JoinHandle<()>,
    }

    impl LeakTicker {
        /// Spawn the interval task on the current tokio runtime.
        ///
        /// Returns `None` when `annual_growth <= 0`; nothing is spawned.
        #[must_use]
        pub fn start(annual_growth: i64) -> Option<Self> {
            let meter = LeakMeter::new(annual_growth);
            if !meter.is_running() {
                return None;
            }
            let (tx, rx) = watch::channel(meter);
            let period = Duration::from_millis(TICK_MILLIS);

            let task = tokio::spawn(async move {
                let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    interval.tick().await;
                    tx.send_modify(LeakMeter::tick);
                }
            });
            debug!(annual_growth, "leak ticker started");
            Some(Self { rx, task })
        }

        /// Latest meter value.
        #[must_use]
        pub fn meter(&self) -> LeakMeter {
            *self.rx.borrow()
        }

        /// Receiver that observes every tick.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<LeakMeter> {
            self.rx.clone()
        }
    }

    impl Drop for LeakTicker {
        fn drop(&mut self) {
            self.task.abort();
            debug!("leak ticker stopped");
        }
    }
}
