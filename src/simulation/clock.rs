//! Simulated clock for the crossing simulation
//!
//! A process-wide monotonically increasing tick counter. A single background
//! thread derives the tick count from real elapsed time; every other actor
//! reads it lock-free.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::debug;

use super::types::Tick;

/// Read handle to the shared tick counter
///
/// Cheap to clone; all clones observe the same counter. The counter is
/// single-writer (the ticker thread), so reads need no lock.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    ticks: Arc<AtomicU64>,
}

impl SimClock {
    /// Create a clock at tick 0 with no ticker attached.
    ///
    /// Pair with [`ClockHandle::start`] for a real-time driven clock, or
    /// advance it manually with [`SimClock::advance_to`] as a virtual clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in ticks
    pub fn now(&self) -> Tick {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Move the counter forward to `tick`.
    ///
    /// Used by the ticker thread and by virtual-clock drivers; the counter
    /// never goes backwards.
    pub fn advance_to(&self, tick: Tick) {
        self.ticks.fetch_max(tick, Ordering::Relaxed);
    }
}

/// Owner of the background ticker thread
///
/// The ticker recomputes the tick count from wall-clock elapsed time once per
/// tick interval, so a delayed wakeup never loses ticks. It runs until
/// [`ClockHandle::stop`] is called, which happens only after all train
/// actors have finished.
pub struct ClockHandle {
    stop: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
}

impl ClockHandle {
    /// Spawn the ticker thread advancing `clock` every `tick_interval`
    pub fn start(clock: SimClock, tick_interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let ticker = thread::spawn(move || {
            let started = Instant::now();
            debug!("clock ticker started, interval {:?}", tick_interval);
            while !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(tick_interval);
                let elapsed = started.elapsed().as_nanos() / tick_interval.as_nanos();
                clock.advance_to(elapsed as Tick);
            }
            debug!("clock ticker stopped");
        });

        Self {
            stop,
            ticker: Some(ticker),
        }
    }

    /// Stop the ticker thread and wait for it to exit
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
    }
}
