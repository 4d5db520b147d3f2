//! Train actor life cycle
//!
//! One actor per train: load, join the waiting queue, block until
//! authorized, cross the track exclusively, release it. Loading and
//! crossing are waited out by polling the simulated clock at the tick
//! cadence; the authorization wait itself is condition-variable driven
//! inside the coordinator.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use super::clock::SimClock;
use super::track::TrackCoordinator;
use super::types::{Tick, Train};

/// Drive one train from creation to departure.
///
/// Runs on its own thread; the only fallible step is the crossing request,
/// whose failure signals a scheduling invariant violation and aborts the
/// whole run.
pub fn run_train(
    train: Train,
    clock: SimClock,
    coordinator: Arc<TrackCoordinator>,
    poll_interval: Duration,
) -> Result<()> {
    let start = clock.now();
    wait_until(&clock, start + train.loading_time, poll_interval);

    coordinator.announce_ready(train, clock.now());

    let entered = coordinator.request_crossing(&train, &clock)?;
    wait_until(&clock, entered + train.crossing_time, poll_interval);

    coordinator.release_crossing(&train, clock.now());
    Ok(())
}

/// Sleep in tick-sized steps until the simulated clock reaches `deadline`
fn wait_until(clock: &SimClock, deadline: Tick, poll_interval: Duration) {
    while clock.now() < deadline {
        thread::sleep(poll_interval);
    }
}
