//! Track coordinator: exclusive access to the shared track
//!
//! One mutex guards the four waiting queues and every piece of crossing
//! state (occupancy, authorization, direction preference, departure
//! history, event log), so a scheduling decision always sees a consistent
//! snapshot. A condition variable wakes waiting trains whenever
//! authorization or occupancy changes. The simulated clock is deliberately
//! outside this lock.

use std::sync::{Condvar, Mutex, MutexGuard};

use anyhow::{bail, Result};
use log::{debug, info};

use super::clock::SimClock;
use super::events::{EventKind, TrainEvent};
use super::queue::QueueSet;
use super::scheduler;
use super::types::{Direction, DirectionPreference, Tick, Train, TrainId};

const LOCK_MSG: &str = "crossing state mutex poisoned";

/// Everything guarded by the coordinator's single lock
#[derive(Debug, Default)]
struct CrossingState {
    /// The four directional priority queues
    queues: QueueSet,
    /// True while a train is physically on the track
    occupied: bool,
    /// The single train currently permitted to enter the track
    authorized: Option<TrainId>,
    /// Direction the scheduler should favor for the next authorization
    preferred: DirectionPreference,
    /// Direction of the most recently departed train
    last_departed: Option<Direction>,
    /// Ordered log of everything observable that happened
    events: Vec<TrainEvent>,
}

impl CrossingState {
    /// Recompute the authorized train from the queues and the preference
    fn reschedule(&mut self) {
        self.authorized = scheduler::select_next(&self.queues, self.preferred);
        debug!(
            "rescheduled: authorized={:?} preferred={:?}",
            self.authorized, self.preferred
        );
    }

    fn record(&mut self, tick: Tick, train: &Train, kind: EventKind) {
        let event = TrainEvent::new(tick, train.id, train.direction, kind);
        info!("{}", event);
        self.events.push(event);
    }
}

/// The exclusive-resource gate in front of the shared track
///
/// At most one train occupies the track at a time. The coordinator owns the
/// authorization hand-off and the direction-alternation / starvation
/// policy.
#[derive(Debug, Default)]
pub struct TrackCoordinator {
    state: Mutex<CrossingState>,
    track_changed: Condvar,
}

impl TrackCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CrossingState> {
        self.state.lock().expect(LOCK_MSG)
    }

    /// A train finished loading: record it, queue it, and reschedule.
    ///
    /// A train that finds the whole system empty is authorized on the spot;
    /// otherwise the arrival may still change the optimal candidate (for
    /// example when the system was idle), so the scheduler is re-run and all
    /// waiters are re-evaluated.
    pub fn announce_ready(&self, train: Train, tick: Tick) {
        let mut state = self.lock();
        state.record(tick, &train, EventKind::ReadyToDepart);

        if state.queues.is_empty() {
            state.authorized = Some(train.id);
        }
        state.queues.enqueue(train);
        state.reschedule();

        self.track_changed.notify_all();
    }

    /// Block until this train may enter the track, then occupy it.
    ///
    /// Returns the tick at which the train entered. Entering atomically
    /// dequeues the train; an authorized train missing from its queue means
    /// the scheduling state is no longer trustworthy, which aborts the run.
    pub fn request_crossing(&self, train: &Train, clock: &SimClock) -> Result<Tick> {
        let mut state = self.lock();
        while state.occupied || state.authorized != Some(train.id) {
            state = self.track_changed.wait(state).expect(LOCK_MSG);
        }

        if state.queues.remove(train).is_none() {
            bail!(
                "invariant violation: train {} authorized but not found in its queue",
                train.id
            );
        }
        state.occupied = true;
        state.authorized = None;

        let tick = clock.now();
        state.record(tick, train, EventKind::EnteredTrack);
        Ok(tick)
    }

    /// A train finished crossing: release the track and hand it off.
    ///
    /// Under the one lock this updates the direction preference, applies the
    /// starvation override, reschedules, clears occupancy, and wakes every
    /// waiting train.
    pub fn release_crossing(&self, train: &Train, tick: Tick) {
        let mut state = self.lock();

        state.preferred = next_preference(&state.queues, train.direction);
        // Two consecutive departures in the same direction force a switch
        if state.last_departed == Some(train.direction) {
            state.preferred = train.direction.opposite().into();
        }
        state.last_departed = Some(train.direction);

        state.reschedule();
        state.occupied = false;
        state.record(tick, train, EventKind::ExitedTrack);

        self.track_changed.notify_all();
    }

    /// The train currently permitted to enter the track, if any
    pub fn authorized_train(&self) -> Option<TrainId> {
        self.lock().authorized
    }

    /// Whether a train is currently on the track
    pub fn is_occupied(&self) -> bool {
        self.lock().occupied
    }

    /// Snapshot of the event log in occurrence order
    pub fn events(&self) -> Vec<TrainEvent> {
        self.lock().events.clone()
    }
}

/// Direction preference after a departure in `departed` direction.
///
/// When both directions have contention in the governing tier - both
/// high-priority queues non-empty, or the high tier fully empty and both
/// low-priority queues non-empty - the opposite direction is favored to
/// balance load. Otherwise any direction may go next.
fn next_preference(queues: &QueueSet, departed: Direction) -> DirectionPreference {
    use super::types::Priority::{High, Low};

    let high_east = !queues.queue(High, Direction::East).is_empty();
    let high_west = !queues.queue(High, Direction::West).is_empty();
    let low_east = !queues.queue(Low, Direction::East).is_empty();
    let low_west = !queues.queue(Low, Direction::West).is_empty();

    let contention_both_ways =
        (high_east && high_west) || (!high_east && !high_west && low_east && low_west);

    if contention_both_ways {
        departed.opposite().into()
    } else {
        DirectionPreference::Either
    }
}
