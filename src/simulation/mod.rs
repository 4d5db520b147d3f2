//! Core crossing simulation
//!
//! This module contains all the scheduling and synchronization logic: the
//! simulated clock, the four directional priority queues, the authorization
//! scheduler, the track coordinator, and the per-train actor. It has no
//! I/O of its own and can be driven entirely from tests.

mod clock;
mod events;
mod queue;
pub mod scheduler;
mod track;
mod train;
mod types;
mod world;

pub use clock::{ClockHandle, SimClock};
pub use events::{format_tick, EventKind, TrainEvent};
pub use queue::{QueueSet, TrainQueue, QUEUE_ORDER};
pub use track::TrackCoordinator;
pub use train::run_train;
pub use types::{
    Direction, DirectionPreference, Priority, Tick, Train, TrainId, DEFAULT_TICK_INTERVAL,
    TICKS_PER_SECOND,
};
pub use world::{SimConfig, Simulation, SimulationReport};
