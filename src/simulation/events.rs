//! Structured simulation events
//!
//! The core exposes its observable behavior as an ordered sequence of
//! timestamped events; rendering them is left to the consumer (the CLI
//! prints them, tests assert on them).

use std::fmt;

use super::types::{Direction, Tick, TrainId, TICKS_PER_SECOND};

/// What happened to a train
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Loading finished; the train is about to join its queue
    ReadyToDepart,
    /// The train was authorized and is now on the main track
    EnteredTrack,
    /// The train finished crossing and released the track
    ExitedTrack,
}

/// A timestamped life-cycle event for one train
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainEvent {
    pub tick: Tick,
    pub train: TrainId,
    pub direction: Direction,
    pub kind: EventKind,
}

impl TrainEvent {
    pub fn new(tick: Tick, train: TrainId, direction: Direction, kind: EventKind) -> Self {
        Self {
            tick,
            train,
            direction,
            kind,
        }
    }
}

impl fmt::Display for TrainEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Train {:2} ", format_tick(self.tick), self.train.0)?;
        match self.kind {
            EventKind::ReadyToDepart => write!(f, "is ready to go {}", self.direction),
            EventKind::EnteredTrack => {
                write!(f, "is ON the main track going {}", self.direction)
            }
            EventKind::ExitedTrack => {
                write!(f, "is OFF the main track after going {}", self.direction)
            }
        }
    }
}

/// Render a tick count as `HH:MM:SS.t` of simulated time
pub fn format_tick(tick: Tick) -> String {
    let seconds = tick / TICKS_PER_SECOND;
    let tenths = tick % TICKS_PER_SECOND;
    format!(
        "{:02}:{:02}:{:02}.{}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60,
        tenths
    )
}
