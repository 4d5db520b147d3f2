//! Core types for the crossing simulation
//!
//! These are standalone types shared by every other simulation module.

use std::fmt;
use std::time::Duration;

/// One unit of simulated time.
///
/// A tick represents 0.1 seconds of simulated time; see [`TICKS_PER_SECOND`].
pub type Tick = u64;

/// Number of ticks in one second of simulated time
pub const TICKS_PER_SECOND: u64 = 10;

/// Default real-time duration of one tick (0.1 s, matching the simulated cadence)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// A unique identifier for a train
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainId(pub usize);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction a train travels across the shared track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::East => write!(f, "East"),
            Direction::West => write!(f, "West"),
        }
    }
}

/// Station priority of a train
///
/// High-priority trains always depart before low-priority ones when both
/// tiers have an eligible candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Low,
}

/// The direction the scheduler should favor for the next authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionPreference {
    /// Only trains going this direction are eligible (soft - the fallback
    /// rule still applies when no such train exists anywhere)
    Only(Direction),
    /// Any direction is eligible
    Either,
}

impl DirectionPreference {
    /// Whether a train going `direction` satisfies this preference
    pub fn admits(self, direction: Direction) -> bool {
        match self {
            DirectionPreference::Only(preferred) => preferred == direction,
            DirectionPreference::Either => true,
        }
    }
}

impl Default for DirectionPreference {
    fn default() -> Self {
        DirectionPreference::Either
    }
}

impl From<Direction> for DirectionPreference {
    fn from(direction: Direction) -> Self {
        DirectionPreference::Only(direction)
    }
}

/// A train in the crossing simulation
///
/// All attributes are fixed at roster-load time; `id` follows roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Train {
    pub id: TrainId,
    pub direction: Direction,
    pub priority: Priority,
    /// Ticks the train needs to load before it can request the track
    pub loading_time: Tick,
    /// Ticks the train occupies the track once it enters
    pub crossing_time: Tick,
}

impl Train {
    pub fn new(
        id: TrainId,
        direction: Direction,
        priority: Priority,
        loading_time: Tick,
        crossing_time: Tick,
    ) -> Self {
        Self {
            id,
            direction,
            priority,
            loading_time,
            crossing_time,
        }
    }
}
