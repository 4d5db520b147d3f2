//! Waiting queues for trains that have finished loading
//!
//! Four FIFO queues keyed by priority and direction. The queues themselves
//! are not synchronized - every access goes through the track coordinator's
//! lock.

use std::collections::VecDeque;

use super::types::{Direction, Priority, Train, TrainId};

/// An ordered FIFO queue of trains waiting to depart
#[derive(Debug, Clone, Default)]
pub struct TrainQueue {
    trains: VecDeque<Train>,
}

impl TrainQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a train at the tail
    pub fn push_back(&mut self, train: Train) {
        self.trains.push_back(train);
    }

    /// Remove the train with the given id from any position.
    ///
    /// Returns `None` when no such train is queued; that is a normal result,
    /// not an error.
    pub fn remove(&mut self, id: TrainId) -> Option<Train> {
        let position = self.trains.iter().position(|t| t.id == id)?;
        self.trains.remove(position)
    }

    /// The train at the head, without removing it
    pub fn front(&self) -> Option<&Train> {
        self.trains.front()
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Train> {
        self.trains.iter()
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}

/// The fixed group of four directional priority queues
///
/// Slot order is the scheduler's fallback order: high-east, high-west,
/// low-east, low-west.
#[derive(Debug, Clone, Default)]
pub struct QueueSet {
    queues: [TrainQueue; 4],
}

/// (priority, direction) keys in fallback order
pub const QUEUE_ORDER: [(Priority, Direction); 4] = [
    (Priority::High, Direction::East),
    (Priority::High, Direction::West),
    (Priority::Low, Direction::East),
    (Priority::Low, Direction::West),
];

fn slot(priority: Priority, direction: Direction) -> usize {
    match (priority, direction) {
        (Priority::High, Direction::East) => 0,
        (Priority::High, Direction::West) => 1,
        (Priority::Low, Direction::East) => 2,
        (Priority::Low, Direction::West) => 3,
    }
}

impl QueueSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self, priority: Priority, direction: Direction) -> &TrainQueue {
        &self.queues[slot(priority, direction)]
    }

    pub fn queue_mut(&mut self, priority: Priority, direction: Direction) -> &mut TrainQueue {
        &mut self.queues[slot(priority, direction)]
    }

    /// Enqueue a train into the queue matching its own priority and direction
    pub fn enqueue(&mut self, train: Train) {
        self.queue_mut(train.priority, train.direction).push_back(train);
    }

    /// Remove `train` from the queue matching its priority and direction
    pub fn remove(&mut self, train: &Train) -> Option<Train> {
        self.queue_mut(train.priority, train.direction).remove(train.id)
    }

    /// Total number of waiting trains across all four queues
    pub fn total_len(&self) -> usize {
        self.queues.iter().map(TrainQueue::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(TrainQueue::is_empty)
    }
}
