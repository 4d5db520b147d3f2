//! Authorization selection rules: priority dominance, direction
//! preference, loading-time and id tie-breaks, and the fallback order.

use crossing_sim::simulation::scheduler::select_next;
use crossing_sim::simulation::{
    Direction, DirectionPreference, Priority, QueueSet, Train, TrainId,
};

fn train(id: usize, direction: Direction, priority: Priority, loading: u64) -> Train {
    Train::new(TrainId(id), direction, priority, loading, 3)
}

fn queues_of(trains: &[Train]) -> QueueSet {
    let mut queues = QueueSet::new();
    for t in trains {
        queues.enqueue(*t);
    }
    queues
}

#[test]
fn test_all_empty_selects_none() {
    let queues = QueueSet::new();
    assert_eq!(select_next(&queues, DirectionPreference::Either), None);
}

#[test]
fn test_high_priority_dominates_low() {
    // The low train loads much faster, but the high tier always wins.
    let queues = queues_of(&[
        train(0, Direction::East, Priority::High, 9),
        train(1, Direction::East, Priority::Low, 1),
    ]);
    assert_eq!(
        select_next(&queues, DirectionPreference::Either),
        Some(TrainId(0))
    );
}

#[test]
fn test_shorter_loading_time_wins_within_tier() {
    let queues = queues_of(&[
        train(0, Direction::East, Priority::High, 7),
        train(1, Direction::West, Priority::High, 4),
    ]);
    assert_eq!(
        select_next(&queues, DirectionPreference::Either),
        Some(TrainId(1))
    );
}

#[test]
fn test_loading_tie_broken_by_smaller_id() {
    let queues = queues_of(&[
        train(5, Direction::East, Priority::High, 5),
        train(2, Direction::West, Priority::High, 5),
    ]);
    assert_eq!(
        select_next(&queues, DirectionPreference::Either),
        Some(TrainId(2))
    );
}

#[test]
fn test_preference_filters_within_tier() {
    let queues = queues_of(&[
        train(0, Direction::East, Priority::High, 1),
        train(1, Direction::West, Priority::High, 9),
    ]);
    // East loads faster, but only the westbound train matches.
    assert_eq!(
        select_next(&queues, Direction::West.into()),
        Some(TrainId(1))
    );
}

#[test]
fn test_low_tier_serves_preference_high_cannot_satisfy() {
    // High tier has only a westbound train; a low eastbound train matches
    // the preference and goes before any fallback applies.
    let queues = queues_of(&[
        train(0, Direction::West, Priority::High, 5),
        train(1, Direction::East, Priority::Low, 5),
    ]);
    assert_eq!(
        select_next(&queues, Direction::East.into()),
        Some(TrainId(1))
    );
}

#[test]
fn test_fallback_ignores_direction_when_nothing_matches() {
    // Only low eastbound trains anywhere, preference is West: the head
    // low-east train is authorized rather than leaving the track idle.
    let queues = queues_of(&[
        train(0, Direction::East, Priority::Low, 5),
        train(1, Direction::East, Priority::Low, 2),
    ]);
    assert_eq!(
        select_next(&queues, Direction::West.into()),
        Some(TrainId(0))
    );
}

#[test]
fn test_fallback_uses_fixed_queue_order() {
    // Nothing matches East; the fallback takes the head of the first
    // non-empty queue in high-east, high-west, low-east, low-west order.
    let queues = queues_of(&[
        train(3, Direction::West, Priority::Low, 1),
        train(1, Direction::West, Priority::High, 9),
    ]);
    assert_eq!(
        select_next(&queues, Direction::East.into()),
        Some(TrainId(1))
    );
}

#[test]
fn test_four_ready_trains_pick_high_tier_by_id() {
    let queues = queues_of(&[
        train(0, Direction::East, Priority::High, 5),
        train(1, Direction::West, Priority::High, 5),
        train(2, Direction::East, Priority::Low, 5),
        train(3, Direction::West, Priority::Low, 5),
    ]);
    assert_eq!(
        select_next(&queues, DirectionPreference::Either),
        Some(TrainId(0))
    );
}
