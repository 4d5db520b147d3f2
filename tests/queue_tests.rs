//! Waiting-queue behavior: FIFO order, remove-by-id from any position,
//! and routing into the four directional priority queues.

use crossing_sim::simulation::{Direction, Priority, QueueSet, Train, TrainId, TrainQueue};

fn train(id: usize, direction: Direction, priority: Priority) -> Train {
    Train::new(TrainId(id), direction, priority, 5, 3)
}

#[test]
fn test_queue_preserves_arrival_order() {
    let mut queue = TrainQueue::new();
    for id in 0..3 {
        queue.push_back(train(id, Direction::East, Priority::Low));
    }

    assert_eq!(queue.len(), 3);
    let order: Vec<usize> = queue.iter().map(|t| t.id.0).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert_eq!(queue.front().map(|t| t.id), Some(TrainId(0)));
}

#[test]
fn test_remove_from_middle_keeps_order() {
    let mut queue = TrainQueue::new();
    for id in 0..3 {
        queue.push_back(train(id, Direction::West, Priority::High));
    }

    let removed = queue.remove(TrainId(1));
    assert_eq!(removed.map(|t| t.id), Some(TrainId(1)));

    let order: Vec<usize> = queue.iter().map(|t| t.id.0).collect();
    assert_eq!(order, vec![0, 2]);
}

#[test]
fn test_remove_missing_id_is_a_no_op() {
    let mut queue = TrainQueue::new();
    queue.push_back(train(0, Direction::East, Priority::Low));

    assert!(queue.remove(TrainId(7)).is_none());
    assert_eq!(queue.len(), 1);

    let mut empty = TrainQueue::new();
    assert!(empty.remove(TrainId(0)).is_none());
    assert!(empty.front().is_none());
}

#[test]
fn test_queue_set_routes_by_priority_and_direction() {
    let mut queues = QueueSet::new();
    let all = [
        train(0, Direction::East, Priority::High),
        train(1, Direction::West, Priority::High),
        train(2, Direction::East, Priority::Low),
        train(3, Direction::West, Priority::Low),
    ];
    for t in all {
        queues.enqueue(t);
    }

    assert_eq!(queues.total_len(), 4);
    for t in &all {
        assert_eq!(
            queues.queue(t.priority, t.direction).front().map(|q| q.id),
            Some(t.id)
        );
    }

    let removed = queues.remove(&all[2]);
    assert_eq!(removed.map(|t| t.id), Some(TrainId(2)));
    assert_eq!(queues.total_len(), 3);
    assert!(queues.queue(Priority::Low, Direction::East).is_empty());
    assert!(!queues.is_empty());
}
