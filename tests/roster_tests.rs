//! Roster parsing and generation

use crossing_sim::roster::{parse_roster, random_roster};
use crossing_sim::simulation::{Direction, Priority, TrainId};

#[test]
fn test_parse_assigns_ids_in_line_order() {
    let trains = parse_roster("E 5 3\nw 10 6\n\ne 2 2\n").unwrap();

    assert_eq!(trains.len(), 3);
    for (index, train) in trains.iter().enumerate() {
        assert_eq!(train.id, TrainId(index));
    }
    assert_eq!(trains[1].direction, Direction::West);
    assert_eq!(trains[1].loading_time, 10);
    assert_eq!(trains[1].crossing_time, 6);
}

#[test]
fn test_priority_follows_marker_case() {
    let trains = parse_roster("E 1 1\nW 1 1\ne 1 1\nw 1 1\n").unwrap();

    assert_eq!(trains[0].priority, Priority::High);
    assert_eq!(trains[1].priority, Priority::High);
    assert_eq!(trains[2].priority, Priority::Low);
    assert_eq!(trains[3].priority, Priority::Low);
    assert_eq!(trains[0].direction, Direction::East);
    assert_eq!(trains[3].direction, Direction::West);
}

#[test]
fn test_malformed_lines_are_rejected() {
    assert!(parse_roster("N 5 3\n").is_err());
    assert!(parse_roster("e five 3\n").is_err());
    assert!(parse_roster("e 5\n").is_err());
    assert!(parse_roster("e 5 3 9\n").is_err());
}

#[test]
fn test_empty_roster_is_valid() {
    assert!(parse_roster("").unwrap().is_empty());
    assert!(parse_roster("\n  \n").unwrap().is_empty());
}

#[test]
fn test_random_roster_is_reproducible() {
    let a = random_roster(20, 42);
    let b = random_roster(20, 42);
    let c = random_roster(20, 43);

    assert_eq!(a.len(), 20);
    assert_eq!(a, b);
    assert_ne!(a, c);
    for (index, train) in a.iter().enumerate() {
        assert_eq!(train.id, TrainId(index));
        assert!(train.loading_time >= 3);
        assert!(train.crossing_time >= 2);
    }
}
