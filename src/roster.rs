//! Roster loading for the crossing simulation
//!
//! A roster is a plain-text list of train descriptors, one per line:
//!
//! ```text
//! E 5 3
//! w 10 6
//! ```
//!
//! The first field is the direction marker (`e`/`w`); an uppercase marker
//! means the train departs from a high-priority station. The remaining two
//! fields are the loading time and the crossing time in ticks. Train ids
//! are assigned in line order. The core only ever sees validated [`Train`]
//! records produced here.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulation::{Direction, Priority, Train, TrainId};

/// Load and parse a roster file
pub fn load_roster(path: &Path) -> Result<Vec<Train>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to open roster file {}", path.display()))?;
    parse_roster(&contents).with_context(|| format!("invalid roster file {}", path.display()))
}

/// Parse roster text into trains, ids assigned in line order.
///
/// Blank lines are skipped; any other malformed line is an error. Rosters
/// may hold any number of trains.
pub fn parse_roster(input: &str) -> Result<Vec<Train>> {
    let mut trains = Vec::new();

    for (line_number, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let marker = fields
            .next()
            .with_context(|| format!("line {}: missing direction", line_number + 1))?;
        let (direction, priority) = parse_direction(marker)
            .with_context(|| format!("line {}: bad direction {:?}", line_number + 1, marker))?;

        let loading_time = parse_ticks(fields.next(), "loading time", line_number)?;
        let crossing_time = parse_ticks(fields.next(), "crossing time", line_number)?;

        if let Some(extra) = fields.next() {
            bail!("line {}: unexpected field {:?}", line_number + 1, extra);
        }

        trains.push(Train::new(
            TrainId(trains.len()),
            direction,
            priority,
            loading_time,
            crossing_time,
        ));
    }

    Ok(trains)
}

/// Generate a reproducible random roster of `count` trains
pub fn random_roster(count: usize, seed: u64) -> Vec<Train> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|id| {
            let direction = if rng.random_bool(0.5) {
                Direction::East
            } else {
                Direction::West
            };
            let priority = if rng.random_bool(0.5) {
                Priority::High
            } else {
                Priority::Low
            };
            Train::new(
                TrainId(id),
                direction,
                priority,
                rng.random_range(3..=20),
                rng.random_range(2..=10),
            )
        })
        .collect()
}

/// Direction marker: `e`/`w`, uppercase for a high-priority station
fn parse_direction(marker: &str) -> Result<(Direction, Priority)> {
    match marker {
        "E" => Ok((Direction::East, Priority::High)),
        "W" => Ok((Direction::West, Priority::High)),
        "e" => Ok((Direction::East, Priority::Low)),
        "w" => Ok((Direction::West, Priority::Low)),
        _ => bail!("expected one of E, W, e, w"),
    }
}

fn parse_ticks(field: Option<&str>, name: &str, line_number: usize) -> Result<u64> {
    field
        .with_context(|| format!("line {}: missing {}", line_number + 1, name))?
        .parse()
        .with_context(|| format!("line {}: {} is not a tick count", line_number + 1, name))
}
