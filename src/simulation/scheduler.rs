//! Authorization selection: which train may use the track next
//!
//! Pure logic over the queue set and the current direction preference; the
//! track coordinator calls this under its lock after every departure and
//! every arrival.

use super::queue::{QueueSet, TrainQueue, QUEUE_ORDER};
use super::types::{Direction, DirectionPreference, Priority, Train, TrainId};

/// Choose the single train authorized to occupy the track next.
///
/// High priority strictly dominates low priority. Within a tier, the
/// head-most train in each direction queue that satisfies `preferred` is a
/// candidate; the candidate with the shorter loading time wins, ties broken
/// by smaller id. When no queue anywhere holds a direction-matching train,
/// the head of the first non-empty queue in fixed order (high-east,
/// high-west, low-east, low-west) is taken instead, so the track never sits
/// idle while trains wait. Returns `None` only when all four queues are
/// empty.
pub fn select_next(queues: &QueueSet, preferred: DirectionPreference) -> Option<TrainId> {
    if let Some(id) = select_in_tier(queues, Priority::High, preferred) {
        return Some(id);
    }
    if let Some(id) = select_in_tier(queues, Priority::Low, preferred) {
        return Some(id);
    }

    // No direction-matching candidate anywhere: strict priority fallback
    QUEUE_ORDER
        .iter()
        .find_map(|&(priority, direction)| queues.queue(priority, direction).front())
        .map(|train| train.id)
}

/// Pick between the two direction queues of one priority tier
fn select_in_tier(
    queues: &QueueSet,
    tier: Priority,
    preferred: DirectionPreference,
) -> Option<TrainId> {
    let east = first_matching(queues.queue(tier, Direction::East), preferred);
    let west = first_matching(queues.queue(tier, Direction::West), preferred);

    let winner = match (east, west) {
        (Some(e), Some(w)) => {
            if (e.loading_time, e.id.0) <= (w.loading_time, w.id.0) {
                e
            } else {
                w
            }
        }
        (Some(e), None) => e,
        (None, Some(w)) => w,
        (None, None) => return None,
    };
    Some(winner.id)
}

/// Head-most train in `queue` whose direction satisfies the preference.
///
/// Non-matching trains are skipped within this queue only; cross-queue order
/// is never altered.
fn first_matching(queue: &TrainQueue, preferred: DirectionPreference) -> Option<&Train> {
    queue.iter().find(|train| preferred.admits(train.direction))
}
