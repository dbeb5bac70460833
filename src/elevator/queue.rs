/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Floor};

/**
 * Finds where `floor` goes in a destination queue so the current sweep stays monotonic.
 *
 * The queue is scanned from the front. The new stop is placed before the first queued floor
 * that lies beyond it in the `sweep` direction, or right after the point where the queue turns
 * around, whichever comes first. Without either, the stop goes at the end.
 *
 * An `Idle` sweep has no order to keep, so the stop is appended.
 *
 * # Examples
 * Moving up with `[3, 7]`: floor 5 goes to index 1, floor 9 to index 2.
 * Moving up with `[4, 8, 2]`: floor 9 goes to index 2, before the reversal at 2.
 */
pub fn insertion_index(queue: &[Floor], floor: Floor, sweep: Direction) -> usize {
    let beyond = |queued: Floor| match sweep {
        Direction::Up => queued > floor,
        Direction::Down => queued < floor,
        Direction::Idle => false,
    };
    let reverses = |current: Floor, next: Floor| match sweep {
        Direction::Up => current > next,
        Direction::Down => current < next,
        Direction::Idle => false,
    };

    for (i, &queued) in queue.iter().enumerate() {
        if beyond(queued) {
            return i;
        }
        if let Some(&next) = queue.get(i + 1) {
            if reverses(queued, next) {
                return i + 1;
            }
        }
    }
    queue.len()
}
