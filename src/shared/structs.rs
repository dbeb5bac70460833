/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;

/***************************************/
/*             Constants               */
/***************************************/
pub type Floor = u8;
pub type PassengerId = u64;

/// Highest floor of the building. Floors are numbered from 0.
pub const MAX_FLOOR: Floor = 10;

/// Largest fleet the building can hold.
pub const MAX_ELEVATORS: usize = 16;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Travel state of an elevator. `Idle` means the destination queue is empty.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    /// Direction an elevator at `from` must travel to reach `to`.
    pub fn toward(from: Floor, to: Floor) -> Direction {
        if to > from {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Floor reached after moving one floor in this direction.
    pub fn step(self, floor: Floor) -> Floor {
        match self {
            Direction::Up => {
                debug_assert!(floor < MAX_FLOOR, "moving up from the top floor");
                floor + 1
            }
            Direction::Down => {
                debug_assert!(floor > 0, "moving down from the ground floor");
                floor - 1
            }
            Direction::Idle => floor,
        }
    }
}

/**
 * A request for an elevator to stop at a floor.
 *
 * - `HallUp` / `HallDown`: pressed by a waiting passenger on a floor, carries the
 *    direction the passenger wants to travel.
 * - `Cab`: pressed by a passenger already aboard. It has no preferred direction
 *    and fits whichever sweep the elevator is on.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    HallUp,
    HallDown,
    Cab,
}

impl Call {
    /// Hall call for a passenger waiting at `origin` who wants to reach `destination`.
    pub fn hall(origin: Floor, destination: Floor) -> Call {
        if destination > origin {
            Call::HallUp
        } else {
            Call::HallDown
        }
    }

    /// Travel direction requested by the call, `Idle` for cab calls.
    pub fn direction(self) -> Direction {
        match self {
            Call::HallUp => Direction::Up,
            Call::HallDown => Direction::Down,
            Call::Cab => Direction::Idle,
        }
    }

    /// Whether the call can be served as part of a sweep in `sweep` direction.
    pub fn accepts(self, sweep: Direction) -> bool {
        match self {
            Call::Cab => true,
            hall => hall.direction() == sweep,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    pub id: PassengerId,
    pub desired_floor: Floor,
}

impl Passenger {
    pub fn new(id: PassengerId, desired_floor: Floor) -> Passenger {
        Passenger { id, desired_floor }
    }
}
