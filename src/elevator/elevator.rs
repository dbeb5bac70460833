/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::collections::BTreeMap;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::queue::insertion_index;
use crate::shared::{Call, Direction, Floor, Passenger, WaitingRegistry, MAX_FLOOR};

/**
 * A single elevator car.
 *
 * The car keeps an ordered queue of floors to visit and moves one floor per step toward the
 * head of that queue. New stops lying ahead in the current sweep are slotted into the sweep
 * (see `insertion_index`), everything else waits behind it.
 *
 * # Fields
 * - `id`:              1-based id, fixed for the lifetime of the simulation.
 * - `current_floor`:   Floor the car is at.
 * - `direction`:       Toward the head of `destinations`, `Idle` when the queue is empty.
 * - `destinations`:    Floors still to visit, no duplicates.
 * - `aboard`:          Passengers in the car, keyed by the floor they get off at.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    id: u8,
    current_floor: Floor,
    direction: Direction,
    destinations: Vec<Floor>,
    aboard: BTreeMap<Floor, Vec<Passenger>>,
}

/// Passengers that got on and off during one step.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StepReport {
    pub boarded: Vec<Passenger>,
    pub delivered: Vec<Passenger>,
}

impl Elevator {
    pub fn new(id: u8) -> Elevator {
        Elevator {
            id,
            current_floor: 0,
            direction: Direction::Idle,
            destinations: Vec::new(),
            aboard: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn destinations(&self) -> &[Floor] {
        &self.destinations
    }

    pub fn has_destination(&self, floor: Floor) -> bool {
        self.destinations.contains(&floor)
    }

    /// Parked with nothing to do.
    pub fn is_idle(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn passengers_aboard(&self) -> usize {
        self.aboard.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.aboard.values().flatten()
    }

    /// Takes a passenger into the car. The caller is responsible for queueing their floor.
    pub fn board(&mut self, passenger: Passenger) {
        self.aboard
            .entry(passenger.desired_floor)
            .or_default()
            .push(passenger);
    }

    /// Queues a stop at `floor` for the given call.
    pub fn insert_destination(&mut self, floor: Floor, call: Call) {
        debug_assert!(floor <= MAX_FLOOR, "floor {} out of range", floor);

        if self.has_destination(floor) {
            return;
        }

        if self.destinations.is_empty() {
            self.destinations.push(floor);
            self.direction = Direction::toward(self.current_floor, floor);
            debug!("Elevator {}: new destination {} ({:?})", self.id, floor, call);
            return;
        }

        let ahead = match self.direction {
            Direction::Up => floor > self.current_floor,
            Direction::Down => floor < self.current_floor,
            Direction::Idle => false,
        };

        if ahead && call.accepts(self.direction) {
            let index = insertion_index(&self.destinations, floor, self.direction);
            self.destinations.insert(index, floor);
        } else {
            self.destinations.push(floor);
            self.point_at_head();
        }

        debug!(
            "Elevator {}: queued {} ({:?}), destinations {:?}",
            self.id, floor, call, self.destinations
        );
    }

    /**
     * Moves the car one floor and handles arrivals.
     *
     * On reaching the head of the queue, everyone waiting there boards and their floors are
     * queued as cab calls. Passengers whose floor this is get off. A head with nobody left to
     * serve is dropped so the car cannot get stuck on it.
     */
    pub fn advance_one_floor(&mut self, waiting: &mut WaitingRegistry) -> StepReport {
        let mut report = StepReport::default();
        if self.direction == Direction::Idle {
            return report;
        }

        self.current_floor = self.direction.step(self.current_floor);
        let floor = self.current_floor;

        if self.head() == Some(floor) && waiting.has_waiting(floor) {
            self.remove_destination(floor);
            for passenger in waiting.take(floor) {
                self.board(passenger);
                self.insert_destination(passenger.desired_floor, Call::Cab);
                report.boarded.push(passenger);
            }
            info!(
                "Elevator {} picked up {} passenger(s) at floor {}",
                self.id,
                report.boarded.len(),
                floor
            );
        }

        if let Some(leaving) = self.aboard.get_mut(&floor).filter(|p| !p.is_empty()) {
            report.delivered = std::mem::take(leaving);
            self.remove_destination(floor);
            info!(
                "Elevator {} dropped off {} passenger(s) at floor {}",
                self.id,
                report.delivered.len(),
                floor
            );
        }

        if self.head() == Some(floor) && !waiting.has_waiting(floor) {
            self.destinations.remove(0);
        }

        self.point_at_head();
        report
    }

    fn head(&self) -> Option<Floor> {
        self.destinations.first().copied()
    }

    fn remove_destination(&mut self, floor: Floor) {
        self.destinations.retain(|&queued| queued != floor);
    }

    fn point_at_head(&mut self) {
        self.direction = match self.head() {
            Some(head) => Direction::toward(self.current_floor, head),
            None => Direction::Idle,
        };
    }
}
