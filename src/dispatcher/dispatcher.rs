/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{
    Call, Direction, Floor, Passenger, PassengerId, WaitingRegistry, MAX_ELEVATORS, MAX_FLOOR,
};

/**
 * Building-level controller for a bank of elevators.
 *
 * The dispatcher owns the fleet and the registry of passengers waiting on each floor. Hall
 * calls are routed to a single elevator, and `step` advances every elevator by one floor in
 * fleet order. Arguments are expected to be validated by the caller.
 *
 * # Fields
 * - `elevators`:           The fleet, in the order it is stepped and searched.
 * - `waiting`:             Passengers not yet picked up, keyed by origin floor.
 * - `next_passenger_id`:   Id handed to the next passenger created by `pickup`.
 * - `delivered`:           Passengers dropped off so far.
 */
#[derive(Debug)]
pub struct Dispatcher {
    elevators: Vec<Elevator>,
    waiting: WaitingRegistry,
    next_passenger_id: PassengerId,
    delivered: usize,
}

/// One line of the fleet status report.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElevatorStatus {
    pub id: u8,
    #[serde(rename = "currentFloor")]
    pub current_floor: Floor,
    pub direction: Direction,
    pub destinations: Vec<Floor>,
    #[serde(rename = "peopleInside")]
    pub people_inside: usize,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, current floor: {}, destination: {:?}, people inside: {}",
            self.id, self.current_floor, self.destinations, self.people_inside
        )
    }
}

impl From<&Elevator> for ElevatorStatus {
    fn from(elevator: &Elevator) -> Self {
        ElevatorStatus {
            id: elevator.id(),
            current_floor: elevator.current_floor(),
            direction: elevator.direction(),
            destinations: elevator.destinations().to_vec(),
            people_inside: elevator.passengers_aboard(),
        }
    }
}

impl Dispatcher {
    /// Creates a fleet of `n_elevators` idle elevators at the ground floor, numbered from 1.
    pub fn new(n_elevators: usize) -> Dispatcher {
        debug_assert!(
            (1..=MAX_ELEVATORS).contains(&n_elevators),
            "fleet size {} out of range",
            n_elevators
        );

        Dispatcher {
            elevators: (1..=n_elevators as u8).map(Elevator::new).collect(),
            waiting: WaitingRegistry::new(),
            next_passenger_id: 1,
            delivered: 0,
        }
    }

    #[cfg(test)]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn waiting(&self) -> &WaitingRegistry {
        &self.waiting
    }

    pub fn passengers_delivered(&self) -> usize {
        self.delivered
    }

    /**
     * Registers a passenger waiting at `origin` who wants to reach `destination` and assigns
     * an elevator to the call. Returns the id of the assigned elevator.
     *
     * An elevator already parked idle at `origin` takes the passenger aboard immediately.
     */
    pub fn pickup(&mut self, origin: Floor, destination: Floor) -> u8 {
        debug_assert!(origin <= MAX_FLOOR && destination <= MAX_FLOOR);
        debug_assert_ne!(origin, destination);

        let passenger = Passenger::new(self.next_passenger_id, destination);
        self.next_passenger_id += 1;
        self.waiting.enqueue(origin, passenger);

        let call = Call::hall(origin, destination);
        let index = self.select_elevator(origin, call);
        let elevator = &mut self.elevators[index];

        if elevator.current_floor() == origin && elevator.is_idle() {
            for boarding in self.waiting.take(origin) {
                elevator.insert_destination(boarding.desired_floor, Call::Cab);
                elevator.board(boarding);
            }
            info!(
                "Passenger {} boarded elevator {} at floor {}",
                passenger.id,
                elevator.id(),
                origin
            );
        } else {
            elevator.insert_destination(origin, call);
            info!(
                "Passenger {} waiting at floor {} for elevator {} ({:?})",
                passenger.id,
                origin,
                elevator.id(),
                call
            );
        }

        elevator.id()
    }

    /**
     * Picks the elevator to serve a hall call at `floor`. Returns its index in the fleet.
     *
     * In order of preference:
     * 1. An idle elevator parked at `floor`.
     * 2. An elevator that already has `floor` queued.
     * 3. The nearest elevator travelling in the call direction or idle, earliest in the fleet on ties.
     *
     * When no elevator qualifies, the first elevator of the fleet is chosen however far away it is.
     */
    pub fn select_elevator(&self, floor: Floor, call: Call) -> usize {
        if let Some(index) = self
            .elevators
            .iter()
            .position(|e| e.current_floor() == floor && e.is_idle())
        {
            debug!("Call at {}: elevator {} is parked there", floor, index + 1);
            return index;
        }

        if let Some(index) = self.elevators.iter().position(|e| e.has_destination(floor)) {
            debug!("Call at {}: elevator {} already stops there", floor, index + 1);
            return index;
        }

        let nearest = self
            .elevators
            .iter()
            .enumerate()
            .filter(|(_, e)| e.direction() == call.direction() || e.direction() == Direction::Idle)
            .min_by_key(|(_, e)| e.current_floor().abs_diff(floor))
            .map(|(index, _)| index);

        match nearest {
            Some(index) => {
                debug!("Call at {}: nearest compatible elevator is {}", floor, index + 1);
                index
            }
            None => {
                debug!("Call at {}: no compatible elevator, falling back to the first", floor);
                0
            }
        }
    }

    /// Advances every elevator by one floor, in fleet order.
    pub fn step(&mut self) {
        for elevator in self.elevators.iter_mut() {
            let report = elevator.advance_one_floor(&mut self.waiting);
            self.delivered += report.delivered.len();
        }
    }

    pub fn status(&self) -> Vec<ElevatorStatus> {
        self.elevators.iter().map(ElevatorStatus::from).collect()
    }

    /// `(floor, count)` for every floor where someone is waiting.
    pub fn where_are_waiting(&self) -> Vec<(Floor, usize)> {
        self.waiting.counts()
    }
}
