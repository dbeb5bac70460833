/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeMap;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::{Floor, Passenger};

/**
 * Passengers who have called an elevator but not boarded yet, keyed by the floor they wait on.
 *
 * The registry belongs to the dispatcher. Elevators borrow it mutably for the duration of a
 * single step so they can board everyone waiting on the floor they stop at.
 * An entry is created the first time someone waits on a floor and is kept (possibly empty)
 * afterwards.
 */
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WaitingRegistry {
    floors: BTreeMap<Floor, Vec<Passenger>>,
}

impl WaitingRegistry {
    pub fn new() -> WaitingRegistry {
        WaitingRegistry::default()
    }

    pub fn enqueue(&mut self, floor: Floor, passenger: Passenger) {
        self.floors.entry(floor).or_default().push(passenger);
    }

    /// Removes and returns everyone waiting at `floor`, leaving the entry empty.
    pub fn take(&mut self, floor: Floor) -> Vec<Passenger> {
        self.floors
            .get_mut(&floor)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn has_waiting(&self, floor: Floor) -> bool {
        self.floors.get(&floor).map_or(false, |waiting| !waiting.is_empty())
    }

    /// `(floor, count)` for every floor with at least one passenger waiting, lowest floor first.
    pub fn counts(&self) -> Vec<(Floor, usize)> {
        self.floors
            .iter()
            .filter(|(_, waiting)| !waiting.is_empty())
            .map(|(floor, waiting)| (*floor, waiting.len()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.floors.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.floors.values().flatten()
    }
}
