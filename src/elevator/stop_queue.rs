/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;

/**
 * Pending floor requests, kept in ascending order.
 *
 * The ordering only exists so the car can search one side of its current
 * height. It is not a priority order.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopQueue {
    floors: BTreeSet<i32>,
}

impl StopQueue {
    pub fn new() -> StopQueue {
        StopQueue {
            floors: BTreeSet::new(),
        }
    }

    /// Returns false if the floor was already queued.
    pub fn insert(&mut self, floor: i32) -> bool {
        self.floors.insert(floor)
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn pop_lowest(&mut self) -> Option<i32> {
        self.floors.pop_first()
    }

    /// Removes and returns the lowest floor strictly above `height`.
    pub fn pop_above(&mut self, height: f64) -> Option<i32> {
        let floor = self
            .floors
            .iter()
            .copied()
            .find(|&f| f64::from(f) > height)?;
        self.floors.remove(&floor);
        Some(floor)
    }

    /// Removes and returns the highest floor strictly below `height`.
    pub fn pop_below(&mut self, height: f64) -> Option<i32> {
        let floor = self
            .floors
            .iter()
            .rev()
            .copied()
            .find(|&f| f64::from(f) < height)?;
        self.floors.remove(&floor);
        Some(floor)
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.floors.iter().copied().collect()
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
