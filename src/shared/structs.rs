/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*             Constants               */
/***************************************/
/// Floor value a passenger reports while riding the car.
pub const IN_CAR: i32 = -1;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/**
 * Anything that can ride the car.
 *
 * The car never owns passengers. It only reads and writes their floor and
 * compares identifiers to decide occupancy.
 *
 * # Methods
 * - `current_floor`:       Floor the passenger stands on, or `IN_CAR` while riding.
 * - `desired_floor`:       Destination, fixed for the passenger's lifetime.
 * - `set_current_floor`:   Written by the car on boarding and exiting.
 * - `id`:                  Identifier used for occupancy checks.
 */
pub trait Passenger {
    fn current_floor(&self) -> i32;
    fn desired_floor(&self) -> i32;
    fn set_current_floor(&mut self, floor: i32);
    fn id(&self) -> &str;
}
