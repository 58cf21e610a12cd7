/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::error::CarError;
use crate::elevator::stop_queue::StopQueue;
use crate::shared::{Direction, Passenger, IN_CAR};

/***************************************/
/*             Constants               */
/***************************************/
pub const DEFAULT_SPEED: f64 = 0.5;
const HOME_FLOOR: i32 = 0;

/**
 * A single elevator car driven one tick at a time.
 *
 * The car holds both its physical state and the scheduling state. Requests are
 * served with a LOOK discipline: keep going in the current direction while
 * there are stops on that side, then turn around.
 *
 * # Fields
 * - `height`:          Continuous position, always within `[0, max_floor]`.
 * - `doors_open`:      True only on ticks where the car stands at its target.
 * - `direction`:       Side of the car that is searched first for the next stop.
 * - `target_floor`:    Floor the car is travelling to. Never present in `queue`.
 * - `queue`:           Pending stops.
 * - `occupants`:       Identifiers of passengers inside the car.
 * - `max_floor`:       Highest floor of the building.
 * - `speed`:           Height change per tick, also the arrival tolerance.
 */
#[derive(Debug, Clone)]
pub struct Car {
    height: f64,
    doors_open: bool,
    direction: Direction,
    target_floor: i32,
    queue: StopQueue,
    occupants: BTreeSet<String>,
    max_floor: i32,
    speed: f64,
}

/// Point-in-time view of a car, for status reporting.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CarStatus {
    pub height: f64,
    pub target_floor: i32,
    pub queue: Vec<i32>,
    pub direction: Direction,
    pub doors_open: bool,
    pub occupants: Vec<String>,
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   Elevator currently at height {}", self.height)?;
        writeln!(
            f,
            "   Elevator moving to {} with queue of {:?}",
            self.target_floor, self.queue
        )?;
        write!(f, "   Elevator direction {}", self.direction)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
impl Car {
    pub fn new(max_floor: i32) -> Result<Car, CarError> {
        Car::with_speed(max_floor, DEFAULT_SPEED)
    }

    pub fn with_speed(max_floor: i32, speed: f64) -> Result<Car, CarError> {
        if max_floor <= 0 {
            return Err(CarError::InvalidConfiguration(format!(
                "max_floor must be > 0, got {}",
                max_floor
            )));
        }
        // Above one floor per tick the arrival tolerance would match neighbouring floors
        if !speed.is_finite() || speed <= 0.0 || speed > 1.0 {
            return Err(CarError::InvalidConfiguration(format!(
                "speed must be within (0, 1], got {}",
                speed
            )));
        }

        Ok(Car {
            height: 0.0,
            doors_open: false,
            direction: Direction::Up,
            target_floor: HOME_FLOOR,
            queue: StopQueue::new(),
            occupants: BTreeSet::new(),
            max_floor,
            speed,
        })
    }

    /// Queues a stop. Out-of-range and redundant requests are ignored.
    pub fn request_stop(&mut self, floor: i32) {
        if floor < 0 || floor > self.max_floor || floor == self.target_floor {
            return;
        }
        if self.queue.insert(floor) {
            debug!("Queued stop at floor {}", floor);
        }
    }

    /// Calls the car to the floor a passenger is waiting on.
    pub fn call<P: Passenger + ?Sized>(&mut self, passenger: &P) {
        self.request_stop(passenger.current_floor());
    }

    pub fn tick(&mut self) {
        if self.is_at_floor(self.target_floor) {
            self.height = f64::from(self.target_floor);
            self.doors_open = true;
            self.select_next_target();
            return;
        }

        self.doors_open = false;
        let target = f64::from(self.target_floor);
        if self.height < target {
            self.height = (self.height + self.speed).min(f64::from(self.max_floor));
        } else if self.height > target {
            self.height = (self.height - self.speed).max(0.0);
        }
    }

    pub fn board<P: Passenger + ?Sized>(&mut self, passenger: &mut P) {
        let floor = passenger.current_floor();
        if !self.doors_open
            || floor == IN_CAR
            || self.is_occupant(&*passenger)
            || !self.is_at_floor(floor)
        {
            return;
        }

        self.occupants.insert(passenger.id().to_string());
        self.request_stop(passenger.desired_floor());
        passenger.set_current_floor(IN_CAR);
        info!("  ** {} has boarded the elevator **", passenger.id());
    }

    pub fn exit<P: Passenger + ?Sized>(&mut self, passenger: &mut P) {
        if !self.doors_open
            || !self.is_occupant(&*passenger)
            || !self.is_at_floor(passenger.desired_floor())
        {
            return;
        }

        self.occupants.remove(passenger.id());
        passenger.set_current_floor(passenger.desired_floor());
        info!("  ** {} has left the elevator **", passenger.id());
    }

    pub fn is_occupant<P: Passenger + ?Sized>(&self, passenger: &P) -> bool {
        self.occupants.contains(passenger.id())
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn max_floor(&self) -> i32 {
        self.max_floor
    }

    pub fn doors_open(&self) -> bool {
        self.doors_open
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_floor(&self) -> i32 {
        self.target_floor
    }

    pub fn status(&self) -> CarStatus {
        CarStatus {
            height: self.height,
            target_floor: self.target_floor,
            queue: self.queue.to_vec(),
            direction: self.direction,
            doors_open: self.doors_open,
            occupants: self.occupants.iter().cloned().collect(),
        }
    }

    /***************************************/
    /*          Private helpers            */
    /***************************************/
    fn is_at_floor(&self, floor: i32) -> bool {
        (self.height - f64::from(floor)).abs() < self.speed
    }

    fn select_next_target(&mut self) {
        if self.queue.len() > 1 {
            self.select_in_direction();
            return;
        }

        if self.queue.is_empty() {
            debug!("No pending stops, returning to floor {}", HOME_FLOOR);
        }
        let next = self.queue.pop_lowest().unwrap_or(HOME_FLOOR);
        self.face(next);
        self.target_floor = next;
        debug!("Next target floor {}", next);
    }

    // LOOK scan: stay on the current side, turn around once it runs dry.
    fn select_in_direction(&mut self) {
        let next = match self.pop_on_side(self.direction) {
            Some(floor) => floor,
            None => {
                // Nearest stop on the new side, not the lowest queued floor
                self.direction = self.direction.flipped();
                debug!("No stops ahead, turning {}", self.direction);
                self.pop_on_side(self.direction)
                    .or_else(|| self.queue.pop_lowest())
                    .unwrap_or(HOME_FLOOR)
            }
        };
        self.target_floor = next;
        debug!("Next target floor {} going {}", next, self.direction);
    }

    fn pop_on_side(&mut self, direction: Direction) -> Option<i32> {
        match direction {
            Direction::Up => self.queue.pop_above(self.height),
            Direction::Down => self.queue.pop_below(self.height),
        }
    }

    fn face(&mut self, floor: i32) {
        let floor = f64::from(floor);
        if floor > self.height {
            self.direction = Direction::Up;
        } else if floor < self.height {
            self.direction = Direction::Down;
        }
    }
}
