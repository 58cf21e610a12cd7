use crate::config::PassengerConfig;
use crate::shared::{Passenger, IN_CAR};

/// A passenger agent that wants to travel from one floor to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    id: String,
    current_floor: i32,
    desired_floor: i32,
}

impl Person {
    pub fn new(id: impl Into<String>, floor: i32, desired_floor: i32) -> Person {
        Person {
            id: id.into(),
            current_floor: floor,
            desired_floor,
        }
    }

    /// Standing on a floor that is not yet the destination.
    pub fn waiting(&self) -> bool {
        self.current_floor != IN_CAR && self.current_floor != self.desired_floor
    }

    pub fn arrived(&self) -> bool {
        self.current_floor == self.desired_floor
    }
}

impl From<&PassengerConfig> for Person {
    fn from(config: &PassengerConfig) -> Person {
        Person::new(config.id.clone(), config.floor, config.desired_floor)
    }
}

impl Passenger for Person {
    fn current_floor(&self) -> i32 {
        self.current_floor
    }

    fn desired_floor(&self) -> i32 {
        self.desired_floor
    }

    fn set_current_floor(&mut self, floor: i32) {
        self.current_floor = floor;
    }

    fn id(&self) -> &str {
        &self.id
    }
}
