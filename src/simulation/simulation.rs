/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{info, warn};
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{Config, ConfigError};
use crate::elevator::Car;
use crate::simulation::Person;

/**
 * Drives one car and its passengers in discrete ticks.
 *
 * Every step, waiting persons press the call button on their floor, the car
 * advances one tick, and while the doors are open occupants get off before
 * waiting persons get on.
 *
 * # Fields
 * - `car`:         The car being simulated.
 * - `persons`:     Every passenger, inside the car or not.
 * - `ticks`:       Number of steps taken so far.
 */
pub struct Simulation {
    car: Car,
    persons: Vec<Person>,
    ticks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub ticks: u32,
    pub completed: bool,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError {
    #[error("tick limit reached after {ticks} ticks")]
    TickLimit { ticks: u32 },
}

impl Outcome {
    /// Ticks used by a finished run, or `RunError::TickLimit`.
    pub fn into_result(self) -> Result<u32, RunError> {
        if self.completed {
            Ok(self.ticks)
        } else {
            Err(RunError::TickLimit { ticks: self.ticks })
        }
    }
}

impl Simulation {
    pub fn new(config: &Config) -> Result<Simulation, ConfigError> {
        let car = Car::with_speed(config.car.max_floor, config.car.speed)?;

        for passenger in &config.passengers {
            for floor in [passenger.floor, passenger.desired_floor] {
                if floor < 0 || floor > car.max_floor() {
                    return Err(ConfigError::PassengerFloor {
                        id: passenger.id.clone(),
                        floor,
                        max_floor: car.max_floor(),
                    });
                }
            }
        }

        let persons = config.passengers.iter().map(Person::from).collect();
        Ok(Simulation::from_parts(car, persons))
    }

    pub fn from_parts(car: Car, persons: Vec<Person>) -> Simulation {
        Simulation {
            car,
            persons,
            ticks: 0,
        }
    }

    pub fn step(&mut self) {
        for person in self.persons.iter().filter(|p| p.waiting()) {
            self.car.call(person);
        }

        self.car.tick();
        self.ticks += 1;

        if !self.car.doors_open() {
            return;
        }

        for person in self.persons.iter_mut() {
            if self.car.is_occupant(&*person) {
                self.car.exit(person);
            }
        }
        for person in self.persons.iter_mut().filter(|p| p.waiting()) {
            self.car.board(person);
        }
    }

    /// Steps until every person has arrived or `max_ticks` steps were taken.
    pub fn run<F: FnMut(&Simulation)>(&mut self, max_ticks: u32, mut report: F) -> Outcome {
        while !self.all_arrived() {
            if self.ticks >= max_ticks {
                warn!(
                    "Tick limit {} reached with {} passengers still travelling",
                    max_ticks,
                    self.travelling()
                );
                return Outcome {
                    ticks: self.ticks,
                    completed: false,
                };
            }
            self.step();
            report(self);
        }

        info!(
            "All {} passengers arrived after {} ticks",
            self.persons.len(),
            self.ticks
        );
        Outcome {
            ticks: self.ticks,
            completed: true,
        }
    }

    pub fn travelling(&self) -> usize {
        self.persons.iter().filter(|p| !p.arrived()).count()
    }

    pub fn all_arrived(&self) -> bool {
        self.persons.iter().all(Person::arrived)
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}
