pub mod person;
pub mod simulation;
pub mod simulation_tests;

pub use person::Person;
pub use simulation::Simulation;
