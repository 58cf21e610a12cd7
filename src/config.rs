/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{CarError, DEFAULT_SPEED};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub car: CarConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub passengers: Vec<PassengerConfig>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CarConfig {
    pub max_floor: i32,
    #[serde(default = "default_speed")]
    pub speed: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub max_ticks: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PassengerConfig {
    pub id: String,
    pub floor: i32,
    pub desired_floor: i32,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Car(#[from] CarError),
    #[error("passenger {id}: floor {floor} is outside [0, {max_floor}]")]
    PassengerFloor { id: String, floor: i32, max_floor: i32 },
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig { max_ticks: 1000 }
    }
}

fn default_speed() -> f64 {
    DEFAULT_SPEED
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}

/***************************************/
/*             Unit tests              */
/***************************************/
