/*
 * Unit tests for the simulation driver
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_simulation_delivers_everyone
 * - test_simulation_rejects_passenger_outside_building
 * - test_simulation_stops_at_tick_limit
 * - test_simulation_reports_every_tick
 * - test_simulation_person_already_at_destination
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod simulation_tests {
    use crate::config::{parse_config, ConfigError};
    use crate::elevator::Car;
    use crate::shared::Passenger;
    use crate::simulation::simulation::RunError;
    use crate::simulation::{Person, Simulation};

    const CONFIG: &str = r#"
        [car]
        max_floor = 10

        [simulation]
        max_ticks = 500

        [[passengers]]
        id = "alice"
        floor = 0
        desired_floor = 7

        [[passengers]]
        id = "bob"
        floor = 5
        desired_floor = 2

        [[passengers]]
        id = "carol"
        floor = 9
        desired_floor = 0
    "#;

    #[test]
    fn test_simulation_delivers_everyone() {
        // Arrange
        let config = parse_config(CONFIG).unwrap();
        let mut simulation = Simulation::new(&config).unwrap();

        // Act
        let outcome = simulation.run(config.simulation.max_ticks, |_| {});

        // Assert
        assert!(outcome.completed);
        assert_eq!(outcome.into_result(), Ok(simulation.ticks()));
        assert_eq!(simulation.travelling(), 0);
        for person in simulation.persons() {
            assert_eq!(person.current_floor(), person.desired_floor());
            assert!(!simulation.car().is_occupant(person));
        }
        assert!(simulation.car().status().occupants.is_empty());
    }

    #[test]
    fn test_simulation_rejects_passenger_outside_building() {
        // Arrange
        let config = parse_config(
            r#"
            [car]
            max_floor = 4

            [[passengers]]
            id = "dave"
            floor = 1
            desired_floor = 6
            "#,
        )
        .unwrap();

        // Act
        let result = Simulation::new(&config);

        // Assert
        match result {
            Err(ConfigError::PassengerFloor { id, floor, max_floor }) => {
                assert_eq!(id, "dave");
                assert_eq!(floor, 6);
                assert_eq!(max_floor, 4);
            }
            Err(e) => panic!("Unexpected error: {}", e),
            Ok(_) => panic!("Passenger outside the building was accepted"),
        }
    }

    #[test]
    fn test_simulation_stops_at_tick_limit() {
        // Arrange
        let car = Car::new(10).unwrap();
        let mut simulation = Simulation::from_parts(car, vec![Person::new("erin", 10, 0)]);

        // Act
        let outcome = simulation.run(5, |_| {});

        // Assert
        assert!(!outcome.completed);
        assert_eq!(outcome.ticks, 5);
        assert_eq!(outcome.into_result(), Err(RunError::TickLimit { ticks: 5 }));
        assert!(!simulation.all_arrived());
        assert_eq!(simulation.travelling(), 1);
    }

    #[test]
    fn test_simulation_reports_every_tick() {
        // Arrange
        let car = Car::new(3).unwrap();
        let mut simulation = Simulation::from_parts(car, vec![Person::new("frank", 0, 3)]);
        let mut reported = 0;

        // Act
        let outcome = simulation.run(100, |_| reported += 1);

        // Assert
        assert!(outcome.completed);
        assert_eq!(reported, outcome.ticks);
    }

    #[test]
    fn test_simulation_person_already_at_destination() {
        // Purpose: Verify that nobody waits for a trip that is already finished

        // Arrange
        let car = Car::new(3).unwrap();
        let mut simulation = Simulation::from_parts(car, vec![Person::new("grace", 2, 2)]);

        // Act
        let outcome = simulation.run(100, |_| {});

        // Assert
        assert!(outcome.completed);
        assert_eq!(outcome.ticks, 0);
        assert!(simulation.car().status().queue.is_empty());
    }
}
