/*
 * Unit tests for console module
 *
 * The unit tests follows the Arrange, Act, Assert pattern. User input is fed through a
 * channel and the console output is captured in a buffer.
 *
 * Tests:
 * - test_input_validation
 * - test_fleet_size_prompt
 * - test_add_person_and_step
 * - test_add_person_rejects_bad_floors
 * - test_wrong_menu_option
 * - test_waiting_report
 * - test_json_status
 * - test_end_of_input
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod console_tests {
    use crate::config::ConsoleConfig;
    use crate::console::input::{
        parse_destination, parse_fleet_size, parse_origin, validate_fleet_size, InputError,
    };
    use crate::console::Console;
    use crate::dispatcher::Dispatcher;
    use crossbeam_channel::unbounded;

    fn run_console(
        config: &ConsoleConfig,
        fleet_size: Option<usize>,
        lines: &[&str],
    ) -> (Option<Dispatcher>, String) {
        // Arrange mock input channel
        let (input_tx, input_rx) = unbounded::<String>();
        for line in lines {
            input_tx.send(line.to_string()).unwrap();
        }
        drop(input_tx);

        let mut output = Vec::new();
        let dispatcher = Console::new(config, input_rx, &mut output)
            .run(fleet_size)
            .unwrap();
        (dispatcher, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_input_validation() {
        // Act & Assert
        assert_eq!(parse_fleet_size("3"), Ok(3));
        assert_eq!(parse_fleet_size(" 16 "), Ok(16));
        assert_eq!(parse_fleet_size("0"), Err(InputError::FleetSizeOutOfRange));
        assert_eq!(parse_fleet_size("17"), Err(InputError::FleetSizeOutOfRange));
        assert_eq!(parse_fleet_size("-2"), Err(InputError::FleetSizeOutOfRange));
        assert_eq!(parse_fleet_size("two"), Err(InputError::NotANumber));
        assert_eq!(validate_fleet_size(16), Ok(16));
        assert_eq!(validate_fleet_size(0), Err(InputError::FleetSizeOutOfRange));

        assert_eq!(parse_origin("0"), Ok(0));
        assert_eq!(parse_origin("10"), Ok(10));
        assert_eq!(parse_origin("11"), Err(InputError::FloorOutOfRange));
        assert_eq!(parse_origin("-1"), Err(InputError::FloorOutOfRange));
        assert_eq!(parse_origin(""), Err(InputError::NotANumber));

        assert_eq!(parse_destination("7", 3), Ok(7));
        assert_eq!(parse_destination("3", 3), Err(InputError::SameFloor));
        assert_eq!(parse_destination("12", 3), Err(InputError::DestinationOutOfRange));
        assert_eq!(parse_destination("x", 3), Err(InputError::NotANumber));

        assert_eq!(
            InputError::FleetSizeOutOfRange.to_string(),
            "Number of elevators must be between 1 - 16!"
        );
        assert_eq!(InputError::FloorOutOfRange.to_string(), "Choose floor from 0 to 10!");
    }

    #[test]
    fn test_fleet_size_prompt() {
        // Purpose: Verify that the console keeps asking until a valid fleet size is given

        // Act
        let (dispatcher, output) =
            run_console(&ConsoleConfig::default(), None, &["many", "20", "3", "q"]);

        // Assert
        assert!(output.starts_with("How many elevators?\n"));
        assert!(output.contains("Type a number!\nHow many elevators?\n"));
        assert!(output.contains("Number of elevators must be between 1 - 16!\nHow many elevators?\n"));
        assert!(output.ends_with("Closing...\n"));
        assert_eq!(dispatcher.unwrap().elevators().len(), 3);
    }

    #[test]
    fn test_add_person_and_step() {
        // Arrange
        let lines = ["a", "3", "8", "s", "s", "s"];

        // Act
        let (dispatcher, output) = run_console(&ConsoleConfig::default(), Some(1), &lines);

        // Assert
        assert!(output.contains("Elevator 1 will take the person from floor 3 to floor 8"));
        assert!(output.contains("ID: 1, current floor: 1, destination: [3], people inside: 0"));
        assert!(output.contains("ID: 1, current floor: 3, destination: [8], people inside: 1"));
        let dispatcher = dispatcher.unwrap();
        assert_eq!(dispatcher.elevators()[0].current_floor(), 3);
        assert_eq!(dispatcher.elevators()[0].passengers_aboard(), 1);
    }

    #[test]
    fn test_add_person_rejects_bad_floors() {
        // Act
        let (dispatcher, output) = run_console(
            &ConsoleConfig::default(),
            Some(2),
            &["a", "15", "4", "4", "-3", "9", "q"],
        );

        // Assert
        assert!(output.contains("Choose floor from 0 to 10!\nOn which floor: \n"));
        assert!(output.contains(
            "Don't call the elevator unless you want to go somewhere!\nWhere to go: \n"
        ));
        assert!(output.contains("You can't go upper than 10 or lower than 0!\nWhere to go: \n"));
        assert_eq!(dispatcher.unwrap().where_are_waiting(), vec![(4, 1)]);
    }

    #[test]
    fn test_wrong_menu_option() {
        // Act
        let (_dispatcher, output) = run_console(&ConsoleConfig::default(), Some(1), &["x", "q"]);

        // Assert
        assert!(output.contains("Wrong option, please choose one from options below:\n\nPress:\n"));
        assert_eq!(output.matches("[q] - quit").count(), 2);
    }

    #[test]
    fn test_waiting_report() {
        // Act
        let (_dispatcher, output) = run_console(
            &ConsoleConfig::default(),
            Some(1),
            &["a", "5", "0", "a", "5", "9", "a", "7", "1", "p", "q"],
        );

        // Assert
        assert!(output.contains("There are 2 people waiting on the floor 5\n"));
        assert!(output.contains("There is 1 person waiting on the floor 7\n"));
    }

    #[test]
    fn test_json_status() {
        // Arrange
        let config = ConsoleConfig {
            status_after_step: false,
            json_status: true,
        };

        // Act
        let (_dispatcher, output) = run_console(&config, Some(1), &["a", "0", "2", "s", "e", "q"]);

        // Assert
        assert_eq!(
            output.matches(r#"{"id":1,"currentFloor":1,"direction":"up","destinations":[2],"peopleInside":1}"#).count(),
            1
        );
        assert!(!output.contains("ID: 1"));
    }

    #[test]
    fn test_end_of_input() {
        // Act
        let (no_fleet, _) = run_console(&ConsoleConfig::default(), None, &[]);
        let (interrupted, output) = run_console(&ConsoleConfig::default(), Some(1), &["a", "3"]);

        // Assert
        assert!(no_fleet.is_none());
        assert!(output.ends_with("Where to go: \n"));
        assert!(interrupted.unwrap().where_are_waiting().is_empty());
    }
}
