/*
 * Unit tests for shared module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_direction_toward
 * - test_moving_down_from_ground_floor_panics
 * - test_call_accepts_sweep
 * - test_registry_take_clears_entry
 * - test_registry_counts_skip_empty_floors
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod shared_tests {
    use crate::shared::{Call, Direction, Passenger, WaitingRegistry};

    #[test]
    fn test_direction_toward() {
        // Purpose: Verify that a target on the current floor counts as "down", as the queue invariant expects

        // Act & Assert
        assert_eq!(Direction::toward(2, 7), Direction::Up);
        assert_eq!(Direction::toward(7, 2), Direction::Down);
        assert_eq!(Direction::toward(4, 4), Direction::Down);
        assert_eq!(Direction::Up.step(4), 5);
        assert_eq!(Direction::Down.step(4), 3);
        assert_eq!(Direction::Idle.step(4), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "moving down from the ground floor")]
    fn test_moving_down_from_ground_floor_panics() {
        // Act
        Direction::Down.step(0);
    }

    #[test]
    fn test_call_accepts_sweep() {
        // Purpose: Verify that cab calls fit any sweep while hall calls only fit their own direction

        // Act & Assert
        assert_eq!(Call::hall(3, 8), Call::HallUp);
        assert_eq!(Call::hall(8, 3), Call::HallDown);

        assert!(Call::HallUp.accepts(Direction::Up));
        assert!(!Call::HallUp.accepts(Direction::Down));
        assert!(Call::HallDown.accepts(Direction::Down));
        assert!(!Call::HallDown.accepts(Direction::Up));
        assert!(Call::Cab.accepts(Direction::Up));
        assert!(Call::Cab.accepts(Direction::Down));
    }

    #[test]
    fn test_registry_take_clears_entry() {
        // Arrange
        let mut registry = WaitingRegistry::new();
        registry.enqueue(4, Passenger::new(1, 9));
        registry.enqueue(4, Passenger::new(2, 0));

        // Act
        let boarded = registry.take(4);

        // Assert
        assert_eq!(boarded, vec![Passenger::new(1, 9), Passenger::new(2, 0)]);
        assert!(!registry.has_waiting(4));
        assert!(registry.take(4).is_empty());
        assert!(registry.take(7).is_empty());
    }

    #[test]
    fn test_registry_counts_skip_empty_floors() {
        // Arrange
        let mut registry = WaitingRegistry::new();
        registry.enqueue(6, Passenger::new(1, 2));
        registry.enqueue(0, Passenger::new(2, 5));
        registry.enqueue(0, Passenger::new(3, 1));
        registry.enqueue(3, Passenger::new(4, 10));
        registry.take(3);

        // Act
        let counts = registry.counts();

        // Assert
        assert_eq!(counts, vec![(0, 2), (6, 1)]);
        assert_eq!(registry.total(), 3);
    }
}
