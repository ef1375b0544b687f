//! Unit tests for calls, the registry, the pool, and script sources.

use lift_core::{Direction, Floor, FloorRange, Tick};

fn building() -> FloorRange {
    FloorRange::ground_to(10)
}

#[cfg(test)]
mod call_validation {
    use super::*;
    use crate::{CallError, CallEvent};

    #[test]
    fn well_formed_call_passes() {
        let call = CallEvent::new(Floor(3), Floor(2), Direction::Down, Tick(0));
        call.validate(&building()).unwrap();
    }

    #[test]
    fn between_derives_direction() {
        let up = CallEvent::between(Floor(2), Floor(9), Tick(4));
        assert_eq!(up.direction, Direction::Up);
        let down = CallEvent::between(Floor(9), Floor(2), Tick(4));
        assert_eq!(down.direction, Direction::Down);
        up.validate(&building()).unwrap();
        down.validate(&building()).unwrap();
    }

    #[test]
    fn floor_outside_building_rejected() {
        let call = CallEvent::between(Floor(11), Floor(2), Tick(0));
        assert!(matches!(
            call.validate(&building()),
            Err(CallError::FloorOutOfRange { floor: Floor(11), .. })
        ));
        let call = CallEvent::between(Floor(2), Floor(0), Tick(0));
        assert!(matches!(
            call.validate(&building()),
            Err(CallError::FloorOutOfRange { floor: Floor(0), .. })
        ));
    }

    #[test]
    fn same_floor_rejected() {
        let call = CallEvent::new(Floor(5), Floor(5), Direction::Up, Tick(0));
        assert!(matches!(call.validate(&building()), Err(CallError::SameFloor(Floor(5)))));
    }

    #[test]
    fn inconsistent_direction_rejected() {
        let call = CallEvent::new(Floor(3), Floor(8), Direction::Down, Tick(0));
        assert!(matches!(
            call.validate(&building()),
            Err(CallError::DirectionMismatch { .. })
        ));
    }

    #[test]
    fn idle_hall_call_rejected() {
        let call = CallEvent::new(Floor(3), Floor(8), Direction::Idle, Tick(0));
        assert!(call.validate(&building()).is_err());
    }
}

#[cfg(test)]
mod registry {
    use super::*;
    use crate::{CallEvent, CallRegistry};

    #[test]
    fn releases_exactly_the_due_tick() {
        let mut registry = CallRegistry::from_calls([
            CallEvent::between(Floor(3), Floor(2), Tick(0)),
            CallEvent::between(Floor(10), Floor(1), Tick(1)),
            CallEvent::between(Floor(5), Floor(8), Tick(1)),
        ]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.tick_count(), 2);

        let due = registry.release_due(Tick(1));
        assert_eq!(due.len(), 2);
        assert_eq!(registry.len(), 1);
        assert!(registry.release_due(Tick(1)).is_empty());
    }

    #[test]
    fn past_ticks_are_not_swept_up() {
        // Strict equality: releasing tick 5 leaves a tick-0 call stranded.
        let mut registry =
            CallRegistry::from_calls([CallEvent::between(Floor(3), Floor(2), Tick(0))]);
        assert!(registry.release_due(Tick(5)).is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn preserves_insertion_order_within_a_tick() {
        let first = CallEvent::between(Floor(5), Floor(8), Tick(2));
        let second = CallEvent::between(Floor(5), Floor(1), Tick(2));
        let mut registry = CallRegistry::new();
        registry.push(first);
        registry.push(second);

        let due = registry.release_due(Tick(2));
        assert_eq!(due, vec![first, second]);
    }

    #[test]
    fn next_tick_is_earliest_pending() {
        let mut registry = CallRegistry::new();
        assert_eq!(registry.next_tick(), None);
        registry.push(CallEvent::between(Floor(2), Floor(6), Tick(7)));
        registry.push(CallEvent::between(Floor(4), Floor(1), Tick(3)));
        assert_eq!(registry.next_tick(), Some(Tick(3)));
        assert!(!registry.is_empty());
    }
}

#[cfg(test)]
mod pool {
    use super::*;
    use crate::{CallEvent, Passenger, PassengerPool};

    fn passenger(origin: u8, destination: u8) -> Passenger {
        Passenger::from_call(&CallEvent::between(Floor(origin), Floor(destination), Tick(0)))
    }

    #[test]
    fn fifo_order_preserved() {
        let mut pool = PassengerPool::new();
        pool.push(passenger(5, 8));
        pool.push(passenger(5, 1));
        pool.push(passenger(2, 4));

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.count_at(Floor(5)), 2);
        assert!(pool.any_at(Floor(2)));
        assert!(!pool.any_at(Floor(9)));

        // Removing the middle passenger keeps the others in order.
        let removed = pool.remove_at(1);
        assert_eq!(removed.destination, Floor(1));
        assert_eq!(pool.waiting()[0].destination, Floor(8));
        assert_eq!(pool.waiting()[1].origin, Floor(2));
    }

    #[test]
    fn from_call_carries_requested_direction() {
        let p = passenger(5, 1);
        assert_eq!(p.requested_direction, Direction::Down);
        assert_eq!(p.origin, Floor(5));
        assert_eq!(p.destination, Floor(1));
    }
}

#[cfg(test)]
mod generator {
    use super::*;
    use crate::random_calls;
    use lift_core::SimRng;

    #[test]
    fn all_generated_calls_are_valid() {
        let mut rng = SimRng::new(42);
        let calls = random_calls(&mut rng, &building(), 200, Tick(10));
        assert_eq!(calls.len(), 200);
        for call in &calls {
            call.validate(&building()).unwrap();
            assert!(call.scheduled_tick <= Tick(10));
        }
    }

    #[test]
    fn sorted_by_tick() {
        let mut rng = SimRng::new(7);
        let calls = random_calls(&mut rng, &building(), 50, Tick(20));
        assert!(calls.windows(2).all(|w| w[0].scheduled_tick <= w[1].scheduled_tick));
    }

    #[test]
    fn same_seed_same_script() {
        let a = random_calls(&mut SimRng::new(99), &building(), 30, Tick(10));
        let b = random_calls(&mut SimRng::new(99), &building(), 30, Tick(10));
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod loader {
    use super::*;
    use crate::{load_calls_reader, CallError, CallEvent};
    use std::io::Cursor;

    const SCRIPT: &str = "\
origin_floor,destination_floor,direction,tick\n\
3,2,down,0\n\
10,1,down,1\n\
5,8,up,0\n\
";

    #[test]
    fn loads_and_validates_script() {
        let calls = load_calls_reader(Cursor::new(SCRIPT), &building()).unwrap();
        assert_eq!(
            calls,
            vec![
                CallEvent::new(Floor(3), Floor(2), Direction::Down, Tick(0)),
                CallEvent::new(Floor(10), Floor(1), Direction::Down, Tick(1)),
                CallEvent::new(Floor(5), Floor(8), Direction::Up, Tick(0)),
            ]
        );
    }

    #[test]
    fn bad_direction_is_a_parse_error() {
        let script = "origin_floor,destination_floor,direction,tick\n3,2,sideways,0\n";
        let err = load_calls_reader(Cursor::new(script), &building()).unwrap_err();
        assert!(matches!(err, CallError::Parse(_)));
    }

    #[test]
    fn out_of_range_row_rejected() {
        let script = "origin_floor,destination_floor,direction,tick\n12,2,down,0\n";
        let err = load_calls_reader(Cursor::new(script), &building()).unwrap_err();
        assert!(matches!(err, CallError::FloorOutOfRange { .. }));
    }

    #[test]
    fn malformed_row_rejected() {
        let script = "origin_floor,destination_floor,direction,tick\nthree,2,down,0\n";
        let err = load_calls_reader(Cursor::new(script), &building()).unwrap_err();
        assert!(matches!(err, CallError::Parse(_)));
    }
}
