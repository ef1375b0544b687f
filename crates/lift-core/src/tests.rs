//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor, FloorRange};

    #[test]
    fn ordering_and_steps() {
        assert!(Floor(2) < Floor(3));
        assert_eq!(Floor(4).above(), Floor(5));
        assert_eq!(Floor(4).below(), Floor(3));
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(8)), 5);
        assert_eq!(Floor(8).distance(Floor(3)), 5);
        assert_eq!(Floor(6).distance(Floor(6)), 0);
    }

    #[test]
    fn toward() {
        assert_eq!(Floor(1).toward(Floor(5)), Direction::Up);
        assert_eq!(Floor(9).toward(Floor(2)), Direction::Down);
        assert_eq!(Floor(4).toward(Floor(4)), Direction::Idle);
    }

    #[test]
    fn range_contains_endpoints() {
        let building = FloorRange::ground_to(10);
        assert!(building.contains(Floor(1)));
        assert!(building.contains(Floor(10)));
        assert!(!building.contains(Floor(0)));
        assert!(!building.contains(Floor(11)));
        assert_eq!(building.count(), 10);
    }

    #[test]
    fn display() {
        assert_eq!(Floor(7).to_string(), "7");
        assert_eq!(FloorRange::ground_to(10).to_string(), "[1..10]");
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn reversed() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Down.reversed(), Direction::Up);
        assert_eq!(Direction::Idle.reversed(), Direction::Idle);
    }

    #[test]
    fn is_moving() {
        assert!(Direction::Up.is_moving());
        assert!(Direction::Down.is_moving());
        assert!(!Direction::Idle.is_moving());
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
        assert_eq!(Direction::Idle.to_string(), "idle");
    }
}

#[cfg(test)]
mod time {
    use crate::{Floor, FloorRange, SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_advances_one_tick_at_a_time() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn ten_floor_config_validates() {
        let cfg = SimConfig::ten_floor(42, 1_000);
        cfg.validate().unwrap();
        assert_eq!(cfg.floors, FloorRange::ground_to(10));
        assert_eq!(cfg.initial_floor, Floor(1));
    }

    #[test]
    fn inverted_range_rejected() {
        let mut cfg = SimConfig::ten_floor(42, 1_000);
        cfg.floors = FloorRange::new(Floor(10), Floor(1));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn initial_floor_outside_building_rejected() {
        let mut cfg = SimConfig::ten_floor(42, 1_000);
        cfg.initial_floor = Floor(11);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_ceiling_rejected() {
        let cfg = SimConfig::ten_floor(42, 0);
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u8 = r1.gen_range(1..=10);
            let b: u8 = r2.gen_range(1..=10);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: Vec<u8> = (0..32).map(|_| r1.gen_range(1..=10)).collect();
        let b: Vec<u8> = (0..32).map(|_| r2.gen_range(1..=10)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
