#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{heading_vector, normalize_degrees, Bounds, PlayField, SimTime};

    #[test]
    fn test_entity_state_serde() {
        let variants = vec![
            EntityState::Active,
            EntityState::Impervious,
            EntityState::Passive,
            EntityState::Ghost,
            EntityState::Killed,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EntityState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_entity_kind_is_tagged() {
        let kind = EntityKind::Asteroid {
            size: AsteroidSize::Medium,
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, r#"{"type":"Asteroid","size":"Medium"}"#);
        let back: EntityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Turn {
                direction: TurnDirection::Left,
            },
            PlayerCommand::Accelerate { amount: 0.45 },
            PlayerCommand::Fire,
            PlayerCommand::TogglePause,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired,
            GameEvent::AsteroidDestroyed {
                size: AsteroidSize::Large,
            },
            GameEvent::PointsAwarded { points: 3 },
            GameEvent::WaveLaunched { wave: 2, total: 14 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.wave, back.wave);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Enums ----

    #[test]
    fn test_asteroid_points_favor_small_rocks() {
        assert_eq!(AsteroidSize::Tiny.points(), 0);
        assert_eq!(AsteroidSize::Small.points(), 3);
        assert_eq!(AsteroidSize::Medium.points(), 2);
        assert_eq!(AsteroidSize::Large.points(), 1);
    }

    #[test]
    fn test_asteroid_rank_round_trip() {
        for size in AsteroidSize::ALL {
            assert_eq!(AsteroidSize::from_rank(size.rank()), size);
        }
        assert_eq!(AsteroidSize::from_rank(9), AsteroidSize::Large);
    }

    #[test]
    fn test_hazard_excludes_debris() {
        assert!(!EntityKind::Asteroid {
            size: AsteroidSize::Tiny
        }
        .is_hazard());
        assert!(EntityKind::Asteroid {
            size: AsteroidSize::Small
        }
        .is_hazard());
        assert!(!EntityKind::Bullet.is_hazard());
        assert!(!EntityKind::Particle.is_hazard());
    }

    #[test]
    fn test_only_killed_is_terminal() {
        assert!(EntityState::Killed.is_terminal());
        assert!(!EntityState::Passive.is_terminal());
        assert!(!EntityState::Ghost.is_terminal());
    }

    #[test]
    fn test_passive_and_killed_are_not_drawn() {
        assert!(EntityState::Active.is_drawn());
        assert!(EntityState::Impervious.is_drawn());
        assert!(EntityState::Ghost.is_drawn());
        assert!(!EntityState::Passive.is_drawn());
        assert!(!EntityState::Killed.is_drawn());
    }

    #[test]
    fn test_turn_direction_sign() {
        assert_eq!(TurnDirection::Left.sign(), -1.0);
        assert_eq!(TurnDirection::None.sign(), 0.0);
        assert_eq!(TurnDirection::Right.sign(), 1.0);
    }

    // ---- Geometry ----

    #[test]
    fn test_bounds_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        let c = Bounds::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_bounds_touching_edges_do_not_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_empty_bounds_never_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let point = Bounds::new(5.0, 5.0, 0.0, 0.0);
        assert!(point.is_empty());
        assert!(!a.intersects(&point));
        assert!(!point.intersects(&a));
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(-730.0), 350.0);
        assert!(normalize_degrees(-1e-7) < 360.0);
    }

    #[test]
    fn test_heading_vector_screen_axes() {
        let up = heading_vector(0.0);
        assert!(up.x.abs() < 1e-5 && (up.y + 1.0).abs() < 1e-5);
        let right = heading_vector(90.0);
        assert!((right.x - 1.0).abs() < 1e-5 && right.y.abs() < 1e-5);
        let down = heading_vector(180.0);
        assert!(down.x.abs() < 1e-5 && (down.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_play_field_contains() {
        let field = PlayField::new(100.0, 50.0);
        assert!(field.contains(Vec2::new(0.0, 0.0)));
        assert!(field.contains(Vec2::new(100.0, 50.0)));
        assert!(!field.contains(Vec2::new(-0.1, 10.0)));
        assert!(!field.contains(Vec2::new(10.0, 50.1)));
        assert_eq!(field.center(), Vec2::new(50.0, 25.0));
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
