#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::PlayerCommand;
    use crate::config::{default_weapon_catalog, Tuning};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::TickInput;
    use crate::state::GameStateSnapshot;
    use crate::types::{dir_yaw, horizontal_distance, yaw_dir, Deadline, SimTime};

    /// Verify the enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_over_cause_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&GameOverCause::Energy).unwrap(),
            "\"energy\""
        );
        assert_eq!(
            serde_json::to_string(&GameOverCause::Chef).unwrap(),
            "\"chef\""
        );
    }

    #[test]
    fn test_firing_mode_serde() {
        let variants = vec![
            FiringMode::Manual,
            FiringMode::Automatic { cooldown_secs: 0.5 },
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: FiringMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_event_serde_tagged() {
        let events = vec![
            GameEvent::WeaponUnlocked {
                slot: 1,
                name: "Cardboard Launcher".into(),
                tier: 2,
            },
            GameEvent::LevelUp {
                level: 2,
                max_health: 125.0,
            },
            GameEvent::NpcHit { npc_id: 4 },
            GameEvent::ChefKilled { chef_id: 11 },
            GameEvent::ChefRespawned { chef_id: 11 },
            GameEvent::EnergyRefilled { energy: 700.0 },
            GameEvent::GameOver {
                cause: GameOverCause::Chef,
            },
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            assert!(json.contains("\"type\""), "tagged repr expected: {json}");
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Restart,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for c in commands {
            let json = serde_json::to_string(&c).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(c, back);
        }
    }

    // ---- Time & deadlines ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(1.0 / 60.0);
        time.advance(1.0 / 60.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 2.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_deadline_default_is_due() {
        let now = SimTime::default();
        assert!(Deadline::default().is_due(now));
    }

    #[test]
    fn test_deadline_after_and_remaining() {
        let mut now = SimTime::default();
        let deadline = Deadline::after(now, 2.0);
        assert!(!deadline.is_due(now));
        assert!((deadline.remaining(now) - 2.0).abs() < 1e-12);

        now.advance(1.5);
        assert!(!deadline.is_due(now));
        now.advance(0.5);
        assert!(deadline.is_due(now));
        assert_eq!(deadline.remaining(now), 0.0);
    }

    // ---- Yaw helpers ----

    #[test]
    fn test_yaw_dir_round_trip() {
        for yaw in [0.0, 0.7, -1.3, std::f64::consts::FRAC_PI_2] {
            let dir = yaw_dir(yaw);
            assert!((dir.length() - 1.0).abs() < 1e-12);
            assert!((dir_yaw(dir) - yaw).abs() < 1e-12);
        }
    }

    #[test]
    fn test_horizontal_distance_ignores_y() {
        let a = DVec3::new(0.0, 1.7, 0.0);
        let b = DVec3::new(3.0, 99.0, 4.0);
        assert!((horizontal_distance(a, b) - 5.0).abs() < 1e-12);
    }

    // ---- Catalog & config ----

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_weapon_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0].name, "Hand");
        assert_eq!(catalog[0].points_required, 0);
        assert_eq!(catalog[5].projectiles_per_shot, 1000);
        // Automatic entries carry their cooldown on the variant.
        assert!(matches!(
            catalog[1].firing,
            FiringMode::Automatic { cooldown_secs } if (cooldown_secs - 0.5).abs() < 1e-12
        ));
    }

    #[test]
    fn test_default_catalog_is_ordered() {
        assert!(Tuning::default().catalog_is_ordered());
    }

    #[test]
    fn test_unordered_catalog_detected() {
        let mut tuning = Tuning::default();
        tuning.weapons.swap(1, 4);
        assert!(!tuning.catalog_is_ordered());
    }

    #[test]
    fn test_tuning_serde_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.weapons, tuning.weapons);
        assert_eq!(back.npc.initial_count, tuning.npc.initial_count);
        assert_eq!(back.world.shop_position, tuning.world.shop_position);
    }

    // ---- Input ----

    #[test]
    fn test_default_input_has_no_intent() {
        let input = TickInput::default();
        assert!(!input.has_move_intent(0.1));
        assert!(!input.fire);
        assert!((input.camera_forward.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_analog_below_dead_zone_is_not_intent() {
        let mut input = TickInput::default();
        input.analog.x = 0.05;
        input.analog.y = -0.05;
        assert!(!input.has_move_intent(0.1));
        input.analog.y = -0.5;
        assert!(input.has_move_intent(0.1));
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\""));
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.npcs.len(), 0);
    }
}
