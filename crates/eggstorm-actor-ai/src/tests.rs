#[cfg(test)]
mod tests {
    use glam::DVec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use eggstorm_core::config::NpcTuning;
    use eggstorm_core::enums::NpcMode;
    use eggstorm_core::types::{yaw_dir, Deadline, SimTime};

    use crate::fsm::{chef_pursuit_heading, evaluate_npc, sample_wander, NpcContext};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn time(elapsed_secs: f64) -> SimTime {
        SimTime {
            tick: 0,
            elapsed_secs,
        }
    }

    fn wander_context(now: SimTime, next_heading_change: Deadline) -> NpcContext {
        NpcContext {
            mode: NpcMode::Wander,
            heading: 1.0,
            next_heading_change,
            flee_until: Deadline::default(),
            position: DVec3::new(10.0, 0.8, 10.0),
            player_position: DVec3::new(0.0, 1.7, 0.0),
            now,
        }
    }

    #[test]
    fn test_wander_keeps_heading_before_deadline() {
        let now = time(1.0);
        let ctx = wander_context(now, Deadline::after(now, 2.0));
        let update = evaluate_npc(&ctx, &NpcTuning::default(), &mut rng());
        assert_eq!(update.mode, NpcMode::Wander);
        assert_eq!(update.heading, 1.0);
        assert_eq!(update.next_heading_change, ctx.next_heading_change);
    }

    #[test]
    fn test_wander_resamples_on_due_deadline() {
        let now = time(10.0);
        let tuning = NpcTuning::default();
        let ctx = wander_context(now, Deadline::at(10.0));
        let update = evaluate_npc(&ctx, &tuning, &mut rng());
        assert_eq!(update.mode, NpcMode::Wander);
        assert!((0.0..std::f64::consts::TAU).contains(&update.heading));
        // Fresh deadline lands inside the configured interval.
        let remaining = update.next_heading_change.remaining(now);
        assert!(remaining >= tuning.heading_change_min_secs);
        assert!(remaining < tuning.heading_change_max_secs);
    }

    #[test]
    fn test_flee_points_away_from_player() {
        let now = time(0.0);
        let ctx = NpcContext {
            mode: NpcMode::Flee,
            heading: 0.0,
            next_heading_change: Deadline::after(now, 100.0),
            flee_until: Deadline::after(now, 5.0),
            position: DVec3::new(3.0, 0.8, 4.0),
            player_position: DVec3::new(0.0, 1.7, 0.0),
            now,
        };
        let update = evaluate_npc(&ctx, &NpcTuning::default(), &mut rng());
        assert_eq!(update.mode, NpcMode::Flee);
        // Moving along the returned heading increases distance from the player.
        let dir = yaw_dir(update.heading);
        let moved = ctx.position + dir;
        let before = (ctx.position - ctx.player_position).length();
        let after = (moved - ctx.player_position).length();
        assert!(after > before);
    }

    #[test]
    fn test_flee_overrides_wander_timer() {
        // Even with the wander resample long overdue, a fleeing NPC keeps
        // running from the player.
        let now = time(50.0);
        let ctx = NpcContext {
            mode: NpcMode::Flee,
            heading: 0.0,
            next_heading_change: Deadline::at(0.0),
            flee_until: Deadline::after(now, 1.0),
            position: DVec3::new(-5.0, 0.8, 0.0),
            player_position: DVec3::ZERO,
            now,
        };
        let update = evaluate_npc(&ctx, &NpcTuning::default(), &mut rng());
        assert_eq!(update.mode, NpcMode::Flee);
        assert_eq!(update.next_heading_change, ctx.next_heading_change);
    }

    #[test]
    fn test_flee_expiry_reverts_to_wander_with_fresh_heading() {
        let now = time(20.0);
        let tuning = NpcTuning::default();
        let ctx = NpcContext {
            mode: NpcMode::Flee,
            heading: 2.5,
            // Not yet due on its own, but flee expiry forces a resample.
            next_heading_change: Deadline::after(now, 99.0),
            flee_until: Deadline::at(20.0),
            position: DVec3::new(3.0, 0.8, 4.0),
            player_position: DVec3::ZERO,
            now,
        };
        let update = evaluate_npc(&ctx, &tuning, &mut rng());
        assert_eq!(update.mode, NpcMode::Wander);
        let remaining = update.next_heading_change.remaining(now);
        assert!(remaining >= tuning.heading_change_min_secs);
        assert!(remaining < tuning.heading_change_max_secs);
    }

    #[test]
    fn test_flee_degenerate_offset_keeps_heading() {
        let now = time(0.0);
        let ctx = NpcContext {
            mode: NpcMode::Flee,
            heading: 1.25,
            next_heading_change: Deadline::after(now, 3.0),
            flee_until: Deadline::after(now, 5.0),
            position: DVec3::new(0.0, 0.8, 0.0),
            player_position: DVec3::new(0.0, 1.7, 0.0),
            now,
        };
        let update = evaluate_npc(&ctx, &NpcTuning::default(), &mut rng());
        assert_eq!(update.mode, NpcMode::Flee);
        assert_eq!(update.heading, 1.25);
    }

    #[test]
    fn test_sample_wander_deterministic_with_seed() {
        let tuning = NpcTuning::default();
        let now = time(0.0);
        let (h1, d1) = sample_wander(now, &tuning, &mut rng());
        let (h2, d2) = sample_wander(now, &tuning, &mut rng());
        assert_eq!(h1, h2);
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_chef_pursuit_heading_points_at_player() {
        let chef = DVec3::new(10.0, 0.9, 10.0);
        let player = DVec3::new(0.0, 1.7, 0.0);
        let heading = chef_pursuit_heading(chef, player, 0.0);
        let dir = yaw_dir(heading);
        let before = (chef - player).length();
        let after = (chef + dir - player).length();
        assert!(after < before, "pursuit should close distance");
    }

    #[test]
    fn test_chef_pursuit_degenerate_keeps_current() {
        let spot = DVec3::new(5.0, 0.9, 5.0);
        let heading = chef_pursuit_heading(spot, DVec3::new(5.0, 1.7, 5.0), 0.75);
        assert_eq!(heading, 0.75);
    }
}
