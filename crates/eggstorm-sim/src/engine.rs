//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and all economy state,
//! processes queued player commands at the tick boundary, runs the
//! systems in a fixed order, and produces `GameStateSnapshot`s. All
//! shared state is touched only from the tick path; externally
//! triggered mutations arrive through the command queue.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use eggstorm_core::commands::PlayerCommand;
use eggstorm_core::config::{SimConfig, Tuning};
use eggstorm_core::constants::MAX_TICK_DELTA_SECS;
use eggstorm_core::enums::GamePhase;
use eggstorm_core::events::GameEvent;
use eggstorm_core::input::TickInput;
use eggstorm_core::state::GameStateSnapshot;
use eggstorm_core::types::SimTime;

use crate::progression::PlayerEconomy;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: Tuning,
    rng: ChaCha8Rng,
    economy: PlayerEconomy,
    events: Vec<GameEvent>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    next_actor_id: u32,
    /// Fire intent seen last tick, for edge-triggering manual weapons.
    prev_fire: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        debug_assert!(
            config.tuning.catalog_is_ordered(),
            "weapon catalog must be ordered by points_required"
        );
        let economy = PlayerEconomy::new(&config.tuning);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            economy,
            events: Vec::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            next_actor_id: 0,
            prev_fire: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt_secs` elapsed time and
    /// return the resulting snapshot. Outside the `Active` phase the
    /// world is left untouched and the frozen state is returned.
    pub fn tick(&mut self, dt_secs: f64, input: &TickInput) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = sanitize_dt(dt_secs);
            let fire_edge = input.fire && !self.prev_fire;
            self.apply_selection(input);
            self.run_systems(dt, input, fire_edge);
            self.time.advance(dt);

            if self.economy.is_dead() {
                self.phase = GamePhase::GameOver;
            }
        }
        self.prev_fire = input.fire;

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, self.time, self.phase, &self.economy, events)
    }

    /// Read-only view of the current state, for hosts that render
    /// between ticks. Does not drain pending events — those belong to
    /// the snapshot returned by the next `tick`.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            &self.economy,
            Vec::new(),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                self.start_session();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Tear down and build a fresh session.
    fn start_session(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.economy = PlayerEconomy::new(&self.tuning);
        self.events.clear();
        self.next_actor_id = 0;
        self.prev_fire = false;

        world_setup::setup_world(
            &mut self.world,
            &mut self.rng,
            &self.tuning,
            &mut self.next_actor_id,
        );
        self.phase = GamePhase::Active;
        tracing::info!("session started");
    }

    /// Apply view toggle and hotbar selection from this tick's input.
    /// Locked or out-of-range selections are silent no-ops.
    fn apply_selection(&mut self, input: &TickInput) {
        if input.toggle_view {
            self.economy.toggle_view();
        }
        if let Some(slot) = input.weapon_select {
            self.economy.select_weapon(slot);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64, input: &TickInput, fire_edge: bool) {
        // 1. Player movement (camera-relative, energy-gated speed)
        systems::player_movement::run(&mut self.world, &self.economy, &self.tuning, input, dt);
        // 2. NPC wander/flee AI + integration
        systems::npc_ai::run(&mut self.world, &mut self.rng, &self.tuning, self.time, dt);
        // 3. Chef pursuit + deadline-checked respawn
        systems::chef_ai::run(
            &mut self.world,
            &mut self.rng,
            &self.tuning,
            self.time,
            dt,
            &mut self.events,
        );
        // 4. Fire control (weapon gating, projectile spawn)
        systems::fire_control::run(
            &mut self.world,
            &mut self.economy,
            &self.tuning,
            input,
            fire_edge,
            &mut self.rng,
            self.time,
            &mut self.next_actor_id,
        );
        // 5. Projectile advance + expiry
        systems::projectiles::run(
            &mut self.world,
            &self.tuning,
            self.time,
            dt,
            &mut self.despawn_buffer,
        );
        // 6. Collision resolution + chef melee
        systems::collision::run(
            &mut self.world,
            &mut self.economy,
            &mut self.rng,
            &self.tuning,
            self.time,
            &mut self.next_actor_id,
            &mut self.events,
        );
        // 7. Economy (energy drain, starvation, shop)
        systems::economy::run(
            &mut self.world,
            &mut self.economy,
            &self.tuning,
            input,
            self.time,
            &mut self.events,
        );
    }
}

/// Defensive delta clamp: a stalled host frame advances by at most
/// MAX_TICK_DELTA_SECS, and negative or NaN deltas advance nothing.
fn sanitize_dt(dt_secs: f64) -> f64 {
    if dt_secs.is_finite() {
        dt_secs.clamp(0.0, MAX_TICK_DELTA_SECS)
    } else {
        0.0
    }
}

#[cfg(test)]
impl SimulationEngine {
    /// Read-only economy access for tests.
    pub fn economy(&self) -> &PlayerEconomy {
        &self.economy
    }

    /// Mutable economy access for tests.
    pub fn economy_mut(&mut self) -> &mut PlayerEconomy {
        &mut self.economy
    }

    /// Spawn an NPC at a fixed position (bypasses random placement).
    pub fn spawn_test_npc(&mut self, position: glam::DVec3) -> u32 {
        use eggstorm_core::components::*;
        use eggstorm_core::enums::NpcMode;
        use eggstorm_core::types::Deadline;

        let id = self.next_actor_id;
        self.next_actor_id += 1;
        self.world.spawn((
            Npc,
            ActorId(id),
            Position(position),
            Heading(0.0),
            NpcBehavior {
                mode: NpcMode::Wander,
                next_heading_change: Deadline::after(self.time, 1.0),
                flee_until: Deadline::default(),
            },
        ));
        id
    }

    /// Spawn a chef at a fixed position.
    pub fn spawn_test_chef(&mut self, position: glam::DVec3) -> u32 {
        use eggstorm_core::components::*;

        let id = self.next_actor_id;
        self.next_actor_id += 1;
        self.world.spawn((
            Chef,
            ActorId(id),
            Position(position),
            Heading(0.0),
            ChefState::default(),
        ));
        id
    }

    /// Spawn a projectile with an explicit velocity.
    pub fn spawn_test_projectile(&mut self, position: glam::DVec3, velocity: glam::DVec3) -> u32 {
        use eggstorm_core::components::*;
        use eggstorm_core::types::Deadline;

        let id = self.next_actor_id;
        self.next_actor_id += 1;
        self.world.spawn((
            ActorId(id),
            Position(position),
            Velocity(velocity),
            ProjectileState {
                expires_at: Deadline::after(self.time, self.tuning.projectile.lifetime_secs),
            },
        ));
        id
    }

    /// Move the player avatar somewhere specific.
    pub fn set_player_position(&mut self, position: glam::DVec3) {
        use eggstorm_core::components::{PlayerAvatar, Position};
        for (_entity, (_player, pos)) in self.world.query_mut::<(&PlayerAvatar, &mut Position)>() {
            pos.0 = position;
        }
    }
}
