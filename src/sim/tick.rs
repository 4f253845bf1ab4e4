//! Per-frame simulation update
//!
//! One `tick` call per rendered frame, driven by the elapsed frame time from
//! the rendering driver. Order within a frame: player motion, then
//! projectiles, then fish (each fish runs catch detection), then spawn
//! scheduling. All timers compare against the session clock; nothing is
//! scheduled outside the frame call.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::catch::first_lure_in_reach;
use super::motion::{self, MoveIntents};
use super::species::Species;
use super::state::{FishEntity, GameEvent, LureProjectile, SessionPhase, SessionState};
use crate::consts::*;
use crate::{horizontal_distance, toward_center};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Held movement flags
    pub moves: MoveIntents,
    /// Cast the selected lure (one-shot)
    pub cast: bool,
    /// Lure selection index, 0-3 (out-of-range is ignored)
    pub select_lure: Option<usize>,
    /// Start action from the menu (one-shot)
    pub start: bool,
    /// Whether pointer capture is currently engaged
    pub pointer_locked: bool,
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut SessionState, input: &FrameInput, dt: f32) {
    let dt = dt.max(0.0);

    match state.phase {
        SessionPhase::Menu => {
            if input.start {
                state.begin_loading();
            }
        }

        SessionPhase::Loading => {
            state.clock += dt;
            advance_loading(state, dt);
        }

        SessionPhase::Playing => {
            state.clock += dt;

            if let Some(index) = input.select_lure {
                state.select_lure(index);
            }

            // Player motion, then soft containment
            state.player.velocity = Vec3::ZERO;
            let (strafe, walk) = motion::integrate(&mut state.player.rig, &input.moves, dt);
            state.player.velocity = Vec3::new(strafe, 0.0, walk);
            motion::contain(&mut state.player.rig);

            // Cast requires pointer capture; otherwise a no-op
            if input.cast && input.pointer_locked {
                cast_lure(state);
            }

            update_lures(state, dt);
            update_fish(state, dt);

            // Level-triggered spawn attempts on a fixed interval
            state.spawn_timer += dt;
            while state.spawn_timer >= FISH_SPAWN_INTERVAL {
                state.spawn_timer -= FISH_SPAWN_INTERVAL;
                if state.fish.len() < FISH_POPULATION_CAP {
                    spawn_fish(state);
                }
            }
        }
    }
}

/// Loading bar: a progress bump every tick interval, then a short linger
/// before gameplay begins
fn advance_loading(state: &mut SessionState, dt: f32) {
    let bar = &mut state.loading;
    if bar.progress < 100.0 {
        bar.tick_timer += dt;
        while bar.tick_timer >= LOADING_TICK && bar.progress < 100.0 {
            bar.tick_timer -= LOADING_TICK;
            bar.progress = (bar.progress + state.rng.random_range(0.0..10.0)).min(100.0);
        }
        return;
    }

    bar.linger += dt;
    if bar.linger >= LOADING_LINGER {
        state.phase = SessionPhase::Playing;
        log::info!("Session active");
        if !state.stocked {
            state.stocked = true;
            for _ in 0..FISH_INITIAL_COUNT {
                spawn_fish(state);
            }
        }
    }
}

/// Cast the selected lure from the eye position along the full look
/// direction (pitch included)
fn cast_lure(state: &mut SessionState) {
    let id = state.next_entity_id();
    let kind = state.selected_lure;
    let lure = LureProjectile {
        id,
        pos: state.eye_pos(),
        vel: state.player.rig.look_dir() * LURE_LAUNCH_SPEED,
        kind,
        cast_at: state.clock,
    };
    state.lures.push(lure);
    state.events.push(GameEvent::Cast { kind });
    log::debug!("Cast {} ({} in flight)", kind.name(), state.lures.len());
}

/// Advance lure projectiles. Expiry is checked before physics: a lure past
/// its TTL is removed without moving that frame. Lures crossing the
/// waterline settle with a one-sided inelastic bounce.
fn update_lures(state: &mut SessionState, dt: f32) {
    let clock = state.clock;
    state.lures.retain(|lure| clock - lure.cast_at < LURE_TTL);

    for lure in &mut state.lures {
        lure.pos += lure.vel * dt;
        if lure.pos.y < LURE_WATER_LINE {
            lure.pos.y = LURE_WATER_LINE;
            lure.vel.y *= LURE_REBOUND;
            lure.vel.x *= LURE_DRAG;
            lure.vel.z *= LURE_DRAG;
        }
    }
}

/// Advance fish: wander, scheduled heading changes, center-seeking bias, and
/// catch detection. Fish are visited in spawn order; a catch removes the
/// fish and the matched lure before the next fish is checked.
fn update_fish(state: &mut SessionState, dt: f32) {
    let clock = state.clock;
    let fish = &mut state.fish;
    let lures = &mut state.lures;
    let rng = &mut state.rng;
    let score = &mut state.score;
    let fish_caught = &mut state.fish_caught;
    let events = &mut state.events;

    let mut i = 0;
    while i < fish.len() {
        let f = &mut fish[i];
        f.pos += f.heading * f.species.speed() * dt;

        if clock >= f.next_turn_at {
            f.heading = random_heading(rng);
            f.next_turn_at = clock + rng.random_range(FISH_TURN_MIN..FISH_TURN_MAX);
        }

        // Gradual curve back toward the lake interior. The blend leaves the
        // scheduled turn timer alone and cannot cancel the heading, so the
        // renormalized result stays unit length.
        if horizontal_distance(f.pos) > FISH_SOFT_RADIUS {
            f.heading = f
                .heading
                .lerp(toward_center(f.pos), FISH_CENTER_BLEND)
                .normalize_or_zero();
        }

        let pos = f.pos;
        if let Some(j) = first_lure_in_reach(pos, lures) {
            let caught = fish.remove(i);
            lures.remove(j);
            let points = caught.species.points();
            *score += points;
            *fish_caught += 1;
            events.push(GameEvent::Caught {
                species: caught.species,
                points,
            });
            log::info!(
                "Caught {} (+{} points, {} total)",
                caught.species.name(),
                points,
                *score
            );
            continue;
        }

        i += 1;
    }
}

/// Spawn one fish: uniform species, uniform position in the spawn annulus,
/// uniform horizontal heading
pub fn spawn_fish(state: &mut SessionState) {
    let id = state.next_entity_id();
    let clock = state.clock;
    let rng = &mut state.rng;

    let species = Species::ALL[rng.random_range(0..Species::ALL.len())];
    let radius = rng.random_range(FISH_SPAWN_RADIUS_MIN..FISH_SPAWN_RADIUS_MAX);
    let angle = rng.random_range(0.0..TAU);
    let heading = random_heading(rng);
    let next_turn_at = clock + rng.random_range(FISH_TURN_MIN..FISH_TURN_MAX);

    state.fish.push(FishEntity {
        id,
        pos: Vec3::new(angle.cos() * radius, FISH_SWIM_DEPTH, angle.sin() * radius),
        species,
        heading,
        next_turn_at,
    });
    log::debug!(
        "Spawned {} ({} in the lake)",
        species.name(),
        state.fish.len()
    );
}

/// Uniform random horizontal unit heading
fn random_heading(rng: &mut Pcg32) -> Vec3 {
    let angle = rng.random_range(0.0..TAU);
    Vec3::new(angle.cos(), 0.0, angle.sin())
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Heading stays unit length through any sequence of updates
        #[test]
        fn prop_fish_heading_stays_unit(seed in 0u64..512, steps in 1usize..120) {
            let mut state = SessionState::new(seed);
            state.phase = SessionPhase::Playing;
            state.stocked = true;
            let input = FrameInput { pointer_locked: true, ..Default::default() };
            for _ in 0..steps {
                tick(&mut state, &input, 0.05);
            }
            for f in &state.fish {
                prop_assert!((f.heading.length() - 1.0).abs() < 1e-4);
            }
        }

        /// Position integration is exact for lures above the waterline
        #[test]
        fn prop_lure_integration(dt in 0.0f32..0.1, vx in -1.0f32..1.0, vz in -1.0f32..1.0) {
            let mut state = SessionState::new(0);
            state.phase = SessionPhase::Playing;
            state.stocked = true;
            let id = state.next_entity_id();
            let vel = glam::Vec3::new(vx, 0.0, vz);
            state.lures.push(crate::sim::LureProjectile {
                id,
                pos: glam::Vec3::new(0.0, 5.0, 0.0),
                vel,
                kind: crate::sim::LureKind::Basic,
                cast_at: 0.0,
            });
            let input = FrameInput { pointer_locked: true, ..Default::default() };
            tick(&mut state, &input, dt);
            let expected = glam::Vec3::new(0.0, 5.0, 0.0) + vel * dt;
            prop_assert!(state.lures[0].pos.distance(expected) < 1e-5);
        }
    }
}
