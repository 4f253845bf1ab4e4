//! Render snapshot: everything the presentation layer needs to draw a frame
//!
//! The simulation never touches a scene graph. Once per frame the driver
//! captures a snapshot and hands it to the renderer (as JSON across the wasm
//! boundary).

use glam::Vec3;
use serde::Serialize;

use super::state::SessionState;
use crate::heading_yaw;

/// Player camera pose
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerPose {
    pub pos: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// One fish as the renderer sees it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FishPose {
    pub id: u32,
    pub pos: Vec3,
    /// Visual facing, looking along the swim heading
    pub yaw: f32,
    pub species: &'static str,
    pub size: f32,
    pub color: u32,
}

/// One lure projectile as the renderer sees it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LurePose {
    pub id: u32,
    pub pos: Vec3,
    pub color: u32,
}

/// Per-frame snapshot of the world state
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub player: PlayerPose,
    pub fish: Vec<FishPose>,
    pub lures: Vec<LurePose>,
}

impl RenderSnapshot {
    pub fn capture(state: &SessionState) -> Self {
        Self {
            player: PlayerPose {
                pos: state.player.rig.pos,
                yaw: state.player.rig.yaw,
                pitch: state.player.rig.pitch,
            },
            fish: state
                .fish
                .iter()
                .map(|f| FishPose {
                    id: f.id,
                    pos: f.pos,
                    yaw: heading_yaw(f.heading),
                    species: f.species.name(),
                    size: f.species.size(),
                    color: f.species.color(),
                })
                .collect(),
            lures: state
                .lures
                .iter()
                .map(|l| LurePose {
                    id: l.id,
                    pos: l.pos,
                    color: l.kind.color(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SessionPhase, spawn_fish};

    #[test]
    fn test_snapshot_mirrors_populations() {
        let mut state = SessionState::new(3);
        state.phase = SessionPhase::Playing;
        spawn_fish(&mut state);
        spawn_fish(&mut state);

        let snap = RenderSnapshot::capture(&state);
        assert_eq!(snap.fish.len(), 2);
        assert!(snap.lures.is_empty());
        assert_eq!(snap.fish[0].pos, state.fish[0].pos);

        // Snapshots serialize for the wasm boundary
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"fish\""));
    }
}
