//! Catch detection between fish and cast lures
//!
//! Detection only; removal, scoring, and events are resolved by the frame
//! update. Iteration order is part of the contract: fish are scanned in
//! spawn order and each fish checks lures in cast order, stopping at the
//! first match, so at most one catch per fish per frame and a consumed lure
//! is gone before later fish are scanned.

use glam::Vec3;

use super::state::LureProjectile;
use crate::consts::CATCH_RADIUS;

/// True when the lure is close enough for the fish to take it
#[inline]
pub fn lure_in_reach(fish_pos: Vec3, lure_pos: Vec3) -> bool {
    fish_pos.distance(lure_pos) < CATCH_RADIUS
}

/// Index of the first lure (cast order) within catch radius of the fish
pub fn first_lure_in_reach(fish_pos: Vec3, lures: &[LureProjectile]) -> Option<usize> {
    lures
        .iter()
        .position(|lure| lure_in_reach(fish_pos, lure.pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::species::LureKind;

    fn lure_at(id: u32, pos: Vec3) -> LureProjectile {
        LureProjectile {
            id,
            pos,
            vel: Vec3::ZERO,
            kind: LureKind::Basic,
            cast_at: 0.0,
        }
    }

    #[test]
    fn test_catch_radius_boundary() {
        let fish = Vec3::new(0.0, -1.0, 0.0);
        // Just inside the radius: catch
        assert!(lure_in_reach(fish, Vec3::new(0.0, -1.0, 1.9)));
        // Just outside: no catch
        assert!(!lure_in_reach(fish, Vec3::new(0.0, -1.0, 2.1)));
    }

    #[test]
    fn test_vertical_distance_counts() {
        // Euclidean distance, not horizontal: a lure 3 units above misses
        let fish = Vec3::new(0.0, -1.0, 0.0);
        assert!(!lure_in_reach(fish, Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_first_match_is_cast_order() {
        let fish = Vec3::new(0.0, -1.0, 0.0);
        let lures = [
            lure_at(1, Vec3::new(50.0, 0.0, 0.0)),
            lure_at(2, Vec3::new(0.0, -1.0, 1.0)),
            lure_at(3, Vec3::new(0.0, -1.0, 0.5)),
        ];
        // Both 2 and 3 are in reach; the earlier cast wins
        assert_eq!(first_lure_in_reach(fish, &lures), Some(1));
    }

    #[test]
    fn test_no_lures_no_catch() {
        assert_eq!(first_lure_in_reach(Vec3::ZERO, &[]), None);
    }
}
