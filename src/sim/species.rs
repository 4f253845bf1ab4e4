//! Static reference data: fish species and lure types
//!
//! Read-only tables; gameplay code matches on the variants, the renderer
//! reads the color tags.

use serde::{Deserialize, Serialize};

/// Fish species roaming the lake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Bass,
    Pike,
    Trout,
    Walleye,
}

impl Species {
    /// All species, in table order (uniform spawn draws index into this)
    pub const ALL: [Species; 4] = [
        Species::Bass,
        Species::Pike,
        Species::Trout,
        Species::Walleye,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Species::Bass => "Bass",
            Species::Pike => "Pike",
            Species::Trout => "Trout",
            Species::Walleye => "Walleye",
        }
    }

    /// Points awarded on catch
    pub fn points(&self) -> u32 {
        match self {
            Species::Bass => 50,
            Species::Pike => 75,
            Species::Trout => 40,
            Species::Walleye => 60,
        }
    }

    /// Swim speed (units/second)
    pub fn speed(&self) -> f32 {
        match self {
            Species::Bass => 0.8,
            Species::Pike => 1.2,
            Species::Trout => 1.5,
            Species::Walleye => 0.9,
        }
    }

    /// Visual scale factor
    pub fn size(&self) -> f32 {
        match self {
            Species::Bass => 1.0,
            Species::Pike => 1.2,
            Species::Trout => 0.9,
            Species::Walleye => 1.1,
        }
    }

    /// Body color as 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            Species::Bass => 0x267F00,
            Species::Pike => 0x3A7D44,
            Species::Trout => 0x8C5E58,
            Species::Walleye => 0xC9AE5D,
        }
    }
}

/// Player-selectable lure types. Cosmetic only: the type tag drives the
/// projectile color, not catch behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LureKind {
    #[default]
    Basic,
    Spinner,
    Jig,
    Crankbait,
}

impl LureKind {
    /// All lure types, in selection order (keys 1-4)
    pub const ALL: [LureKind; 4] = [
        LureKind::Basic,
        LureKind::Spinner,
        LureKind::Jig,
        LureKind::Crankbait,
    ];

    /// Lure for a selection index; None when the index is out of range
    pub fn from_index(index: usize) -> Option<LureKind> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            LureKind::Basic => "Basic",
            LureKind::Spinner => "Spinner",
            LureKind::Jig => "Jig",
            LureKind::Crankbait => "Crankbait",
        }
    }

    /// Lure color as 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            LureKind::Basic => 0xFFFFFF,
            LureKind::Spinner => 0xC0C0C0,
            LureKind::Jig => 0xFFD700,
            LureKind::Crankbait => 0xFF6347,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lure_from_index() {
        assert_eq!(LureKind::from_index(0), Some(LureKind::Basic));
        assert_eq!(LureKind::from_index(3), Some(LureKind::Crankbait));
        assert_eq!(LureKind::from_index(4), None);
    }

    #[test]
    fn test_species_table_order() {
        // Spawn draws index into ALL; keep the table aligned with the names
        assert_eq!(Species::ALL[0].name(), "Bass");
        assert_eq!(Species::ALL[0].points(), 50);
        assert_eq!(Species::ALL[1].points(), 75);
    }
}
