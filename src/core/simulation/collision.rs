//=========================================================================
// Collision Evaluator
//=========================================================================
//
// Per-frame contact test of the player box against every pike proxy.
//
// Contact is advisory only: nothing is pushed apart, the result just
// drives the player's color. Everything is re-evaluated from scratch
// each frame.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::geometry::Aabb;
use super::obstacle::Obstacle;

//=== Contact =============================================================

/// Result of one collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contact {
    /// Index of the first obstacle touched, if any.
    pub first_hit: Option<usize>,
}

impl Contact {
    #[inline]
    pub fn is_colliding(&self) -> bool {
        self.first_hit.is_some()
    }
}

//=== evaluate() ==========================================================

/// Tests `player_box` against each obstacle proxy.
pub fn evaluate(player_box: &Aabb, obstacles: &[Obstacle]) -> Contact {
    let first_hit = obstacles
        .iter()
        .position(|obstacle| player_box.overlaps(&obstacle.bounding_box()));

    Contact { first_hit }
}

//=========================================================================
// Unit Tests
//=========================================================================
