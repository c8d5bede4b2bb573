//=========================================================================
// Diagnostics
//=========================================================================
//
// Human-readable coordinate reports shown on the HUD.
//
// Formatting only. The pike report spans the full bottom radius, wider
// than the collision proxy, so the numbers shown are not the proxy.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt::Write;

//=== Internal Dependencies ===============================================

use crate::core::simulation::{Obstacle, Player};

//=== Diagnostics =========================================================

/// Text lines for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub flying: String,
    pub player: String,
    pub obstacles: Vec<String>,
}

impl Diagnostics {
    pub fn collect(player: &Player, obstacles: &[Obstacle]) -> Self {
        Self {
            flying: format!("Flying: {}", player.is_flying()),
            player: player_report(player),
            obstacles: obstacles.iter().map(obstacle_report).collect(),
        }
    }
}

/// Center plus x/z extents of the player cube.
pub fn player_report(player: &Player) -> String {
    let p = player.position;
    let half = player.size() / 2.0;

    let mut out = String::new();
    let _ = writeln!(out, "posX: {} posZ: {} posY: {}", p.x, p.z, p.y);
    let _ = writeln!(out, "maxX: {} maxZ: {}", p.x + half.x, p.z + half.z);
    let _ = write!(out, "minX: {} minZ: {}", p.x - half.x, p.z - half.z);
    out
}

/// Center plus x/z extents of a pike's drawn base.
pub fn obstacle_report(obstacle: &Obstacle) -> String {
    let p = obstacle.position;
    let r = obstacle.bottom_radius;

    let mut out = String::new();
    let _ = writeln!(out, "posX: {} posZ: {} posY: {}", p.x, p.z, p.y);
    let _ = writeln!(out, "maxX: {} maxZ: {}", p.x + r, p.z + r);
    let _ = write!(out, "minX: {} minZ: {}", p.x - r, p.z - r);
    out
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::simulation::arena_obstacles;
    use glam::Vec3;

    #[test]
    fn player_report_lists_center_and_extents() {
        let player = Player::at(Vec3::new(1.5, 0.0, -2.0));
        let report = player_report(&player);

        assert_eq!(report, "posX: 1.5 posZ: -2 posY: 0\nmaxX: 2 maxZ: -1.5\nminX: 1 minZ: -2.5");
    }

    #[test]
    fn obstacle_report_uses_full_bottom_radius() {
        let report = obstacle_report(&arena_obstacles()[0]);

        assert!(report.contains("maxX: -1.5 maxZ: -1.5"), "{}", report);
        assert!(report.contains("minX: -2.5 minZ: -2.5"), "{}", report);
    }

    #[test]
    fn collect_reports_every_obstacle() {
        let diagnostics = Diagnostics::collect(&Player::new(), &arena_obstacles());

        assert_eq!(diagnostics.flying, "Flying: false");
        assert_eq!(diagnostics.obstacles.len(), 2);
    }
}
