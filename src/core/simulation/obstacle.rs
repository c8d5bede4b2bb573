//=========================================================================
// Obstacles
//=========================================================================
//
// Static cone-shaped pikes and their collision proxies.
//
// A pike is drawn as a cylinder with a zero top radius. Its proxy is an
// AABB centered on the pike that reaches only half the bottom radius
// sideways, so the proxy is narrower than the drawn footprint.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::geometry::Aabb;
use crate::core::render::Color;

//=== Constants ===========================================================

/// Fraction of the bottom radius used as the proxy's x/z half-extent.
pub const OBSTACLE_FOOTPRINT_SCALE: f32 = 0.5;

/// Fraction of the height used as the proxy's y half-extent.
pub const OBSTACLE_HEIGHT_SCALE: f32 = 0.5;

/// Number of pikes placed in the arena.
pub const OBSTACLE_COUNT: usize = 2;

//=== Obstacle ============================================================

/// Immutable pike description, re-supplied to the renderer every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec3,
    pub top_radius: f32,
    pub bottom_radius: f32,
    pub height: f32,
    pub slices: u32,
    pub color: Color,
}

impl Obstacle {
    /// Pike of the arena's standard shape placed at `position`.
    pub const fn pike(position: Vec3) -> Self {
        Self {
            position,
            top_radius: 0.0,
            bottom_radius: 0.5,
            height: 1.0,
            slices: 8,
            color: Color::BLUE,
        }
    }

    /// Half-extents of the collision proxy.
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(
            self.bottom_radius * OBSTACLE_FOOTPRINT_SCALE,
            self.height * OBSTACLE_HEIGHT_SCALE,
            self.bottom_radius * OBSTACLE_FOOTPRINT_SCALE,
        )
    }

    /// Collision proxy centered on the pike position.
    #[inline]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, self.half_extents())
    }
}

/// The two pikes of the arena, at (-2, 0, -2) and (-2, 0, 2).
pub fn arena_obstacles() -> [Obstacle; OBSTACLE_COUNT] {
    [
        Obstacle::pike(Vec3::new(-2.0, 0.0, -2.0)),
        Obstacle::pike(Vec3::new(-2.0, 0.0, 2.0)),
    ]
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_has_two_pikes_at_fixed_positions() {
        let pikes = arena_obstacles();

        assert_eq!(pikes[0].position, Vec3::new(-2.0, 0.0, -2.0));
        assert_eq!(pikes[1].position, Vec3::new(-2.0, 0.0, 2.0));
    }

    #[test]
    fn pike_shape_matches_arena_defaults() {
        let pike = Obstacle::pike(Vec3::ZERO);

        assert_eq!(pike.top_radius, 0.0);
        assert_eq!(pike.bottom_radius, 0.5);
        assert_eq!(pike.height, 1.0);
        assert_eq!(pike.slices, 8);
        assert_eq!(pike.color, Color::BLUE);
    }

    #[test]
    fn proxy_uses_half_the_bottom_radius() {
        let pike = Obstacle::pike(Vec3::new(-2.0, 0.0, -2.0));
        let aabb = pike.bounding_box();

        assert_eq!(aabb.min, Vec3::new(-2.25, -0.5, -2.25));
        assert_eq!(aabb.max, Vec3::new(-1.75, 0.5, -1.75));
    }

    #[test]
    fn proxy_is_narrower_than_drawn_footprint() {
        let pike = Obstacle::pike(Vec3::ZERO);
        let proxy_width = pike.bounding_box().size().x;

        assert!(proxy_width < pike.bottom_radius * 2.0);
    }
}
