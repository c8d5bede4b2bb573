//=========================================================================
// Color
//=========================================================================
//
// 8-bit RGBA color and the fixed palette used by the arena.
//
//=========================================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    //--- Palette ----------------------------------------------------------

    /// Player with no contact.
    pub const GREEN: Self = Self::rgba(0, 228, 48, 255);

    /// Player touching a pike.
    pub const RED: Self = Self::rgba(230, 41, 55, 255);

    /// Pike wireframes.
    pub const BLUE: Self = Self::rgba(0, 121, 241, 255);

    /// Ground plane and HUD text.
    pub const DARK_GRAY: Self = Self::rgba(80, 80, 80, 255);

    /// Background clear color.
    pub const RAY_WHITE: Self = Self::rgba(245, 245, 245, 255);

    /// Bounding-box wireframes.
    pub const WIRE_CYAN: Self = Self::rgba(39, 245, 219, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::RAY_WHITE
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_and_danger_colors_differ() {
        assert_ne!(Color::GREEN, Color::RED);
    }

    #[test]
    fn palette_is_opaque() {
        for color in [Color::GREEN, Color::RED, Color::BLUE, Color::DARK_GRAY, Color::RAY_WHITE, Color::WIRE_CYAN] {
            assert_eq!(color.a, 255, "{:?}", color);
        }
    }
}
