// ABOUTME: Color representation for region tints.
// ABOUTME: Supports RGB constants and a deterministic palette cycle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Pale blue tint
    pub const SKY: Self = Self::rgb(0.68, 0.82, 0.95);

    /// Pale green tint
    pub const MINT: Self = Self::rgb(0.70, 0.92, 0.75);

    /// Pale yellow tint
    pub const SAND: Self = Self::rgb(0.97, 0.90, 0.66);

    /// Pale red tint
    pub const ROSE: Self = Self::rgb(0.96, 0.73, 0.73);

    /// Pale purple tint
    pub const LILAC: Self = Self::rgb(0.85, 0.75, 0.95);

    /// Pale orange tint
    pub const PEACH: Self = Self::rgb(0.98, 0.81, 0.67);

    /// Hex string for display ("#aabbcc", alpha ignored)
    pub fn to_hex(self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::SKY
    }
}

/// Deterministic color source for new region tints.
///
/// Cycles through a fixed set of colors so repeated sessions assign the same
/// tints in the same order.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    next: usize,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors, next: 0 }
    }

    pub fn presets() -> Vec<Color> {
        vec![
            Color::SKY,
            Color::MINT,
            Color::SAND,
            Color::ROSE,
            Color::LILAC,
            Color::PEACH,
        ]
    }

    /// Next tint in the cycle. Falls back to the default color when empty.
    pub fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return Color::default();
        }
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Self::presets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_deterministically() {
        let mut palette = Palette::new(vec![Color::SKY, Color::MINT]);
        assert_eq!(palette.next_color(), Color::SKY);
        assert_eq!(palette.next_color(), Color::MINT);
        assert_eq!(palette.next_color(), Color::SKY);
    }

    #[test]
    fn empty_palette_falls_back_to_default() {
        let mut palette = Palette::new(Vec::new());
        assert_eq!(palette.next_color(), Color::default());
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).to_hex(), "#000000");
    }
}
