// ABOUTME: Normalized rectangle geometry for canvas layout.
// ABOUTME: Regions are positioned in 0.0-1.0 coordinates and scaled at render time.

/// Rectangle in normalized coordinates (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn full() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }

    /// Split into left/right halves at the given fraction of the width
    pub fn split_horizontal(self, fraction: f32) -> (Rect, Rect) {
        let left = Rect {
            x: self.x,
            y: self.y,
            width: self.width * fraction,
            height: self.height,
        };
        let right = Rect {
            x: self.x + self.width * fraction,
            y: self.y,
            width: self.width * (1.0 - fraction),
            height: self.height,
        };
        (left, right)
    }

    /// Split into top/bottom halves at the given fraction of the height
    pub fn split_vertical(self, fraction: f32) -> (Rect, Rect) {
        let top = Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height * fraction,
        };
        let bottom = Rect {
            x: self.x,
            y: self.y + self.height * fraction,
            width: self.width,
            height: self.height * (1.0 - fraction),
        };
        (top, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_covers_unit_square() {
        let rect = Rect::full();
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.width, 1.0);
        assert_eq!(rect.height, 1.0);
    }

    #[test]
    fn horizontal_split_halves_width() {
        let (left, right) = Rect::full().split_horizontal(0.5);
        assert!((left.width - 0.5).abs() < 0.001);
        assert!((right.width - 0.5).abs() < 0.001);
        assert!((right.x - 0.5).abs() < 0.001);
        assert_eq!(left.height, 1.0);
        assert_eq!(right.height, 1.0);
    }

    #[test]
    fn vertical_split_halves_height() {
        let (top, bottom) = Rect::full().split_vertical(0.5);
        assert!((top.height - 0.5).abs() < 0.001);
        assert!((bottom.height - 0.5).abs() < 0.001);
        assert!((bottom.y - 0.5).abs() < 0.001);
        assert_eq!(top.width, 1.0);
        assert_eq!(bottom.width, 1.0);
    }
}
