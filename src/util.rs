//! Utility functions for arrowhead geometry and pixel rectangles.

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates arrowhead points with custom length and angle.
///
/// Creates a V-shaped arrowhead at position (x1, y1) pointing in the direction
/// from (x2, y2) to (x1, y1). The arrowhead length is automatically capped at
/// 30% of the line length to prevent weird-looking arrows on short lines.
///
/// # Arguments
/// * `x1` - Arrowhead tip X coordinate
/// * `y1` - Arrowhead tip Y coordinate
/// * `x2` - Arrow tail X coordinate
/// * `y2` - Arrow tail Y coordinate
/// * `length` - Desired length of each head side in pixels (capped at 30% of line length)
/// * `angle_degrees` - Angle between each head side and the main line
///
/// # Returns
/// Array of two points `[(left_x, left_y), (right_x, right_y)]` for the arrowhead lines.
/// If the line is too short (< 1 pixel), both points equal (x1, y1).
pub fn calculate_arrowhead_custom(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    length: f64,
    angle_degrees: f64,
) -> [(f64, f64); 2] {
    let dx = x1 - x2; // Direction from END to START (reversed)
    let dy = y1 - y2;
    let line_length = (dx * dx + dy * dy).sqrt();

    if line_length < 1.0 {
        return [(x1, y1), (x1, y1)];
    }

    let ux = dx / line_length;
    let uy = dy / line_length;

    let arrow_length = length.min(line_length * 0.3);

    let angle = angle_degrees.to_radians();
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let left_x = x1 - arrow_length * (ux * cos_a - uy * sin_a);
    let left_y = y1 - arrow_length * (uy * cos_a + ux * sin_a);

    let right_x = x1 - arrow_length * (ux * cos_a + uy * sin_a);
    let right_y = y1 - arrow_length * (uy * cos_a - ux * sin_a);

    [(left_x, left_y), (right_x, right_y)]
}

/// Moves both ends of a segment towards each other.
///
/// Returns the original segment when it is shorter than the combined shrink.
pub fn shrink_segment(
    from: (f64, f64),
    to: (f64, f64),
    shrink_from: f64,
    shrink_to: f64,
) -> ((f64, f64), (f64, f64)) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= shrink_from + shrink_to {
        return (from, to);
    }

    let ux = dx / length;
    let uy = dy / length;
    (
        (from.0 + ux * shrink_from, from.1 + uy * shrink_from),
        (to.0 - ux * shrink_to, to.1 - uy * shrink_to),
    )
}

// ============================================================================
// Pixel Rectangles
// ============================================================================

/// Axis-aligned rectangle in whole pixels, used for crop regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Expands the rectangle evenly in all directions by `amount`.
    pub fn inflate(&mut self, amount: i32) {
        self.x -= amount;
        self.y -= amount;
        self.width += amount * 2;
        self.height += amount * 2;
    }

    /// Clamps the rectangle to `[0, width) x [0, height)`.
    pub fn clamp_to_bounds(&mut self, width: i32, height: i32) {
        let max_x = (self.x + self.width).clamp(0, width);
        let max_y = (self.y + self.height).clamp(0, height);
        self.x = self.x.clamp(0, width);
        self.y = self.y.clamp(0, height);
        self.width = (max_x - self.x).max(0);
        self.height = (max_y - self.y).max(0);
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrowhead_caps_at_thirty_percent_of_line_length() {
        let [(lx, ly), _] = calculate_arrowhead_custom(10.0, 10.0, 0.0, 10.0, 100.0, 30.0);
        let distance = ((10.0 - lx).powi(2) + (10.0 - ly).powi(2)).sqrt();
        assert!((distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn arrowhead_handles_degenerate_lines() {
        let [(lx, ly), (rx, ry)] = calculate_arrowhead_custom(5.0, 5.0, 5.0, 5.0, 15.0, 45.0);
        assert_eq!((lx, ly), (5.0, 5.0));
        assert_eq!((rx, ry), (5.0, 5.0));
    }

    #[test]
    fn arrowhead_is_symmetric_about_the_line() {
        let [(lx, ly), (rx, ry)] = calculate_arrowhead_custom(100.0, 0.0, 0.0, 0.0, 10.0, 30.0);
        assert!(lx < 100.0 && rx < 100.0);
        assert!((lx - rx).abs() < 1e-9);
        assert!((ly + ry).abs() < 1e-9);
    }

    #[test]
    fn shrink_segment_moves_both_ends() {
        let (from, to) = shrink_segment((0.0, 0.0), (10.0, 0.0), 2.0, 3.0);
        assert_eq!(from, (2.0, 0.0));
        assert_eq!(to, (7.0, 0.0));
    }

    #[test]
    fn shrink_segment_keeps_short_segments() {
        let (from, to) = shrink_segment((0.0, 0.0), (1.0, 0.0), 2.0, 2.0);
        assert_eq!((from, to), ((0.0, 0.0), (1.0, 0.0)));
    }

    #[test]
    fn rect_inflate_and_clamp() {
        let mut rect = Rect::from_min_max(5, 5, 15, 15).unwrap();
        rect.inflate(10);
        assert_eq!(rect, Rect { x: -5, y: -5, width: 30, height: 30 });
        rect.clamp_to_bounds(20, 12);
        assert_eq!(rect, Rect { x: 0, y: 0, width: 20, height: 12 });
        assert!(rect.is_valid());
    }

    #[test]
    fn rect_rejects_empty_area() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::from_min_max(4, 4, 4, 9).is_none());
    }
}
