//! Hit-testing for the frameless launcher chrome.
//!
//! Classifies a pointer position (relative to the window origin) into one of
//! nine zones: four edges, four corners, or the interior. Edge zones start a
//! resize on press, the interior starts a drag.

use crate::geometry::Point;

/// Zone of the window under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitZone {
    #[default]
    Interior,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edges moved by a resize gesture started in a given zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ResizeEdges {
    pub fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }
}

/// Cursor shape shown while hovering a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorGlyph {
    #[default]
    Arrow,
    /// North-south arrows (top/bottom edges)
    ResizeVertical,
    /// East-west arrows (left/right edges)
    ResizeHorizontal,
    /// Diagonal for top-left and bottom-right corners
    ResizeNwSe,
    /// Diagonal for top-right and bottom-left corners
    ResizeNeSw,
}

impl HitZone {
    pub fn is_interior(&self) -> bool {
        matches!(self, HitZone::Interior)
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            HitZone::TopLeft | HitZone::TopRight | HitZone::BottomLeft | HitZone::BottomRight
        )
    }

    pub fn edges(&self) -> ResizeEdges {
        let (top, bottom, left, right) = match self {
            HitZone::Interior => (false, false, false, false),
            HitZone::Top => (true, false, false, false),
            HitZone::Bottom => (false, true, false, false),
            HitZone::Left => (false, false, true, false),
            HitZone::Right => (false, false, false, true),
            HitZone::TopLeft => (true, false, true, false),
            HitZone::TopRight => (true, false, false, true),
            HitZone::BottomLeft => (false, true, true, false),
            HitZone::BottomRight => (false, true, false, true),
        };
        ResizeEdges {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn cursor(&self) -> CursorGlyph {
        match self {
            HitZone::Top | HitZone::Bottom => CursorGlyph::ResizeVertical,
            HitZone::Left | HitZone::Right => CursorGlyph::ResizeHorizontal,
            HitZone::TopLeft | HitZone::BottomRight => CursorGlyph::ResizeNwSe,
            HitZone::TopRight | HitZone::BottomLeft => CursorGlyph::ResizeNeSw,
            HitZone::Interior => CursorGlyph::Arrow,
        }
    }
}

/// Determine the zone at `pos` for a window of `width` x `height`.
///
/// A coordinate is "near" an edge when it lies strictly within `margin`
/// pixels of it. Corners win over single edges whenever both a horizontal and
/// a vertical condition hold.
pub fn hit_test(pos: Point, width: i32, height: i32, margin: i32) -> HitZone {
    let left = pos.x < margin;
    let right = pos.x > width - margin;
    let top = pos.y < margin;
    let bottom = pos.y > height - margin;

    match (top, bottom, left, right) {
        (true, _, true, _) => HitZone::TopLeft,
        (true, _, _, true) => HitZone::TopRight,
        (_, true, true, _) => HitZone::BottomLeft,
        (_, true, _, true) => HitZone::BottomRight,
        (true, _, _, _) => HitZone::Top,
        (_, true, _, _) => HitZone::Bottom,
        (_, _, true, _) => HitZone::Left,
        (_, _, _, true) => HitZone::Right,
        _ => HitZone::Interior,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 300;
    const H: i32 = 75;
    const M: i32 = 8;

    fn zone(x: i32, y: i32) -> HitZone {
        hit_test(Point::new(x, y), W, H, M)
    }

    #[test]
    fn test_corner_zones() {
        assert_eq!(zone(0, 0), HitZone::TopLeft);
        assert_eq!(zone(299, 0), HitZone::TopRight);
        assert_eq!(zone(0, 74), HitZone::BottomLeft);
        assert_eq!(zone(299, 74), HitZone::BottomRight);
    }

    #[test]
    fn test_corner_wins_over_edge_anywhere_in_margin() {
        for dx in 0..M {
            for dy in 0..M {
                assert_eq!(zone(dx, dy), HitZone::TopLeft);
                assert_eq!(zone(W - dx, dy), HitZone::TopRight);
                assert_eq!(zone(dx, H - dy), HitZone::BottomLeft);
                assert_eq!(zone(W - dx, H - dy), HitZone::BottomRight);
            }
        }
    }

    #[test]
    fn test_edge_zones() {
        assert_eq!(zone(150, 2), HitZone::Top);
        assert_eq!(zone(150, 72), HitZone::Bottom);
        assert_eq!(zone(3, 40), HitZone::Left);
        assert_eq!(zone(296, 40), HitZone::Right);
    }

    #[test]
    fn test_margin_boundary_is_exclusive() {
        // Exactly `margin` pixels in is already interior
        assert_eq!(zone(M, 40), HitZone::Interior);
        assert_eq!(zone(W - M, 40), HitZone::Interior);
        assert_eq!(zone(150, M), HitZone::Interior);
        assert_eq!(zone(150, H - M), HitZone::Interior);
    }

    #[test]
    fn test_interior() {
        assert_eq!(zone(150, 37), HitZone::Interior);
        assert!(zone(150, 37).edges().is_empty());
    }

    #[test]
    fn test_tiny_window_prefers_top_left() {
        // Every margin condition holds at once on a window smaller than 2x margin
        assert_eq!(hit_test(Point::new(5, 5), 10, 10, M), HitZone::TopLeft);
    }

    #[test]
    fn test_edges_for_corners() {
        let edges = HitZone::BottomLeft.edges();
        assert!(edges.bottom && edges.left);
        assert!(!edges.top && !edges.right);
        assert!(HitZone::TopRight.is_corner());
        assert!(!HitZone::Top.is_corner());
    }

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(HitZone::Top.cursor(), CursorGlyph::ResizeVertical);
        assert_eq!(HitZone::Right.cursor(), CursorGlyph::ResizeHorizontal);
        assert_eq!(HitZone::TopLeft.cursor(), CursorGlyph::ResizeNwSe);
        assert_eq!(HitZone::BottomRight.cursor(), CursorGlyph::ResizeNwSe);
        assert_eq!(HitZone::TopRight.cursor(), CursorGlyph::ResizeNeSw);
        assert_eq!(HitZone::BottomLeft.cursor(), CursorGlyph::ResizeNeSw);
        assert_eq!(HitZone::Interior.cursor(), CursorGlyph::Arrow);
    }
}
