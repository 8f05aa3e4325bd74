//! Geometry primitives for the launcher window.
//!
//! All coordinates are integer screen pixels. `WindowGeometry` is the only
//! persisted state; `Point` and `ScreenRect` are transient helpers used by
//! hit-testing, gestures and placement.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Margin kept between the launcher and screen edges when repositioning at the tray
pub const TRAY_MARGIN: i32 = 8;

/// A point with integer coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// A screen-space rectangle (monitor bounds, tray icon bounds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }
}

/// Minimum size the launcher window may be resized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    pub min_width: i32,
    pub min_height: i32,
}

/// Position and size of the launcher window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same size, new origin.
    pub fn moved_to(&self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..*self
        }
    }

    pub fn satisfies(&self, limits: SizeLimits) -> bool {
        self.width >= limits.min_width && self.height >= limits.min_height
    }

    /// Default placement: bottom-right of the screen, `right_margin` from the
    /// right edge and `bottom_margin` from the bottom edge (clear of the taskbar).
    pub fn default_placement(
        screen: ScreenRect,
        width: i32,
        height: i32,
        right_margin: i32,
        bottom_margin: i32,
    ) -> Self {
        Self {
            x: screen.right() - width - right_margin,
            y: screen.bottom() - height - bottom_margin,
            width,
            height,
        }
    }

    /// Place this window next to a tray icon.
    ///
    /// The window is centered horizontally on the icon and sits above it, or
    /// below it when the icon is in the top half of the screen (top-docked
    /// panels). The result is clamped to the screen with `TRAY_MARGIN`.
    pub fn anchored_to_tray(&self, tray: ScreenRect, screen: ScreenRect) -> Self {
        let x = tray.center_x() - self.width / 2;
        let y = if tray.center_y() < screen.center_y() {
            tray.bottom() + TRAY_MARGIN
        } else {
            tray.y - self.height - TRAY_MARGIN
        };

        Self {
            x: clamp_axis(x, screen.x, screen.right(), self.width),
            y: clamp_axis(y, screen.y, screen.bottom(), self.height),
            width: self.width,
            height: self.height,
        }
    }
}

/// Clamp one axis of a span into `[lo + margin, hi - margin - len]`.
/// When the span is larger than the screen the low edge wins.
fn clamp_axis(value: i32, lo: i32, hi: i32, len: i32) -> i32 {
    let min = lo + TRAY_MARGIN;
    let max = hi - TRAY_MARGIN - len;
    value.min(max).max(min)
}
