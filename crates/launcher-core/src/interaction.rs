//! Pointer gesture state for the frameless launcher.
//!
//! A press on an edge or corner starts a resize, a press anywhere else starts
//! a drag, and a release always returns to idle. The machine never owns the
//! window geometry; it is handed the current geometry and answers with the
//! geometry the host should apply.

use crate::geometry::{Point, SizeLimits, WindowGeometry};
use crate::hit_test::{hit_test, CursorGlyph, HitZone};

/// Observable gesture mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

/// Internal gesture state. Carrying the recorded data inside the variant
/// keeps dragging and resizing mutually exclusive.
#[derive(Debug, Clone, Copy, Default)]
enum Gesture {
    #[default]
    Idle,
    Drag {
        /// Global pointer position minus the window's top-left at press time
        offset: Point,
    },
    Resize {
        zone: HitZone,
        /// Global pointer position at press time
        anchor: Point,
        /// Geometry snapshot at press time
        start: WindowGeometry,
    },
}

/// Result of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMove {
    /// Idle hover: only the cursor glyph changes
    Hover(CursorGlyph),
    /// Drag produced a new position
    Moved(WindowGeometry),
    /// Resize produced a new geometry within limits
    Resized(WindowGeometry),
    /// Resize would violate the minimum size; geometry is unchanged
    Rejected,
}

impl PointerMove {
    /// The geometry to apply, if any.
    pub fn geometry(&self) -> Option<WindowGeometry> {
        match self {
            PointerMove::Moved(g) | PointerMove::Resized(g) => Some(*g),
            PointerMove::Hover(_) | PointerMove::Rejected => None,
        }
    }
}

/// Drag/resize state machine.
#[derive(Debug, Clone)]
pub struct InteractionMachine {
    margin: i32,
    limits: SizeLimits,
    gesture: Gesture,
}

impl InteractionMachine {
    pub fn new(margin: i32, limits: SizeLimits) -> Self {
        Self {
            margin,
            limits,
            gesture: Gesture::Idle,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        match self.gesture {
            Gesture::Idle => InteractionMode::Idle,
            Gesture::Drag { .. } => InteractionMode::Dragging,
            Gesture::Resize { .. } => InteractionMode::Resizing,
        }
    }

    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    /// Zone under a window-local position for the given geometry.
    pub fn zone_at(&self, local: Point, geometry: &WindowGeometry) -> HitZone {
        hit_test(local, geometry.width, geometry.height, self.margin)
    }

    /// Primary button pressed. Returns the zone the gesture started in.
    pub fn pointer_down(
        &mut self,
        local: Point,
        global: Point,
        geometry: &WindowGeometry,
    ) -> HitZone {
        let zone = self.zone_at(local, geometry);

        self.gesture = if zone.is_interior() {
            Gesture::Drag {
                offset: global - geometry.top_left(),
            }
        } else {
            Gesture::Resize {
                zone,
                anchor: global,
                start: *geometry,
            }
        };

        log::debug!("[INTERACTION] press in {:?} -> {:?}", zone, self.mode());
        zone
    }

    /// Pointer moved. `geometry` is the window's current geometry.
    pub fn pointer_move(
        &self,
        local: Point,
        global: Point,
        geometry: &WindowGeometry,
    ) -> PointerMove {
        match self.gesture {
            Gesture::Idle => PointerMove::Hover(self.zone_at(local, geometry).cursor()),
            Gesture::Drag { offset } => PointerMove::Moved(geometry.moved_to(global - offset)),
            Gesture::Resize {
                zone,
                anchor,
                start,
            } => {
                let resized = apply_resize(start, zone, global - anchor);
                if resized.satisfies(self.limits) {
                    PointerMove::Resized(resized)
                } else {
                    PointerMove::Rejected
                }
            }
        }
    }

    /// Primary button released. Returns the mode that was active, so the
    /// caller can persist geometry after a drag or resize.
    pub fn pointer_up(&mut self) -> InteractionMode {
        let previous = self.mode();
        self.gesture = Gesture::Idle;
        if previous != InteractionMode::Idle {
            log::debug!("[INTERACTION] release ends {:?}", previous);
        }
        previous
    }
}

/// Apply a pointer delta to the edges implied by `zone`.
///
/// Left and top edges move the origin and shrink the size inversely; right
/// and bottom edges only change the size.
fn apply_resize(start: WindowGeometry, zone: HitZone, delta: Point) -> WindowGeometry {
    let edges = zone.edges();
    let mut g = start;

    if edges.left {
        g.x = start.x.saturating_add(delta.x);
        g.width = start.width.saturating_sub(delta.x);
    }
    if edges.right {
        g.width = start.width.saturating_add(delta.x);
    }
    if edges.top {
        g.y = start.y.saturating_add(delta.y);
        g.height = start.height.saturating_sub(delta.y);
    }
    if edges.bottom {
        g.height = start.height.saturating_add(delta.y);
    }

    g
}
