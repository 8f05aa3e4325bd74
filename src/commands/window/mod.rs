//! Window helpers shared by the launcher bar and the tool windows.
//!
//! ## Architecture
//!
//! ```text
//! window/
//!   mod.rs    - Labels, physical coordinate helpers, cursor mapping
//!   tools.rs  - Tool window adapters and the window factory
//! ```

pub mod tools;

pub use tools::TauriWindowFactory;

use launcher_core::{CursorGlyph, LauncherError, LauncherResult, ScreenRect, WindowGeometry};
use tauri::{AppHandle, CursorIcon, Manager, WebviewWindow};

// ============================================================================
// Constants
// ============================================================================

/// Launcher bar window label (declared in tauri.conf.json)
pub(crate) const LAUNCHER_WINDOW_LABEL: &str = "launcher";

/// Used when no monitor can be queried
const FALLBACK_SCREEN: ScreenRect = ScreenRect {
    x: 0,
    y: 0,
    width: 1920,
    height: 1080,
};

pub(crate) fn launcher_window(app: &AppHandle) -> LauncherResult<WebviewWindow> {
    app.get_webview_window(LAUNCHER_WINDOW_LABEL)
        .ok_or_else(|| LauncherError::Window("launcher window is missing".to_string()))
}

pub(crate) fn window_err(e: tauri::Error) -> LauncherError {
    LauncherError::Window(e.to_string())
}

// ============================================================================
// Physical Coordinate Helpers
// ============================================================================
// Launcher geometry is kept in physical pixels. Tauri's builder methods use
// logical coordinates which don't match on scaled displays, so the window is
// always positioned and sized with physical values.

/// Position a window using physical (pixel) coordinates.
pub(crate) fn set_physical_position(window: &WebviewWindow, x: i32, y: i32) -> LauncherResult<()> {
    window
        .set_position(tauri::Position::Physical(tauri::PhysicalPosition { x, y }))
        .map_err(window_err)
}

/// Resize a window using physical (pixel) dimensions.
pub(crate) fn set_physical_size(window: &WebviewWindow, width: u32, height: u32) -> LauncherResult<()> {
    window
        .set_size(tauri::Size::Physical(tauri::PhysicalSize { width, height }))
        .map_err(window_err)
}

/// Position and resize a window using physical (pixel) coordinates.
pub(crate) fn set_physical_bounds(window: &WebviewWindow, geometry: &WindowGeometry) -> LauncherResult<()> {
    set_physical_position(window, geometry.x, geometry.y)?;
    set_physical_size(
        window,
        geometry.width.max(1) as u32,
        geometry.height.max(1) as u32,
    )
}

// ============================================================================
// Screens and cursors
// ============================================================================

fn monitor_rect(monitor: &tauri::Monitor) -> ScreenRect {
    let position = monitor.position();
    let size = monitor.size();
    ScreenRect::new(position.x, position.y, size.width as i32, size.height as i32)
}

/// Bounds of the primary monitor in physical pixels.
pub(crate) fn primary_screen(app: &AppHandle) -> ScreenRect {
    match app.primary_monitor() {
        Ok(Some(monitor)) => monitor_rect(&monitor),
        Ok(None) => {
            log::warn!("[WINDOW] No primary monitor reported, assuming 1920x1080");
            FALLBACK_SCREEN
        },
        Err(e) => {
            log::warn!("[WINDOW] Failed to query primary monitor: {}", e);
            FALLBACK_SCREEN
        },
    }
}

/// Bounds of the monitor the window is on, falling back to the primary one.
pub(crate) fn current_screen(window: &WebviewWindow) -> ScreenRect {
    match window.current_monitor() {
        Ok(Some(monitor)) => monitor_rect(&monitor),
        _ => primary_screen(window.app_handle()),
    }
}

pub(crate) fn cursor_icon(glyph: CursorGlyph) -> CursorIcon {
    match glyph {
        CursorGlyph::Arrow => CursorIcon::Default,
        CursorGlyph::ResizeVertical => CursorIcon::NsResize,
        CursorGlyph::ResizeHorizontal => CursorIcon::EwResize,
        CursorGlyph::ResizeNwSe => CursorIcon::NwseResize,
        CursorGlyph::ResizeNeSw => CursorIcon::NeswResize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_mapping() {
        assert!(matches!(cursor_icon(CursorGlyph::Arrow), CursorIcon::Default));
        assert!(matches!(cursor_icon(CursorGlyph::ResizeVertical), CursorIcon::NsResize));
        assert!(matches!(cursor_icon(CursorGlyph::ResizeHorizontal), CursorIcon::EwResize));
        assert!(matches!(cursor_icon(CursorGlyph::ResizeNwSe), CursorIcon::NwseResize));
        assert!(matches!(cursor_icon(CursorGlyph::ResizeNeSw), CursorIcon::NeswResize));
    }
}
