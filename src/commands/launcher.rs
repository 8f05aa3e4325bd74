//! Launcher bar commands and the actions shared with the tray.
//!
//! The launcher page chains its pointer invokes, so each one is handled
//! before the next arrives. All commands are async: they run on the async
//! runtime and never block the main thread while holding the launcher lock.

use launcher_core::{
    CursorGlyph, InteractionMode, Launcher, LauncherError, LauncherResult, MenuAction, MenuKind,
    OptionExt, Point, PointerMove, ResultExt, ToolKind, WindowGeometry,
};
use serde::Serialize;
use tauri::{command, AppHandle, Manager, State, WebviewWindow};

use super::desktop::TauriDesktop;
use super::window::{
    current_screen, cursor_icon, launcher_window, set_physical_bounds, set_physical_position,
    window_err,
};
use crate::app::tray::{self, TauriTray};
use crate::LauncherState;

/// What a pointer event did, for the page's own bookkeeping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerFeedback {
    pub mode: &'static str,
    pub geometry: WindowGeometry,
}

fn mode_name(launcher: &Launcher) -> &'static str {
    match launcher.mode() {
        InteractionMode::Idle => "idle",
        InteractionMode::Dragging => "dragging",
        InteractionMode::Resizing => "resizing",
    }
}

/// Page coordinates arrive in CSS pixels; geometry is physical.
fn to_physical(window: &WebviewWindow, x: f64, y: f64) -> LauncherResult<Point> {
    let scale = window.scale_factor().context("Failed to read scale factor")?;
    Ok(Point::new((x * scale).round() as i32, (y * scale).round() as i32))
}

fn apply_cursor(window: &WebviewWindow, glyph: CursorGlyph) {
    if let Err(e) = window.set_cursor_icon(cursor_icon(glyph)) {
        log::debug!("[LAUNCHER] Failed to set cursor {:?}: {}", glyph, e);
    }
}

// ============================================================================
// Pointer gestures
// ============================================================================

#[command]
pub async fn pointer_down(
    window: WebviewWindow,
    state: State<'_, LauncherState>,
    local_x: f64,
    local_y: f64,
    screen_x: f64,
    screen_y: f64,
) -> Result<PointerFeedback, LauncherError> {
    let local = to_physical(&window, local_x, local_y)?;
    let global = to_physical(&window, screen_x, screen_y)?;

    let mut launcher = state.lock();
    let glyph = launcher.pointer_down(local, global);
    apply_cursor(&window, glyph);

    Ok(PointerFeedback {
        mode: mode_name(&launcher),
        geometry: launcher.geometry(),
    })
}

#[command]
pub async fn pointer_move(
    window: WebviewWindow,
    state: State<'_, LauncherState>,
    local_x: f64,
    local_y: f64,
    screen_x: f64,
    screen_y: f64,
) -> Result<PointerFeedback, LauncherError> {
    let local = to_physical(&window, local_x, local_y)?;
    let global = to_physical(&window, screen_x, screen_y)?;

    let mut launcher = state.lock();
    match launcher.pointer_move(local, global) {
        PointerMove::Hover(glyph) => {
            apply_cursor(&window, glyph);
        },
        PointerMove::Moved(g) => set_physical_position(&window, g.x, g.y)?,
        PointerMove::Resized(g) => set_physical_bounds(&window, &g)?,
        PointerMove::Rejected => {},
    }

    Ok(PointerFeedback {
        mode: mode_name(&launcher),
        geometry: launcher.geometry(),
    })
}

#[command]
pub async fn pointer_up(state: State<'_, LauncherState>) -> Result<PointerFeedback, LauncherError> {
    let mut launcher = state.lock();
    if let Some(saved) = launcher.pointer_up() {
        log::debug!("[LAUNCHER] Gesture ended at {:?}", saved);
    }
    Ok(PointerFeedback {
        mode: mode_name(&launcher),
        geometry: launcher.geometry(),
    })
}

// ============================================================================
// Launcher actions
// ============================================================================

#[command]
pub async fn open_tool(app: AppHandle, tool: String) -> Result<(), LauncherError> {
    let kind = ToolKind::from_label(&tool).context("Unknown tool")?;
    open_tool_window(&app, kind)
}

#[command]
pub async fn show_context_menu(app: AppHandle, window: WebviewWindow) -> Result<(), LauncherError> {
    let entries = {
        let state = app.state::<LauncherState>();
        let mut launcher = state.lock();
        launcher.context_menu()
    };
    let menu = tray::build_menu(&app, &entries).context("Failed to build context menu")?;
    window.popup_menu(&menu).context("Failed to show context menu")
}

#[command]
pub async fn hide_to_tray(app: AppHandle) -> Result<(), LauncherError> {
    hide_launcher(&app)
}

#[command]
pub async fn quit_app(app: AppHandle) -> Result<(), LauncherError> {
    quit(&app);
    Ok(())
}

// ============================================================================
// Shared with the tray and window events
// ============================================================================

/// Apply the current geometry and bring the launcher forward.
pub fn show_launcher(app: &AppHandle) -> LauncherResult<()> {
    let window = launcher_window(app)?;
    let state = app.state::<LauncherState>();
    let mut launcher = state.lock();
    if launcher.is_shut_down() {
        return Ok(());
    }

    set_physical_bounds(&window, &launcher.geometry())?;
    window.show().map_err(window_err)?;
    let _ = window.set_always_on_top(true);
    let _ = window.set_focus();
    launcher.show();
    Ok(())
}

pub fn hide_launcher(app: &AppHandle) -> LauncherResult<()> {
    let window = launcher_window(app)?;
    let state = app.state::<LauncherState>();
    let mut launcher = state.lock();

    window.hide().map_err(window_err)?;
    launcher.hide_to_tray(&TauriDesktop::new(app.clone()));
    Ok(())
}

pub fn reposition_launcher(app: &AppHandle) -> LauncherResult<()> {
    let window = launcher_window(app)?;
    {
        let state = app.state::<LauncherState>();
        let mut launcher = state.lock();
        launcher.set_screen(current_screen(&window));
        let geometry = launcher.reposition_at_tray();
        log::info!("[LAUNCHER] Repositioned at tray: {:?}", geometry);
    }
    show_launcher(app)
}

pub fn open_tool_window(app: &AppHandle, tool: ToolKind) -> LauncherResult<()> {
    let state = app.state::<LauncherState>();
    let mut launcher = state.lock();
    launcher
        .open_tool(tool, &TauriDesktop::new(app.clone()))
        .map(|outcome| log::debug!("[LAUNCHER] open {}: {:?}", tool, outcome))
}

pub fn open_bookmark(app: &AppHandle, menu: MenuKind, index: usize) -> LauncherResult<()> {
    let state = app.state::<LauncherState>();
    let mut launcher = state.lock();
    launcher.open_bookmark(menu, index, &TauriDesktop::new(app.clone()))
}

pub fn quit(app: &AppHandle) {
    let state = app.state::<LauncherState>();
    let mut launcher = state.lock();
    let desktop = TauriDesktop::new(app.clone());
    let mut tray = TauriTray::new(app.clone());

    if let Some(report) = launcher.quit(&desktop, &mut tray) {
        log::info!(
            "[LAUNCHER] Shutdown released {:?}, closed {:?}",
            report.released,
            report.closed
        );
    }
}

/// Carry out a menu action from the tray or the context menu.
pub fn dispatch_menu_action(app: &AppHandle, action: MenuAction) {
    let result = match action {
        MenuAction::ShowLauncher => show_launcher(app),
        MenuAction::RepositionAtTray => reposition_launcher(app),
        MenuAction::OpenTool(tool) => open_tool_window(app, tool),
        MenuAction::OpenBookmark { menu, index } => open_bookmark(app, menu, index),
        MenuAction::Quit => {
            quit(app);
            Ok(())
        },
    };

    if let Err(e) = result {
        log::error!("[LAUNCHER] {:?} failed: {}", action, e);
    }
}
