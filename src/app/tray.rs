//! System tray setup, native menu building and tray events.

use launcher_core::{MenuAction, MenuEntry, ScreenRect, TrayPresence};
use tauri::{
    image::Image,
    menu::{IsMenuItem, Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu},
    tray::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent},
    App, AppHandle, Manager, Wry,
};

use crate::commands::launcher::{dispatch_menu_action, show_launcher};
use crate::LauncherState;

pub(crate) const TRAY_ID: &str = "suiteview-tray";

// ============================================================================
// Menu building
// ============================================================================

fn menu_items(app: &AppHandle, entries: &[MenuEntry]) -> tauri::Result<Vec<Box<dyn IsMenuItem<Wry>>>> {
    let mut items: Vec<Box<dyn IsMenuItem<Wry>>> = Vec::with_capacity(entries.len());

    for entry in entries {
        let item: Box<dyn IsMenuItem<Wry>> = match entry {
            MenuEntry::Item { action, label } => {
                Box::new(MenuItem::with_id(app, action.id(), label, true, None::<&str>)?)
            },
            MenuEntry::Disabled { label } => Box::new(MenuItem::new(app, label, false, None::<&str>)?),
            MenuEntry::Separator => Box::new(PredefinedMenuItem::separator(app)?),
            MenuEntry::Submenu { label, entries } => {
                let children = menu_items(app, entries)?;
                let refs: Vec<&dyn IsMenuItem<Wry>> = children.iter().map(|c| &**c).collect();
                Box::new(Submenu::with_items(app, label, true, &refs)?)
            },
        };
        items.push(item);
    }

    Ok(items)
}

/// Turn a menu model into a native menu. Item ids are `MenuAction` ids.
pub fn build_menu(app: &AppHandle, entries: &[MenuEntry]) -> tauri::Result<Menu<Wry>> {
    let items = menu_items(app, entries)?;
    let refs: Vec<&dyn IsMenuItem<Wry>> = items.iter().map(|i| &**i).collect();
    Menu::with_items(app, &refs)
}

/// Rebuild the tray menu so the bookmark submenu reflects the current source.
fn refresh_tray_menu(app: &AppHandle) {
    let entries = {
        let state = app.state::<LauncherState>();
        let mut launcher = state.lock();
        launcher.tray_menu()
    };

    let Some(tray) = app.tray_by_id(TRAY_ID) else {
        return;
    };
    match build_menu(app, &entries) {
        Ok(menu) => {
            if let Err(e) = tray.set_menu(Some(menu)) {
                log::warn!("[TRAY] Failed to set menu: {}", e);
            }
        },
        Err(e) => log::warn!("[TRAY] Failed to build menu: {}", e),
    }
}

// ============================================================================
// Events
// ============================================================================

/// App-wide menu handler: covers both the tray menu and the context menu.
pub fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    let Some(action) = MenuAction::parse(event.id().as_ref()) else {
        log::debug!("[TRAY] Ignoring menu id {:?}", event.id());
        return;
    };

    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        dispatch_menu_action(&app, action);
    });
}

fn tray_rect(rect: &tauri::Rect) -> ScreenRect {
    let position = rect.position.to_physical::<i32>(1.0);
    let size = rect.size.to_physical::<i32>(1.0);
    ScreenRect::new(position.x, position.y, size.width, size.height)
}

fn handle_tray_event(tray: &TrayIcon, event: TrayIconEvent) {
    let app = tray.app_handle().clone();

    match event {
        TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            rect,
            ..
        } => {
            let rect = tray_rect(&rect);
            tauri::async_runtime::spawn(async move {
                app.state::<LauncherState>().lock().set_tray_rect(rect);
                if let Err(e) = show_launcher(&app) {
                    log::error!("[TRAY] Failed to show launcher: {}", e);
                }
            });
        },
        TrayIconEvent::Click {
            button: MouseButton::Right,
            button_state: MouseButtonState::Down,
            rect,
            ..
        }
        | TrayIconEvent::Enter { rect, .. } => {
            let rect = tray_rect(&rect);
            tauri::async_runtime::spawn(async move {
                app.state::<LauncherState>().lock().set_tray_rect(rect);
                refresh_tray_menu(&app);
            });
        },
        _ => {},
    }
}

// ============================================================================
// Setup
// ============================================================================

/// Create the tray icon with its initial menu.
pub fn init(app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let entries = {
        let state = app.state::<LauncherState>();
        let mut launcher = state.lock();
        launcher.tray_menu()
    };
    let menu = build_menu(app.handle(), &entries)?;

    // 32x32 is standard for system tray
    let tray_icon = Image::from_bytes(include_bytes!("../../icons/32x32.png"))?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(tray_icon)
        .tooltip("SuiteView")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_tray_icon_event(handle_tray_event)
        .build(app)?;

    Ok(())
}

/// The tray icon as the launcher's shutdown sequence sees it.
pub struct TauriTray {
    app: AppHandle,
}

impl TauriTray {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl TrayPresence for TauriTray {
    fn remove(&mut self) {
        if self.app.remove_tray_by_id(TRAY_ID).is_some() {
            log::info!("[TRAY] Removed tray icon");
        }
    }
}
