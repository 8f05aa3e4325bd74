//! Window event handlers.

use tauri::{Manager, Window, WindowEvent};

use crate::commands::launcher::hide_launcher;
use crate::commands::window::LAUNCHER_WINDOW_LABEL;

/// Handle window events for the application.
///
/// This is called from the Tauri builder's `on_window_event` hook. Tool
/// windows install their own close handler when they are created.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    match event {
        // Closing the launcher bar only sends it to the tray
        WindowEvent::CloseRequested { api, .. } if window.label() == LAUNCHER_WINDOW_LABEL => {
            api.prevent_close();
            let app = window.app_handle().clone();
            tauri::async_runtime::spawn(async move {
                if let Err(e) = hide_launcher(&app) {
                    log::error!("[EVENTS] Failed to hide launcher: {}", e);
                }
            });
        },

        _ => {},
    }
}
