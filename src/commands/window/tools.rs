//! Tool windows: construction and the launcher-facing adapter.
//!
//! Each tool page runs in its own webview window labelled after the tool.
//! Session release and navigation are forwarded to the page as events:
//!
//! - `suiteview://disconnect-all` (data manager)
//! - `suiteview://disconnect` (mainframe tools)
//! - `suiteview://navigate` with `{ "path": ... }` (file navigator)

use launcher_core::{
    ChildWindow, DisconnectAll, DisconnectOne, LauncherError, LauncherResult, Navigate, ToolKind,
    WindowFactory,
};
use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder, WindowEvent};

use super::window_err;
use crate::LauncherState;

pub(crate) const DISCONNECT_ALL_EVENT: &str = "suiteview://disconnect-all";
pub(crate) const DISCONNECT_EVENT: &str = "suiteview://disconnect";
pub(crate) const NAVIGATE_EVENT: &str = "suiteview://navigate";

/// A live tool window.
pub struct ToolWindow {
    tool: ToolKind,
    window: WebviewWindow,
}

impl ToolWindow {
    fn emit(&self, event: &str, payload: serde_json::Value) -> LauncherResult<()> {
        log::debug!("[TOOLS] {} <- {}", self.tool, event);
        self.window
            .emit_to(self.window.label(), event, payload)
            .map_err(window_err)
    }
}

impl ChildWindow for ToolWindow {
    fn show(&self) -> LauncherResult<()> {
        self.window.show().map_err(window_err)
    }

    fn hide(&self) -> LauncherResult<()> {
        self.window.hide().map_err(window_err)
    }

    fn raise_and_focus(&self) -> LauncherResult<()> {
        if self.window.is_minimized().unwrap_or(false) {
            self.window.unminimize().map_err(window_err)?;
        }
        self.window.set_focus().map_err(window_err)
    }

    fn destroy(&self) -> LauncherResult<()> {
        self.window.destroy().map_err(window_err)
    }

    fn as_disconnect_all(&self) -> Option<&dyn DisconnectAll> {
        match self.tool {
            ToolKind::DataManager => Some(self),
            _ => None,
        }
    }

    fn as_disconnect_one(&self) -> Option<&dyn DisconnectOne> {
        match self.tool {
            ToolKind::MainframeTools => Some(self),
            _ => None,
        }
    }

    fn as_navigator(&self) -> Option<&dyn Navigate> {
        match self.tool {
            ToolKind::FileNavigator => Some(self),
            _ => None,
        }
    }
}

impl DisconnectAll for ToolWindow {
    fn disconnect_all(&self) -> LauncherResult<()> {
        self.emit(DISCONNECT_ALL_EVENT, serde_json::Value::Null)
    }
}

impl DisconnectOne for ToolWindow {
    fn disconnect(&self) -> LauncherResult<()> {
        self.emit(DISCONNECT_EVENT, serde_json::Value::Null)
    }
}

impl Navigate for ToolWindow {
    fn navigate_to(&self, path: &str) -> LauncherResult<()> {
        self.emit(NAVIGATE_EVENT, serde_json::json!({ "path": path }))
    }
}

/// Builds tool windows on the running app.
pub struct TauriWindowFactory {
    app: AppHandle,
}

impl TauriWindowFactory {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl WindowFactory for TauriWindowFactory {
    fn create(&mut self, tool: ToolKind) -> LauncherResult<Box<dyn ChildWindow>> {
        let label = tool.label();

        // A window left behind by an earlier failed attempt
        if let Some(stale) = self.app.get_webview_window(label) {
            let _ = stale.destroy();
        }

        let (width, height) = tool.initial_size();
        let url = WebviewUrl::App(format!("{}.html", label).into());

        // Created hidden; the registry shows it once it is tracked
        let window = WebviewWindowBuilder::new(&self.app, label, url)
            .title(format!("SuiteView - {}", tool.display_name()))
            .inner_size(width as f64, height as f64)
            .min_inner_size(640.0, 400.0)
            .resizable(true)
            .center()
            .visible(false)
            .build()
            .map_err(|e| LauncherError::WindowCreation {
                tool,
                message: e.to_string(),
            })?;

        // The close button only hides; the instance lives until quit
        let app = self.app.clone();
        window.on_window_event(move |event| {
            if let WindowEvent::CloseRequested { api, .. } = event {
                api.prevent_close();
                let app = app.clone();
                tauri::async_runtime::spawn(async move {
                    let state = app.state::<LauncherState>();
                    state.lock().request_tool_close(tool);
                });
            }
        });

        Ok(Box::new(ToolWindow { tool, window }))
    }
}
