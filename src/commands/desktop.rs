//! Platform services for the launcher: openers, notices, timers, exit.

use std::time::Duration;

use launcher_core::{Desktop, LauncherResult, Notice, NoticeLevel, ResultExt, ToolKind};
use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tauri_plugin_notification::NotificationExt;
use tauri_plugin_opener::OpenerExt;

use crate::LauncherState;

/// `Desktop` backed by the running app and its plugins.
#[derive(Clone)]
pub struct TauriDesktop {
    app: AppHandle,
}

impl TauriDesktop {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn open_with_default(&self, path: &str) -> LauncherResult<()> {
        self.app
            .opener()
            .open_path(path, None::<&str>)
            .with_context(|| format!("Failed to open {}", path))
    }
}

impl Desktop for TauriDesktop {
    fn open_url(&self, url: &str) -> LauncherResult<()> {
        self.app
            .opener()
            .open_url(url, None::<&str>)
            .with_context(|| format!("Failed to open {}", url))
    }

    fn open_file(&self, path: &str) -> LauncherResult<()> {
        self.open_with_default(path)
    }

    fn open_path(&self, path: &str) -> LauncherResult<()> {
        self.open_with_default(path)
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => {
                if let Err(e) = self
                    .app
                    .notification()
                    .builder()
                    .title(&notice.title)
                    .body(&notice.body)
                    .show()
                {
                    log::warn!("[DESKTOP] Notification failed: {}", e);
                }
            },
            NoticeLevel::Warning => {
                // Callback form so the caller never waits on the user
                self.app
                    .dialog()
                    .message(notice.body)
                    .title(notice.title)
                    .kind(MessageDialogKind::Warning)
                    .show(|_| {});
            },
        }
    }

    fn schedule_navigation(&self, tool: ToolKind, delay: Duration) {
        let app = self.app.clone();
        tauri::async_runtime::spawn(async move {
            tokio::time::sleep(delay).await;
            let desktop = TauriDesktop::new(app.clone());
            let state = app.state::<LauncherState>();
            let navigated = state.lock().run_pending_navigation(tool, &desktop);
            log::debug!("[DESKTOP] Deferred navigation for {}: {}", tool, navigated);
        });
    }

    fn exit(&self) {
        self.app.exit(0);
    }
}
