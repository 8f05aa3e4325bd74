//! Host services the launcher relies on but does not implement.
//!
//! The desktop host provides these on top of its windowing toolkit; tests
//! provide recording fakes.

use std::time::Duration;

use crate::error::LauncherResult;
use crate::registry::ToolKind;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Platform integration points: openers, notices, timers and the event loop.
pub trait Desktop {
    /// Hand a URL to the platform's default URL opener.
    fn open_url(&self, url: &str) -> LauncherResult<()>;

    /// Open a file with its default application.
    fn open_file(&self, path: &str) -> LauncherResult<()>;

    /// Generic "open this path" fallback.
    fn open_path(&self, path: &str) -> LauncherResult<()>;

    /// Show a notice without blocking the caller.
    fn notify(&self, notice: Notice);

    /// Arrange for `Launcher::run_pending_navigation(tool)` to be called once
    /// after `delay`. Not cancellable.
    fn schedule_navigation(&self, tool: ToolKind, delay: Duration);

    /// Stop the process event loop.
    fn exit(&self);
}

/// The persistent indicator in the system's status area.
pub trait TrayPresence {
    /// Remove the indicator. Calling it again is harmless.
    fn remove(&mut self);
}
