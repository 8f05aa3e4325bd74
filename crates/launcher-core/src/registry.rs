//! Single-instance slots for the tool windows the launcher opens.
//!
//! Each tool type has exactly one slot. The first `open` constructs the
//! window through the host's `WindowFactory` and wraps it in a hide-on-close
//! policy; later opens only bring the existing window forward, which is what
//! keeps open tabs, connections and terminal sessions alive between presses.
//!
//! ## Capabilities
//!
//! Child windows declare optional capabilities by overriding the `as_*`
//! views on `ChildWindow`. The shutdown sequence and bookmark dispatch query
//! these instead of assuming a concrete window type.

use std::fmt;

use crate::error::{LauncherError, LauncherResult};

/// The tool windows the launcher can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolKind {
    DataManager,
    FileNavigator,
    MainframeTools,
    EmailNavigator,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::DataManager,
        ToolKind::FileNavigator,
        ToolKind::MainframeTools,
        ToolKind::EmailNavigator,
    ];

    fn index(self) -> usize {
        match self {
            ToolKind::DataManager => 0,
            ToolKind::FileNavigator => 1,
            ToolKind::MainframeTools => 2,
            ToolKind::EmailNavigator => 3,
        }
    }

    /// Stable identifier, used for window labels, menu ids and IPC.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::DataManager => "data-manager",
            ToolKind::FileNavigator => "file-navigator",
            ToolKind::MainframeTools => "mainframe-tools",
            ToolKind::EmailNavigator => "email-navigator",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::DataManager => "Data Manager",
            ToolKind::FileNavigator => "File Navigator",
            ToolKind::MainframeTools => "Mainframe Tools",
            ToolKind::EmailNavigator => "Email Navigator",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ToolKind::DataManager => "🗄️",
            ToolKind::FileNavigator => "📁",
            ToolKind::MainframeTools => "🖥️",
            ToolKind::EmailNavigator => "📧",
        }
    }

    /// Initial inner size for a freshly constructed window.
    pub fn initial_size(self) -> (u32, u32) {
        match self {
            ToolKind::DataManager => (1280, 800),
            ToolKind::FileNavigator => (1400, 800),
            ToolKind::MainframeTools => (1100, 760),
            ToolKind::EmailNavigator => (1200, 780),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Terminates every external session a window holds.
pub trait DisconnectAll {
    fn disconnect_all(&self) -> LauncherResult<()>;
}

/// Terminates the single external session a window holds.
pub trait DisconnectOne {
    fn disconnect(&self) -> LauncherResult<()>;
}

/// Navigates a browsing window to a location.
pub trait Navigate {
    fn navigate_to(&self, path: &str) -> LauncherResult<()>;
}

/// A tool window as seen by the launcher.
pub trait ChildWindow: Send {
    fn show(&self) -> LauncherResult<()>;
    fn hide(&self) -> LauncherResult<()>;
    /// Raise above other windows and take input focus.
    fn raise_and_focus(&self) -> LauncherResult<()>;
    /// Real teardown. Only the shutdown sequence calls this.
    fn destroy(&self) -> LauncherResult<()>;

    fn as_disconnect_all(&self) -> Option<&dyn DisconnectAll> {
        None
    }

    fn as_disconnect_one(&self) -> Option<&dyn DisconnectOne> {
        None
    }

    fn as_navigator(&self) -> Option<&dyn Navigate> {
        None
    }
}

/// Builds tool windows on demand.
pub trait WindowFactory: Send {
    fn create(&mut self, tool: ToolKind) -> LauncherResult<Box<dyn ChildWindow>>;
}

/// Which session-release hook a window answered during shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRelease {
    All,
    One,
    Unsupported,
}

/// Lifecycle policy around a live tool window: a user close request hides,
/// only `force_close` tears the window down.
pub struct HideOnClose {
    window: Box<dyn ChildWindow>,
}

impl HideOnClose {
    pub fn new(window: Box<dyn ChildWindow>) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &dyn ChildWindow {
        self.window.as_ref()
    }

    pub fn request_close(&self) -> LauncherResult<()> {
        self.window.hide()
    }

    /// Release external sessions through the richest capability available.
    pub fn release_sessions(&self) -> (SessionRelease, LauncherResult<()>) {
        if let Some(all) = self.window.as_disconnect_all() {
            (SessionRelease::All, all.disconnect_all())
        } else if let Some(one) = self.window.as_disconnect_one() {
            (SessionRelease::One, one.disconnect())
        } else {
            (SessionRelease::Unsupported, Ok(()))
        }
    }

    pub fn force_close(self) -> LauncherResult<()> {
        self.window.destroy()
    }
}

impl fmt::Debug for HideOnClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HideOnClose").finish_non_exhaustive()
    }
}

/// State of one tool type's slot.
#[derive(Debug, Default)]
pub enum Slot {
    #[default]
    Uninitialized,
    Live(HideOnClose),
}

/// What `open` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The window was constructed and shown for the first time
    Created,
    /// An existing window was shown, raised and focused
    Raised,
}

/// One slot per tool type, filled lazily.
pub struct ChildWindowRegistry {
    factory: Box<dyn WindowFactory>,
    slots: [Slot; 4],
}

impl ChildWindowRegistry {
    pub fn new(factory: Box<dyn WindowFactory>) -> Self {
        Self {
            factory,
            slots: Default::default(),
        }
    }

    pub fn is_live(&self, tool: ToolKind) -> bool {
        matches!(self.slots[tool.index()], Slot::Live(_))
    }

    pub fn get(&self, tool: ToolKind) -> Option<&dyn ChildWindow> {
        match &self.slots[tool.index()] {
            Slot::Live(policy) => Some(policy.window()),
            Slot::Uninitialized => None,
        }
    }

    /// Live tools in slot order.
    pub fn live_tools(&self) -> Vec<ToolKind> {
        ToolKind::ALL
            .into_iter()
            .filter(|t| self.is_live(*t))
            .collect()
    }

    /// Open a tool window, constructing it on first use.
    ///
    /// A construction error leaves the slot uninitialized so a later call can
    /// retry.
    pub fn open(&mut self, tool: ToolKind) -> LauncherResult<OpenOutcome> {
        let slot = &mut self.slots[tool.index()];

        if let Slot::Live(policy) = slot {
            let window = policy.window();
            if let Err(e) = window.show().and_then(|_| window.raise_and_focus()) {
                log::warn!("[REGISTRY] Failed to bring {} forward: {}", tool, e);
            }
            return Ok(OpenOutcome::Raised);
        }

        let window = self
            .factory
            .create(tool)
            .map_err(|e| match e {
                err @ LauncherError::WindowCreation { .. } => err,
                other => LauncherError::WindowCreation {
                    tool,
                    message: other.to_string(),
                },
            })?;

        let policy = HideOnClose::new(window);
        if let Err(e) = policy.window().show() {
            log::warn!("[REGISTRY] {} was created but could not be shown: {}", tool, e);
        }
        *slot = Slot::Live(policy);

        log::info!("[REGISTRY] Created {} (persists for session)", tool);
        Ok(OpenOutcome::Created)
    }

    /// A user asked a tool window to close. Returns true if the request was
    /// intercepted (the window was live and is now hidden).
    pub fn request_close(&self, tool: ToolKind) -> bool {
        match &self.slots[tool.index()] {
            Slot::Live(policy) => {
                if let Err(e) = policy.request_close() {
                    log::warn!("[REGISTRY] Failed to hide {}: {}", tool, e);
                }
                true
            }
            Slot::Uninitialized => false,
        }
    }

    /// Release external sessions held by every live window.
    pub fn release_all_sessions(&self) -> Vec<(ToolKind, SessionRelease)> {
        let mut released = Vec::new();
        for tool in ToolKind::ALL {
            if let Slot::Live(policy) = &self.slots[tool.index()] {
                let (kind, result) = policy.release_sessions();
                if let Err(e) = result {
                    log::warn!("[REGISTRY] Session release for {} failed: {}", tool, e);
                }
                released.push((tool, kind));
            }
        }
        released
    }

    /// Tear down every live window, bypassing hide-on-close. Slots return to
    /// uninitialized.
    pub fn force_close_all(&mut self) -> Vec<ToolKind> {
        let mut closed = Vec::new();
        for tool in ToolKind::ALL {
            if let Slot::Live(policy) = std::mem::take(&mut self.slots[tool.index()]) {
                if let Err(e) = policy.force_close() {
                    log::warn!("[REGISTRY] Failed to close {}: {}", tool, e);
                }
                closed.push(tool);
            }
        }
        closed
    }
}

impl fmt::Debug for ChildWindowRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildWindowRegistry")
            .field("live", &self.live_tools())
            .finish()
    }
}
