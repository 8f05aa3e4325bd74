//! The launcher facade: one owner for geometry, gestures, tool windows,
//! bookmark menus and shutdown.
//!
//! Every host entry point (pointer events, menu activations, window close
//! requests, timers) lands on a `&mut Launcher`, so the host only has to
//! serialize access to a single value.

use std::time::Duration;

use crate::bookmarks::{Bookmark, BookmarkSource, OpenRequest};
use crate::config::{LauncherConfig, StoragePaths};
use crate::error::{LauncherError, LauncherResult};
use crate::geometry::{Point, ScreenRect, WindowGeometry};
use crate::hit_test::CursorGlyph;
use crate::interaction::{InteractionMachine, InteractionMode, PointerMove};
use crate::menu::{self, MenuEntry, MenuKind};
use crate::platform::{Desktop, Notice, TrayPresence};
use crate::registry::{ChildWindowRegistry, OpenOutcome, ToolKind, WindowFactory};
use crate::shutdown::{ShutdownCoordinator, ShutdownReport};
use crate::store::GeometryStore;

pub const APP_TITLE: &str = "SuiteView";
pub const HIDE_TO_TRAY_MESSAGE: &str = "Minimized to tray. Click the tray icon to restore.";

/// A folder navigation waiting for a freshly constructed window to settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub tool: ToolKind,
    pub path: String,
}

pub struct Launcher {
    config: LauncherConfig,
    screen: ScreenRect,
    geometry: WindowGeometry,
    visible: bool,
    store: GeometryStore,
    bookmarks: BookmarkSource,
    /// Bookmarks the current tray menu was built from
    tray_snapshot: Vec<Bookmark>,
    /// Bookmarks the last context menu was built from
    context_snapshot: Vec<Bookmark>,
    interaction: InteractionMachine,
    registry: ChildWindowRegistry,
    pending_navigation: Option<PendingNavigation>,
    tray_rect: Option<ScreenRect>,
    shutdown: ShutdownCoordinator,
}

impl Launcher {
    /// Build a launcher using the stored geometry, or the default placement
    /// on `screen` when nothing valid is stored.
    pub fn new(
        config: LauncherConfig,
        paths: &StoragePaths,
        factory: Box<dyn WindowFactory>,
        screen: ScreenRect,
    ) -> Self {
        let limits = config.size_limits();
        let store = GeometryStore::new(&paths.geometry, limits);

        let geometry = match store.load() {
            Some(g) => {
                log::info!("[LAUNCHER] Restored geometry {:?}", g);
                g
            }
            None => {
                let g = default_geometry(&config, screen);
                log::info!("[LAUNCHER] Using default placement {:?}", g);
                g
            }
        };

        Self {
            interaction: InteractionMachine::new(config.resize_margin, limits),
            bookmarks: BookmarkSource::new(&paths.bookmarks),
            registry: ChildWindowRegistry::new(factory),
            config,
            screen,
            geometry,
            visible: false,
            store,
            tray_snapshot: Vec::new(),
            context_snapshot: Vec::new(),
            pending_navigation: None,
            tray_rect: None,
            shutdown: ShutdownCoordinator::new(),
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn registry(&self) -> &ChildWindowRegistry {
        &self.registry
    }

    pub fn pending_navigation(&self) -> Option<&PendingNavigation> {
        self.pending_navigation.as_ref()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_done()
    }

    pub fn set_screen(&mut self, screen: ScreenRect) {
        self.screen = screen;
    }

    /// Remember where the tray icon was last seen.
    pub fn set_tray_rect(&mut self, rect: ScreenRect) {
        self.tray_rect = Some(rect);
    }

    // ========================================================================
    // Pointer gestures
    // ========================================================================

    /// Primary button pressed. Returns the cursor glyph for the pressed zone.
    pub fn pointer_down(&mut self, local: Point, global: Point) -> CursorGlyph {
        self.interaction
            .pointer_down(local, global, &self.geometry)
            .cursor()
    }

    /// Pointer moved. Any resulting geometry is already applied.
    pub fn pointer_move(&mut self, local: Point, global: Point) -> PointerMove {
        let result = self.interaction.pointer_move(local, global, &self.geometry);
        if let Some(g) = result.geometry() {
            self.geometry = g;
        }
        result
    }

    /// Primary button released. Returns the geometry persisted, if the release
    /// ended a drag or resize.
    pub fn pointer_up(&mut self) -> Option<WindowGeometry> {
        match self.interaction.pointer_up() {
            InteractionMode::Idle => None,
            InteractionMode::Dragging | InteractionMode::Resizing => {
                self.store.save(&self.geometry);
                Some(self.geometry)
            }
        }
    }

    // ========================================================================
    // Launcher visibility and placement
    // ========================================================================

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the launcher to the tray, telling the user how to get it back.
    pub fn hide_to_tray(&mut self, desktop: &dyn Desktop) {
        let was_visible = std::mem::replace(&mut self.visible, false);
        if was_visible && self.config.notify_on_hide {
            desktop.notify(Notice::info(APP_TITLE, HIDE_TO_TRAY_MESSAGE));
        }
        log::debug!("[LAUNCHER] Hidden to tray");
    }

    /// Move the launcher next to the tray icon, or to the default placement
    /// when the tray position is unknown. The result is persisted.
    pub fn reposition_at_tray(&mut self) -> WindowGeometry {
        self.geometry = match self.tray_rect {
            Some(tray) => self.geometry.anchored_to_tray(tray, self.screen),
            None => WindowGeometry::default_placement(
                self.screen,
                self.geometry.width,
                self.geometry.height,
                self.config.right_margin,
                self.config.bottom_margin,
            ),
        };
        self.store.save(&self.geometry);
        self.geometry
    }

    // ========================================================================
    // Tool windows
    // ========================================================================

    /// Open a tool window; a construction failure is shown to the user and
    /// leaves the tool openable again.
    pub fn open_tool(
        &mut self,
        tool: ToolKind,
        desktop: &dyn Desktop,
    ) -> LauncherResult<OpenOutcome> {
        self.registry.open(tool).map_err(|e| {
            log::error!("[LAUNCHER] {}", e);
            desktop.notify(Notice::warning(APP_TITLE, e.to_string()));
            e
        })
    }

    /// A user asked a tool window to close.
    pub fn request_tool_close(&mut self, tool: ToolKind) -> bool {
        self.registry.request_close(tool)
    }

    // ========================================================================
    // Menus and bookmarks
    // ========================================================================

    pub fn tray_menu(&mut self) -> Vec<MenuEntry> {
        self.tray_snapshot = self.bookmarks.snapshot();
        menu::tray_menu(&self.tray_snapshot)
    }

    pub fn context_menu(&mut self) -> Vec<MenuEntry> {
        self.context_snapshot = self.bookmarks.snapshot();
        menu::context_menu(&self.context_snapshot)
    }

    fn snapshot(&self, menu: MenuKind) -> &[Bookmark] {
        match menu {
            MenuKind::Tray => &self.tray_snapshot,
            MenuKind::Context => &self.context_snapshot,
        }
    }

    /// Activate the bookmark at `index` of the snapshot `menu` was built from.
    pub fn open_bookmark(
        &mut self,
        menu: MenuKind,
        index: usize,
        desktop: &dyn Desktop,
    ) -> LauncherResult<()> {
        let Some(bookmark) = self.snapshot(menu).get(index) else {
            log::warn!("[LAUNCHER] Ignoring stale {:?} bookmark index {}", menu, index);
            return Ok(());
        };
        log::info!("[LAUNCHER] Opening bookmark {:?}", bookmark.name);
        let request = OpenRequest::for_bookmark(bookmark);
        self.open_request(request, desktop)
    }

    /// Hand a bookmark target to the right opener.
    pub fn open_request(&mut self, request: OpenRequest, desktop: &dyn Desktop) -> LauncherResult<()> {
        let result = match &request {
            OpenRequest::Url(url) => desktop.open_url(url),
            OpenRequest::File(path) => desktop.open_file(path),
            OpenRequest::Path(path) => desktop.open_path(path),
            OpenRequest::Folder(path) => return self.navigate_to_folder(path.clone(), desktop),
        };

        result.map_err(|e| {
            let err = LauncherError::Open {
                target: request.target().to_string(),
                message: e.to_string(),
            };
            log::warn!("[LAUNCHER] {}", err);
            desktop.notify(Notice::warning(APP_TITLE, err.to_string()));
            err
        })
    }

    fn navigate_to_folder(&mut self, path: String, desktop: &dyn Desktop) -> LauncherResult<()> {
        let tool = ToolKind::FileNavigator;
        match self.open_tool(tool, desktop)? {
            OpenOutcome::Created => {
                // A fresh window needs time to load before it can navigate
                self.pending_navigation = Some(PendingNavigation { tool, path });
                desktop.schedule_navigation(tool, Duration::from_millis(self.config.navigation_delay_ms));
                Ok(())
            }
            OpenOutcome::Raised => {
                // A newer request supersedes one still waiting on the timer
                if self.pending_navigation.take_if(|p| p.tool == tool).is_some() {
                    log::debug!("[LAUNCHER] Superseded pending navigation for {}", tool);
                }
                self.navigate_now(tool, &path, desktop)
            }
        }
    }

    fn navigate_now(&self, tool: ToolKind, path: &str, desktop: &dyn Desktop) -> LauncherResult<()> {
        let result = match self.registry.get(tool).and_then(|w| w.as_navigator()) {
            Some(navigator) => navigator.navigate_to(path),
            None => Err(LauncherError::Unsupported(format!("{} cannot navigate", tool))),
        };

        result.map_err(|e| {
            log::warn!("[LAUNCHER] Navigation to {:?} failed: {}", path, e);
            desktop.notify(Notice::warning(APP_TITLE, e.to_string()));
            e
        })
    }

    /// Timer callback for a deferred navigation. Returns true if a navigation
    /// was carried out. A no-op if the window was closed in the meantime.
    pub fn run_pending_navigation(&mut self, tool: ToolKind, desktop: &dyn Desktop) -> bool {
        let Some(pending) = self.pending_navigation.take_if(|p| p.tool == tool) else {
            return false;
        };
        if !self.registry.is_live(tool) {
            log::debug!("[LAUNCHER] Dropping navigation, {} is gone", tool);
            return false;
        }
        self.navigate_now(tool, &pending.path, desktop).is_ok()
    }

    // ========================================================================
    // Shutdown
    // ========================================================================

    /// Persist, release sessions, close tool windows, drop the tray and exit.
    /// Later calls do nothing and return `None`.
    pub fn quit(
        &mut self,
        desktop: &dyn Desktop,
        tray: &mut dyn TrayPresence,
    ) -> Option<ShutdownReport> {
        let report = self.shutdown.run(
            self.geometry,
            &self.store,
            &mut self.registry,
            tray,
            desktop,
        )?;
        self.pending_navigation = None;
        self.visible = false;
        Some(report)
    }
}

impl std::fmt::Debug for Launcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Launcher")
            .field("geometry", &self.geometry)
            .field("mode", &self.mode())
            .field("visible", &self.visible)
            .field("registry", &self.registry)
            .field("pending_navigation", &self.pending_navigation)
            .finish_non_exhaustive()
    }
}

fn default_geometry(config: &LauncherConfig, screen: ScreenRect) -> WindowGeometry {
    WindowGeometry::default_placement(
        screen,
        config.default_width,
        config.default_height,
        config.right_margin,
        config.bottom_margin,
    )
}
