//! Core of the SuiteView launcher: a small frameless, always-on-top window
//! that opens the SuiteView tools and stays in the tray.
//!
//! Everything here is independent of the windowing toolkit. The desktop host
//! implements `WindowFactory`, `ChildWindow`, `Desktop` and `TrayPresence`
//! and forwards its events to a single `Launcher`.

pub mod bookmarks;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hit_test;
pub mod interaction;
pub mod launcher;
pub mod menu;
pub mod platform;
pub mod registry;
pub mod shutdown;
pub mod store;

pub use bookmarks::{parse_bookmarks, Bookmark, BookmarkKind, BookmarkSource, OpenRequest};
pub use config::{suiteview_home, LauncherConfig, StoragePaths};
pub use error::{LauncherError, LauncherResult, OptionExt, ResultExt};
pub use geometry::{Point, ScreenRect, SizeLimits, WindowGeometry};
pub use hit_test::{hit_test, CursorGlyph, HitZone, ResizeEdges};
pub use interaction::{InteractionMachine, InteractionMode, PointerMove};
pub use launcher::{Launcher, PendingNavigation, APP_TITLE, HIDE_TO_TRAY_MESSAGE};
pub use menu::{MenuAction, MenuEntry, MenuKind};
pub use platform::{Desktop, Notice, NoticeLevel, TrayPresence};
pub use registry::{
    ChildWindow, ChildWindowRegistry, DisconnectAll, DisconnectOne, Navigate, OpenOutcome,
    SessionRelease, ToolKind, WindowFactory,
};
pub use shutdown::{ShutdownCoordinator, ShutdownReport};
pub use store::GeometryStore;
