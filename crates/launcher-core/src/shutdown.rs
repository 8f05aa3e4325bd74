//! Application-wide shutdown sequence.
//!
//! Order matters: geometry is persisted first, then every live tool window
//! releases its external sessions, then all tool windows are torn down, then
//! the tray indicator goes away and finally the event loop stops. Session
//! release always happens before any window is destroyed.

use crate::geometry::WindowGeometry;
use crate::platform::{Desktop, TrayPresence};
use crate::registry::{ChildWindowRegistry, SessionRelease, ToolKind};
use crate::store::GeometryStore;

/// What a shutdown did, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShutdownReport {
    pub saved: Option<WindowGeometry>,
    pub released: Vec<(ToolKind, SessionRelease)>,
    pub closed: Vec<ToolKind>,
}

/// Runs the shutdown sequence at most once.
#[derive(Debug, Default)]
pub struct ShutdownCoordinator {
    done: bool,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Run the sequence. Returns `None` if it already ran.
    pub fn run(
        &mut self,
        geometry: WindowGeometry,
        store: &GeometryStore,
        registry: &mut ChildWindowRegistry,
        tray: &mut dyn TrayPresence,
        desktop: &dyn Desktop,
    ) -> Option<ShutdownReport> {
        if self.done {
            log::debug!("[SHUTDOWN] Already shut down, ignoring");
            return None;
        }
        self.done = true;
        log::info!("[SHUTDOWN] Quitting SuiteView");

        store.save(&geometry);

        let released = registry.release_all_sessions();
        for (tool, release) in &released {
            log::info!("[SHUTDOWN] {} sessions: {:?}", tool, release);
        }

        let closed = registry.force_close_all();
        log::info!("[SHUTDOWN] Closed {} tool window(s)", closed.len());

        tray.remove();
        desktop.exit();

        Some(ShutdownReport {
            saved: Some(geometry),
            released,
            closed,
        })
    }
}
