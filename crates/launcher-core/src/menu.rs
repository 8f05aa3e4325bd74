//! Menu models for the tray icon and the launcher's context menu.
//!
//! The host turns `MenuEntry` trees into native menus and reports activated
//! items back by id; `MenuAction::parse` maps the id to an action. Bookmark
//! ids name the menu they belong to and an index into that menu's snapshot.

use crate::bookmarks::Bookmark;
use crate::registry::ToolKind;

pub const PLACEHOLDER_LABEL: &str = "(No bookmarks)";
pub const BOOKMARKS_SUBMENU_LABEL: &str = "Bookmarks";

/// The two menus that list bookmarks. Each keeps its own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    Tray,
    Context,
}

impl MenuKind {
    pub fn prefix(self) -> &'static str {
        match self {
            MenuKind::Tray => "tray",
            MenuKind::Context => "context",
        }
    }
}

/// Something a menu item does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowLauncher,
    RepositionAtTray,
    OpenTool(ToolKind),
    OpenBookmark { menu: MenuKind, index: usize },
    Quit,
}

impl MenuAction {
    pub fn id(&self) -> String {
        match self {
            MenuAction::ShowLauncher => "launcher.show".to_string(),
            MenuAction::RepositionAtTray => "launcher.reposition".to_string(),
            MenuAction::OpenTool(tool) => format!("tool.{}", tool.label()),
            MenuAction::OpenBookmark { menu, index } => {
                format!("{}.bookmark.{}", menu.prefix(), index)
            }
            MenuAction::Quit => "launcher.quit".to_string(),
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "launcher.show" => return Some(MenuAction::ShowLauncher),
            "launcher.reposition" => return Some(MenuAction::RepositionAtTray),
            "launcher.quit" => return Some(MenuAction::Quit),
            _ => {}
        }
        if let Some(label) = id.strip_prefix("tool.") {
            return ToolKind::from_label(label).map(MenuAction::OpenTool);
        }
        for menu in [MenuKind::Tray, MenuKind::Context] {
            let index = id
                .strip_prefix(menu.prefix())
                .and_then(|rest| rest.strip_prefix(".bookmark."));
            if let Some(index) = index {
                return index
                    .parse()
                    .ok()
                    .map(|index| MenuAction::OpenBookmark { menu, index });
            }
        }
        None
    }
}

/// A node in a menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        action: MenuAction,
        label: String,
    },
    /// Greyed-out, non-activatable line
    Disabled {
        label: String,
    },
    Separator,
    Submenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    fn item(action: MenuAction, label: impl Into<String>) -> Self {
        MenuEntry::Item {
            action,
            label: label.into(),
        }
    }
}

/// One entry per bookmark in snapshot order, or a disabled placeholder.
pub fn bookmark_entries(menu: MenuKind, bookmarks: &[Bookmark]) -> Vec<MenuEntry> {
    if bookmarks.is_empty() {
        return vec![MenuEntry::Disabled {
            label: PLACEHOLDER_LABEL.to_string(),
        }];
    }

    bookmarks
        .iter()
        .enumerate()
        .map(|(index, bookmark)| {
            MenuEntry::item(MenuAction::OpenBookmark { menu, index }, bookmark.label())
        })
        .collect()
}

/// Context menu shown on right-click over the launcher body.
pub fn context_menu(bookmarks: &[Bookmark]) -> Vec<MenuEntry> {
    bookmark_entries(MenuKind::Context, bookmarks)
}

/// Tray menu: static actions plus the bookmark submenu.
pub fn tray_menu(bookmarks: &[Bookmark]) -> Vec<MenuEntry> {
    let mut entries = vec![
        MenuEntry::item(MenuAction::ShowLauncher, "Show Launcher"),
        MenuEntry::item(MenuAction::RepositionAtTray, "Move Launcher Here"),
        MenuEntry::Separator,
    ];

    entries.extend(ToolKind::ALL.into_iter().map(|tool| {
        MenuEntry::item(
            MenuAction::OpenTool(tool),
            format!("{} {}", tool.glyph(), tool.display_name()),
        )
    }));

    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Submenu {
        label: BOOKMARKS_SUBMENU_LABEL.to_string(),
        entries: bookmark_entries(MenuKind::Tray, bookmarks),
    });
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::item(MenuAction::Quit, "Quit SuiteView"));

    entries
}
