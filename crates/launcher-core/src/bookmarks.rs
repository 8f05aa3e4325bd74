//! Read-only access to the bookmark source owned by the file navigator.
//!
//! The source is re-read every time a menu is built, so edits made by the
//! file navigator show up on the next menu open. Two category layouts are
//! accepted:
//!
//! ```text
//! { "categories": { "Work": [ { "name", "path", "type" }, ... ] } }
//! { "categories": { "Work": { "items": [ ... ], "subcategories": [ ... ] } } }
//! ```
//!
//! Items without a `path` (category references in the nested layout) are
//! skipped. Categories keep their file order.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LauncherResult;

/// What a bookmark points at, which decides how it is opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BookmarkKind {
    Folder,
    File,
    Url,
    SharepointLink,
    /// Any other type string; opened with the generic open-path mechanism
    Other(String),
}

impl BookmarkKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "folder" => Self::Folder,
            "file" => Self::File,
            "url" => Self::Url,
            "sharepoint-link" | "sharepoint" => Self::SharepointLink,
            other => Self::Other(other.to_string()),
        }
    }

    /// Best guess for items stored without a type.
    pub fn infer(path: &str) -> Self {
        let lower = path.trim().to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            if lower.contains("sharepoint") {
                Self::SharepointLink
            } else {
                Self::Url
            }
        } else {
            Self::Other("path".to_string())
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Folder => "📁",
            Self::File => "📄",
            Self::Url => "🌐",
            Self::SharepointLink => "🔗",
            Self::Other(kind) if kind == "path" => "📍",
            Self::Other(_) => "📌",
        }
    }
}

/// A named shortcut from the bookmark source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub path: String,
    pub kind: BookmarkKind,
    pub category: String,
}

impl Bookmark {
    /// Menu label: glyph followed by the display name.
    pub fn label(&self) -> String {
        format!("{} {}", self.kind.glyph(), self.name)
    }
}

/// How a bookmark is handed off when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenRequest {
    /// Platform default URL opener
    Url(String),
    /// Platform default application for a file
    File(String),
    /// Navigate the file navigator to a folder
    Folder(String),
    /// Generic open-path fallback
    Path(String),
}

impl OpenRequest {
    pub fn for_bookmark(bookmark: &Bookmark) -> Self {
        let path = bookmark.path.clone();
        match bookmark.kind {
            BookmarkKind::Url | BookmarkKind::SharepointLink => Self::Url(path),
            BookmarkKind::Folder => Self::Folder(path),
            BookmarkKind::File => Self::File(path),
            BookmarkKind::Other(_) => Self::Path(path),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Url(p) | Self::File(p) | Self::Folder(p) | Self::Path(p) => p,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SourceRecord {
    #[serde(default)]
    categories: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryRecord {
    Flat(Vec<ItemRecord>),
    Nested {
        #[serde(default)]
        items: Vec<ItemRecord>,
    },
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl ItemRecord {
    fn into_bookmark(self, category: &str) -> Option<Bookmark> {
        let path = self.path.filter(|p| !p.trim().is_empty())?;
        // Category references in the nested layout carry type "category" and no path
        let kind = match self.kind.as_deref() {
            Some("category") => return None,
            Some(raw) => BookmarkKind::parse(raw),
            None => BookmarkKind::infer(&path),
        };
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| path.clone());

        Some(Bookmark {
            name,
            path,
            kind,
            category: category.to_string(),
        })
    }
}

/// Parse a bookmark source document into a flat, ordered list.
pub fn parse_bookmarks(json: &str) -> LauncherResult<Vec<Bookmark>> {
    let record: SourceRecord = serde_json::from_str(json)?;
    let mut bookmarks = Vec::new();

    for (category, value) in record.categories {
        let items = match serde_json::from_value::<CategoryRecord>(value) {
            Ok(CategoryRecord::Flat(items)) | Ok(CategoryRecord::Nested { items }) => items,
            Err(e) => {
                log::warn!("[BOOKMARKS] Skipping category {:?}: {}", category, e);
                continue;
            }
        };
        bookmarks.extend(items.into_iter().filter_map(|i| i.into_bookmark(&category)));
    }

    Ok(bookmarks)
}

/// The bookmark file, read on demand.
#[derive(Debug, Clone)]
pub struct BookmarkSource {
    path: PathBuf,
}

impl BookmarkSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_snapshot(&self) -> LauncherResult<Vec<Bookmark>> {
        let raw = fs::read_to_string(&self.path)?;
        parse_bookmarks(&raw)
    }

    /// Current bookmarks, or an empty list if the source cannot be read.
    pub fn snapshot(&self) -> Vec<Bookmark> {
        match self.try_snapshot() {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                log::warn!(
                    "[BOOKMARKS] Could not read {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_layout_in_file_order() {
        let json = r#"{
            "categories": {
                "Work": [
                    { "name": "Reports", "path": "C:\\Reports", "type": "folder" },
                    { "name": "Wiki", "path": "https://wiki.example.com", "type": "url" }
                ],
                "Admin": [
                    { "name": "Budget", "path": "C:\\budget.xlsx", "type": "file" }
                ]
            }
        }"#;

        let bookmarks = parse_bookmarks(json).unwrap();
        let names: Vec<_> = bookmarks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Reports", "Wiki", "Budget"]);
        assert_eq!(bookmarks[0].kind, BookmarkKind::Folder);
        assert_eq!(bookmarks[2].category, "Admin");
    }

    #[test]
    fn test_nested_layout_skips_category_references() {
        let json = r#"{
            "categories": {
                "Work": {
                    "items": [
                        { "type": "category", "name": "Projects" },
                        { "name": "Team site", "path": "https://corp.sharepoint.com/x", "type": "sharepoint" }
                    ],
                    "subcategories": ["Projects"]
                },
                "Projects": { "items": [], "subcategories": [] }
            },
            "bars": {},
            "version": 4
        }"#;

        let bookmarks = parse_bookmarks(json).unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].kind, BookmarkKind::SharepointLink);
    }

    #[test]
    fn test_kind_parsing_and_aliases() {
        assert_eq!(BookmarkKind::parse("Folder"), BookmarkKind::Folder);
        assert_eq!(BookmarkKind::parse("sharepoint-link"), BookmarkKind::SharepointLink);
        assert_eq!(BookmarkKind::parse("sharepoint"), BookmarkKind::SharepointLink);
        assert_eq!(
            BookmarkKind::parse("unc-share"),
            BookmarkKind::Other("unc-share".to_string())
        );
    }

    #[test]
    fn test_missing_type_is_inferred() {
        assert_eq!(BookmarkKind::infer("https://example.com"), BookmarkKind::Url);
        assert_eq!(
            BookmarkKind::infer("https://corp.SharePoint.com/sites/a"),
            BookmarkKind::SharepointLink
        );
        assert_eq!(
            BookmarkKind::infer("D:\\data"),
            BookmarkKind::Other("path".to_string())
        );
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(BookmarkKind::Folder.glyph(), "📁");
        assert_eq!(BookmarkKind::File.glyph(), "📄");
        assert_eq!(BookmarkKind::Url.glyph(), "🌐");
        assert_eq!(BookmarkKind::SharepointLink.glyph(), "🔗");
        assert_eq!(BookmarkKind::Other("path".into()).glyph(), "📍");
        assert_eq!(BookmarkKind::Other("odd".into()).glyph(), "📌");
    }

    #[test]
    fn test_items_without_path_are_skipped_and_name_defaults_to_path() {
        let json = r#"{ "categories": { "Misc": [
            { "name": "No path", "type": "file" },
            { "path": "/srv/share", "type": "folder" }
        ] } }"#;
        let bookmarks = parse_bookmarks(json).unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].name, "/srv/share");
        assert_eq!(bookmarks[0].label(), "📁 /srv/share");
    }

    #[test]
    fn test_bad_category_does_not_hide_others() {
        let json = r#"{ "categories": {
            "Broken": 42,
            "Fine": [ { "name": "A", "path": "/a", "type": "file" } ]
        } }"#;
        let bookmarks = parse_bookmarks(json).unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].category, "Fine");
    }

    #[test]
    fn test_open_request_dispatch() {
        let mk = |kind| Bookmark {
            name: "n".into(),
            path: "p".into(),
            kind,
            category: "c".into(),
        };
        assert_eq!(OpenRequest::for_bookmark(&mk(BookmarkKind::Url)), OpenRequest::Url("p".into()));
        assert_eq!(
            OpenRequest::for_bookmark(&mk(BookmarkKind::SharepointLink)),
            OpenRequest::Url("p".into())
        );
        assert_eq!(
            OpenRequest::for_bookmark(&mk(BookmarkKind::Folder)),
            OpenRequest::Folder("p".into())
        );
        assert_eq!(OpenRequest::for_bookmark(&mk(BookmarkKind::File)), OpenRequest::File("p".into()));
        assert_eq!(
            OpenRequest::for_bookmark(&mk(BookmarkKind::Other("x".into()))),
            OpenRequest::Path("p".into())
        );
    }

    #[test]
    fn test_unreadable_source_is_empty() {
        let source = BookmarkSource::new(std::env::temp_dir().join("no_such_bookmarks_file.json"));
        assert!(source.try_snapshot().is_err());
        assert!(source.snapshot().is_empty());
    }
}
