//! File and folder handles.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Handle to a remote file or folder, owned by the caller.
///
/// The client only reads handles; it never builds or mutates them.
pub trait FileRef {
    /// Canonical absolute path, with a leading `/`.
    fn full_path(&self) -> String;

    fn is_folder(&self) -> bool;

    /// Display name, used as the file name when saving downloads.
    fn name(&self) -> &str;

    /// Pending model holding the target of an in-progress rename.
    fn pending(&self) -> Option<&dyn FileRef> {
        None
    }
}

impl<T: FileRef + ?Sized> FileRef for &T {
    fn full_path(&self) -> String {
        (**self).full_path()
    }

    fn is_folder(&self) -> bool {
        (**self).is_folder()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn pending(&self) -> Option<&dyn FileRef> {
        (**self).pending()
    }
}

/// Item type as reported by the bridge listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Dir,
}

/// A file or folder in the remote tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Item name
    pub name: String,
    /// Parent folder as path segments (empty for the root)
    pub path: Vec<String>,
    pub kind: ItemKind,
    /// Size in bytes (as reported; folders often report a block size)
    pub size: u64,
    /// Modification date as reported by the bridge
    pub date: Option<String>,
    /// Permission string, e.g. "drwxr-xr-x"
    pub perms: Option<String>,
    pending: Option<Box<Item>>,
}

impl Item {
    pub fn new(name: impl Into<String>, path: Vec<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            path,
            kind,
            size: 0,
            date: None,
            perms: None,
            pending: None,
        }
    }

    /// Build an item from an absolute path such as `/docs/report.pdf`.
    pub fn from_path(full_path: &str, kind: ItemKind) -> Self {
        let mut segments: Vec<String> = full_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let name = segments.pop().unwrap_or_default();
        Self::new(name, segments, kind)
    }

    pub fn is_file(&self) -> bool {
        self.kind == ItemKind::File
    }

    /// Start a rename: the pending model is a copy of this item with `new_name`.
    pub fn begin_rename(&mut self, new_name: impl Into<String>) {
        let mut target = self.clone();
        target.pending = None;
        target.name = new_name.into();
        self.pending = Some(Box::new(target));
    }

    pub fn cancel_rename(&mut self) {
        self.pending = None;
    }

    /// Adopt the pending model once the bridge has accepted the rename.
    pub fn commit_rename(&mut self) -> bool {
        match self.pending.take() {
            Some(target) => {
                *self = *target;
                true
            }
            None => false,
        }
    }

    pub fn pending_item(&self) -> Option<&Item> {
        self.pending.as_deref()
    }

    /// Parse one entry of a `list` reply.
    ///
    /// Entries look like
    /// `{"name": "docs", "rights": "drwxr-xr-x", "size": "4096",
    /// "date": "2016-03-03 15:31:40", "type": "dir"}`.
    /// `size` may be a number or a numeric string.
    pub(crate) fn from_listing(entry: &Value, path: &[String]) -> Option<Self> {
        let name = entry.get("name")?.as_str()?;
        let kind = match entry.get("type").and_then(Value::as_str) {
            Some("dir") => ItemKind::Dir,
            _ => ItemKind::File,
        };
        let size = match entry.get("size") {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        };

        let mut item = Self::new(name, path.to_vec(), kind);
        item.size = size;
        item.date = entry.get("date").and_then(Value::as_str).map(str::to_string);
        item.perms = entry.get("rights").and_then(Value::as_str).map(str::to_string);
        Some(item)
    }
}

impl FileRef for Item {
    fn full_path(&self) -> String {
        let mut path = format!("/{}/{}", self.path.join("/"), self.name);
        while path.contains("//") {
            path = path.replace("//", "/");
        }
        path
    }

    fn is_folder(&self) -> bool {
        self.kind == ItemKind::Dir
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn pending(&self) -> Option<&dyn FileRef> {
        self.pending.as_deref().map(|item| item as &dyn FileRef)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_path() {
        let item = Item::new("a.txt", vec!["docs".into(), "2024".into()], ItemKind::File);
        assert_eq!(item.full_path(), "/docs/2024/a.txt");

        let root_file = Item::new("a.txt", vec![], ItemKind::File);
        assert_eq!(root_file.full_path(), "/a.txt");

        let root = Item::new("", vec![], ItemKind::Dir);
        assert_eq!(root.full_path(), "/");
    }

    #[test]
    fn test_from_path() {
        let item = Item::from_path("/docs/report.pdf", ItemKind::File);
        assert_eq!(item.name, "report.pdf");
        assert_eq!(item.path, vec!["docs".to_string()]);
        assert_eq!(item.full_path(), "/docs/report.pdf");
        assert!(item.is_file());
        assert!(!item.is_folder());
    }

    #[test]
    fn test_rename_lifecycle() {
        let mut item = Item::from_path("/docs/old.txt", ItemKind::File);
        assert!(FileRef::pending(&item).is_none());

        item.begin_rename("new.txt");
        assert_eq!(FileRef::pending(&item).unwrap().full_path(), "/docs/new.txt");
        assert_eq!(item.full_path(), "/docs/old.txt");

        assert!(item.commit_rename());
        assert_eq!(item.full_path(), "/docs/new.txt");
        assert!(item.pending_item().is_none());
        assert!(!item.commit_rename());

        item.begin_rename("other.txt");
        item.cancel_rename();
        assert!(item.pending_item().is_none());
    }

    #[test]
    fn test_from_listing() {
        let path = vec!["docs".to_string()];
        let dir = Item::from_listing(
            &json!({
                "name": "img",
                "rights": "drwxr-xr-x",
                "size": "4096",
                "date": "2016-03-03 15:31:40",
                "type": "dir"
            }),
            &path,
        )
        .unwrap();
        assert!(dir.is_folder());
        assert_eq!(dir.size, 4096);
        assert_eq!(dir.perms.as_deref(), Some("drwxr-xr-x"));
        assert_eq!(dir.full_path(), "/docs/img");

        let file =
            Item::from_listing(&json!({ "name": "a.txt", "size": 12, "type": "file" }), &path)
                .unwrap();
        assert!(file.is_file());
        assert_eq!(file.size, 12);
        assert!(file.date.is_none());

        assert!(Item::from_listing(&json!({ "size": 1 }), &path).is_none());
    }

    #[test]
    fn test_reference_is_a_file_ref() {
        let item = Item::from_path("/a/b", ItemKind::Dir);
        let by_ref: &dyn FileRef = &item;
        assert_eq!((&by_ref).full_path(), "/a/b");
        assert!((&&item).is_folder());
    }
}
