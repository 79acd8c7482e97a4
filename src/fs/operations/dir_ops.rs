//! Copy, move, delete, rename, mkdir and permission operations.

use serde_json::Value;

use super::utils::{file_list, joined_or_root, rooted};
use crate::api::{Mode, RequestDescriptor};
use crate::error::{BridgeError, Result};
use crate::fs::item::FileRef;
use crate::i18n::MessageKey;
use crate::manager::FileManager;

impl FileManager {
    /// Copy files into a folder.
    ///
    /// # Arguments
    /// * `files` - Items to copy
    /// * `path` - Destination folder as path segments (e.g., `["docs", "2024"]`)
    pub async fn copy<F: FileRef, S: AsRef<str>>(&self, files: &[F], path: &[S]) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::Copy)
            .param("items", file_list(files))
            .param("newPath", rooted(path));

        self.api
            .request(
                &self.endpoints.copy_url,
                request,
                &self.message(MessageKey::Copying),
            )
            .await
    }

    /// Move files into a folder. Goes to the rename endpoint.
    pub async fn mv<F: FileRef, S: AsRef<str>>(&self, files: &[F], path: &[S]) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::Move)
            .param("items", file_list(files))
            .param("newPath", rooted(path));

        self.api
            .request(
                &self.endpoints.rename_url,
                request,
                &self.message(MessageKey::Renaming),
            )
            .await
    }

    /// Delete files and folders.
    pub async fn remove<F: FileRef>(&self, files: &[F]) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::Delete).param("items", file_list(files));

        self.api
            .request(
                &self.endpoints.remove_url,
                request,
                &self.message(MessageKey::Deleting),
            )
            .await
    }

    /// Rename an item to the path of its pending model.
    ///
    /// Fails without contacting the bridge if the item has no pending model.
    ///
    /// # Example
    /// ```no_run
    /// # use fmbridge::{BridgeConfig, FileManager, Item, ItemKind};
    /// # async fn example() -> fmbridge::Result<()> {
    /// let manager = FileManager::new(&BridgeConfig::default())?;
    /// let mut item = Item::from_path("/docs/draft.txt", ItemKind::File);
    /// item.begin_rename("final.txt");
    /// manager.rename(&item).await?;
    /// item.commit_rename();
    /// # Ok(())
    /// # }
    /// ```
    pub async fn rename<F: FileRef + ?Sized>(&self, item: &F) -> Result<Value> {
        let new_path = item.pending().map(|target| target.full_path()).ok_or_else(|| {
            BridgeError::Custom(format!("No pending rename for {}", item.full_path()))
        })?;

        let request = RequestDescriptor::new(Mode::Rename)
            .param("path", item.full_path())
            .param("newPath", new_path);

        self.api
            .request(
                &self.endpoints.rename_url,
                request,
                &self.message(MessageKey::Renaming),
            )
            .await
    }

    /// Create a folder named `name` inside `path` (root when empty).
    pub async fn create_folder<S: AsRef<str>>(&self, name: &str, path: &[S]) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::AddFolder)
            .param("path", joined_or_root(path))
            .param("name", name);

        self.api
            .request(
                &self.endpoints.create_folder_url,
                request,
                &self.message(MessageKey::CreatingFolder),
            )
            .await
    }

    /// Change permissions of files and folders.
    ///
    /// # Arguments
    /// * `perms` - Octal form, e.g. "755"
    /// * `perms_code` - Symbolic form, e.g. "rwxr-xr-x"
    /// * `recursive` - Apply to folder contents as well
    pub async fn change_permissions<F: FileRef>(
        &self,
        files: &[F],
        perms: &str,
        perms_code: &str,
        recursive: bool,
    ) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::ChangePermissions)
            .param("items", file_list(files))
            .param("perms", perms)
            .param("permsCode", perms_code)
            .param("recursive", recursive);

        self.api
            .request(
                &self.endpoints.permissions_url,
                request,
                &self.message(MessageKey::ChangingPerms),
            )
            .await
    }
}
