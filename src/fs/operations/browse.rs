//! Listing and file content operations.

use serde_json::Value;

use crate::api::{Mode, RequestDescriptor};
use crate::error::{BridgeError, Result};
use crate::fs::item::{FileRef, Item};
use crate::i18n::MessageKey;
use crate::manager::FileManager;

impl FileManager {
    /// List a directory.
    ///
    /// # Arguments
    /// * `path` - Path relative to the root, without a leading slash (e.g., "", "docs/2024")
    ///
    /// # Returns
    /// The raw bridge reply; entries are in its `result` array.
    pub async fn list(&self, path: &str) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::List)
            .param("onlyFolders", false)
            .param("path", format!("/{}", path));

        self.api
            .request(
                &self.endpoints.list_url,
                request,
                &self.message(MessageKey::Listing),
            )
            .await
    }

    /// List a directory and parse its entries.
    ///
    /// # Example
    /// ```no_run
    /// # use fmbridge::{BridgeConfig, FileManager};
    /// # async fn example() -> fmbridge::Result<()> {
    /// let manager = FileManager::new(&BridgeConfig::default())?;
    /// for item in manager.list_items(&["docs"]).await? {
    ///     println!("{} ({} bytes)", item.name, item.size);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_items<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<Item>> {
        let segments: Vec<String> = path.iter().map(|s| s.as_ref().to_string()).collect();
        let reply = self.list(&segments.join("/")).await?;

        let entries = reply
            .get("result")
            .and_then(Value::as_array)
            .ok_or_else(|| BridgeError::Custom("Listing reply has no result array".to_string()))?;

        Ok(entries
            .iter()
            .filter_map(|entry| Item::from_listing(entry, &segments))
            .collect())
    }

    /// Fetch a file's content for editing.
    pub async fn get_content<F: FileRef + ?Sized>(&self, item: &F) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::EditFile).param("path", item.full_path());

        self.api
            .request(
                &self.endpoints.get_content_url,
                request,
                &self.message(MessageKey::GettingContent),
            )
            .await
    }

    /// Fetch a file's content as text (the `result` string of [`Self::get_content`]).
    pub async fn read_text<F: FileRef + ?Sized>(&self, item: &F) -> Result<String> {
        let reply = self.get_content(item).await?;
        reply
            .get("result")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| BridgeError::Custom("Content reply has no result string".to_string()))
    }

    /// Save new content to a file.
    pub async fn edit<F: FileRef + ?Sized>(&self, item: &F, content: &str) -> Result<Value> {
        let request = RequestDescriptor::new(Mode::SaveFile)
            .param("content", content)
            .param("path", item.full_path());

        self.api
            .request(
                &self.endpoints.edit_url,
                request,
                &self.message(MessageKey::Modifying),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::MALFORMED_RESPONSE;
    use crate::fs::{FileRef, Item, ItemKind};
    use crate::i18n::MessageKey;
    use crate::test_support::{manager, HANDLER_URL};
    use crate::transport::TransportResult;
    use bytes::Bytes;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_root() {
        let (manager, transport, _) = manager();
        manager.list("").await.unwrap();

        assert_eq!(
            transport.single_params(),
            json!({ "mode": "list", "onlyFolders": false, "path": "/" })
        );
        assert_eq!(transport.urls(), vec![HANDLER_URL]);
    }

    #[tokio::test]
    async fn test_list_nested() {
        let (manager, transport, _) = manager();
        manager.list("a/b").await.unwrap();
        assert_eq!(transport.single_params()["path"], json!("/a/b"));
    }

    #[tokio::test]
    async fn test_list_failure_uses_listing_message() {
        let (manager, transport, _) = manager();
        transport.reply_json(false, json!({ "result": null }));

        let err = manager.list("").await.unwrap_err();
        assert_eq!(err.to_string(), MessageKey::Listing.english());
        assert_eq!(manager.last_error(), MessageKey::Listing.english());
    }

    #[tokio::test]
    async fn test_list_items_parses_entries() {
        let (manager, transport, _) = manager();
        transport.reply_json(
            true,
            json!({ "result": [
                {
                    "name": "img",
                    "rights": "drwxr-xr-x",
                    "size": "4096",
                    "date": "2016-03-03 15:31:40",
                    "type": "dir"
                },
                {
                    "name": "a.txt",
                    "rights": "-rw-r--r--",
                    "size": "12",
                    "date": "2016-03-03 15:31:40",
                    "type": "file"
                }
            ] }),
        );

        let items = manager.list_items(&["docs"]).await.unwrap();
        assert_eq!(transport.single_params()["path"], json!("/docs"));
        assert_eq!(items.len(), 2);
        assert!(items[0].is_folder());
        assert_eq!(items[1].full_path(), "/docs/a.txt");
        assert_eq!(items[1].size, 12);
    }

    #[tokio::test]
    async fn test_list_items_without_result_array() {
        let (manager, transport, _) = manager();
        transport.reply_json(true, json!({ "result": { "success": true } }));
        assert!(manager.list_items::<&str>(&[]).await.is_err());
    }

    #[tokio::test]
    async fn test_get_content_and_read_text() {
        let (manager, transport, _) = manager();
        let item = Item::from_path("/notes/todo.md", ItemKind::File);
        transport.reply_json(true, json!({ "result": "- buy milk" }));

        let text = manager.read_text(&item).await.unwrap();
        assert_eq!(text, "- buy milk");
        assert_eq!(
            transport.single_params(),
            json!({ "mode": "editfile", "path": "/notes/todo.md" })
        );
    }

    #[tokio::test]
    async fn test_edit_sends_content() {
        let (manager, transport, _) = manager();
        let item = Item::from_path("/notes/todo.md", ItemKind::File);
        manager.edit(&item, "- buy bread").await.unwrap();

        assert_eq!(
            transport.single_params(),
            json!({ "mode": "savefile", "path": "/notes/todo.md", "content": "- buy bread" })
        );
    }

    #[tokio::test]
    async fn test_edit_malformed_reply() {
        let (manager, transport, _) = manager();
        transport.reply(TransportResult::Success(Bytes::from_static(b"<html>oops</html>")));
        let item = Item::from_path("/a.txt", ItemKind::File);

        let err = manager.edit(&item, "x").await.unwrap_err();
        assert_eq!(err.to_string(), MALFORMED_RESPONSE);
        assert_eq!(manager.last_error(), MALFORMED_RESPONSE);
        assert!(!manager.is_busy());
    }
}
