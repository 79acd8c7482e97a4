//! Filesystem handles and bridge operations.

pub(crate) mod item;
mod operations;

pub use item::{FileRef, Item, ItemKind};
pub use operations::{Download, UploadEntry};
