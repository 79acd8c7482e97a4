//! Bridge operations split into focused modules.

mod archive;
mod browse;
mod dir_ops;
mod download;
mod upload;
mod utils;

pub use download::Download;
pub use upload::UploadEntry;
