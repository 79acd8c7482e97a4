//! Shared helpers for building request parameters.

use crate::fs::item::FileRef;

/// Absolute paths of `files`, in order.
pub(crate) fn file_list<F: FileRef>(files: &[F]) -> Vec<String> {
    files.iter().map(FileRef::full_path).collect()
}

/// `/` followed by the segments joined with `/`.
pub(crate) fn rooted<S: AsRef<str>>(segments: &[S]) -> String {
    format!("/{}", join(segments))
}

/// Segments joined with `/`, or `/` when that is empty.
pub(crate) fn joined_or_root<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = join(segments);
    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}

fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("/")
}
