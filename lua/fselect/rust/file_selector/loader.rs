use crate::content_kind::ContentKindClassifier;
use crate::path_utils::absolute_path;
use crate::types::{FileContentRecord, UNKNOWN_CONTENT_KIND};
use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

/// Reads every selected file and tags it with its content kind. Unreadable entries are
/// left out; the remaining records keep the selection order.
pub fn export_contents(
    selection: &[String],
    project_root: &Path,
    classifier: &dyn ContentKindClassifier,
) -> Vec<FileContentRecord> {
    selection
        .par_iter()
        .filter_map(|path| {
            let absolute = absolute_path(path, project_root);
            let content = match std::fs::read(&absolute) {
                Ok(content) => content,
                Err(e) => {
                    debug!("Skipping unreadable selection {}: {}", path, e);
                    return None;
                }
            };

            let kind = classifier
                .classify(path, &content)
                .unwrap_or_else(|| UNKNOWN_CONTENT_KIND.to_string());

            Some(FileContentRecord {
                path: path.clone(),
                content,
                kind,
            })
        })
        .collect()
}
