use crate::file_selector::scanner::RecursiveFileLister;
use crate::file_selector::store::SelectionStore;
use crate::path_utils::normalize_path;
use crate::types::ListOptions;
use std::path::Path;
use tracing::{debug, warn};

/// Replaces a selected directory with the regular files beneath it.
pub struct DirectoryExpander<'a> {
    lister: &'a dyn RecursiveFileLister,
    options: ListOptions,
}

impl<'a> DirectoryExpander<'a> {
    pub fn new(lister: &'a dyn RecursiveFileLister, options: ListOptions) -> Self {
        Self {
            lister,
            options: ListOptions {
                include_directories: false,
                ..options
            },
        }
    }

    /// Inserts every file under `directory` not already in `store` and returns how many
    /// were inserted. A failing lister leaves `store` untouched and yields 0.
    pub fn expand(&self, directory: &Path, project_root: &Path, store: &mut SelectionStore) -> usize {
        let files = match self.lister.list_files(directory, self.options) {
            Ok(files) => files,
            Err(e) => {
                warn!("Abandoning expansion of {}: {}", directory.display(), e);
                return 0;
            }
        };

        let listed = files.len();
        let inserted = store.extend(
            files
                .iter()
                .map(|file| normalize_path(&file.to_string_lossy(), project_root)),
        );

        debug!(
            "Expanded {}: {} files listed, {} newly selected",
            directory.display(),
            listed,
            inserted
        );
        inserted
    }
}
