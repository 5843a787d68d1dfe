use crate::error::Error;
use crate::types::{EntryKind, ListOptions};
use ignore::{WalkBuilder, WalkState};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

pub trait FileSystemStat {
    /// `None` when nothing exists at `path`.
    fn stat(&self, path: &Path) -> Option<EntryKind>;
}

pub trait RecursiveFileLister {
    /// Every entry beneath `root` (the root itself excluded), as absolute paths sorted by path.
    fn list_files(&self, root: &Path, options: ListOptions) -> Result<Vec<PathBuf>, Error>;
}

/// The local filesystem: `std::fs` for stat, a parallel `ignore` walk for listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystemStat for LocalFs {
    fn stat(&self, path: &Path) -> Option<EntryKind> {
        let metadata = std::fs::metadata(path).ok()?;
        if metadata.is_dir() {
            Some(EntryKind::Directory)
        } else {
            Some(EntryKind::RegularFile)
        }
    }
}

impl RecursiveFileLister for LocalFs {
    fn list_files(&self, root: &Path, options: ListOptions) -> Result<Vec<PathBuf>, Error> {
        let walk_start = std::time::Instant::now();

        // an unreadable root fails the whole listing, unreadable subtrees are skipped
        std::fs::read_dir(root).map_err(|e| Error::Lister {
            root: root.to_path_buf(),
            source: e.into(),
        })?;

        let respect_ignore = options.respect_ignore_rules;
        let walker = WalkBuilder::new(root)
            .hidden(!options.include_hidden)
            .git_ignore(respect_ignore)
            .git_exclude(respect_ignore)
            .git_global(respect_ignore)
            .ignore(respect_ignore)
            .parents(respect_ignore)
            .require_git(false)
            .follow_links(false)
            .build_parallel();

        let files = Arc::new(Mutex::new(Vec::with_capacity(256)));
        walker.run(|| {
            let files = Arc::clone(&files);

            Box::new(move |result| {
                let entry = match result {
                    Ok(entry) => entry,
                    Err(e) => {
                        debug!("Skipping unreadable entry: {}", e);
                        return WalkState::Continue;
                    }
                };

                if entry.depth() == 0 || is_git_file(entry.path()) {
                    return WalkState::Continue;
                }

                let wanted = entry.file_type().is_some_and(|file_type| {
                    file_type.is_file() || (options.include_directories && file_type.is_dir())
                });

                if wanted {
                    if let Ok(mut files_vec) = files.lock() {
                        files_vec.push(entry.into_path());
                    }
                }
                WalkState::Continue
            })
        });

        let mut files =
            std::mem::take(&mut *files.lock().unwrap_or_else(PoisonError::into_inner));
        files.sort();

        info!(
            "Listed {} entries under {} in {:?}",
            files.len(),
            root.display(),
            walk_start.elapsed()
        );
        Ok(files)
    }
}

#[inline]
pub fn is_git_file(path: &Path) -> bool {
    path.components().any(|component| component.as_os_str() == ".git")
}
