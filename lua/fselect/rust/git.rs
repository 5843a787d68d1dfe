use git2::Repository;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::path_utils::resolve_path;

pub trait ProjectRootResolver {
    /// Absolute project root. Must stay stable for the lifetime of a selection session.
    fn project_root(&self) -> PathBuf;
}

/// A fixed root, used when the host already knows the project directory.
impl ProjectRootResolver for PathBuf {
    fn project_root(&self) -> PathBuf {
        self.clone()
    }
}

/// Resolves the project root to the git work tree containing `base_path`, or `base_path`
/// itself outside of a repository. Discovery runs once at construction and always yields an
/// absolute path with symlinks resolved.
#[derive(Debug, Clone)]
pub struct GitRootResolver {
    root: PathBuf,
}

impl GitRootResolver {
    pub fn discover(base_path: &Path) -> Self {
        let base_path = absolute_root(base_path);
        let git_workdir = Repository::discover(&base_path)
            .ok()
            .and_then(|repo| repo.workdir().map(Path::to_path_buf));

        let root = match git_workdir {
            Some(workdir) => {
                debug!("Git repository found at: {}", workdir.display());
                workdir
            }
            None => {
                debug!("No git repository found for path: {}", base_path.display());
                base_path
            }
        };

        Self {
            root: absolute_root(&root),
        }
    }
}

fn absolute_root(path: &Path) -> PathBuf {
    let resolved = resolve_path(path);
    std::path::absolute(&resolved).unwrap_or(resolved)
}

impl ProjectRootResolver for GitRootResolver {
    fn project_root(&self) -> PathBuf {
        self.root.clone()
    }
}
