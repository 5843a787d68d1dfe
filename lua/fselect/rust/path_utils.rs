use std::path::{Component, Path, PathBuf};

/// Lexically resolves `.`, `..`, redundant and trailing separators without touching the
/// filesystem. `..` above the root of an absolute path is dropped, above a relative path
/// it is kept.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    cleaned
}

/// Cleans `path`, then resolves symlinks in its longest existing prefix, so every spelling
/// of an entry on disk maps to one physical path. Paths with no existing prefix stay
/// lexically cleaned.
pub fn resolve_path(path: &Path) -> PathBuf {
    let cleaned = clean_path(path);
    resolve_existing_prefix(&cleaned).unwrap_or(cleaned)
}

fn resolve_existing_prefix(path: &Path) -> Option<PathBuf> {
    let mut missing = Vec::new();
    let mut existing = path;

    loop {
        if let Ok(resolved) = existing.canonicalize() {
            return Some(missing.iter().rev().fold(resolved, |acc, name| acc.join(name)));
        }
        missing.push(existing.file_name()?);
        existing = existing.parent()?;
    }
}

/// Resolves `path` against `project_root` when it is relative.
pub fn absolute_path(path: &str, project_root: &Path) -> PathBuf {
    resolve_path(&project_root.join(path))
}

/// Converts any spelling of a path into the identity key used by the selection:
/// relative to `project_root` with `/` separators. Paths outside the root stay absolute.
pub fn normalize_path(path: &str, project_root: &Path) -> String {
    let root = resolve_path(project_root);
    let absolute = resolve_path(&root.join(path));

    match pathdiff::diff_paths(&absolute, &root) {
        Some(relative) if !relative.starts_with("..") => {
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                to_slash_string(&relative)
            }
        }
        _ => to_slash_string(&absolute),
    }
}

#[inline]
fn to_slash_string(path: &Path) -> String {
    let path = path.to_string_lossy();
    if cfg!(windows) {
        path.replace('\\', "/")
    } else {
        path.into_owned()
    }
}

/// `term://`, `oil://`, `fugitive://` and friends: buffers that are not files on disk.
pub fn has_uri_scheme(name: &str) -> bool {
    let Some((scheme, _)) = name.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
