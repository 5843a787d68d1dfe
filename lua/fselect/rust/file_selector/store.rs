use std::collections::HashSet;

/// Ordered, deduplicated set of normalized paths. Insertion order is the order paths are
/// shown and exported in; the side set keeps membership checks O(1).
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    paths: Vec<String>,
    members: HashSet<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `path` unless already present. Returns whether it was inserted.
    pub fn insert(&mut self, path: String) -> bool {
        if self.members.contains(&path) {
            return false;
        }

        self.members.insert(path.clone());
        self.paths.push(path);
        true
    }

    /// Inserts every new path, keeping iteration order. Returns how many were inserted.
    pub fn extend<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        paths.into_iter().filter(|path| self.insert(path.clone())).count()
    }

    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.members.contains(path)
    }

    pub fn remove(&mut self, path: &str) -> bool {
        if !self.members.remove(path) {
            return false;
        }

        if let Some(index) = self.paths.iter().position(|p| p == path) {
            self.paths.remove(index);
        }
        true
    }

    /// Removes the entry at the 0-based `index`, or returns `None` when out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.paths.len() {
            return None;
        }

        let path = self.paths.remove(index);
        self.members.remove(&path);
        Some(path)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.members.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.paths
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.paths.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
