use std::collections::HashSet;

/// Paths already scheduled or fetched
///
/// A path is marked when it is first scheduled, not when its fetch
/// completes, so a link seen twice before its page is fetched is still
/// queued only once.
#[derive(Debug, Default)]
pub struct VisitedSet {
    paths: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `path` and returns true if it was not present yet
    pub fn mark_if_new(&mut self, path: &str) -> bool {
        if self.paths.contains(path) {
            return false;
        }
        self.paths.insert(path.to_string())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
