// src/core/paths.rs
//! Dot-notation path-set semantics
//!
//! A `PathSet` names the locations a transform applies to. Membership is
//! exact; `narrow` re-scopes the set for the recursive call processing a
//! field's children.

use std::collections::BTreeSet;

use crate::value::Map;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet(BTreeSet<String>);

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        self.0.insert(path.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Exact membership test
    pub fn selected(&self, path: &str) -> bool {
        self.0.contains(path)
    }

    /// The set visible to the recursion into `parent`'s children: every
    /// member starting with `parent + "."`, prefix stripped.
    pub fn narrow(&self, parent: &str) -> PathSet {
        let prefix = format!("{parent}.");
        self.0
            .iter()
            .filter_map(|p| p.strip_prefix(&prefix))
            .collect()
    }

    /// Default selection when the caller supplies none: the top-level
    /// field names of the root object, each selected as a whole unit.
    pub fn from_root_fields(map: &Map) -> Self {
        map.keys().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for PathSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PathSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Join a parent dot path and a field name
pub(crate) fn join_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_owned()
    } else {
        format!("{base}.{key}")
    }
}
