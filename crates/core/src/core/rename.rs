use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::trace;

use super::exclude::is_excluded;
use super::fields::PATH_SEPARATOR;
use super::token_allocator::TokenAllocator;

/// Alias table plus allocation counter for one run. Built by the collector
/// pass, read-only afterwards: the rewriter pass never allocates.
#[derive(Debug, Default)]
pub struct RenameContext {
    table: FxHashMap<String, String>,
    allocator: TokenAllocator,
}

impl RenameContext {
    pub fn new() -> Self {
        Default::default()
    }

    /// Alias for `original`, allocating a fresh token on first sight.
    ///
    /// Empty and excluded identifiers pass through unchanged and never
    /// occupy a table slot. Repeated calls with the same identifier return
    /// the same alias without advancing the counter.
    pub fn allocate_or_get(&mut self, original: &str) -> String {
        if original.is_empty() || is_excluded(original) {
            return original.to_string();
        }

        if let Some(alias) = self.table.get(original) {
            return alias.clone();
        }

        let alias = self.allocator.alloc();
        trace!(original, alias = %alias, "alias allocated");
        self.table.insert(original.to_string(), alias.clone());

        alias
    }

    /// Alias for a (possibly hierarchical) id value.
    ///
    /// The compound string is split on `/` and each part aliased
    /// independently, so parts shared between ids resolve to the same
    /// token. The whole compound maps to the joined result and is looked
    /// up as a single key afterwards.
    pub fn allocate_id(&mut self, compound: &str) -> String {
        if compound.is_empty() || is_excluded(compound) {
            return compound.to_string();
        }

        if let Some(alias) = self.table.get(compound) {
            return alias.clone();
        }

        if !compound.contains(PATH_SEPARATOR) {
            return self.allocate_or_get(compound);
        }

        let joined = compound
            .split(PATH_SEPARATOR)
            .map(|part| self.allocate_or_get(part))
            .join(&PATH_SEPARATOR.to_string());

        self.table.insert(compound.to_string(), joined.clone());

        joined
    }

    /// Pass-2 lookup. No allocation: absence means "leave unchanged".
    pub fn get(&self, original: &str) -> Option<&String> {
        self.table.get(original)
    }

    /// Number of distinct tokens handed out.
    pub fn allocated(&self) -> usize {
        self.allocator.allocated()
    }

    /// Every recorded (original, alias) pair, shortest alias first.
    pub fn mappings(&self) -> Vec<(&String, &String)> {
        self.table
            .iter()
            .sorted_by_key(|(_, alias)| (alias.len(), alias.as_str()))
            .collect()
    }
}
