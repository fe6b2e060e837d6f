//! Cache of compiled regular expressions shared across validations.

use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;

use crate::{Error, Result};

/// Compiled patterns keyed by their source string.
///
/// Reads do not block each other. Two threads compiling the same pattern at once both
/// succeed and end up sharing whichever entry was inserted first.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: DashMap<String, Arc<Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled `pattern`, compiling and caching it on first use.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<Regex>> {
        if let Some(regex) = self.patterns.get(pattern) {
            tracing::trace!(pattern, "pattern cache hit");
            return Ok(Arc::clone(regex.value()));
        }

        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        tracing::debug!(pattern, "compiled pattern");

        let entry = self
            .patterns
            .entry(pattern.to_owned())
            .or_insert_with(|| Arc::new(regex));
        Ok(Arc::clone(entry.value()))
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Drops every cached pattern.
    pub fn clear(&self) {
        self.patterns.clear();
        tracing::debug!("pattern cache cleared");
    }
}
