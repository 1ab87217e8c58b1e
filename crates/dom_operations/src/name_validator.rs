//! Memoizing guard for raw attribute names.
//!
//! Names that are not in the property registry reach the node API verbatim,
//! so they are checked against the attribute-name grammar first. Results are
//! cached per exact name (no case folding, no trimming) and never change.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context as _, Result};
use regex::Regex;

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Lock a mutex, recovering the data if another holder panicked.
pub fn lock_recovering<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct NameSets {
    valid: HashSet<String>,
    invalid: HashSet<String>,
}

/// Append-only classification of attribute names.
///
/// A name lands in exactly one of the two sets, once. The cache can be shared
/// between validators through an `Arc`.
#[derive(Debug, Default)]
pub struct AttributeNameCache {
    sets: Mutex<NameSets>,
}

impl AttributeNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(true)` for a known-valid name, `Some(false)` for a known-invalid one.
    pub fn classification(&self, name: &str) -> Option<bool> {
        let sets = lock_recovering(&self.sets);
        if sets.valid.contains(name) {
            Some(true)
        } else if sets.invalid.contains(name) {
            Some(false)
        } else {
            None
        }
    }

    /// Record a classification. Returns `false` if the name was already classified.
    fn record(&self, name: &str, valid: bool) -> bool {
        let mut sets = lock_recovering(&self.sets);
        if sets.valid.contains(name) || sets.invalid.contains(name) {
            return false;
        }
        let target = if valid { &mut sets.valid } else { &mut sets.invalid };
        target.insert(name.to_owned())
    }

    pub fn valid_count(&self) -> usize {
        lock_recovering(&self.sets).valid.len()
    }

    pub fn invalid_count(&self) -> usize {
        lock_recovering(&self.sets).invalid.len()
    }
}

/// Checks raw attribute names against `^[start][name]*$`.
pub struct AttributeNameValidator {
    pattern: Regex,
    cache: Arc<AttributeNameCache>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl AttributeNameValidator {
    /// Build the anchored pattern from two character-class fragments.
    ///
    /// # Errors
    /// Returns an error if the fragments do not form a valid regex.
    pub fn new(
        start_char: &str,
        name_char: &str,
        cache: Arc<AttributeNameCache>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Result<Self> {
        let source = format!("^[{start_char}][{name_char}]*$");
        let pattern = Regex::new(&source).with_context(|| format!("invalid attribute name pattern `{source}`"))?;
        Ok(Self {
            pattern,
            cache,
            diagnostics,
        })
    }

    /// Whether `name` may be written as a raw attribute.
    ///
    /// The first rejection of a name reports [`Diagnostic::InvalidAttributeName`];
    /// repeated calls are answered from the cache without matching or reporting.
    pub fn is_attribute_name_safe(&self, name: &str) -> bool {
        if let Some(valid) = self.cache.classification(name) {
            return valid;
        }
        let valid = self.pattern.is_match(name);
        if self.cache.record(name, valid) && !valid {
            self.diagnostics.report(&Diagnostic::InvalidAttributeName {
                name: name.to_owned(),
            });
        }
        valid
    }

    pub fn cache(&self) -> &Arc<AttributeNameCache> {
        &self.cache
    }
}
