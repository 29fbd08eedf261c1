//! Thread-safe handle around a [`CategoryFilter`].
//!
//! Both lists sit behind one `parking_lot::RwLock`, so a query never sees
//! one list replaced and the other not yet.

use super::category_filter::{CategoryFilter, Decision};
use super::error::InvalidInputError;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedCategoryFilter {
    inner: Arc<RwLock<CategoryFilter>>,
}

impl SharedCategoryFilter {
    pub fn new(filter: CategoryFilter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(filter)),
        }
    }

    pub fn set_included<I, S>(&self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Collect before locking so caller iterators never run under the lock.
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        self.inner.write().set_included(categories);
    }

    pub fn set_excluded<I, S>(&self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        self.inner.write().set_excluded(categories);
    }

    pub fn try_set_included(&self, categories: &[Value]) -> Result<(), InvalidInputError> {
        self.inner.write().try_set_included(categories)
    }

    pub fn try_set_excluded(&self, categories: &[Value]) -> Result<(), InvalidInputError> {
        self.inner.write().try_set_excluded(categories)
    }

    pub fn included(&self) -> Vec<String> {
        self.inner.read().included().to_vec()
    }

    pub fn excluded(&self) -> Vec<String> {
        self.inner.read().excluded().to_vec()
    }

    pub fn is_excluded(&self, category: &str) -> bool {
        self.inner.read().is_excluded(category)
    }

    pub fn decide(&self, category: &str) -> Decision<'static> {
        self.inner.read().decide(category).into_owned()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> CategoryFilter {
        self.inner.read().clone()
    }
}

impl From<CategoryFilter> for SharedCategoryFilter {
    fn from(filter: CategoryFilter) -> Self {
        Self::new(filter)
    }
}
