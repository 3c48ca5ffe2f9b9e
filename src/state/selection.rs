use std::sync::Arc;

use tracing::{debug, warn};

use crate::content::ContentCatalog;
use crate::filter::filter;
use crate::models::TipRecord;

/// Category + free-text query over the catalog. The visible tips are derived
/// on every read, so there is no cached result to go stale.
#[derive(Debug, Clone)]
pub struct SelectionState {
    catalog: Arc<ContentCatalog>,
    active_category: String,
    query: String,
}

impl SelectionState {
    /// Start on the first registered category with an empty query.
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        let active_category = catalog.default_category().id.clone();
        Self {
            catalog,
            active_category,
            query: String::new(),
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Switch category, keeping the current query. Unknown ids are ignored so
    /// the selection always points at a real catalog entry.
    pub fn select_category(&mut self, category_id: &str) -> bool {
        if !self.catalog.contains(category_id) {
            warn!(category = category_id, "ignoring unknown category");
            return false;
        }
        if self.active_category != category_id {
            self.active_category = category_id.to_string();
            debug!(category = category_id, "category selected");
        }
        true
    }

    /// Move to a neighbouring category in registry order, wrapping around.
    pub fn cycle_category(&mut self, offset: isize) {
        let categories = self.catalog.categories();
        let len = categories.len() as isize;
        let current = self
            .catalog
            .position(&self.active_category)
            .unwrap_or_default() as isize;
        let idx = (current + offset).rem_euclid(len) as usize;
        let next = categories[idx].id.clone();
        self.select_category(&next);
    }

    /// Replace the query verbatim.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        debug!(query = %self.query, "query updated");
    }

    pub fn push_query_char(&mut self, ch: char) {
        let mut next = self.query.clone();
        next.push(ch);
        self.set_query(next);
    }

    pub fn pop_query_char(&mut self) {
        let mut next = self.query.clone();
        if next.pop().is_some() {
            self.set_query(next);
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Tips of the active category that match the query, in catalog order.
    pub fn visible_tips(&self) -> Vec<&TipRecord> {
        filter(self.catalog.get_tips(&self.active_category), &self.query)
    }
}
