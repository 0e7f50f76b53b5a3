//! Browser-style navigation history over a shared route table.
//!
//! # Responsibilities
//! - Resolve each navigation through the table before committing it
//! - Keep a linear history with a cursor (push / replace / back / forward)
//! - Navigate by route name through reverse routing
//!
//! # Design Decisions
//! - A failed resolution leaves the history untouched
//! - Pushing after going back drops the forward entries
//! - Single owner: mutation goes through `&mut self`, the table is shared

use std::sync::Arc;

use super::error::RouteError;
use super::params::PathParams;
use super::table::{Location, RouteTable};
use crate::observability::metrics;

/// Navigation history bound to one route table.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    entries: Vec<Location>,
    cursor: usize,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self {
            table,
            entries: Vec::new(),
            cursor: 0,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Location currently displayed, if anything was navigated to.
    pub fn current(&self) -> Option<&Location> {
        self.entries.get(self.cursor)
    }

    /// All history entries, oldest first.
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Navigate to `path`, adding a history entry.
    pub fn push(&mut self, path: &str) -> Result<&Location, RouteError> {
        let location = self.locate(path)?;
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;

        tracing::debug!(path = %path, depth = self.entries.len(), "Navigated");
        Ok(&self.entries[self.cursor])
    }

    /// Navigate to a route by name, filling its pattern from `params`.
    pub fn push_named(&mut self, name: &str, params: &PathParams) -> Result<&Location, RouteError> {
        let path = self.table.href(name, params)?;
        self.push(&path)
    }

    /// Navigate to `path`, overwriting the current entry.
    pub fn replace(&mut self, path: &str) -> Result<&Location, RouteError> {
        let location = self.locate(path)?;
        match self.entries.get_mut(self.cursor) {
            Some(current) => *current = location,
            None => self.entries.push(location),
        }
        Ok(&self.entries[self.cursor])
    }

    /// Step back one entry. `None` at the start of history.
    pub fn back(&mut self) -> Option<&Location> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry. `None` at the end of history.
    pub fn forward(&mut self) -> Option<&Location> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    fn locate(&self, path: &str) -> Result<Location, RouteError> {
        match self.table.resolve(path) {
            Ok(resolution) => {
                metrics::record_resolution(&resolution.route.name, true);
                Ok(resolution.to_location(path))
            }
            Err(e) => {
                tracing::warn!(path = %path, "Navigation rejected: no matching route");
                metrics::record_resolution("none", false);
                Err(e)
            }
        }
    }
}
