//! Tab registry: the ordered tab list and the active tab.
//!
//! The registry is never empty and `active` always names a tab in it.

mod tab;

#[cfg(test)]
mod tests;

pub use tab::{Tab, TabState, NEW_TAB_TITLE};

use lite_common::TabId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{0} not found")]
    NotFound(TabId),
}

/// Result of [`TabRegistry::close_tab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// It was the only tab; it was reset in place.
    Reset,
    /// Removed. `new_active` is set when the closed tab was active.
    Removed { new_active: Option<TabId> },
}

#[derive(Debug, Clone)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: TabId,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistry {
    /// A registry holding one empty tab with id 1.
    pub fn new() -> Self {
        let first = TabId(1);
        Self {
            tabs: vec![Tab::new(first)],
            active: first,
        }
    }

    /// Append a new empty tab with id `max + 1`. Does not activate it.
    pub fn create_tab(&mut self) -> TabId {
        let id = self
            .tabs
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(TabId(1), TabId::next);
        self.tabs.push(Tab::new(id));
        id
    }

    pub fn close_tab(&mut self, id: TabId) -> Result<CloseOutcome, RegistryError> {
        let index = self.position(id).ok_or(RegistryError::NotFound(id))?;

        if self.tabs.len() == 1 {
            self.tabs[0].reset();
            return Ok(CloseOutcome::Reset);
        }

        self.tabs.remove(index);
        if self.active != id {
            return Ok(CloseOutcome::Removed { new_active: None });
        }

        // The tab sliding into the vacated slot, or the new last tab.
        let replacement = self.tabs[index.min(self.tabs.len() - 1)].id;
        self.active = replacement;
        Ok(CloseOutcome::Removed {
            new_active: Some(replacement),
        })
    }

    pub fn select_tab(&mut self, id: TabId) -> Result<(), RegistryError> {
        if !self.contains(id) {
            return Err(RegistryError::NotFound(id));
        }
        self.active = id;
        Ok(())
    }

    pub fn find_active(&self) -> &Tab {
        // `active` is only ever assigned an id present in `tabs`.
        self.tabs
            .iter()
            .find(|t| t.id == self.active)
            .unwrap_or(&self.tabs[0])
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    /// Tabs that should currently own a surface.
    pub fn url_bearing_ids(&self) -> Vec<TabId> {
        self.tabs
            .iter()
            .filter(|t| t.has_url())
            .map(|t| t.id)
            .collect()
    }

    /// The tab `offset` positions away from the active one, wrapping.
    pub fn neighbor_of_active(&self, offset: isize) -> TabId {
        let len = self.tabs.len() as isize;
        let current = self.position(self.active).unwrap_or(0) as isize;
        let index = (current + offset).rem_euclid(len) as usize;
        self.tabs[index].id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
