// src/pipeline/popover.rs

//! Column filter popover state machine.
//!
//! ```text
//! Closed --open--> Open (staged = applied, search = "")
//! Open   --toggle/clear/search--> Open
//! Open   --apply--> Closed, staged selection returned for the caller to apply
//! Open   --cancel (button, outside click, escape)--> Closed, staged discarded
//! ```

use std::collections::BTreeSet;

use crate::models::{FilterCategory, FilterOption, FilterSelection};
use crate::pipeline::catalog::narrow_options;

/// Edits staged in an open popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFilter {
    pub category: FilterCategory,
    pub staged: BTreeSet<String>,
    pub search: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PopoverState {
    #[default]
    Closed,
    Open(StagedFilter),
}

/// Result of leaving the open state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopoverOutcome {
    /// Replace the category's selection with these values
    Applied {
        category: FilterCategory,
        values: BTreeSet<String>,
    },
    /// Nothing changes
    Discarded,
}

impl PopoverState {
    /// Open the popover for `category`, seeding the staged selection from
    /// what is currently applied. Any other open popover is discarded.
    pub fn open(&mut self, category: FilterCategory, applied: &FilterSelection) {
        let staged = applied.values(category).cloned().unwrap_or_default();
        *self = Self::Open(StagedFilter {
            category,
            staged,
            search: String::new(),
        });
    }

    /// Filter icon click: opens the popover, or closes it if already open
    /// for the same category.
    pub fn toggle_open(&mut self, category: FilterCategory, applied: &FilterSelection) {
        if self.open_category() == Some(category) {
            *self = Self::Closed;
        } else {
            self.open(category, applied);
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn open_category(&self) -> Option<FilterCategory> {
        match self {
            Self::Open(staged) => Some(staged.category),
            Self::Closed => None,
        }
    }

    pub fn staged(&self) -> Option<&StagedFilter> {
        match self {
            Self::Open(staged) => Some(staged),
            Self::Closed => None,
        }
    }

    /// Check or uncheck a value. Ignored while closed.
    pub fn toggle_value(&mut self, value: &str) {
        if let Self::Open(state) = self {
            if !state.staged.remove(value) {
                state.staged.insert(value.to_string());
            }
        }
    }

    /// Uncheck everything without closing.
    pub fn clear_staged(&mut self) {
        if let Self::Open(state) = self {
            state.staged.clear();
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        if let Self::Open(state) = self {
            state.search = search.into();
        }
    }

    /// Options to list, narrowed by the popover's search text.
    pub fn visible_options<'a>(&self, options: &'a [FilterOption]) -> Vec<&'a FilterOption> {
        match self {
            Self::Open(state) => narrow_options(options, &state.search),
            Self::Closed => Vec::new(),
        }
    }

    /// Close, handing the staged selection back.
    pub fn apply(&mut self) -> PopoverOutcome {
        match std::mem::take(self) {
            Self::Open(state) => PopoverOutcome::Applied {
                category: state.category,
                values: state.staged,
            },
            Self::Closed => PopoverOutcome::Discarded,
        }
    }

    /// Close, discarding staged edits.
    pub fn cancel(&mut self) -> PopoverOutcome {
        *self = Self::Closed;
        PopoverOutcome::Discarded
    }
}
