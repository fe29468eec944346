//! Category rule store
//!
//! Holds the ordered set of user categories. Each category carries a
//! time-based rule (`proposal` + `schedule`) kept as committed/staged dual
//! state, and a smart-mute flag.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Rule applied when a category is created from the editor
pub const FALLBACK_PROPOSAL: &str = "Custom rule";
pub const FALLBACK_SCHEDULE: &str = "Always active";

/// Validation failures of category operations. State is never changed when
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("category name must not be empty")]
    EmptyName,

    #[error("category '{0}' already exists")]
    Duplicate(String),

    #[error("category '{0}' does not exist")]
    NotFound(String),
}

/// A proposal/schedule rule pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleValue {
    pub proposal: String,
    pub schedule: String,
}

impl RuleValue {
    pub fn new(proposal: impl Into<String>, schedule: impl Into<String>) -> Self {
        Self {
            proposal: proposal.into(),
            schedule: schedule.into(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_PROPOSAL, FALLBACK_SCHEDULE)
    }
}

/// Committed rule plus an optional in-progress edit.
///
/// `begin_edit` copies committed into staged, `save` promotes staged,
/// `cancel` drops it. Nothing reaches `committed` except through `save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDraft {
    committed: RuleValue,
    staged: Option<RuleValue>,
}

impl RuleDraft {
    pub fn new(committed: RuleValue) -> Self {
        Self {
            committed,
            staged: None,
        }
    }

    pub fn committed(&self) -> &RuleValue {
        &self.committed
    }

    pub fn staged(&self) -> Option<&RuleValue> {
        self.staged.as_ref()
    }

    /// Value to show: the staged edit while one is open, else committed
    pub fn displayed(&self) -> &RuleValue {
        self.staged.as_ref().unwrap_or(&self.committed)
    }

    pub fn is_editing(&self) -> bool {
        self.staged.is_some()
    }

    pub fn begin_edit(&mut self) -> &RuleValue {
        self.staged.insert(self.committed.clone())
    }

    /// Replace the staged value, opening an edit if none is open
    pub fn stage(&mut self, value: RuleValue) {
        self.staged = Some(value);
    }

    /// Returns false when there was nothing staged
    pub fn save(&mut self) -> bool {
        match self.staged.take() {
            Some(staged) => {
                self.committed = staged;
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.staged = None;
    }
}

/// A user-defined label with its rule and smart-mute flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub rule: RuleDraft,
    pub smart_mute: bool,
}

impl Category {
    pub fn new(name: impl Into<String>, rule: RuleValue, smart_mute: bool) -> Self {
        Self {
            name: name.into(),
            rule: RuleDraft::new(rule),
            smart_mute,
        }
    }
}

/// Outcome of a rename that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// New name equals the old one
    Unchanged,
    Renamed { from: String, to: String },
}

/// Ordered, name-unique set of categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    /// Build a store, dropping empty and repeated names
    pub fn new(categories: Vec<Category>) -> Self {
        let mut store = Self::default();
        for mut category in categories {
            category.name = category.name.trim().to_string();
            if !category.name.is_empty() && !store.contains(&category.name) {
                store.categories.push(category);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn get_index(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Category, CategoryError> {
        self.categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| CategoryError::NotFound(name.to_string()))
    }

    /// Whether `add(name)` would succeed; drives the disabled add control
    pub fn can_add(&self, name: &str) -> bool {
        self.validate_new_name(name).is_ok()
    }

    fn validate_new_name<'a>(&self, name: &'a str) -> Result<&'a str, CategoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if self.contains(name) {
            return Err(CategoryError::Duplicate(name.to_string()));
        }
        Ok(name)
    }

    /// Append a category with the fallback rule and smart mute off
    pub fn add(&mut self, name: &str) -> Result<&Category, CategoryError> {
        let name = self.validate_new_name(name)?.to_string();
        debug!(category = %name, "Adding category");
        self.categories
            .push(Category::new(name, RuleValue::fallback(), false));
        let added = self.categories.len() - 1;
        Ok(&self.categories[added])
    }

    /// Rename in place; rule and smart-mute flag stay with the category.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<RenameOutcome, CategoryError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        let idx = self
            .position(old)
            .ok_or_else(|| CategoryError::NotFound(old.to_string()))?;
        if new == old {
            return Ok(RenameOutcome::Unchanged);
        }
        if self.contains(new) {
            return Err(CategoryError::Duplicate(new.to_string()));
        }

        debug!(from = %old, to = %new, "Renaming category");
        self.categories[idx].name = new.to_string();
        Ok(RenameOutcome::Renamed {
            from: old.to_string(),
            to: new.to_string(),
        })
    }

    /// Remove unconditionally; unknown names are a no-op returning `None`
    pub fn delete(&mut self, name: &str) -> Option<Category> {
        let idx = self.position(name)?;
        debug!(category = %name, "Deleting category");
        Some(self.categories.remove(idx))
    }

    /// Flip the smart-mute flag, returning the new value
    pub fn toggle_smart_mute(&mut self, name: &str) -> Result<bool, CategoryError> {
        let category = self.get_mut(name)?;
        category.smart_mute = !category.smart_mute;
        debug!(category = %name, smart_mute = category.smart_mute, "Toggled smart mute");
        Ok(category.smart_mute)
    }

    pub fn begin_rule_edit(&mut self, name: &str) -> Result<RuleValue, CategoryError> {
        Ok(self.get_mut(name)?.rule.begin_edit().clone())
    }

    pub fn stage_rule(&mut self, name: &str, value: RuleValue) -> Result<(), CategoryError> {
        self.get_mut(name)?.rule.stage(value);
        Ok(())
    }

    /// Commit the staged rule; `Ok(false)` when nothing was staged
    pub fn save_rule(&mut self, name: &str) -> Result<bool, CategoryError> {
        let saved = self.get_mut(name)?.rule.save();
        if saved {
            debug!(category = %name, "Saved category rule");
        }
        Ok(saved)
    }

    pub fn cancel_rule(&mut self, name: &str) -> Result<(), CategoryError> {
        self.get_mut(name)?.rule.cancel();
        Ok(())
    }

    /// Drop every open rule edit
    pub fn cancel_all_rule_edits(&mut self) {
        for category in &mut self.categories {
            category.rule.cancel();
        }
    }
}
