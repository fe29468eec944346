//! Onboarding step sequencer
//!
//! A four-step linear wizard:
//!
//! 1. select the apps to control
//! 2. review how channels were categorized (app list ⇄ app detail, plus the
//!    category editor)
//! 3. review the proposed rules per category (smart mute + rule editor)
//! 4. confirm
//!
//! `next()` on the last step reports [`Transition::Completed`]; the host
//! persists completion and leaves the wizard.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::category::{CategoryError, CategoryStore, RenameOutcome, RuleValue};
use super::directory::{App, AppDirectory, DirectoryError};
use super::seed;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("no app selection with id '{0}'")]
    UnknownSelection(String),

    #[error("app '{0}' is not being controlled")]
    AppNotControlled(String),

    #[error("no category rule is being edited")]
    NoRuleEdit,
}

/// Wizard steps, numbered 1 through 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    SelectApps,
    CategorizeChannels,
    ReviewRules,
    Confirm,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::SelectApps,
        Step::CategorizeChannels,
        Step::ReviewRules,
        Step::Confirm,
    ];

    pub fn number(&self) -> u8 {
        match self {
            Step::SelectApps => 1,
            Step::CategorizeChannels => 2,
            Step::ReviewRules => 3,
            Step::Confirm => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::SelectApps => "Select apps",
            Step::CategorizeChannels => "Categorize channels",
            Step::ReviewRules => "Review rules",
            Step::Confirm => "Confirm",
        }
    }

    fn successor(&self) -> Option<Step> {
        match self {
            Step::SelectApps => Some(Step::CategorizeChannels),
            Step::CategorizeChannels => Some(Step::ReviewRules),
            Step::ReviewRules => Some(Step::Confirm),
            Step::Confirm => None,
        }
    }
}

/// Result of `next()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced(Step),
    Completed,
}

/// Whether the user wants an app controlled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSelection {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// Numbers shown on the confirmation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingSummary {
    pub controlled_apps: usize,
    pub categories: usize,
    pub smart_mute_categories: usize,
}

/// Whole wizard state. Lives for one run of the wizard.
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    step: Step,
    apps: Vec<AppSelection>,
    categories: CategoryStore,
    directory: AppDirectory,
    editing_app: Option<String>,
    editing_rules: Option<String>,
    category_editor_open: bool,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new(
            seed::onboarding_apps(),
            seed::default_categories(),
            seed::app_directory(),
        )
    }
}

impl OnboardingFlow {
    pub fn new(apps: Vec<AppSelection>, categories: CategoryStore, directory: AppDirectory) -> Self {
        Self {
            step: Step::SelectApps,
            apps,
            categories,
            directory,
            editing_app: None,
            editing_rules: None,
            category_editor_open: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn apps(&self) -> &[AppSelection] {
        &self.apps
    }

    pub fn categories(&self) -> &CategoryStore {
        &self.categories
    }

    pub fn directory(&self) -> &AppDirectory {
        &self.directory
    }

    pub fn editing_app(&self) -> Option<&str> {
        self.editing_app.as_deref()
    }

    pub fn editing_rules(&self) -> Option<&str> {
        self.editing_rules.as_deref()
    }

    pub fn is_category_editor_open(&self) -> bool {
        self.category_editor_open
    }

    /// Advance one step, or report completion from the last step.
    ///
    /// Sub-views of the step being left are closed; an open rule edit is
    /// cancelled rather than saved.
    pub fn next(&mut self) -> Transition {
        self.close_sub_views();
        match self.step.successor() {
            Some(step) => {
                info!(from = self.step.number(), to = step.number(), "Onboarding advanced");
                self.step = step;
                Transition::Advanced(step)
            }
            None => {
                info!("Onboarding completed");
                Transition::Completed
            }
        }
    }

    fn close_sub_views(&mut self) {
        self.editing_app = None;
        self.category_editor_open = false;
        if self.editing_rules.take().is_some() {
            self.categories.cancel_all_rule_edits();
        }
    }

    // -- step 1 ------------------------------------------------------------

    /// Flip an app's selection, returning the new value
    pub fn toggle_app(&mut self, id: &str) -> Result<bool, FlowError> {
        let app = self
            .apps
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| FlowError::UnknownSelection(id.to_string()))?;
        app.selected = !app.selected;
        debug!(app = %app.name, selected = app.selected, "Toggled app selection");
        Ok(app.selected)
    }

    /// An app is controlled unless its selection entry is switched off
    pub fn is_controlled(&self, app_name: &str) -> bool {
        self.apps
            .iter()
            .find(|a| a.name == app_name)
            .map_or(true, |a| a.selected)
    }

    /// Directory apps shown in step 2, derived from the current selection
    pub fn controlled_apps(&self) -> Vec<&App> {
        self.directory
            .apps()
            .iter()
            .filter(|app| self.is_controlled(&app.name))
            .collect()
    }

    // -- step 2 ------------------------------------------------------------

    pub fn open_app(&mut self, name: &str) -> Result<(), FlowError> {
        if !self.directory.contains(name) {
            return Err(DirectoryError::UnknownApp(name.to_string()).into());
        }
        if !self.is_controlled(name) {
            return Err(FlowError::AppNotControlled(name.to_string()));
        }
        debug!(app = name, "Opening app detail");
        self.editing_app = Some(name.to_string());
        Ok(())
    }

    /// Back from app detail to the app list. Edits were applied eagerly.
    pub fn close_app(&mut self) {
        self.editing_app = None;
    }

    pub fn reassign(&mut self, app: &str, channel_id: &str, category: &str) -> Result<(), FlowError> {
        self.directory
            .reassign(app, channel_id, category, &self.categories)?;
        Ok(())
    }

    pub fn open_category_editor(&mut self) {
        self.category_editor_open = true;
    }

    pub fn close_category_editor(&mut self) {
        self.category_editor_open = false;
    }

    pub fn add_category(&mut self, name: &str) -> Result<(), FlowError> {
        self.categories.add(name)?;
        Ok(())
    }

    /// Rename a category and every channel reference to it
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<RenameOutcome, FlowError> {
        let outcome = self.categories.rename(old, new)?;
        if let RenameOutcome::Renamed { from, to } = &outcome {
            self.directory.rename_category(from, to);
            if self.editing_rules.as_deref() == Some(from.as_str()) {
                self.editing_rules = Some(to.clone());
            }
        }
        Ok(outcome)
    }

    /// Delete a category; channels that used it become unassigned.
    /// Returns whether anything was removed.
    pub fn delete_category(&mut self, name: &str) -> bool {
        if self.categories.delete(name).is_none() {
            return false;
        }
        self.directory.unassign_category(name);
        if self.editing_rules.as_deref() == Some(name) {
            self.editing_rules = None;
        }
        true
    }

    // -- step 3 ------------------------------------------------------------

    pub fn toggle_smart_mute(&mut self, name: &str) -> Result<bool, FlowError> {
        Ok(self.categories.toggle_smart_mute(name)?)
    }

    /// Open the rule editor on `name`, staging a copy of its committed rule
    pub fn open_rule_editor(&mut self, name: &str) -> Result<RuleValue, FlowError> {
        if !self.categories.contains(name) {
            warn!(category = name, "Rule editor target not found");
            return Err(CategoryError::NotFound(name.to_string()).into());
        }
        if let Some(previous) = self.editing_rules.take() {
            self.categories.cancel_rule(&previous)?;
        }
        let staged = self.categories.begin_rule_edit(name)?;
        self.editing_rules = Some(name.to_string());
        Ok(staged)
    }

    pub fn stage_rule(&mut self, value: RuleValue) -> Result<(), FlowError> {
        let name = self.editing_rules.as_deref().ok_or(FlowError::NoRuleEdit)?;
        self.categories.stage_rule(name, value)?;
        Ok(())
    }

    pub fn save_rule_editor(&mut self) -> Result<bool, FlowError> {
        let name = self.editing_rules.take().ok_or(FlowError::NoRuleEdit)?;
        Ok(self.categories.save_rule(&name)?)
    }

    pub fn cancel_rule_editor(&mut self) {
        if let Some(name) = self.editing_rules.take() {
            if let Err(e) = self.categories.cancel_rule(&name) {
                warn!(category = %name, error = %e, "Cancelled rule edit on a missing category");
            }
        }
    }

    // -- step 4 ------------------------------------------------------------

    pub fn summary(&self) -> OnboardingSummary {
        OnboardingSummary {
            controlled_apps: self.apps.iter().filter(|a| a.selected).count(),
            categories: self.categories.len(),
            smart_mute_categories: self.categories.iter().filter(|c| c.smart_mute).count(),
        }
    }
}
