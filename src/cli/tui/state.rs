use tui_input::Input;

use crate::domain::{CategoryDetails, Dashboard, FocusStatus, OnboardingFlow, RuleValue};

/// Top-level screen of the application
#[derive(Debug)]
pub enum Screen {
    Onboarding(OnboardingView),
    Dashboard(DashboardView),
}

/// View state layered over the onboarding flow
#[derive(Debug, Default)]
pub struct OnboardingView {
    pub flow: OnboardingFlow,
    /// Cursor in the step 1 app list and the step 2 app list
    pub app_cursor: usize,
    /// Cursor in the step 2 channel list of the open app
    pub channel_cursor: usize,
    /// Cursor in the step 3 category list
    pub category_cursor: usize,
    pub category_modal: Option<CategoryModal>,
    pub rule_form: Option<RuleForm>,
    /// Transient message shown above the help bar
    pub notice: Option<String>,
}

impl OnboardingView {
    pub fn new(flow: OnboardingFlow) -> Self {
        Self {
            flow,
            ..Self::default()
        }
    }

    /// Drop view pieces whose domain counterpart has closed
    pub fn sync_with_flow(&mut self) {
        if !self.flow.is_category_editor_open() {
            self.category_modal = None;
        }
        if self.flow.editing_rules().is_none() {
            self.rule_form = None;
        }
        let categories = self.flow.categories().len();
        self.category_cursor = self.category_cursor.min(categories.saturating_sub(1));
        if let Some(modal) = self.category_modal.as_mut() {
            modal.cursor = modal.cursor.min(categories.saturating_sub(1));
        }
    }

    pub fn reset_cursors(&mut self) {
        self.app_cursor = 0;
        self.channel_cursor = 0;
        self.category_cursor = 0;
    }
}

/// Which half of the category editor has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalFocus {
    #[default]
    List,
    Input,
}

#[derive(Debug, Default)]
pub struct CategoryModal {
    pub cursor: usize,
    pub input: Input,
    pub focus: ModalFocus,
    /// Category being renamed through the input, if any
    pub renaming: Option<String>,
}

impl CategoryModal {
    pub fn start_rename(&mut self, name: &str) {
        self.input = Input::new(name.to_string());
        self.renaming = Some(name.to_string());
        self.focus = ModalFocus::Input;
    }

    pub fn clear_input(&mut self) {
        self.input.reset();
        self.renaming = None;
        self.focus = ModalFocus::List;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleField {
    #[default]
    Proposal,
    Schedule,
}

/// Two-field form for a staged rule edit
#[derive(Debug, Default)]
pub struct RuleForm {
    pub proposal: Input,
    pub schedule: Input,
    pub field: RuleField,
}

impl RuleForm {
    pub fn from_value(value: &RuleValue) -> Self {
        Self {
            proposal: Input::new(value.proposal.clone()),
            schedule: Input::new(value.schedule.clone()),
            field: RuleField::Proposal,
        }
    }

    pub fn value(&self) -> RuleValue {
        RuleValue::new(self.proposal.value(), self.schedule.value())
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            RuleField::Proposal => RuleField::Schedule,
            RuleField::Schedule => RuleField::Proposal,
        };
    }

    pub fn focused_mut(&mut self) -> &mut Input {
        match self.field {
            RuleField::Proposal => &mut self.proposal,
            RuleField::Schedule => &mut self.schedule,
        }
    }
}

/// Pane of the dashboard home screen that owns the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    Apps,
    Categories,
}

#[derive(Debug)]
pub enum DashboardPage {
    Home,
    Active,
    Muted,
    AppDetails(String),
    CategoryDetails(CategoryPage),
}

#[derive(Debug)]
pub struct CategoryPage {
    pub details: CategoryDetails,
    pub rule_form: Option<RuleForm>,
}

impl CategoryPage {
    pub fn open(name: &str) -> Self {
        Self {
            details: CategoryDetails::load(name),
            rule_form: None,
        }
    }
}

#[derive(Debug)]
pub struct DashboardView {
    pub dashboard: Dashboard,
    pub page: DashboardPage,
    pub focus: HomeFocus,
    pub app_cursor: usize,
    pub tile_cursor: usize,
    pub notice: Option<String>,
}

impl DashboardView {
    pub fn new(status: FocusStatus) -> Self {
        Self {
            dashboard: Dashboard::new(status),
            page: DashboardPage::Home,
            focus: HomeFocus::Apps,
            app_cursor: 0,
            tile_cursor: 0,
            notice: None,
        }
    }
}
