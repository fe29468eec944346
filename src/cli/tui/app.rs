use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info, warn};
use tui_input::backend::crossterm::EventHandler;

use crate::config::Settings;
use crate::domain::seed::DASHBOARD_APPS;
use crate::domain::{Dashboard, Step, Transition};
use crate::state::{gate, KeyValueStore, Route};
use crate::Result;

use super::events::AppEvent;
use super::state::*;
use super::theme::Theme;

/// Poll interval of the terminal reader thread
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Screen-level changes requested by key handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    CompleteOnboarding,
    RestartOnboarding,
    Quit,
}

/// Main application struct
pub struct App {
    /// Screen currently shown
    screen: Screen,
    /// Persistence port for the onboarding flag
    store: Box<dyn KeyValueStore>,
    settings: Settings,
    theme: Theme,
    should_quit: bool,
    /// Completion transitions delivered so far
    completions: usize,
}

impl App {
    /// Create the app on the screen selected by the persisted flag
    pub fn new(store: Box<dyn KeyValueStore>, settings: Settings) -> Result<Self> {
        let route = gate::initial_route(store.as_ref())?;
        info!(?route, "Starting application");
        let screen = match route {
            Route::Onboarding => Screen::Onboarding(OnboardingView::default()),
            Route::Dashboard => Screen::Dashboard(DashboardView::new(settings.initial_status)),
        };

        Ok(Self {
            screen,
            store,
            settings,
            theme: Theme::default(),
            should_quit: false,
            completions: 0,
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn completions(&self) -> usize {
        self.completions
    }

    /// Run the application until the user quits
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        spawn_input_reader(event_tx);

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        ratatui::restore();
        result
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        let tick = Duration::from_millis(self.settings.tick_rate_ms);
        loop {
            terminal.draw(|frame| self.render(frame))?;

            match time::timeout(tick, event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event)?,
                Ok(None) => break, // Reader gone
                Err(_) => self.handle_event(AppEvent::Tick)?,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            Screen::Onboarding(view) => super::screens::onboarding::render(frame, view, &self.theme),
            Screen::Dashboard(view) => super::screens::dashboard::render(frame, view, &self.theme),
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Ok(())
            }
            AppEvent::Tick => Ok(()),
        }
    }

    /// Route one key press to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        let transition = match self.screen {
            Screen::Onboarding(ref mut view) => Self::handle_onboarding_key(view, key)?,
            Screen::Dashboard(ref mut view) => Self::handle_dashboard_key(view, key)?,
        };

        if let Some(transition) = transition {
            self.transition_screen(transition);
        }
        Ok(())
    }

    fn transition_screen(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::CompleteOnboarding => {
                self.completions += 1;
                let mut view = DashboardView::new(self.settings.initial_status);
                if let Err(e) = gate::mark_completed(self.store.as_mut()) {
                    warn!(error = %e, "Failed to persist onboarding completion");
                    view.notice = Some(format!("Progress not saved: {}", e));
                }
                self.screen = Screen::Dashboard(view);
            }
            ScreenTransition::RestartOnboarding => {
                let mut view = OnboardingView::default();
                if let Err(e) = gate::reset(self.store.as_mut()) {
                    warn!(error = %e, "Failed to clear onboarding flag");
                    view.notice = Some(format!("Reset not saved: {}", e));
                }
                info!("Onboarding restarted");
                self.screen = Screen::Onboarding(view);
            }
            ScreenTransition::Quit => {
                self.should_quit = true;
            }
        }
    }

    // -- onboarding ----------------------------------------------------------

    fn handle_onboarding_key(
        view: &mut OnboardingView,
        key: KeyEvent,
    ) -> Result<Option<ScreenTransition>> {
        view.notice = None;

        // Open forms own the keyboard
        if view.rule_form.is_some() {
            Self::handle_rule_form_key(view, key);
            return Ok(None);
        }
        if view.category_modal.is_some() {
            Self::handle_category_modal_key(view, key);
            return Ok(None);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(Some(ScreenTransition::Quit)),
            KeyCode::Char('n') => return Ok(Self::advance(view)),
            _ => {}
        }

        match view.flow.step() {
            Step::SelectApps => Self::handle_select_apps_key(view, key),
            Step::CategorizeChannels => Self::handle_categorize_key(view, key),
            Step::ReviewRules => Self::handle_review_rules_key(view, key),
            Step::Confirm => {
                if key.code == KeyCode::Enter {
                    return Ok(Self::advance(view));
                }
            }
        }
        Ok(None)
    }

    fn advance(view: &mut OnboardingView) -> Option<ScreenTransition> {
        match view.flow.next() {
            Transition::Advanced(_) => {
                view.reset_cursors();
                view.sync_with_flow();
                None
            }
            Transition::Completed => Some(ScreenTransition::CompleteOnboarding),
        }
    }

    fn handle_select_apps_key(view: &mut OnboardingView, key: KeyEvent) {
        let count = view.flow.apps().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => move_up(&mut view.app_cursor),
            KeyCode::Down | KeyCode::Char('j') => move_down(&mut view.app_cursor, count),
            KeyCode::Char(' ') | KeyCode::Enter => {
                let id = view.flow.apps().get(view.app_cursor).map(|a| a.id.clone());
                if let Some(id) = id {
                    if let Err(e) = view.flow.toggle_app(&id) {
                        view.notice = Some(e.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_categorize_key(view: &mut OnboardingView, key: KeyEvent) {
        if let Some(app) = view.flow.editing_app().map(str::to_string) {
            Self::handle_app_detail_key(view, &app, key);
            return;
        }

        let apps: Vec<String> = view
            .flow
            .controlled_apps()
            .iter()
            .map(|a| a.name.clone())
            .collect();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => move_up(&mut view.app_cursor),
            KeyCode::Down | KeyCode::Char('j') => move_down(&mut view.app_cursor, apps.len()),
            KeyCode::Enter => {
                if let Some(name) = apps.get(view.app_cursor) {
                    match view.flow.open_app(name) {
                        Ok(()) => view.channel_cursor = 0,
                        Err(e) => view.notice = Some(e.to_string()),
                    }
                }
            }
            KeyCode::Char('c') => Self::open_category_editor(view),
            _ => {}
        }
    }

    fn handle_app_detail_key(view: &mut OnboardingView, app: &str, key: KeyEvent) {
        let Some(entry) = view.flow.directory().get(app) else {
            view.flow.close_app();
            return;
        };
        let channels: Vec<(String, Option<String>)> = entry
            .channels
            .iter()
            .map(|c| (c.id.clone(), c.category.clone()))
            .collect();
        let names: Vec<String> = view.flow.categories().names().map(str::to_string).collect();

        let target = match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                view.flow.close_app();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                move_up(&mut view.channel_cursor);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                move_down(&mut view.channel_cursor, channels.len());
                None
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                if names.is_empty() {
                    view.notice = Some("No categories to choose from".to_string());
                    None
                } else {
                    let forward = matches!(key.code, KeyCode::Right | KeyCode::Char('l'));
                    channels.get(view.channel_cursor).map(|(_, current)| {
                        let position = current
                            .as_deref()
                            .and_then(|c| names.iter().position(|n| n == c));
                        cycle(position, names.len(), forward)
                    })
                }
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit.to_digit(10).map_or(0, |d| d as usize - 1);
                if index < names.len() {
                    Some(index)
                } else {
                    view.notice = Some(format!("No category number {}", digit));
                    None
                }
            }
            KeyCode::Char('c') => {
                Self::open_category_editor(view);
                None
            }
            _ => None,
        };

        if let (Some(index), Some((channel_id, _))) = (target, channels.get(view.channel_cursor)) {
            if let Err(e) = view.flow.reassign(app, channel_id, &names[index]) {
                warn!(error = %e, "Reassign rejected");
                view.notice = Some(e.to_string());
            }
        }
    }

    fn handle_review_rules_key(view: &mut OnboardingView, key: KeyEvent) {
        let count = view.flow.categories().len();
        let current = view
            .flow
            .categories()
            .get_index(view.category_cursor)
            .map(|c| c.name.clone());

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => move_up(&mut view.category_cursor),
            KeyCode::Down | KeyCode::Char('j') => move_down(&mut view.category_cursor, count),
            KeyCode::Char(' ') => {
                if let Some(name) = current {
                    if let Err(e) = view.flow.toggle_smart_mute(&name) {
                        view.notice = Some(e.to_string());
                    }
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(name) = current {
                    match view.flow.open_rule_editor(&name) {
                        Ok(staged) => view.rule_form = Some(RuleForm::from_value(&staged)),
                        Err(e) => view.notice = Some(e.to_string()),
                    }
                }
            }
            KeyCode::Char('c') => Self::open_category_editor(view),
            _ => {}
        }
    }

    fn handle_rule_form_key(view: &mut OnboardingView, key: KeyEvent) {
        let Some(form) = view.rule_form.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                view.flow.cancel_rule_editor();
                view.rule_form = None;
            }
            KeyCode::Enter => {
                if let Err(e) = view.flow.save_rule_editor() {
                    view.notice = Some(e.to_string());
                }
                view.rule_form = None;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
            _ => {
                let changed = form
                    .focused_mut()
                    .handle_event(&Event::Key(key))
                    .is_some_and(|change| change.value);
                if changed {
                    if let Err(e) = view.flow.stage_rule(form.value()) {
                        view.notice = Some(e.to_string());
                    }
                }
            }
        }
    }

    fn open_category_editor(view: &mut OnboardingView) {
        view.flow.open_category_editor();
        view.category_modal = Some(CategoryModal::default());
    }

    fn handle_category_modal_key(view: &mut OnboardingView, key: KeyEvent) {
        let Some(modal) = view.category_modal.as_mut() else {
            return;
        };

        match modal.focus {
            ModalFocus::Input => match key.code {
                KeyCode::Esc => modal.clear_input(),
                KeyCode::Tab => modal.focus = ModalFocus::List,
                KeyCode::Enter => {
                    let value = modal.input.value().to_string();
                    let result = match modal.renaming.clone() {
                        Some(old) => view.flow.rename_category(&old, &value).map(|_| ()),
                        None => view.flow.add_category(&value),
                    };
                    match result {
                        Ok(()) => modal.clear_input(),
                        Err(e) => {
                            warn!(error = %e, "Category edit rejected");
                            view.notice = Some(e.to_string());
                        }
                    }
                }
                _ => {
                    modal.input.handle_event(&Event::Key(key));
                }
            },
            ModalFocus::List => {
                let selected = view
                    .flow
                    .categories()
                    .get_index(modal.cursor)
                    .map(|c| c.name.clone());
                match key.code {
                    KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
                        view.flow.close_category_editor();
                    }
                    KeyCode::Up | KeyCode::Char('k') => move_up(&mut modal.cursor),
                    KeyCode::Down | KeyCode::Char('j') => {
                        move_down(&mut modal.cursor, view.flow.categories().len())
                    }
                    KeyCode::Tab | KeyCode::Char('a') => modal.focus = ModalFocus::Input,
                    KeyCode::Char('r') => {
                        if let Some(name) = selected {
                            modal.start_rename(&name);
                        }
                    }
                    KeyCode::Char('d') | KeyCode::Delete => {
                        if let Some(name) = selected {
                            view.flow.delete_category(&name);
                        }
                    }
                    _ => {}
                }
            }
        }

        view.sync_with_flow();
    }

    // -- dashboard -----------------------------------------------------------

    fn handle_dashboard_key(
        view: &mut DashboardView,
        key: KeyEvent,
    ) -> Result<Option<ScreenTransition>> {
        view.notice = None;

        match view.page {
            DashboardPage::Home => return Ok(Self::handle_home_key(view, key)),
            DashboardPage::Active | DashboardPage::Muted | DashboardPage::AppDetails(_) => {
                match key.code {
                    KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                        view.page = DashboardPage::Home;
                    }
                    KeyCode::Char('q') => return Ok(Some(ScreenTransition::Quit)),
                    _ => {}
                }
            }
            DashboardPage::CategoryDetails(_) => {
                if let DashboardPage::CategoryDetails(ref mut page) = view.page {
                    if Self::handle_category_page_key(page, &mut view.notice, key) {
                        view.page = DashboardPage::Home;
                    }
                }
            }
        }
        Ok(None)
    }

    fn handle_home_key(view: &mut DashboardView, key: KeyEvent) -> Option<ScreenTransition> {
        match key.code {
            KeyCode::Char('q') => return Some(ScreenTransition::Quit),
            KeyCode::Char('r') => return Some(ScreenTransition::RestartOnboarding),
            KeyCode::Left | KeyCode::Char('h') => {
                view.dashboard.previous_status();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                view.dashboard.next_status();
            }
            KeyCode::Char('d') => {
                view.dashboard.toggle_all_devices();
            }
            KeyCode::Char('a') => view.page = DashboardPage::Active,
            KeyCode::Char('m') => view.page = DashboardPage::Muted,
            KeyCode::Tab => {
                view.focus = match view.focus {
                    HomeFocus::Apps => HomeFocus::Categories,
                    HomeFocus::Categories => HomeFocus::Apps,
                };
            }
            KeyCode::Up | KeyCode::Char('k') => match view.focus {
                HomeFocus::Apps => move_up(&mut view.app_cursor),
                HomeFocus::Categories => move_up(&mut view.tile_cursor),
            },
            KeyCode::Down | KeyCode::Char('j') => match view.focus {
                HomeFocus::Apps => move_down(&mut view.app_cursor, DASHBOARD_APPS.len()),
                HomeFocus::Categories => {
                    move_down(&mut view.tile_cursor, Dashboard::category_tiles().len())
                }
            },
            KeyCode::Enter => match view.focus {
                HomeFocus::Apps => {
                    if let Some(app) = DASHBOARD_APPS.get(view.app_cursor) {
                        view.page = DashboardPage::AppDetails(app.to_string());
                    }
                }
                HomeFocus::Categories => {
                    if let Some(tile) = Dashboard::category_tiles().get(view.tile_cursor) {
                        view.page = DashboardPage::CategoryDetails(CategoryPage::open(&tile.name));
                    }
                }
            },
            _ => {}
        }
        None
    }

    /// Returns true when the page should close
    fn handle_category_page_key(
        page: &mut CategoryPage,
        notice: &mut Option<String>,
        key: KeyEvent,
    ) -> bool {
        if let Some(form) = page.rule_form.as_mut() {
            match key.code {
                KeyCode::Esc => {
                    page.details.rule.cancel();
                    page.rule_form = None;
                }
                KeyCode::Enter => {
                    if page.details.rule.save() {
                        *notice = Some(format!("Rule for {} saved", page.details.name));
                    }
                    page.rule_form = None;
                }
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
                _ => {
                    let changed = form
                        .focused_mut()
                        .handle_event(&Event::Key(key))
                        .is_some_and(|change| change.value);
                    if changed {
                        page.details.rule.stage(form.value());
                    }
                }
            }
            return false;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => return true,
            KeyCode::Enter | KeyCode::Char('e') => {
                let staged = page.details.rule.begin_edit().clone();
                page.rule_form = Some(RuleForm::from_value(&staged));
            }
            _ => {}
        }
        false
    }
}

/// Forward terminal events until the receiving side goes away
fn spawn_input_reader(event_tx: UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        while !event_tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!(error = %e, "Terminal poll failed");
                    break;
                }
            }
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    event_tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(width, height)) => event_tx.send(AppEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(e) => {
                    warn!(error = %e, "Terminal read failed");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        }
    });
}

fn move_up(cursor: &mut usize) {
    *cursor = cursor.saturating_sub(1);
}

fn move_down(cursor: &mut usize, len: usize) {
    if *cursor + 1 < len {
        *cursor += 1;
    }
}

/// Next index in a ring of `len`; an unset position starts at either end
fn cycle(position: Option<usize>, len: usize, forward: bool) -> usize {
    match (position, forward) {
        (Some(p), true) => (p + 1) % len,
        (Some(p), false) => (p + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(Some(3), 4, true), 0);
        assert_eq!(cycle(Some(0), 4, false), 3);
        assert_eq!(cycle(None, 4, true), 0);
        assert_eq!(cycle(None, 4, false), 3);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut cursor = 0;
        move_up(&mut cursor);
        assert_eq!(cursor, 0);
        move_down(&mut cursor, 2);
        move_down(&mut cursor, 2);
        assert_eq!(cursor, 1);
    }
}
