use keepcalm::cli::tui::state::{ModalFocus, OnboardingView, Screen};
use keepcalm::cli::tui::App;
use keepcalm::config::Settings;
use keepcalm::state::MemoryStore;
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap();
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn onboarding(app: &App) -> &OnboardingView {
    match app.screen() {
        Screen::Onboarding(view) => view,
        Screen::Dashboard(_) => panic!("Expected the onboarding screen"),
    }
}

fn names(app: &App) -> Vec<String> {
    onboarding(app)
        .flow
        .categories()
        .names()
        .map(str::to_string)
        .collect()
}

/// App on step 2 with the category editor open
fn app_with_editor() -> App {
    let mut app = App::new(Box::new(MemoryStore::new()), Settings::default()).unwrap();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('c'));
    assert!(onboarding(&app).flow.is_category_editor_open());
    assert!(onboarding(&app).category_modal.is_some());
    app
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_add_category_through_input() {
    let mut app = app_with_editor();

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(
        onboarding(&app).category_modal.as_ref().unwrap().focus,
        ModalFocus::Input
    );
    type_text(&mut app, "Gym");
    press(&mut app, KeyCode::Enter);

    assert_eq!(names(&app), vec!["Family", "Friends", "Work", "University", "Gym"]);
    let modal = onboarding(&app).category_modal.as_ref().unwrap();
    assert_eq!(modal.input.value(), "");
    assert_eq!(modal.focus, ModalFocus::List);
}

#[test]
fn test_duplicate_add_shows_notice() {
    let mut app = app_with_editor();

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Work");
    press(&mut app, KeyCode::Enter);

    assert_eq!(names(&app).len(), 4);
    assert!(onboarding(&app).notice.is_some());
    let modal = onboarding(&app).category_modal.as_ref().unwrap();
    assert_eq!(modal.input.value(), "Work");

    press(&mut app, KeyCode::Esc);
    let modal = onboarding(&app).category_modal.as_ref().unwrap();
    assert_eq!(modal.input.value(), "");
    assert_eq!(modal.focus, ModalFocus::List);
}

#[test]
fn test_rename_and_delete_update_channels() {
    let mut app = app_with_editor();

    // Rename the first row, Family, to Home
    press(&mut app, KeyCode::Char('r'));
    for _ in 0.."Family".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Home");
    press(&mut app, KeyCode::Enter);
    assert_eq!(names(&app), vec!["Home", "Friends", "Work", "University"]);

    let category = |app: &App| {
        onboarding(app)
            .flow
            .directory()
            .get("WhatsApp")
            .and_then(|a| a.channel("1"))
            .and_then(|c| c.category.clone())
    };
    assert_eq!(category(&app).as_deref(), Some("Home"));

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(names(&app), vec!["Friends", "Work", "University"]);
    assert_eq!(category(&app), None);
}

#[test]
fn test_rename_to_empty_is_rejected() {
    let mut app = app_with_editor();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('r'));
    for _ in 0.."Friends".len() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(names(&app), vec!["Family", "Friends", "Work", "University"]);
    assert!(onboarding(&app).notice.is_some());
}

#[test]
fn test_close_editor_returns_to_step() {
    let mut app = app_with_editor();
    press(&mut app, KeyCode::Esc);

    assert!(!onboarding(&app).flow.is_category_editor_open());
    assert!(onboarding(&app).category_modal.is_none());

    // Keys reach the step again
    press(&mut app, KeyCode::Enter);
    assert_eq!(onboarding(&app).flow.editing_app(), Some("WhatsApp"));
}

#[test]
fn test_editor_renders_over_step() {
    let mut app = app_with_editor();
    let text = screen_text(&app);
    assert!(text.contains("Edit categories"));
    assert!(text.contains("University"));

    press(&mut app, KeyCode::Esc);
    assert!(!screen_text(&app).contains("Edit categories"));
}
