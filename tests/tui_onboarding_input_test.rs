use keepcalm::cli::tui::state::{OnboardingView, Screen};
use keepcalm::cli::tui::App;
use keepcalm::config::Settings;
use keepcalm::domain::Step;
use keepcalm::state::{gate, MemoryStore};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn new_app() -> App {
    App::new(Box::new(MemoryStore::new()), Settings::default()).unwrap()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap();
}

fn onboarding(app: &App) -> &OnboardingView {
    match app.screen() {
        Screen::Onboarding(view) => view,
        Screen::Dashboard(_) => panic!("Expected the onboarding screen"),
    }
}

fn channel_category(app: &App, app_name: &str, id: &str) -> Option<String> {
    onboarding(app)
        .flow
        .directory()
        .get(app_name)
        .and_then(|a| a.channel(id))
        .and_then(|c| c.category.clone())
}

#[test]
fn test_fresh_store_starts_onboarding() {
    let app = new_app();
    assert_eq!(onboarding(&app).flow.step(), Step::SelectApps);
    assert_eq!(app.completions(), 0);
    assert!(!app.should_quit());
}

#[test]
fn test_full_walkthrough_completes_once() {
    let mut app = new_app();

    // Step 1: deselect Teams (second row)
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert!(!onboarding(&app).flow.is_controlled("Teams"));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(onboarding(&app).flow.step(), Step::CategorizeChannels);

    // Step 2: open WhatsApp and recategorize its first channel
    press(&mut app, KeyCode::Enter);
    assert_eq!(onboarding(&app).flow.editing_app(), Some("WhatsApp"));
    assert_eq!(channel_category(&app, "WhatsApp", "1").as_deref(), Some("Family"));
    press(&mut app, KeyCode::Right);
    assert_eq!(channel_category(&app, "WhatsApp", "1").as_deref(), Some("Friends"));
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(channel_category(&app, "WhatsApp", "1").as_deref(), Some("Work"));
    press(&mut app, KeyCode::Esc);
    assert_eq!(onboarding(&app).flow.editing_app(), None);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(onboarding(&app).flow.step(), Step::ReviewRules);

    // Step 3: smart mute on Family flips off
    press(&mut app, KeyCode::Char(' '));
    assert!(!onboarding(&app).flow.categories().get("Family").unwrap().smart_mute);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(onboarding(&app).flow.step(), Step::Confirm);
    assert!(!gate::is_completed(app.store()).unwrap());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.completions(), 1);
    assert!(gate::is_completed(app.store()).unwrap());
    assert!(matches!(app.screen(), Screen::Dashboard(_)));

    // Further keys land on the dashboard and never complete again
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.completions(), 1);
}

#[test]
fn test_hidden_app_not_listed_in_step_two() {
    let mut app = new_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('n'));

    // Second row of step 2 is Telegram once Teams is hidden
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(onboarding(&app).flow.editing_app(), Some("Telegram"));
}

#[test]
fn test_unknown_category_number_sets_notice() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('9'));
    assert_eq!(
        onboarding(&app).notice.as_deref(),
        Some("No category number 9")
    );
    assert_eq!(channel_category(&app, "WhatsApp", "1").as_deref(), Some("Family"));

    // Any following key clears the notice
    press(&mut app, KeyCode::Down);
    assert_eq!(onboarding(&app).notice, None);
    assert_eq!(onboarding(&app).channel_cursor, 1);
}

#[test]
fn test_rule_form_save_and_cancel() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(onboarding(&app).flow.step(), Step::ReviewRules);

    // Family is the first row; type into the proposal then cancel
    press(&mut app, KeyCode::Enter);
    assert!(onboarding(&app).rule_form.is_some());
    assert_eq!(onboarding(&app).flow.editing_rules(), Some("Family"));
    press(&mut app, KeyCode::Char('!'));
    let family = onboarding(&app).flow.categories().get("Family").unwrap();
    assert_eq!(family.rule.displayed().proposal, "Always priority!");
    assert_eq!(family.rule.committed().proposal, "Always priority");
    press(&mut app, KeyCode::Esc);
    let family = onboarding(&app).flow.categories().get("Family").unwrap();
    assert_eq!(family.rule.displayed().proposal, "Always priority");
    assert!(onboarding(&app).rule_form.is_none());

    // Edit the schedule and save
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Char('!'));
    press(&mut app, KeyCode::Enter);
    let family = onboarding(&app).flow.categories().get("Family").unwrap();
    assert_eq!(family.rule.committed().schedule, "Active 24/!");
    assert!(!family.rule.is_editing());
    assert!(onboarding(&app).rule_form.is_none());
}

#[test]
fn test_quit_keys() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = new_app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .unwrap();
    assert!(app.should_quit());
    assert_eq!(app.completions(), 0);
}
