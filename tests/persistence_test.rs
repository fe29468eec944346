use std::fs;

use keepcalm::cli::commands::{CommandContext, CommandHandler, ResetCommand, StatusCommand};
use keepcalm::cli::OutputFormat;
use keepcalm::config::Settings;
use keepcalm::state::gate::{self, ONBOARDING_COMPLETED_AT_KEY, ONBOARDING_COMPLETED_KEY};
use keepcalm::state::{KeyValueStore, Route, StateManager};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn context(temp_dir: &TempDir) -> CommandContext {
    CommandContext {
        settings: Settings::default(),
        state_file: temp_dir.path().join("nested").join("state.json"),
        ephemeral: false,
    }
}

#[test]
fn test_completion_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");

    {
        let mut store = StateManager::open(&path).unwrap();
        assert_eq!(gate::initial_route(&store).unwrap(), Route::Onboarding);
        gate::mark_completed(&mut store).unwrap();
    }

    let store = StateManager::open(&path).unwrap();
    assert_eq!(gate::initial_route(&store).unwrap(), Route::Dashboard);
    assert_eq!(
        store.get(ONBOARDING_COMPLETED_KEY).unwrap().as_deref(),
        Some("true")
    );
    assert!(gate::status(&store).unwrap().completed_at.is_some());
}

#[test]
fn test_file_is_plain_json_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");

    let mut store = StateManager::open(&path).unwrap();
    gate::mark_completed(&mut store).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value[ONBOARDING_COMPLETED_KEY], "true");
    assert!(value[ONBOARDING_COMPLETED_AT_KEY].is_string());
}

#[test]
fn test_any_stored_flag_value_counts_as_completed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");
    fs::write(&path, r#"{"onboarding_completed": "1"}"#).unwrap();

    let store = StateManager::open(&path).unwrap();
    assert!(gate::is_completed(&store).unwrap());
    assert_eq!(gate::initial_route(&store).unwrap(), Route::Dashboard);
}

#[test]
fn test_corrupt_state_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");
    fs::write(&path, "not json").unwrap();

    assert!(StateManager::open(&path).is_err());
}

#[test]
fn test_reset_command_clears_flag_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let context = context(&temp_dir);

    {
        let mut store = context.open_store().unwrap();
        gate::mark_completed(store.as_mut()).unwrap();
    }
    assert!(context.state_file.exists());

    ResetCommand::new(context.clone()).execute().unwrap();

    let store = StateManager::open(&context.state_file).unwrap();
    assert!(!gate::is_completed(&store).unwrap());
    assert_eq!(store.get(ONBOARDING_COMPLETED_AT_KEY).unwrap(), None);
}

#[test]
fn test_status_report_reads_store() {
    let temp_dir = TempDir::new().unwrap();
    let context = context(&temp_dir);
    let command = StatusCommand::new(context.clone(), OutputFormat::Json);

    let mut store = context.open_store().unwrap();
    let before: serde_json::Value =
        serde_json::from_str(&command.render(store.as_ref()).unwrap()).unwrap();
    assert_eq!(before["completed"], false);
    assert_eq!(before["next_screen"], "onboarding");

    gate::mark_completed(store.as_mut()).unwrap();
    let after: serde_json::Value =
        serde_json::from_str(&command.render(store.as_ref()).unwrap()).unwrap();
    assert_eq!(after["completed"], true);
    assert_eq!(after["next_screen"], "dashboard");
    assert!(after["completed_at"].is_string());
}
