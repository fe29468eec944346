//! Onboarding completion flag and startup routing

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::state::store::KeyValueStore;
use crate::Result;

pub const ONBOARDING_COMPLETED_KEY: &str = "onboarding_completed";
pub const ONBOARDING_COMPLETED_AT_KEY: &str = "onboarding_completed_at";

/// Screen shown at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Onboarding,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingStatus {
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Any non-empty flag value counts as completed
pub fn is_completed(store: &dyn KeyValueStore) -> Result<bool> {
    Ok(store
        .get(ONBOARDING_COMPLETED_KEY)?
        .is_some_and(|value| !value.is_empty()))
}

pub fn initial_route(store: &dyn KeyValueStore) -> Result<Route> {
    Ok(if is_completed(store)? {
        Route::Dashboard
    } else {
        Route::Onboarding
    })
}

pub fn mark_completed(store: &mut dyn KeyValueStore) -> Result<DateTime<Utc>> {
    let now = Utc::now();
    store.set(ONBOARDING_COMPLETED_KEY, "true")?;
    store.set(ONBOARDING_COMPLETED_AT_KEY, &now.to_rfc3339())?;
    info!(at = %now, "Onboarding completed");
    Ok(now)
}

pub fn reset(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(ONBOARDING_COMPLETED_KEY)?;
    store.remove(ONBOARDING_COMPLETED_AT_KEY)?;
    info!("Onboarding flag cleared");
    Ok(())
}

/// Flag plus timestamp; an unparsable timestamp reads as absent
pub fn status(store: &dyn KeyValueStore) -> Result<OnboardingStatus> {
    let completed = is_completed(store)?;
    let completed_at = store
        .get(ONBOARDING_COMPLETED_AT_KEY)?
        .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
        .map(|dt| dt.with_timezone(&Utc));
    Ok(OnboardingStatus {
        completed,
        completed_at,
    })
}
