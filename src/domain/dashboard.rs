//! Main dashboard shown once onboarding is complete

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::{RuleDraft, RuleValue};
use super::directory::ChannelKind;
use super::grouping::{group_by, Group};
use super::seed;

/// Fallback rule for categories without seed rules
pub const UNKNOWN_CATEGORY_PROPOSAL: &str = "Custom Rule";
pub const UNKNOWN_CATEGORY_SCHEDULE: &str = "Manual mode";

/// Focus mode shown in the status carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FocusStatus {
    #[default]
    Work,
    Privat,
    Sleep,
}

impl FocusStatus {
    pub const ALL: [FocusStatus; 3] = [FocusStatus::Work, FocusStatus::Privat, FocusStatus::Sleep];

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusStatus::Work => "Work",
            FocusStatus::Privat => "Privat",
            FocusStatus::Sleep => "Sleep",
        }
    }

    fn index(&self) -> usize {
        match self {
            FocusStatus::Work => 0,
            FocusStatus::Privat => 1,
            FocusStatus::Sleep => 2,
        }
    }

    pub fn next(&self) -> FocusStatus {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> FocusStatus {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Active and muted channel counts for this status
    pub fn counts(&self) -> StatusCounts {
        match self {
            FocusStatus::Work => StatusCounts { active: 12, muted: 8 },
            FocusStatus::Privat => StatusCounts { active: 15, muted: 5 },
            FocusStatus::Sleep => StatusCounts { active: 2, muted: 18 },
        }
    }

    /// One-line summary of an app under this status
    pub fn app_status(&self, app: &str) -> &'static str {
        match (self, app) {
            (FocusStatus::Work, "Teams" | "Email") => "All channels active",
            (FocusStatus::Work, "WhatsApp") => "2 channels muted",
            (FocusStatus::Work, _) => "All channels muted",
            (FocusStatus::Privat, "WhatsApp" | "Telegram") => "All channels active",
            (FocusStatus::Privat, "Teams" | "Email") => "All channels muted",
            (FocusStatus::Privat, _) => "Limited access",
            (FocusStatus::Sleep, "WhatsApp") => "2 channels active",
            (FocusStatus::Sleep, _) => "All channels muted",
        }
    }
}

impl fmt::Display for FocusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FocusStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FocusStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown focus status '{}' (expected Work, Privat or Sleep)", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: u32,
    pub muted: u32,
}

/// Entry of the active/muted channel pages. `note` is the last activity
/// for active channels and the mute reason for muted ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedChannel {
    pub id: String,
    pub name: String,
    pub app: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContact {
    pub id: String,
    pub name: String,
    pub category: String,
    pub kind: ChannelKind,
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryContact {
    pub id: String,
    pub name: String,
    pub app: String,
    pub muted: bool,
}

/// Category page: contacts grouped by app plus a staged rule editor
#[derive(Debug, Clone)]
pub struct CategoryDetails {
    pub name: String,
    pub rule: RuleDraft,
    pub contacts: Vec<CategoryContact>,
}

impl CategoryDetails {
    pub fn load(name: &str) -> Self {
        let rule = seed::category_rule(name).unwrap_or_else(|| {
            RuleValue::new(UNKNOWN_CATEGORY_PROPOSAL, UNKNOWN_CATEGORY_SCHEDULE)
        });
        Self {
            name: name.to_string(),
            rule: RuleDraft::new(rule),
            contacts: seed::category_contacts(name),
        }
    }

    pub fn contacts_by_app(&self) -> Vec<Group<String, &CategoryContact>> {
        group_by(&self.contacts, |c| c.app.clone())
    }
}

/// Dashboard state: the focus carousel and the all-devices switch
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    status: FocusStatus,
    all_devices: bool,
}

impl Dashboard {
    pub fn new(status: FocusStatus) -> Self {
        Self {
            status,
            all_devices: true,
        }
    }

    pub fn status(&self) -> FocusStatus {
        self.status
    }

    pub fn all_devices(&self) -> bool {
        self.all_devices
    }

    pub fn next_status(&mut self) -> FocusStatus {
        self.status = self.status.next();
        debug!(status = %self.status, "Focus status changed");
        self.status
    }

    pub fn previous_status(&mut self) -> FocusStatus {
        self.status = self.status.previous();
        debug!(status = %self.status, "Focus status changed");
        self.status
    }

    pub fn toggle_all_devices(&mut self) -> bool {
        self.all_devices = !self.all_devices;
        self.all_devices
    }

    pub fn counts(&self) -> StatusCounts {
        self.status.counts()
    }

    /// (app, status line) for every dashboard app
    pub fn app_lines(&self) -> Vec<(&'static str, &'static str)> {
        seed::DASHBOARD_APPS
            .iter()
            .map(|&app| (app, self.status.app_status(app)))
            .collect()
    }

    pub fn active_channels_by_app() -> Vec<Group<String, FeedChannel>> {
        group_by(seed::active_channels(), |c| c.app.clone())
    }

    pub fn muted_channels_by_app() -> Vec<Group<String, FeedChannel>> {
        group_by(seed::muted_channels(), |c| c.app.clone())
    }

    pub fn app_details(app: &str) -> Vec<AppContact> {
        seed::app_contacts(app)
    }

    pub fn category_tiles() -> Vec<CategoryTile> {
        seed::category_tiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_carousel_wraps() {
        let mut dashboard = Dashboard::new(FocusStatus::Work);
        assert_eq!(dashboard.next_status(), FocusStatus::Privat);
        assert_eq!(dashboard.next_status(), FocusStatus::Sleep);
        assert_eq!(dashboard.next_status(), FocusStatus::Work);
        assert_eq!(dashboard.previous_status(), FocusStatus::Sleep);
    }

    #[test]
    fn test_counts_per_status() {
        assert_eq!(FocusStatus::Work.counts(), StatusCounts { active: 12, muted: 8 });
        assert_eq!(FocusStatus::Privat.counts(), StatusCounts { active: 15, muted: 5 });
        assert_eq!(FocusStatus::Sleep.counts(), StatusCounts { active: 2, muted: 18 });
    }

    #[test]
    fn test_app_status_lines() {
        let dashboard = Dashboard::new(FocusStatus::Work);
        assert_eq!(
            dashboard.app_lines(),
            vec![
                ("WhatsApp", "2 channels muted"),
                ("Telegram", "All channels muted"),
                ("Teams", "All channels active"),
                ("Email", "All channels active"),
                ("Other", "All channels muted"),
            ]
        );
        assert_eq!(FocusStatus::Privat.app_status("Other"), "Limited access");
        assert_eq!(FocusStatus::Privat.app_status("Telegram"), "All channels active");
        assert_eq!(FocusStatus::Sleep.app_status("WhatsApp"), "2 channels active");
        assert_eq!(FocusStatus::Sleep.app_status("Teams"), "All channels muted");
    }

    #[test]
    fn test_focus_status_from_str() {
        assert_eq!("sleep".parse::<FocusStatus>(), Ok(FocusStatus::Sleep));
        assert_eq!(" Privat ".parse::<FocusStatus>(), Ok(FocusStatus::Privat));
        assert!("Holiday".parse::<FocusStatus>().is_err());
    }

    #[test]
    fn test_feeds_grouped_by_app() {
        let active = Dashboard::active_channels_by_app();
        let keys: Vec<&str> = active.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["WhatsApp", "Telegram", "Teams", "Email"]);
        assert_eq!(active[0].len(), 2);

        let muted = Dashboard::muted_channels_by_app();
        let keys: Vec<&str> = muted.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["WhatsApp", "Telegram", "Teams", "Email", "Other"]);
        assert_eq!(muted[1].items[1].name, "Gaming Lounge");
    }

    #[test]
    fn test_category_details() {
        let work = CategoryDetails::load("Work");
        assert_eq!(work.rule.committed().schedule, "Muted on Weekends");
        let groups = work.contacts_by_app();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Teams", "WhatsApp", "Email"]);

        let gym = CategoryDetails::load("Gym");
        assert_eq!(gym.rule.committed(), &RuleValue::new("Custom Rule", "Manual mode"));
        assert!(gym.contacts_by_app().is_empty());
    }

    #[test]
    fn test_category_details_rule_edit() {
        let mut work = CategoryDetails::load("Work");
        work.rule.begin_edit();
        work.rule.stage(RuleValue::new("Muted: 19:00 - 07:00", "Muted on Weekends"));
        work.rule.cancel();
        assert_eq!(work.rule.displayed().proposal, "Muted: 18:00 - 08:00");

        work.rule.begin_edit();
        work.rule.stage(RuleValue::new("Muted: 19:00 - 07:00", "Muted on Weekends"));
        assert!(work.rule.save());
        assert_eq!(work.rule.displayed().proposal, "Muted: 19:00 - 07:00");
    }
}
