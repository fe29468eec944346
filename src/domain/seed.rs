//! Compiled-in seed data standing in for a backend

use super::category::{Category, CategoryStore, RuleValue};
use super::dashboard::{AppContact, CategoryContact, CategoryTile, FeedChannel};
use super::directory::{App, AppDirectory, Channel, ChannelKind};
use super::onboarding::AppSelection;

use super::directory::ChannelKind::{Contact, Group};

/// (id, display name, selected) for the first onboarding step
const ONBOARDING_APPS: &[(&str, &str, bool)] = &[
    ("whatsapp", "WhatsApp", true),
    ("teams", "Teams", true),
    ("telegram", "Telegram", true),
    ("signal", "Signal", true),
    ("email", "Email", true),
    ("news", "News", true),
    ("other", "...", false),
];

/// (name, proposal, schedule) in display order, smart mute on
const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Family", "Always priority", "Active 24/7"),
    ("Friends", "Active: 18:00 - 23:00", "Evening focus"),
    ("Work", "Muted: 18:00 - 08:00", "Also muted on Weekends"),
    ("University", "Active: Mon - Fri", "Academic focus"),
];

type ChannelSeed = (&'static str, &'static str, &'static str, ChannelKind);

const DIRECTORY: &[(&str, &[ChannelSeed])] = &[
    (
        "WhatsApp",
        &[
            ("1", "Family Group", "Family", Group),
            ("2", "Sarah Miller", "Friends", Contact),
            ("3", "Work Project A", "Work", Group),
            ("4", "University Study", "University", Group),
            ("5", "Mike Johnson", "Friends", Contact),
        ],
    ),
    (
        "Teams",
        &[
            ("t1", "General Channel", "Work", Group),
            ("t2", "Product Team", "Work", Group),
            ("t3", "HR Support", "Work", Contact),
        ],
    ),
    (
        "Telegram",
        &[
            ("tg1", "News Feed", "Friends", Group),
            ("tg2", "Besties", "Friends", Group),
        ],
    ),
    ("Signal", &[("s1", "Private Chat", "Friends", Contact)]),
];

pub fn onboarding_apps() -> Vec<AppSelection> {
    ONBOARDING_APPS
        .iter()
        .map(|&(id, name, selected)| AppSelection {
            id: id.to_string(),
            name: name.to_string(),
            selected,
        })
        .collect()
}

pub fn default_categories() -> CategoryStore {
    CategoryStore::new(
        DEFAULT_CATEGORIES
            .iter()
            .map(|&(name, proposal, schedule)| {
                Category::new(name, RuleValue::new(proposal, schedule), true)
            })
            .collect(),
    )
}

pub fn app_directory() -> AppDirectory {
    AppDirectory::new(
        DIRECTORY
            .iter()
            .map(|&(name, channels)| App {
                name: name.to_string(),
                channels: channels
                    .iter()
                    .map(|&(id, channel, category, kind)| Channel::new(id, channel, category, kind))
                    .collect(),
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Apps listed on the dashboard, in display order
pub const DASHBOARD_APPS: &[&str] = &["WhatsApp", "Telegram", "Teams", "Email", "Other"];

const ACTIVE_CHANNELS: &[(&str, &str, &str, &str)] = &[
    ("1", "Product Team", "WhatsApp", "2m ago"),
    ("2", "Family Group", "WhatsApp", "15m ago"),
    ("3", "Design Crit", "Telegram", "5m ago"),
    ("4", "Project Alpha", "Teams", "Just now"),
    ("5", "HR Updates", "Teams", "1h ago"),
    ("6", "Newsletter", "Email", "30m ago"),
];

const MUTED_CHANNELS: &[(&str, &str, &str, &str)] = &[
    ("m1", "Alumni Group", "WhatsApp", "Focus mode active"),
    ("m2", "Crypto News", "Telegram", "High frequency"),
    ("m3", "Gaming Lounge", "Telegram", "Non-work app"),
    ("m4", "General Chat", "Teams", "Muted by rule"),
    ("m5", "Marketing Promos", "Email", "Low priority"),
    ("m6", "Social Alerts", "Other", "System default"),
];

type ContactSeed = (&'static str, &'static str, &'static str, ChannelKind, bool);

const APP_CONTACTS: &[(&str, &[ContactSeed])] = &[
    (
        "WhatsApp",
        &[
            ("1", "Family Group", "Family", Group, false),
            ("2", "Sarah Miller", "Friends", Contact, true),
            ("3", "Work Project A", "Work", Group, false),
            ("4", "University Study", "University", Group, false),
            ("5", "Mike Johnson", "Friends", Contact, true),
        ],
    ),
    (
        "Teams",
        &[
            ("t1", "General Channel", "Work", Group, false),
            ("t2", "Product Team", "Work", Group, false),
            ("t3", "HR Support", "Work", Contact, true),
        ],
    ),
    (
        "Telegram",
        &[
            ("tg1", "News Feed", "Friends", Group, true),
            ("tg2", "Besties", "Friends", Group, false),
        ],
    ),
];

const CATEGORY_TILES: &[(&str, u32)] = &[
    ("Work", 12),
    ("Family", 2),
    ("Friends", 5),
    ("University", 8),
];

const CATEGORY_CONTACTS: &[(&str, &[(&str, &str, &str, bool)])] = &[
    (
        "Work",
        &[
            ("t1", "General Channel", "Teams", false),
            ("t2", "Product Team", "Teams", false),
            ("w3", "Work Project A", "WhatsApp", false),
            ("e1", "HR Updates", "Email", true),
        ],
    ),
    (
        "Family",
        &[
            ("w1", "Family Group", "WhatsApp", false),
            ("w2", "Dad", "WhatsApp", false),
        ],
    ),
    (
        "Friends",
        &[
            ("w4", "Sarah Miller", "WhatsApp", true),
            ("tg1", "Besties", "Telegram", false),
            ("w5", "Mike Johnson", "WhatsApp", true),
        ],
    ),
    (
        "University",
        &[
            ("w6", "University Study", "WhatsApp", false),
            ("tg2", "Math Group", "Telegram", false),
        ],
    ),
];

const CATEGORY_RULES: &[(&str, &str, &str)] = &[
    ("Work", "Muted: 18:00 - 08:00", "Muted on Weekends"),
    ("Family", "Always priority", "Active 24/7"),
    ("Friends", "Active: 18:00 - 23:00", "Evening focus"),
    ("University", "Active: Mon - Fri", "Academic focus"),
];

fn feed(rows: &[(&str, &str, &str, &str)]) -> Vec<FeedChannel> {
    rows.iter()
        .map(|&(id, name, app, note)| FeedChannel {
            id: id.to_string(),
            name: name.to_string(),
            app: app.to_string(),
            note: note.to_string(),
        })
        .collect()
}

pub fn active_channels() -> Vec<FeedChannel> {
    feed(ACTIVE_CHANNELS)
}

pub fn muted_channels() -> Vec<FeedChannel> {
    feed(MUTED_CHANNELS)
}

pub fn app_contacts(app: &str) -> Vec<AppContact> {
    APP_CONTACTS
        .iter()
        .find(|(name, _)| *name == app)
        .map(|(_, rows)| {
            rows.iter()
                .map(|&(id, name, category, kind, muted)| AppContact {
                    id: id.to_string(),
                    name: name.to_string(),
                    category: category.to_string(),
                    kind,
                    muted,
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn category_tiles() -> Vec<CategoryTile> {
    CATEGORY_TILES
        .iter()
        .map(|&(name, count)| CategoryTile {
            name: name.to_string(),
            count,
        })
        .collect()
}

pub fn category_contacts(category: &str) -> Vec<CategoryContact> {
    CATEGORY_CONTACTS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, rows)| {
            rows.iter()
                .map(|&(id, name, app, muted)| CategoryContact {
                    id: id.to_string(),
                    name: name.to_string(),
                    app: app.to_string(),
                    muted,
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn category_rule(category: &str) -> Option<RuleValue> {
    CATEGORY_RULES
        .iter()
        .find(|(name, _, _)| *name == category)
        .map(|&(_, proposal, schedule)| RuleValue::new(proposal, schedule))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboarding_apps_seed() {
        let apps = onboarding_apps();
        assert_eq!(apps.len(), 7);
        assert_eq!(apps.iter().filter(|a| a.selected).count(), 6);
        assert!(!apps.iter().find(|a| a.id == "other").unwrap().selected);
    }

    #[test]
    fn test_directory_references_default_categories() {
        let categories = default_categories();
        let directory = app_directory();
        assert_eq!(directory.apps().len(), 4);
        assert!(directory.dangling_references(&categories).is_empty());
    }

    #[test]
    fn test_default_categories_order() {
        let names: Vec<_> = default_categories().names().map(str::to_string).collect();
        assert_eq!(names, vec!["Family", "Friends", "Work", "University"]);
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        assert!(app_contacts("Email").is_empty());
        assert!(category_contacts("Gym").is_empty());
        assert!(category_rule("Gym").is_none());
    }
}
