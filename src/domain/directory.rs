//! App/channel directory
//!
//! Maps each messaging app to its ordered channel list. Channels point at
//! categories by name; the directory keeps those references consistent when
//! a category is renamed or deleted.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::category::CategoryStore;
use super::grouping::distinct_keys;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("unknown app '{0}'")]
    UnknownApp(String),

    #[error("app '{app}' has no channel '{channel}'")]
    UnknownChannel { app: String, channel: String },

    #[error("category '{0}' does not exist")]
    UnknownCategory(String),
}

/// Whether a channel is a group conversation or a direct contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Group,
    Contact,
}

impl ChannelKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Group => "Group",
            ChannelKind::Contact => "Direct Message",
        }
    }
}

/// A conversation inside an app. `category == None` means unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub kind: ChannelKind,
}

impl Channel {
    pub fn new(id: &str, name: &str, category: &str, kind: ChannelKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: Some(category.to_string()),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub name: String,
    pub channels: Vec<Channel>,
}

impl App {
    pub fn channel(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    /// Distinct categories of this app's channels, in channel order.
    /// Derived on every call so edits show up immediately.
    pub fn category_tags(&self) -> Vec<Option<String>> {
        distinct_keys(&self.channels, |c| c.category.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppDirectory {
    apps: Vec<App>,
}

impl AppDirectory {
    pub fn new(apps: Vec<App>) -> Self {
        Self { apps }
    }

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn get(&self, name: &str) -> Option<&App> {
        self.apps.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Move one channel to `category`, which must exist in `categories`
    pub fn reassign(
        &mut self,
        app: &str,
        channel_id: &str,
        category: &str,
        categories: &CategoryStore,
    ) -> Result<(), DirectoryError> {
        if !categories.contains(category) {
            return Err(DirectoryError::UnknownCategory(category.to_string()));
        }
        let entry = self
            .apps
            .iter_mut()
            .find(|a| a.name == app)
            .ok_or_else(|| DirectoryError::UnknownApp(app.to_string()))?;
        let channel = entry
            .channels
            .iter_mut()
            .find(|c| c.id == channel_id)
            .ok_or_else(|| DirectoryError::UnknownChannel {
                app: app.to_string(),
                channel: channel_id.to_string(),
            })?;

        debug!(app, channel = channel_id, category, "Reassigning channel");
        channel.category = Some(category.to_string());
        Ok(())
    }

    /// Point every channel tagged `old` at `new`. Returns how many changed.
    pub fn rename_category(&mut self, old: &str, new: &str) -> usize {
        self.rewrite_category(old, Some(new))
    }

    /// Unassign every channel tagged `name`. Returns how many changed.
    pub fn unassign_category(&mut self, name: &str) -> usize {
        self.rewrite_category(name, None)
    }

    fn rewrite_category(&mut self, from: &str, to: Option<&str>) -> usize {
        let mut changed = 0;
        for channel in self.apps.iter_mut().flat_map(|a| a.channels.iter_mut()) {
            if channel.category.as_deref() == Some(from) {
                channel.category = to.map(str::to_string);
                changed += 1;
            }
        }
        if changed > 0 {
            debug!(from, to = ?to, changed, "Rewrote channel categories");
        }
        changed
    }

    /// Channels whose category is not in `categories`
    pub fn dangling_references<'a>(&'a self, categories: &'a CategoryStore) -> Vec<&'a Channel> {
        self.apps
            .iter()
            .flat_map(|a| a.channels.iter())
            .filter(|c| matches!(&c.category, Some(name) if !categories.contains(name)))
            .collect()
    }
}
