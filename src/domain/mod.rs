//! Notification triage model: categories, channels, onboarding and dashboard

pub mod category;
pub mod dashboard;
pub mod directory;
pub mod grouping;
pub mod onboarding;
pub mod seed;

pub use category::{Category, CategoryError, CategoryStore, RenameOutcome, RuleDraft, RuleValue};
pub use dashboard::{CategoryDetails, Dashboard, FocusStatus, StatusCounts};
pub use directory::{App, AppDirectory, Channel, ChannelKind, DirectoryError};
pub use onboarding::{FlowError, OnboardingFlow, OnboardingSummary, Step, Transition};
