//! User preferences.

pub mod reminder;

pub use reminder::{ReminderPreferences, ReminderSchedule, ReminderSettings, TIME_STEP_MINUTES};
