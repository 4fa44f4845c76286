//! Daily reminder preference and its schedule.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

pub const ENABLED_KEY: &str = "reminder_enabled";
pub const TIME_KEY: &str = "reminder_time";

/// Minutes the time moves per key press on the settings screen.
pub const TIME_STEP_MINUTES: i64 = 15;

const TIME_FORMAT: &str = "%H:%M";

/// The stored reminder preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSettings {
    pub enabled: bool,
    pub time: NaiveTime,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            time: default_time(),
        }
    }
}

fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl ReminderSettings {
    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// Reads and writes [`ReminderSettings`].
///
/// Writes are optimistic: the in-memory value changes first and is put back
/// if the store rejects the write, and the old value is written back over
/// any key that did get through.
pub struct ReminderPreferences {
    store: Arc<dyn KeyValueStore>,
    current: ReminderSettings,
}

impl ReminderPreferences {
    /// Load from the store. Missing or unreadable values fall back to the
    /// defaults (off, 08:00).
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let current = Self::read(store.as_ref()).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Could not read reminder settings, using defaults");
            ReminderSettings::default()
        });
        Self { store, current }
    }

    fn read(store: &dyn KeyValueStore) -> Result<ReminderSettings, StorageError> {
        let enabled = store.get(ENABLED_KEY)?.is_some_and(|v| v.trim() == "true");
        let time = store
            .get(TIME_KEY)?
            .and_then(|v| NaiveTime::parse_from_str(v.trim(), TIME_FORMAT).ok())
            .unwrap_or_else(default_time);
        Ok(ReminderSettings { enabled, time })
    }

    pub fn settings(&self) -> ReminderSettings {
        self.current
    }

    /// Flip the enabled flag. On failure the flag keeps its old value.
    pub fn toggle(&mut self) -> Result<bool, StorageError> {
        let previous = self.current;
        self.current.enabled = !previous.enabled;
        if let Err(err) = self.persist() {
            tracing::warn!(error = %err, "Reverting reminder toggle");
            self.revert(previous);
            return Err(err);
        }
        tracing::info!(enabled = self.current.enabled, "Reminder toggled");
        Ok(self.current.enabled)
    }

    /// Move the time by `minutes`, wrapping around midnight.
    pub fn shift_time(&mut self, minutes: i64) -> Result<NaiveTime, StorageError> {
        let (shifted, _) = self
            .current
            .time
            .overflowing_add_signed(Duration::minutes(minutes));
        self.set_time(shifted)
    }

    /// Set the reminder time, truncated to the minute.
    pub fn set_time(&mut self, time: NaiveTime) -> Result<NaiveTime, StorageError> {
        let previous = self.current;
        self.current.time = time.with_second(0).unwrap_or(time);
        if let Err(err) = self.persist() {
            tracing::warn!(error = %err, "Reverting reminder time");
            self.revert(previous);
            return Err(err);
        }
        Ok(self.current.time)
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.store
            .set(ENABLED_KEY, if self.current.enabled { "true" } else { "false" })?;
        self.store.set(TIME_KEY, &self.current.time_label())
    }

    fn revert(&mut self, previous: ReminderSettings) {
        self.current = previous;
        if let Err(err) = self.persist() {
            tracing::warn!(error = %err, "Could not restore stored reminder settings");
        }
    }
}

/// Decides when the daily reminder fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderSchedule {
    last_fired: Option<NaiveDate>,
}

impl ReminderSchedule {
    /// A schedule that will not fire for a time already passed today.
    pub fn starting_at(now: NaiveDateTime, settings: &ReminderSettings) -> Self {
        let last_fired = (now.time() >= settings.time).then(|| now.date());
        Self { last_fired }
    }

    pub fn last_fired(&self) -> Option<NaiveDate> {
        self.last_fired
    }

    /// Enabled, the configured time has passed, and not yet fired today.
    pub fn is_due(
        settings: &ReminderSettings,
        now: NaiveDateTime,
        last_fired: Option<NaiveDate>,
    ) -> bool {
        settings.enabled && now.time() >= settings.time && last_fired != Some(now.date())
    }

    /// Check and record. Returns true at most once per day.
    pub fn poll(&mut self, settings: &ReminderSettings, now: NaiveDateTime) -> bool {
        if Self::is_due(settings, now, self.last_fired) {
            self.last_fired = Some(now.date());
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let prefs = ReminderPreferences::load(Arc::new(InMemoryStore::new()));
        assert_eq!(prefs.settings(), ReminderSettings::default());
        assert_eq!(prefs.settings().time_label(), "08:00");
    }

    #[test]
    fn test_load_stored_values() {
        let store = InMemoryStore::with_entries([(ENABLED_KEY, "true"), (TIME_KEY, "07:45")]);
        let prefs = ReminderPreferences::load(Arc::new(store));
        assert!(prefs.settings().enabled);
        assert_eq!(prefs.settings().time, time(7, 45));
    }

    #[test]
    fn test_toggle_persists_both_keys() {
        let store = InMemoryStore::new();
        let mut prefs = ReminderPreferences::load(Arc::new(store.clone()));
        assert!(prefs.toggle().unwrap());
        assert_eq!(store.peek(ENABLED_KEY).as_deref(), Some("true"));
        assert_eq!(store.peek(TIME_KEY).as_deref(), Some("08:00"));
    }

    #[test]
    fn test_toggle_reverts_on_storage_error() {
        let store = InMemoryStore::new();
        let mut prefs = ReminderPreferences::load(Arc::new(store.clone()));
        store.set_write_should_fail(true);
        assert!(prefs.toggle().is_err());
        assert!(!prefs.settings().enabled);
    }

    /// Accepts every write except the reminder time.
    struct TimeWriteFails(InMemoryStore);

    impl KeyValueStore for TimeWriteFails {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == TIME_KEY {
                return Err(StorageError::Unavailable("time key".to_string()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_failed_second_write_restores_enabled_key() {
        let inner = InMemoryStore::with_entries([(ENABLED_KEY, "false")]);
        let mut prefs = ReminderPreferences::load(Arc::new(TimeWriteFails(inner.clone())));

        assert!(prefs.toggle().is_err());
        assert!(!prefs.settings().enabled);
        assert_eq!(inner.peek(ENABLED_KEY).as_deref(), Some("false"));

        let reloaded = ReminderPreferences::load(Arc::new(inner));
        assert!(!reloaded.settings().enabled);
    }

    #[test]
    fn test_shift_time_wraps() {
        let store = InMemoryStore::with_entries([(TIME_KEY, "23:50")]);
        let mut prefs = ReminderPreferences::load(Arc::new(store.clone()));
        assert_eq!(prefs.shift_time(TIME_STEP_MINUTES).unwrap(), time(0, 5));
        assert_eq!(prefs.shift_time(-TIME_STEP_MINUTES).unwrap(), time(23, 50));
        assert_eq!(store.peek(TIME_KEY).as_deref(), Some("23:50"));
    }

    #[test]
    fn test_schedule_fires_once_per_day() {
        let settings = ReminderSettings {
            enabled: true,
            time: time(8, 0),
        };
        let mut schedule = ReminderSchedule::default();
        assert!(!schedule.poll(&settings, at(1, 7, 59)));
        assert!(schedule.poll(&settings, at(1, 8, 0)));
        assert!(!schedule.poll(&settings, at(1, 12, 0)));
        assert!(schedule.poll(&settings, at(2, 9, 0)));
    }

    #[test]
    fn test_schedule_respects_disabled() {
        let settings = ReminderSettings::default();
        assert!(!ReminderSchedule::is_due(&settings, at(1, 9, 0), None));
    }

    #[test]
    fn test_starting_after_time_skips_today() {
        let settings = ReminderSettings {
            enabled: true,
            time: time(8, 0),
        };
        let mut schedule = ReminderSchedule::starting_at(at(1, 10, 0), &settings);
        assert!(!schedule.poll(&settings, at(1, 10, 1)));
        assert!(schedule.poll(&settings, at(2, 8, 0)));

        let early = ReminderSchedule::starting_at(at(1, 6, 0), &settings);
        assert_eq!(early.last_fired(), None);
    }
}
