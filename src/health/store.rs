//! Health values persisted in the key-value store.
//!
//! Weight is kept until overwritten. Water, sleep and manual steps are
//! scoped to the day they were written: each has a `_date` companion key and
//! is ignored once that date is not today.

use std::sync::Arc;

use chrono::NaiveDate;

use super::date::{day_key, is_current};
use super::input::{parse_in_range, parse_steps};
use super::record::HealthRecord;
use crate::error::{AppResult, StorageError};
use crate::traits::KeyValueStore;

pub const WEIGHT_KEY: &str = "health_weight";
pub const WATER_KEY: &str = "health_water_intake";
pub const WATER_DATE_KEY: &str = "health_water_date";
pub const SLEEP_KEY: &str = "health_sleep_hours";
pub const SLEEP_DATE_KEY: &str = "health_sleep_date";
pub const STEPS_KEY: &str = "health_manual_steps";
pub const STEPS_DATE_KEY: &str = "health_manual_steps_date";

/// Liters added by one press of the water button.
pub const WATER_INCREMENT: f64 = 0.25;

const WEIGHT_RANGE: (f64, f64) = (1.0, 500.0);
const SLEEP_RANGE: (f64, f64) = (0.0, 24.0);

/// Reads and writes the health entries.
#[derive(Clone)]
pub struct HealthStore {
    store: Arc<dyn KeyValueStore>,
}

impl HealthStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Everything the health screen shows, with stale values dropped.
    pub fn load(&self, today: NaiveDate) -> Result<HealthRecord, StorageError> {
        let steps = self
            .dated_value(STEPS_KEY, STEPS_DATE_KEY, today)?
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);

        let weight = self
            .store
            .get(WEIGHT_KEY)?
            .and_then(|raw| parse_stored(WEIGHT_KEY, &raw));

        let water = self
            .dated_value(WATER_KEY, WATER_DATE_KEY, today)?
            .and_then(|raw| parse_stored(WATER_KEY, &raw))
            .unwrap_or(0.0);

        let sleep = self
            .dated_value(SLEEP_KEY, SLEEP_DATE_KEY, today)?
            .and_then(|raw| parse_stored(SLEEP_KEY, &raw));

        Ok(HealthRecord {
            step_count: steps,
            weight_kg: weight,
            water_liters: water,
            sleep_hours: sleep,
        })
    }

    /// Validate and store a weight in kg.
    pub fn save_weight(&self, input: &str) -> AppResult<f64> {
        let weight = parse_in_range("weight", input, WEIGHT_RANGE.0, WEIGHT_RANGE.1)?;
        self.store.set(WEIGHT_KEY, &weight.to_string())?;
        tracing::info!(weight, "Weight saved");
        Ok(weight)
    }

    /// Add [`WATER_INCREMENT`] to today's water. Yesterday's total counts as 0.
    pub fn add_water(&self, today: NaiveDate) -> Result<f64, StorageError> {
        let current = self
            .dated_value(WATER_KEY, WATER_DATE_KEY, today)?
            .and_then(|raw| parse_stored(WATER_KEY, &raw))
            .unwrap_or(0.0);
        let total = current + WATER_INCREMENT;
        self.write_dated(WATER_KEY, WATER_DATE_KEY, &total.to_string(), today)?;
        tracing::info!(total, "Water intake updated");
        Ok(total)
    }

    /// Validate and store last night's sleep in hours.
    pub fn save_sleep(&self, input: &str, today: NaiveDate) -> AppResult<f64> {
        let hours = parse_in_range("sleep", input, SLEEP_RANGE.0, SLEEP_RANGE.1)?;
        self.write_dated(SLEEP_KEY, SLEEP_DATE_KEY, &hours.to_string(), today)?;
        tracing::info!(hours, "Sleep saved");
        Ok(hours)
    }

    /// Validate and store today's step count.
    pub fn save_manual_steps(&self, input: &str, today: NaiveDate) -> AppResult<u32> {
        let steps = parse_steps("steps", input)?;
        self.write_dated(STEPS_KEY, STEPS_DATE_KEY, &steps.to_string(), today)?;
        tracing::info!(steps, "Manual steps saved");
        Ok(steps)
    }

    fn dated_value(
        &self,
        key: &str,
        date_key: &str,
        today: NaiveDate,
    ) -> Result<Option<String>, StorageError> {
        let stamp = self.store.get(date_key)?;
        if !is_current(stamp.as_deref(), today) {
            return Ok(None);
        }
        self.store.get(key)
    }

    /// Value first, then the stamp.
    fn write_dated(
        &self,
        key: &str,
        date_key: &str,
        value: &str,
        today: NaiveDate,
    ) -> Result<(), StorageError> {
        self.store.set(key, value)?;
        self.store.set(date_key, &day_key(today))
    }
}

fn parse_stored(key: &str, raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::warn!(key, raw, "Ignoring unreadable stored value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;
    use crate::error::{AppError, ValidationError};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (InMemoryStore, HealthStore) {
        let store = InMemoryStore::new();
        let health = HealthStore::new(Arc::new(store.clone()));
        (store, health)
    }

    #[test]
    fn test_empty_store_loads_defaults() {
        let (_, health) = setup();
        assert_eq!(health.load(day(2024, 5, 1)).unwrap(), HealthRecord::default());
    }

    #[test]
    fn test_water_sums_within_a_day() {
        let (store, health) = setup();
        let today = day(2024, 5, 1);
        assert_eq!(health.add_water(today).unwrap(), 0.25);
        assert_eq!(health.add_water(today).unwrap(), 0.5);
        assert_eq!(health.add_water(today).unwrap(), 0.75);
        assert_eq!(store.peek(WATER_DATE_KEY).as_deref(), Some("2024-05-01"));
        assert_eq!(health.load(today).unwrap().water_liters, 0.75);
    }

    #[test]
    fn test_water_resets_on_new_day() {
        let store = InMemoryStore::with_entries([
            (WATER_KEY, "1.5"),
            (WATER_DATE_KEY, "2024-04-30"),
        ]);
        let health = HealthStore::new(Arc::new(store.clone()));
        let today = day(2024, 5, 1);

        assert_eq!(health.load(today).unwrap().water_liters, 0.0);
        assert_eq!(health.add_water(today).unwrap(), 0.25);
        assert_eq!(store.peek(WATER_KEY).as_deref(), Some("0.25"));
    }

    #[test]
    fn test_weight_rejects_garbage_without_writing() {
        let (store, health) = setup();
        let err = health.save_weight("abc").unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::NotANumber { .. })
        ));
        assert_eq!(store.peek(WEIGHT_KEY), None);
    }

    #[test]
    fn test_weight_persisted_and_not_date_scoped() {
        let (store, health) = setup();
        assert_eq!(health.save_weight("72.5").unwrap(), 72.5);
        assert_eq!(store.peek(WEIGHT_KEY).as_deref(), Some("72.5"));
        assert_eq!(health.load(day(2030, 1, 1)).unwrap().weight_kg, Some(72.5));
    }

    #[test]
    fn test_sleep_is_date_scoped() {
        let (_, health) = setup();
        health.save_sleep("7,5", day(2024, 5, 1)).unwrap();
        assert_eq!(health.load(day(2024, 5, 1)).unwrap().sleep_hours, Some(7.5));
        assert_eq!(health.load(day(2024, 5, 2)).unwrap().sleep_hours, None);
    }

    #[test]
    fn test_manual_steps() {
        let (_, health) = setup();
        let today = day(2024, 5, 1);
        assert_eq!(health.save_manual_steps(" 8200 ", today).unwrap(), 8200);
        assert_eq!(health.load(today).unwrap().step_count, 8200);
        assert_eq!(health.load(day(2024, 5, 2)).unwrap().step_count, 0);
        assert!(health.save_manual_steps("-1", today).is_err());
    }

    #[test]
    fn test_write_failure_is_storage_error() {
        let (store, health) = setup();
        store.set_write_should_fail(true);
        assert!(matches!(
            health.save_weight("70"),
            Err(AppError::Storage(_))
        ));
        assert!(health.add_water(day(2024, 5, 1)).is_err());
    }

    #[test]
    fn test_unreadable_stored_value_is_ignored() {
        let store = InMemoryStore::with_entries([(WEIGHT_KEY, "hetven")]);
        let health = HealthStore::new(Arc::new(store));
        assert_eq!(health.load(day(2024, 5, 1)).unwrap().weight_kg, None);
    }
}
