//! Health values against the file-backed store.

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use konyhanyelv::adapters::FileStore;
use konyhanyelv::error::{AppError, ValidationError};
use konyhanyelv::health::{HealthStore, WATER_DATE_KEY, WATER_KEY, WEIGHT_KEY};
use konyhanyelv::traits::KeyValueStore;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

fn open(dir: &TempDir) -> (Arc<FileStore>, HealthStore) {
    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let health = HealthStore::new(store.clone());
    (store, health)
}

#[test]
fn test_water_accumulates_within_a_day() {
    let dir = TempDir::new().unwrap();
    let (_, health) = open(&dir);

    assert_eq!(health.add_water(day(10)).unwrap(), 0.25);
    assert_eq!(health.add_water(day(10)).unwrap(), 0.5);
    assert_eq!(health.add_water(day(10)).unwrap(), 0.75);
    assert_eq!(health.load(day(10)).unwrap().water_liters, 0.75);
}

#[test]
fn test_water_resets_on_a_new_day() {
    let dir = TempDir::new().unwrap();
    let (store, health) = open(&dir);

    health.add_water(day(10)).unwrap();
    health.add_water(day(10)).unwrap();

    assert_eq!(health.load(day(11)).unwrap().water_liters, 0.0);
    assert_eq!(health.add_water(day(11)).unwrap(), 0.25);
    assert_eq!(store.get(WATER_KEY).unwrap().as_deref(), Some("0.25"));
    assert_eq!(store.get(WATER_DATE_KEY).unwrap().as_deref(), Some("2024-05-11"));
}

#[test]
fn test_weight_rejects_text_and_keeps_previous() {
    let dir = TempDir::new().unwrap();
    let (store, health) = open(&dir);

    health.save_weight("72.5").unwrap();
    let err = health.save_weight("abc").unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::NotANumber { .. })
    ));
    assert_eq!(store.get(WEIGHT_KEY).unwrap().as_deref(), Some("72.5"));
}

#[test]
fn test_weight_survives_reopen_and_day_change() {
    let dir = TempDir::new().unwrap();
    {
        let (_, health) = open(&dir);
        assert_eq!(health.save_weight("72,5").unwrap(), 72.5);
    }
    let (_, health) = open(&dir);
    let record = health.load(day(20)).unwrap();
    assert_eq!(record.weight_kg, Some(72.5));
    assert_eq!(record.weight_display(), "72.5 kg");
}

#[test]
fn test_sleep_and_steps_are_day_scoped() {
    let dir = TempDir::new().unwrap();
    let (_, health) = open(&dir);

    health.save_sleep("7.5", day(10)).unwrap();
    health.save_manual_steps("8000", day(10)).unwrap();

    let today = health.load(day(10)).unwrap();
    assert_eq!(today.sleep_hours, Some(7.5));
    assert_eq!(today.step_count, 8000);

    let tomorrow = health.load(day(11)).unwrap();
    assert_eq!(tomorrow.sleep_hours, None);
    assert_eq!(tomorrow.step_count, 0);
}

#[test]
fn test_out_of_range_values_rejected() {
    let dir = TempDir::new().unwrap();
    let (_, health) = open(&dir);

    assert!(matches!(
        health.save_sleep("25", day(10)),
        Err(AppError::Validation(ValidationError::OutOfRange { .. }))
    ));
    assert!(matches!(
        health.save_manual_steps("-3", day(10)),
        Err(AppError::Validation(ValidationError::OutOfRange { .. }))
    ));
    assert!(matches!(
        health.save_weight("   "),
        Err(AppError::Validation(ValidationError::Empty { .. }))
    ));
}
