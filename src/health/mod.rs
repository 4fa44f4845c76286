//! Local health tracking: weight, water, sleep and manual steps.

pub mod date;
pub mod input;
mod record;
mod store;

pub use date::{day_key, is_current};
pub use record::HealthRecord;
pub use store::{
    HealthStore, SLEEP_DATE_KEY, SLEEP_KEY, STEPS_DATE_KEY, STEPS_KEY, WATER_DATE_KEY, WATER_INCREMENT,
    WATER_KEY, WEIGHT_KEY,
};
