//! Validated inputs accepted by the store.
//! Distinct from the dreamgarden-types API bodies: by the time a value lands
//! here, every field has already been checked by the caller.

use chrono::NaiveDate;

use dreamgarden_types::Rating;
use dreamgarden_types::models::WeekDays;

pub struct NewUser {
    pub username: String,
    pub password: String,
    pub dewdrops: u32,
    pub sunlight: u32,
}

impl NewUser {
    /// A fresh account with an empty wallet.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            dewdrops: 0,
            sunlight: 0,
        }
    }
}

pub struct NewAlarm {
    pub time: String,
    pub days: WeekDays,
    pub note: Option<String>,
    pub is_active: bool,
}

/// Fields left as `None` keep their stored value. `note: Some(None)` clears it.
#[derive(Default)]
pub struct AlarmPatch {
    pub time: Option<String>,
    pub days: Option<WeekDays>,
    pub note: Option<Option<String>>,
    pub is_active: Option<bool>,
}

pub struct NewSleepRecord {
    pub date: NaiveDate,
    pub rating: Rating,
    pub journal: Option<String>,
    pub wake_up_time: Option<String>,
}
