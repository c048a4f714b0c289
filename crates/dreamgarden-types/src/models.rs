use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Rating;

/// Days of the week an alarm rings on, indexed Sunday through Saturday.
pub type WeekDays = [bool; 7];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Plaintext, demo-only. Never leaves the server.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub dewdrops: u32,
    pub sunlight: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    pub id: u64,
    pub user_id: Uuid,
    /// "HH:MM"
    pub time: String,
    pub days: WeekDays,
    pub note: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    pub id: u64,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub rating: Rating,
    pub journal: Option<String>,
    /// "HH:MM"
    pub wake_up_time: Option<String>,
    pub dewdrops_earned: u32,
    pub sunlight_earned: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub user_id: Uuid,
    pub message: String,
    pub is_from_user: bool,
    pub created_at: DateTime<Utc>,
}

/// Currency earned for a single sleep rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rewards {
    pub dewdrops: u32,
    pub sunlight: u32,
}

/// Ordered from healthiest to sickest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantHealth {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

/// Only `Bamboo` is grown today; the other kinds exist so the wire type
/// matches what clients already accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    #[default]
    Bamboo,
    Lotus,
    Bonsai,
    Cherry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantState {
    pub health: PlantHealth,
    /// 0..=100
    pub growth: u8,
    #[serde(rename = "type")]
    pub plant_type: PlantType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepStats {
    pub average_rating: f64,
    pub streak_days: u32,
    pub total_records: usize,
}
