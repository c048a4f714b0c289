use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{ChatMessage, SleepRecord, User};

// -- Users --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// -- Alarms --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlarmRequest {
    pub time: String,
    /// Must hold exactly seven entries, Sunday first.
    pub days: Vec<bool>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlarmRequest {
    pub time: Option<String>,
    pub days: Option<Vec<bool>>,
    /// Absent keeps the note, `null` clears it.
    #[serde(default, deserialize_with = "nullable")]
    pub note: Option<Option<String>>,
    pub is_active: Option<bool>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// -- Sleep records --

/// Currency fields sent by older clients are ignored; rewards are always
/// derived from the rating.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSleepRecordRequest {
    /// "YYYY-MM-DD"
    pub date: String,
    pub rating: i64,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub wake_up_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SleepRecordCreated {
    pub record: SleepRecord,
    pub user: User,
}

// -- Chat --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendChatMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub ai_message: ChatMessage,
}

// -- Shared --

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
