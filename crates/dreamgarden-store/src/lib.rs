pub mod error;
pub mod memory;
pub mod models;

use chrono::NaiveDate;
use uuid::Uuid;

use dreamgarden_types::models::{Alarm, ChatMessage, Rewards, SleepRecord, User};

pub use error::{Result, StoreError};
pub use memory::MemStore;
pub use models::{AlarmPatch, NewAlarm, NewSleepRecord, NewUser};

/// Record storage for every collection the app keeps.
///
/// Implementations must make `create_sleep_record` and `create_chat_exchange`
/// behave as single atomic steps: either every write lands or none does.
pub trait Store: Send + Sync {
    // -- Users --

    fn create_user(&self, new: NewUser) -> Result<User>;

    fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    // -- Alarms --

    /// Alarms owned by `user_id`, oldest first.
    fn list_alarms(&self, user_id: Uuid) -> Result<Vec<Alarm>>;

    fn get_alarm(&self, id: u64) -> Result<Option<Alarm>>;

    fn create_alarm(&self, user_id: Uuid, new: NewAlarm) -> Result<Alarm>;

    fn update_alarm(&self, id: u64, patch: AlarmPatch) -> Result<Alarm>;

    /// Returns false when no alarm had that id.
    fn delete_alarm(&self, id: u64) -> Result<bool>;

    // -- Sleep records --

    /// Newest date first; `limit` keeps the most recent entries.
    fn list_sleep_records(&self, user_id: Uuid, limit: Option<usize>) -> Result<Vec<SleepRecord>>;

    fn get_sleep_record(&self, id: u64) -> Result<Option<SleepRecord>>;

    fn get_sleep_record_by_date(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<SleepRecord>>;

    /// Inserts the record and credits `rewards` to the owner's wallet.
    /// Fails with `DuplicateSleepDate` before touching anything if the user
    /// already has a record for that date.
    fn create_sleep_record(
        &self,
        user_id: Uuid,
        new: NewSleepRecord,
        rewards: Rewards,
    ) -> Result<(SleepRecord, User)>;

    // -- Chat --

    /// Oldest first; `limit` keeps the most recent entries.
    fn list_chat_messages(&self, user_id: Uuid, limit: Option<usize>) -> Result<Vec<ChatMessage>>;

    fn get_chat_message(&self, id: u64) -> Result<Option<ChatMessage>>;

    fn create_chat_message(&self, user_id: Uuid, message: String, is_from_user: bool) -> Result<ChatMessage>;

    /// Stores a user message and the assistant reply directly after it.
    fn create_chat_exchange(
        &self,
        user_id: Uuid,
        message: String,
        reply: String,
    ) -> Result<(ChatMessage, ChatMessage)>;
}
