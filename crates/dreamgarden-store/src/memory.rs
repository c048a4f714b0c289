use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use dreamgarden_types::models::{Alarm, ChatMessage, Rewards, SleepRecord, User};

use crate::error::{Result, StoreError};
use crate::models::{AlarmPatch, NewAlarm, NewSleepRecord, NewUser};
use crate::Store;

/// In-process store. Every collection sits behind one mutex so multi-step
/// writes (duplicate check + insert + wallet credit) are a single critical
/// section.
pub struct MemStore {
    state: Mutex<Collections>,
}

#[derive(Default)]
struct Collections {
    users: HashMap<Uuid, User>,
    alarms: HashMap<u64, Alarm>,
    sleep_records: HashMap<u64, SleepRecord>,
    chat_messages: HashMap<u64, ChatMessage>,
    alarm_ids: IdSequence,
    sleep_record_ids: IdSequence,
    chat_message_ids: IdSequence,
}

/// Monotonic id source, starting at 1.
struct IdSequence(u64);

impl Default for IdSequence {
    fn default() -> Self {
        Self(1)
    }
}

impl IdSequence {
    fn next(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Collections::default()),
        }
    }

    fn with_state<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Collections) -> Result<T>,
    {
        let mut state = self
            .state
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        f(&mut state)
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Collections {
    fn require_user(&self, id: Uuid) -> Result<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::user_not_found(id))
        }
    }

    fn push_chat_message(
        &mut self,
        user_id: Uuid,
        message: String,
        is_from_user: bool,
        created_at: DateTime<Utc>,
    ) -> ChatMessage {
        let msg = ChatMessage {
            id: self.chat_message_ids.next(),
            user_id,
            message,
            is_from_user,
            created_at,
        };
        self.chat_messages.insert(msg.id, msg.clone());
        msg
    }
}

impl Store for MemStore {
    // -- Users --

    fn create_user(&self, new: NewUser) -> Result<User> {
        self.with_state(|state| {
            if state.users.values().any(|u| u.username == new.username) {
                return Err(StoreError::UsernameTaken(new.username));
            }

            let user = User {
                id: Uuid::new_v4(),
                username: new.username,
                password: new.password,
                dewdrops: new.dewdrops,
                sunlight: new.sunlight,
                created_at: Utc::now(),
            };
            state.users.insert(user.id, user.clone());
            debug!("Created user {} ({})", user.username, user.id);
            Ok(user)
        })
    }

    fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        self.with_state(|state| Ok(state.users.get(&id).cloned()))
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.with_state(|state| {
            Ok(state.users.values().find(|u| u.username == username).cloned())
        })
    }

    // -- Alarms --

    fn list_alarms(&self, user_id: Uuid) -> Result<Vec<Alarm>> {
        self.with_state(|state| {
            let mut alarms: Vec<Alarm> = state
                .alarms
                .values()
                .filter(|a| a.user_id == user_id)
                .cloned()
                .collect();
            alarms.sort_by_key(|a| a.id);
            Ok(alarms)
        })
    }

    fn get_alarm(&self, id: u64) -> Result<Option<Alarm>> {
        self.with_state(|state| Ok(state.alarms.get(&id).cloned()))
    }

    fn create_alarm(&self, user_id: Uuid, new: NewAlarm) -> Result<Alarm> {
        self.with_state(|state| {
            state.require_user(user_id)?;

            let alarm = Alarm {
                id: state.alarm_ids.next(),
                user_id,
                time: new.time,
                days: new.days,
                note: new.note,
                is_active: new.is_active,
                created_at: Utc::now(),
            };
            state.alarms.insert(alarm.id, alarm.clone());
            Ok(alarm)
        })
    }

    fn update_alarm(&self, id: u64, patch: AlarmPatch) -> Result<Alarm> {
        self.with_state(|state| {
            let alarm = state
                .alarms
                .get_mut(&id)
                .ok_or_else(|| StoreError::alarm_not_found(id))?;

            if let Some(time) = patch.time {
                alarm.time = time;
            }
            if let Some(days) = patch.days {
                alarm.days = days;
            }
            if let Some(note) = patch.note {
                alarm.note = note;
            }
            if let Some(is_active) = patch.is_active {
                alarm.is_active = is_active;
            }

            Ok(alarm.clone())
        })
    }

    fn delete_alarm(&self, id: u64) -> Result<bool> {
        self.with_state(|state| Ok(state.alarms.remove(&id).is_some()))
    }

    // -- Sleep records --

    fn list_sleep_records(&self, user_id: Uuid, limit: Option<usize>) -> Result<Vec<SleepRecord>> {
        self.with_state(|state| {
            let mut records: Vec<SleepRecord> = state
                .sleep_records
                .values()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect();
            records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
            if let Some(limit) = limit.filter(|&n| n > 0) {
                records.truncate(limit);
            }
            Ok(records)
        })
    }

    fn get_sleep_record(&self, id: u64) -> Result<Option<SleepRecord>> {
        self.with_state(|state| Ok(state.sleep_records.get(&id).cloned()))
    }

    fn get_sleep_record_by_date(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<SleepRecord>> {
        self.with_state(|state| {
            Ok(state
                .sleep_records
                .values()
                .find(|r| r.user_id == user_id && r.date == date)
                .cloned())
        })
    }

    fn create_sleep_record(
        &self,
        user_id: Uuid,
        new: NewSleepRecord,
        rewards: Rewards,
    ) -> Result<(SleepRecord, User)> {
        self.with_state(|state| {
            state.require_user(user_id)?;

            // Both checks run before the first write.
            if state
                .sleep_records
                .values()
                .any(|r| r.user_id == user_id && r.date == new.date)
            {
                return Err(StoreError::DuplicateSleepDate { date: new.date });
            }

            let record = SleepRecord {
                id: state.sleep_record_ids.next(),
                user_id,
                date: new.date,
                rating: new.rating,
                journal: new.journal,
                wake_up_time: new.wake_up_time,
                dewdrops_earned: rewards.dewdrops,
                sunlight_earned: rewards.sunlight,
                created_at: Utc::now(),
            };
            state.sleep_records.insert(record.id, record.clone());

            let user = state
                .users
                .get_mut(&user_id)
                .ok_or_else(|| StoreError::user_not_found(user_id))?;
            user.dewdrops = user.dewdrops.saturating_add(rewards.dewdrops);
            user.sunlight = user.sunlight.saturating_add(rewards.sunlight);

            Ok((record, user.clone()))
        })
    }

    // -- Chat --

    fn list_chat_messages(&self, user_id: Uuid, limit: Option<usize>) -> Result<Vec<ChatMessage>> {
        self.with_state(|state| {
            let mut messages: Vec<ChatMessage> = state
                .chat_messages
                .values()
                .filter(|m| m.user_id == user_id)
                .cloned()
                .collect();
            messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            if let Some(limit) = limit.filter(|&n| n > 0) {
                let skip = messages.len().saturating_sub(limit);
                messages.drain(..skip);
            }
            Ok(messages)
        })
    }

    fn get_chat_message(&self, id: u64) -> Result<Option<ChatMessage>> {
        self.with_state(|state| Ok(state.chat_messages.get(&id).cloned()))
    }

    fn create_chat_message(&self, user_id: Uuid, message: String, is_from_user: bool) -> Result<ChatMessage> {
        self.with_state(|state| {
            state.require_user(user_id)?;
            Ok(state.push_chat_message(user_id, message, is_from_user, Utc::now()))
        })
    }

    fn create_chat_exchange(
        &self,
        user_id: Uuid,
        message: String,
        reply: String,
    ) -> Result<(ChatMessage, ChatMessage)> {
        self.with_state(|state| {
            state.require_user(user_id)?;

            let sent = state.push_chat_message(user_id, message, true, Utc::now());
            // Wall clocks can step backwards; the reply must never sort first.
            let reply_at = Utc::now().max(sent.created_at);
            let answered = state.push_chat_message(user_id, reply, false, reply_at);

            Ok((sent, answered))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dreamgarden_types::Rating;

    use super::*;

    fn store_with_user() -> (MemStore, User) {
        let store = MemStore::new();
        let user = store.create_user(NewUser::new("mali", "secret")).unwrap();
        (store, user)
    }

    fn night(date: &str, rating: i64) -> NewSleepRecord {
        NewSleepRecord {
            date: date.parse().unwrap(),
            rating: Rating::new(rating).unwrap(),
            journal: None,
            wake_up_time: None,
        }
    }

    fn alarm(time: &str) -> NewAlarm {
        NewAlarm {
            time: time.into(),
            days: [false, true, true, true, true, true, false],
            note: None,
            is_active: true,
        }
    }

    #[test]
    fn usernames_are_unique() {
        let (store, _) = store_with_user();
        let err = store.create_user(NewUser::new("mali", "other")).unwrap_err();
        assert!(matches!(err, StoreError::UsernameTaken(name) if name == "mali"));
    }

    #[test]
    fn lookup_by_username() {
        let (store, user) = store_with_user();
        let found = store.get_user_by_username("mali").unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.get_user_by_username("nobody").unwrap().is_none());
    }

    #[test]
    fn alarm_ids_are_monotonic() {
        let (store, user) = store_with_user();
        let a = store.create_alarm(user.id, alarm("07:00")).unwrap();
        let b = store.create_alarm(user.id, alarm("22:30")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        assert!(store.delete_alarm(b.id).unwrap());
        let c = store.create_alarm(user.id, alarm("06:15")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn alarm_for_unknown_user_is_rejected() {
        let store = MemStore::new();
        let err = store.create_alarm(Uuid::new_v4(), alarm("07:00")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "user", .. }));
    }

    #[test]
    fn update_alarm_merges_only_given_fields() {
        let (store, user) = store_with_user();
        let created = store.create_alarm(user.id, alarm("07:00")).unwrap();

        let updated = store
            .update_alarm(
                created.id,
                AlarmPatch {
                    is_active: Some(false),
                    note: Some(Some("gym".into())),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.time, "07:00");
        assert_eq!(updated.days, created.days);
        assert_eq!(updated.note.as_deref(), Some("gym"));
        assert!(!updated.is_active);
        assert_eq!(store.get_alarm(created.id).unwrap().unwrap(), updated);

        let cleared = store
            .update_alarm(
                created.id,
                AlarmPatch {
                    note: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(cleared.note, None);
        assert!(!cleared.is_active);
    }

    #[test]
    fn update_and_delete_missing_alarm() {
        let store = MemStore::new();
        let err = store.update_alarm(42, AlarmPatch::default()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "alarm", .. }));
        assert!(!store.delete_alarm(42).unwrap());
    }

    #[test]
    fn alarms_are_scoped_to_owner() {
        let (store, user) = store_with_user();
        let other = store.create_user(NewUser::new("somchai", "pw")).unwrap();
        store.create_alarm(user.id, alarm("07:00")).unwrap();
        store.create_alarm(other.id, alarm("08:00")).unwrap();

        let mine = store.list_alarms(user.id).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].time, "07:00");
    }

    #[test]
    fn sleep_record_credits_wallet() {
        let (store, user) = store_with_user();
        let rewards = Rewards { dewdrops: 8, sunlight: 4 };

        let (record, updated) = store
            .create_sleep_record(user.id, night("2025-07-26", 4), rewards)
            .unwrap();

        assert_eq!(record.dewdrops_earned, 8);
        assert_eq!(record.sunlight_earned, 4);
        assert_eq!(updated.dewdrops, 8);
        assert_eq!(updated.sunlight, 4);
        assert_eq!(store.get_sleep_record(record.id).unwrap().unwrap(), record);
    }

    #[test]
    fn duplicate_date_leaves_everything_untouched() {
        let (store, user) = store_with_user();
        let rewards = Rewards { dewdrops: 10, sunlight: 5 };
        store
            .create_sleep_record(user.id, night("2025-07-26", 5), rewards)
            .unwrap();

        let err = store
            .create_sleep_record(user.id, night("2025-07-26", 3), Rewards { dewdrops: 6, sunlight: 3 })
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSleepDate { .. }));

        let user = store.get_user(user.id).unwrap().unwrap();
        assert_eq!((user.dewdrops, user.sunlight), (10, 5));
        assert_eq!(store.list_sleep_records(user.id, None).unwrap().len(), 1);

        // The id sequence is not consumed by a rejected insert.
        let (next, _) = store
            .create_sleep_record(user.id, night("2025-07-27", 3), Rewards::default())
            .unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn same_date_for_different_users_is_fine() {
        let (store, user) = store_with_user();
        let other = store.create_user(NewUser::new("somchai", "pw")).unwrap();
        store
            .create_sleep_record(user.id, night("2025-07-26", 5), Rewards::default())
            .unwrap();
        store
            .create_sleep_record(other.id, night("2025-07-26", 2), Rewards::default())
            .unwrap();
    }

    #[test]
    fn sleep_records_sort_newest_first_with_limit() {
        let (store, user) = store_with_user();
        for date in ["2025-07-24", "2025-07-26", "2025-07-25"] {
            store
                .create_sleep_record(user.id, night(date, 3), Rewards::default())
                .unwrap();
        }

        let dates: Vec<String> = store
            .list_sleep_records(user.id, Some(2))
            .unwrap()
            .iter()
            .map(|r| r.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2025-07-26", "2025-07-25"]);
        assert_eq!(store.list_sleep_records(user.id, Some(0)).unwrap().len(), 3);
        assert_eq!(
            store
                .get_sleep_record_by_date(user.id, "2025-07-24".parse().unwrap())
                .unwrap()
                .map(|r| r.id),
            Some(1)
        );
    }

    #[test]
    fn concurrent_same_date_submissions_admit_one() {
        let (store, user) = store_with_user();
        let store = Arc::new(store);
        let user_id = user.id;
        let rewards = Rewards { dewdrops: 10, sunlight: 5 };

        let successes = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    s.spawn(move || {
                        store
                            .create_sleep_record(user_id, night("2025-07-26", 5), rewards)
                            .is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count()
        });

        assert_eq!(successes, 1);
        let user = store.get_user(user_id).unwrap().unwrap();
        assert_eq!((user.dewdrops, user.sunlight), (10, 5));
    }

    #[test]
    fn chat_exchange_keeps_reply_after_message() {
        let (store, user) = store_with_user();
        let (sent, reply) = store
            .create_chat_exchange(user.id, "hello".into(), "hi there".into())
            .unwrap();

        assert!(sent.is_from_user);
        assert!(!reply.is_from_user);
        assert_eq!(reply.user_id, user.id);
        assert!(reply.created_at >= sent.created_at);
        assert_eq!(reply.id, sent.id + 1);

        let history = store.list_chat_messages(user.id, None).unwrap();
        assert_eq!(history, vec![sent, reply]);
    }

    #[test]
    fn chat_limit_keeps_most_recent() {
        let (store, user) = store_with_user();
        for i in 0..5 {
            store
                .create_chat_message(user.id, format!("message {i}"), true)
                .unwrap();
        }

        let tail = store.list_chat_messages(user.id, Some(2)).unwrap();
        let texts: Vec<&str> = tail.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["message 3", "message 4"]);
        assert_eq!(store.list_chat_messages(user.id, Some(0)).unwrap().len(), 5);
        assert_eq!(store.get_chat_message(1).unwrap().unwrap().message, "message 0");
    }
}
