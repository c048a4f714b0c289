use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use dreamgarden_engine::{DEFAULT_WINDOW, Responder, compute_rewards, derive_plant_state, sleep_stats};
use dreamgarden_store::{AlarmPatch, NewAlarm, NewSleepRecord, NewUser, Store};
use dreamgarden_types::Rating;
use dreamgarden_types::api::{
    ChatExchange, CreateAlarmRequest, CreateSleepRecordRequest, SleepRecordCreated,
    UpdateAlarmRequest,
};
use dreamgarden_types::models::{Alarm, ChatMessage, PlantState, SleepRecord, SleepStats, User};

use crate::error::{ApiError, ApiResult};
use crate::validate;

pub const DEFAULT_CHAT_HISTORY: usize = 50;

/// The operations the HTTP layer exposes, over any `Store`.
pub struct GardenService {
    store: Arc<dyn Store>,
    responder: Responder,
    plant_window: usize,
    chat_history: usize,
}

impl GardenService {
    pub fn new(store: Arc<dyn Store>, responder: Responder) -> Self {
        Self {
            store,
            responder,
            plant_window: DEFAULT_WINDOW,
            chat_history: DEFAULT_CHAT_HISTORY,
        }
    }

    pub fn with_plant_window(mut self, window: usize) -> Self {
        self.plant_window = window.max(1);
        self
    }

    pub fn with_chat_history(mut self, limit: usize) -> Self {
        self.chat_history = limit;
        self
    }

    // -- Users --

    pub fn signup(&self, username: &str, password: &str) -> ApiResult<User> {
        let username = validate::non_empty("username", username)?;
        validate::non_empty("password", password)?;
        Ok(self.store.create_user(NewUser::new(username, password))?)
    }

    /// Plaintext comparison; accounts here are demo-only.
    pub fn login(&self, username: &str, password: &str) -> ApiResult<User> {
        self.store
            .get_user_by_username(username.trim())?
            .filter(|user| user.password == password)
            .ok_or_else(|| ApiError::Unauthorized("invalid username or password".into()))
    }

    pub fn user(&self, user_id: Uuid) -> ApiResult<User> {
        self.store
            .get_user(user_id)?
            .ok_or_else(|| ApiError::NotFound(format!("user {user_id} not found")))
    }

    // -- Alarms --

    pub fn alarms(&self, user_id: Uuid) -> ApiResult<Vec<Alarm>> {
        Ok(self.store.list_alarms(user_id)?)
    }

    pub fn create_alarm(&self, user_id: Uuid, req: CreateAlarmRequest) -> ApiResult<Alarm> {
        let new = NewAlarm {
            time: validate::clock_time(&req.time)?,
            days: validate::week_days(&req.days)?,
            note: req.note,
            is_active: req.is_active,
        };
        Ok(self.store.create_alarm(user_id, new)?)
    }

    pub fn update_alarm(&self, user_id: Uuid, id: u64, req: UpdateAlarmRequest) -> ApiResult<Alarm> {
        let patch = AlarmPatch {
            time: req.time.as_deref().map(validate::clock_time).transpose()?,
            days: req.days.as_deref().map(validate::week_days).transpose()?,
            note: req.note,
            is_active: req.is_active,
        };
        self.owned_alarm(user_id, id)?;
        Ok(self.store.update_alarm(id, patch)?)
    }

    pub fn delete_alarm(&self, user_id: Uuid, id: u64) -> ApiResult<()> {
        self.owned_alarm(user_id, id)?;
        if self.store.delete_alarm(id)? {
            Ok(())
        } else {
            Err(alarm_not_found(id))
        }
    }

    // Someone else's alarm looks exactly like a missing one.
    fn owned_alarm(&self, user_id: Uuid, id: u64) -> ApiResult<Alarm> {
        self.store
            .get_alarm(id)?
            .filter(|alarm| alarm.user_id == user_id)
            .ok_or_else(|| alarm_not_found(id))
    }

    // -- Sleep records --

    pub fn sleep_records(&self, user_id: Uuid, limit: Option<usize>) -> ApiResult<Vec<SleepRecord>> {
        Ok(self.store.list_sleep_records(user_id, limit)?)
    }

    /// Stores the night and credits its rewards in one step. A second record
    /// for the same date is a conflict and changes nothing.
    pub fn create_sleep_record(
        &self,
        user_id: Uuid,
        req: CreateSleepRecordRequest,
    ) -> ApiResult<SleepRecordCreated> {
        let rating = Rating::new(req.rating)?;
        let new = NewSleepRecord {
            date: validate::date(&req.date)?,
            rating,
            journal: req.journal,
            wake_up_time: req.wake_up_time.as_deref().map(validate::clock_time).transpose()?,
        };

        let (record, user) = self
            .store
            .create_sleep_record(user_id, new, compute_rewards(rating))?;
        Ok(SleepRecordCreated { record, user })
    }

    pub fn sleep_stats(&self, user_id: Uuid, today: NaiveDate) -> ApiResult<SleepStats> {
        let records = self.store.list_sleep_records(user_id, None)?;
        Ok(sleep_stats(&records, today))
    }

    pub fn current_plant_state(&self, user_id: Uuid) -> ApiResult<PlantState> {
        let recent = self
            .store
            .list_sleep_records(user_id, Some(self.plant_window))?;
        Ok(derive_plant_state(&recent, self.plant_window))
    }

    // -- Chat --

    /// `None` falls back to the configured history length.
    pub fn chat_messages(&self, user_id: Uuid, limit: Option<usize>) -> ApiResult<Vec<ChatMessage>> {
        let limit = limit.unwrap_or(self.chat_history);
        Ok(self.store.list_chat_messages(user_id, Some(limit))?)
    }

    pub fn post_chat_message(&self, user_id: Uuid, text: &str) -> ApiResult<ChatExchange> {
        validate::non_empty("message", text)?;
        let reply = self.responder.respond(text);
        let (user_message, ai_message) =
            self.store
                .create_chat_exchange(user_id, text.to_string(), reply)?;
        Ok(ChatExchange {
            user_message,
            ai_message,
        })
    }
}

fn alarm_not_found(id: u64) -> ApiError {
    ApiError::NotFound(format!("alarm {id} not found"))
}
