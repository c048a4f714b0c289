use uuid::Uuid;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("sleep record already exists for {date}")]
    DuplicateSleepDate { date: chrono::NaiveDate },

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

impl StoreError {
    pub fn user_not_found(id: Uuid) -> Self {
        Self::NotFound { entity: "user", id: id.to_string() }
    }

    pub fn alarm_not_found(id: u64) -> Self {
        Self::NotFound { entity: "alarm", id: id.to_string() }
    }
}
