pub mod alarms;
pub mod chat;
pub mod garden;
pub mod sleep;
pub mod users;
