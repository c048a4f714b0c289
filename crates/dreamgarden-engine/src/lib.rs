//! DreamGarden game rules.
//!
//! Everything here is pure: no storage, no clocks, no logging. The only
//! nondeterminism is the chat fallback, and that goes through an injectable
//! `ReplyPicker`.

pub mod chat;
pub mod plant;
pub mod rewards;
pub mod stats;

pub use chat::{ReplyCategory, ReplyPicker, Responder, ThreadRngPicker};
pub use plant::{DEFAULT_WINDOW, derive_plant_state};
pub use rewards::compute_rewards;
pub use stats::sleep_stats;
