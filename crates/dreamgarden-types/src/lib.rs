pub mod api;
pub mod models;
pub mod rating;

pub use rating::{InvalidRating, Rating};
