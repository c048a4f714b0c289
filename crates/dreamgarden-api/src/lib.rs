pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod validate;

use std::sync::Arc;

pub use error::ApiError;
pub use routes::router;
pub use service::GardenService;

pub type AppState = Arc<GardenService>;
