mod error;
mod health;
mod link;

pub use error::ErrorResponse;
pub use health::{HealthResponse, WelcomeResponse, WELCOME_MESSAGE};
pub use link::LinkPayload;
