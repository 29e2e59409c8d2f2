use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome to the Link Bio API!";

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
