use axum::extract::FromRequest;

use crate::error::AppError;

/// [`axum::Json`] with rejections turned into [`AppError::InvalidBody`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
