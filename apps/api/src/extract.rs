//! Request extractors that report rejections through `AppError`.

use axum::extract::FromRequest;

/// `axum::Json` whose rejection is an `AppError::Validation`, so malformed bodies get
/// the same error envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(crate::errors::AppError))]
pub struct AppJson<T>(pub T);
