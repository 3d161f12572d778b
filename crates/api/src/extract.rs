//! Request body extraction with rejections in the API error format.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor and response wrapper.
///
/// Behaves like [`axum::Json`], but a body that is missing, malformed or
/// lacks a required field is rejected through [`AppError`] as a 400
/// `VALIDATION_ERROR` instead of axum's plain-text 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
