use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Service-wide response envelope.
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

/// Successful payload plus status code; wraps the data in the envelope.
pub struct ApiSuccess<T>(pub T, pub StatusCode, pub &'static str);

impl<T> IntoResponse for ApiSuccess<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let ApiSuccess(data, code, message) = self;
        let body = ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        };
        (code, Json(body)).into_response()
    }
}

pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(message, code) = self;
        let body = ApiResponse::<()> {
            status: "error".to_string(),
            message,
            data: None,
        };
        (code, Json(body)).into_response()
    }
}
