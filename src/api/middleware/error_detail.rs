//! Internal error reporting middleware.
//!
//! Every `500` produced by [`AppError::Internal`](crate::error::AppError)
//! carries an [`InternalErrorDetail`] extension. This layer logs it and,
//! outside production, adds it to the body as `message`.

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::{INTERNAL_ERROR_MESSAGE, InternalErrorDetail};
use crate::state::AppState;

pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;

    let Some(InternalErrorDetail(detail)) = response.extensions_mut().remove::<InternalErrorDetail>()
    else {
        return response;
    };

    tracing::error!(%method, %path, error = %detail, "Request failed");

    if !st.expose_error_details {
        return response;
    }

    (
        response.status(),
        Json(json!({
            "error": INTERNAL_ERROR_MESSAGE,
            "message": detail,
        })),
    )
        .into_response()
}
