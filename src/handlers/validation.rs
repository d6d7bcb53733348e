use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::domain::ValidationRequest;
use crate::error::AppError;
use crate::validation::validate_request;
use crate::AppState;

pub async fn validate_transaction(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection.body_text(), "Invalid validation request");
        AppError::BadRequest(rejection.body_text())
    })?;

    if let Err(e) = validate_request(&request) {
        tracing::error!(
            transaction_id = %request.transaction_id,
            error = %e,
            "Invalid validation request"
        );
        return Err(e.into());
    }

    let result = state.service.validate_transaction(&request).await?;

    Ok(Json(result))
}

pub async fn get_validation_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .service
        .get_validation_result(&id)
        .await
        .map_err(|e| {
            tracing::warn!(validation_id = %id, error = %e, "Failed to retrieve validation result");
            e
        })?;

    Ok(Json(result))
}
