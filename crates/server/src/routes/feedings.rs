use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use models::feeding;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

pub const FEEDINGS_PATH: &str = "/api/feedings";

#[utoipa::path(
    get, path = "/api/feedings", tag = "feedings",
    responses(
        (status = 200, description = "All feedings ordered by id", body = [crate::openapi::FeedingDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<feeding::Model>>, JsonApiError> {
    let rows = state.feedings.list().await?;
    info!(count = rows.len(), "list feedings");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/api/feedings/{id}", tag = "feedings",
    params(("id" = i32, Path, description = "Feeding ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::FeedingDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<feeding::Model>, JsonApiError> {
    Ok(Json(state.feedings.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/feedings", tag = "feedings",
    request_body = crate::openapi::FeedingDoc,
    responses(
        (status = 201, description = "Created; Location points at the new record", body = crate::openapi::FeedingDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<feeding::Model>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<feeding::Model>), JsonApiError> {
    let created = state.feedings.create(input).await?;
    let location = format!("{}/{}", FEEDINGS_PATH, created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/feedings/{id}", tag = "feedings",
    params(("id" = i32, Path, description = "Feeding ID")),
    request_body = crate::openapi::FeedingDoc,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Body id does not match path id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Replace Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<feeding::Model>,
) -> Result<StatusCode, JsonApiError> {
    state.feedings.replace(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/feedings/{id}", tag = "feedings",
    params(("id" = i32, Path, description = "Feeding ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.feedings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
