//! Client CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiResult;
use crate::models::Client;
use crate::AppState;

/// Client with its document id, for list responses
#[derive(Debug, Serialize)]
pub struct ClientRow {
    pub id: String,
    #[serde(flatten)]
    pub client: Client,
}

/// GET /clients
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<ClientRow>>> {
    let clients = state.lifecycle.list_clients().await?;
    Ok(Json(
        clients
            .into_iter()
            .map(|(id, client)| ClientRow { id, client })
            .collect(),
    ))
}

/// POST /clients
pub async fn create_client(
    State(state): State<AppState>,
    Json(client): Json<Client>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let id = state.lifecycle.create_client(client).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /clients/:id
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(client): Json<Client>,
) -> ApiResult<StatusCode> {
    state.lifecycle.update_client(&id, client).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /clients/:id
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.lifecycle.delete_client(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Build client routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route(
            "/clients/:id",
            axum::routing::put(update_client).delete(delete_client),
        )
}
