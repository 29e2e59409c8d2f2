use crate::error::Result;
use crate::extract::AppJson;
use crate::model::LinkPayload;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use linkbio_core::{Link, LinkId};
use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn list_links_handler(State(state): State<AppState>) -> Result<Json<Vec<Link>>> {
    let links = state.repository().list_all().await?;
    Ok(Json(links))
}

#[instrument(skip_all)]
pub async fn create_link_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LinkPayload>,
) -> Result<(StatusCode, Json<Link>)> {
    let link = payload.into_new_link()?;
    let created = state.repository().create(link).await?;
    info!(id = %created.id, "link created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state))]
pub async fn get_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Link>> {
    let id: LinkId = id.parse()?;
    let link = state.repository().get_by_id(id).await?;
    Ok(Json(link))
}

#[instrument(skip(state, payload))]
pub async fn update_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<LinkPayload>,
) -> Result<Json<Link>> {
    let id: LinkId = id.parse()?;
    let link = payload.into_new_link()?;
    let updated = state.repository().update(id, link).await?;
    info!(%id, "link updated");
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    let id: LinkId = id.parse()?;
    state.repository().delete(id).await?;
    info!(%id, "link deleted");
    Ok(StatusCode::NO_CONTENT)
}
