use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Provider;
use crate::services::slug::slugify;
use crate::state::AppState;

// GET /api/providers
#[derive(Deserialize)]
pub struct ProvidersQuery {
    pub service: Option<String>,
}

pub async fn list_providers(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ProvidersQuery>,
) -> Json<Vec<Provider>> {
    let caller = state.identity.identify(&headers).await;

    // The filter accepts either a slug or a human-readable service name.
    // An empty value means no filter.
    let slug = query
        .service
        .as_deref()
        .map(slugify)
        .filter(|s| !s.is_empty());
    let providers = state.store.list_providers(slug.as_deref());

    tracing::debug!(caller = %caller, count = providers.len(), "listed providers");
    Json(providers)
}

// GET /api/providers/:id
pub async fn get_provider(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Provider>, AppError> {
    let provider = state
        .store
        .get_provider(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))?;

    Ok(Json(provider))
}
