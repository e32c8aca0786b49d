use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::catalog::Recommendation;
use crate::query::{FilterSpec, Page, PageRequest};
use crate::server::AppState;
use crate::user::{PreferencesUpdate, User};
use crate::util::QueryParams;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub saved: bool,
}

/// Build the filter and page request out of the query string:
/// `vibes=a,b&category=Food&distance=3&page=2&limit=10`.
pub fn parse_query(
    params: &QueryParams,
    default_limit: usize,
) -> Result<(FilterSpec, PageRequest), ApiError> {
    let filter = FilterSpec {
        vibes: params.get_list("vibes"),
        max_distance: params.parse::<f64>("distance").map_err(ApiError::BadRequest)?,
        category: params
            .get("category")
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
    };

    let page = params
        .parse::<usize>("page")
        .map_err(ApiError::BadRequest)?
        .unwrap_or(crate::query::pagination::DEFAULT_PAGE);
    let limit = params
        .parse::<usize>("limit")
        .map_err(ApiError::BadRequest)?
        .unwrap_or(default_limit);

    Ok((filter, PageRequest::new(page, limit)))
}

pub async fn list_recommendations(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Page<Recommendation>>, ApiError> {
    let (filter, request) = parse_query(&params, state.config.pagination.default_limit)?;
    let page = state.api.get_recommendations(&filter, request).await?;
    Ok(Json(page))
}

pub async fn get_recommendation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recommendation>, ApiError> {
    Ok(Json(state.api.get_recommendation(&id).await?))
}

pub async fn save_recommendation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    state.api.save_recommendation(&req.user_id, &id).await?;
    Ok(Json(SaveResponse { saved: true }))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let names = state
        .api
        .engine()
        .categories()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(names)
}

pub async fn get_current_user(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    state
        .api
        .get_current_user()
        .await
        .map(Json)
        .ok_or(ApiError::NoUser)
}

pub async fn update_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(update): Json<PreferencesUpdate>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.api.update_preferences(&user_id, update).await?))
}

pub async fn complete_onboarding(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(update): Json<PreferencesUpdate>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.api.complete_onboarding(&user_id, update).await?))
}

pub async fn get_saved_locations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.api.get_saved_locations(&user_id).await?))
}
