//! JSON API for the finder frontend

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::{
    PathfinderError,
    catalog::Catalog,
    directions::DirectionsLink,
    location_query::{LocationQuery, QueryKind},
    models::{Destination, Trailhead, TravelMode},
    state::{AppState, Swipe, View},
};

/// Shared handler state: the immutable catalog and the kiosk UI state
#[derive(Debug, Clone)]
pub struct AppContext {
    pub catalog: Arc<Catalog>,
    pub state: Arc<RwLock<AppState>>,
}

impl AppContext {
    pub fn new(catalog: Catalog, state: AppState) -> Self {
        Self {
            catalog: Arc::new(catalog),
            state: Arc::new(RwLock::new(state)),
        }
    }
}

/// Error body returned by every handler
#[derive(Debug)]
pub struct ApiError(PathfinderError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<PathfinderError> for ApiError {
    fn from(err: PathfinderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PathfinderError::Validation { .. } => StatusCode::BAD_REQUEST,
            PathfinderError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }
        let body = ErrorBody {
            error: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct DirectionsParams {
    pub query: String,
    pub mode: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub url: String,
    pub kind: QueryKind,
    pub mode: TravelMode,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: View,
}

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub view: View,
    pub mode: TravelMode,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub view: View,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    pub start_x: f64,
    pub end_x: f64,
}

pub fn router(context: AppContext) -> Router {
    Router::new()
        .route("/directions", get(get_directions))
        .route("/destinations", get(get_destinations))
        .route("/trailheads", get(get_trailheads))
        .route("/state", get(get_state))
        .route("/state/view", post(set_view))
        .route("/state/mode", post(set_mode))
        .route("/state/select", post(select_place))
        .route("/state/qr", post(toggle_qr))
        .route("/state/swipe", post(swipe))
        .with_state(context)
}

#[instrument(skip_all)]
async fn get_directions(Query(params): Query<DirectionsParams>) -> ApiResult<DirectionsResponse> {
    let mode = match params.mode.as_deref() {
        Some(mode) => mode.parse::<TravelMode>()?,
        None => TravelMode::Walking,
    };
    debug!(query = %params.query, %mode, "Building directions link");
    let query = LocationQuery::classify(&params.query);
    let kind = query.kind();
    let url = DirectionsLink::for_query(&query, mode);

    Ok(Json(DirectionsResponse {
        url: url.into_string(),
        kind,
        mode,
    }))
}

async fn get_destinations(State(ctx): State<AppContext>) -> Json<Vec<Destination>> {
    Json(ctx.catalog.destinations().to_vec())
}

async fn get_trailheads(State(ctx): State<AppContext>) -> Json<Vec<Trailhead>> {
    Json(ctx.catalog.trailheads().to_vec())
}

async fn get_state(State(ctx): State<AppContext>) -> Json<AppState> {
    Json(ctx.state.read().await.clone())
}

#[instrument(skip_all)]
async fn set_view(
    State(ctx): State<AppContext>,
    Json(req): Json<ViewRequest>,
) -> Json<AppState> {
    let mut state = ctx.state.write().await;
    state.set_view(req.view);
    Json(state.clone())
}

#[instrument(skip_all)]
async fn set_mode(
    State(ctx): State<AppContext>,
    Json(req): Json<ModeRequest>,
) -> Json<AppState> {
    let mut state = ctx.state.write().await;
    state.set_travel_mode(req.view, req.mode);
    Json(state.clone())
}

#[instrument(skip_all)]
async fn select_place(
    State(ctx): State<AppContext>,
    Json(req): Json<SelectRequest>,
) -> ApiResult<AppState> {
    debug!(view = ?req.view, name = %req.name, "Selecting place");
    let mut state = ctx.state.write().await;
    state.select(&ctx.catalog, req.view, &req.name)?;
    Ok(Json(state.clone()))
}

async fn toggle_qr(State(ctx): State<AppContext>) -> Json<AppState> {
    let mut state = ctx.state.write().await;
    state.toggle_qr_code();
    Json(state.clone())
}

#[instrument(skip_all)]
async fn swipe(State(ctx): State<AppContext>, Json(req): Json<SwipeRequest>) -> Json<AppState> {
    let mut state = ctx.state.write().await;
    if let Some(swipe) = Swipe::from_touch(req.start_x, req.end_x) {
        state.apply_swipe(swipe);
    }
    Json(state.clone())
}
