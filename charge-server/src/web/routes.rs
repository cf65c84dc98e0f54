//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::optimizer::{RouteError, RouteOptimizer, parse_point, parse_waypoint_list};
use crate::proximity::{SearchOutcome, search};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/", get(list_stations))
        .route("/api/directions", get(get_directions))
        .route("/api/directions/", get(get_directions))
        .route("/api/optimize-route", get(optimize_route))
        .route("/api/optimize-route/", get(optimize_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the station map.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        station_count: state.catalog.len().await,
    };
    let html = template.render().map_err(|e| {
        error!(error = %e, "failed to render index page");
        AppError::Internal {
            message: format!("Template error: {e}"),
        }
    })?;
    Ok(Html(html))
}

/// Search stations: a ranked list, every match, or heatmap positions.
async fn list_stations(
    State(state): State<AppState>,
    Query(params): Query<StationSearchParams>,
) -> Result<Response, AppError> {
    let query = params
        .to_query()
        .map_err(|message| AppError::BadRequest { message })?;

    let stations = state.catalog.snapshot().await;

    match search(&stations, &query) {
        SearchOutcome::Heatmap(points) => Ok(Json(HeatmapResponse::new(points)).into_response()),
        SearchOutcome::Stations(ranked) => {
            let results: Vec<StationResult> =
                ranked.iter().map(StationResult::from_ranked).collect();
            Ok(Json(results).into_response())
        }
    }
}

/// Driving directions from the user to a station.
async fn get_directions(
    State(state): State<AppState>,
    Query(params): Query<DirectionsParams>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin = parse_point(params.user_lat.as_deref(), params.user_lon.as_deref())?;
    let destination = parse_point(params.station_lat.as_deref(), params.station_lon.as_deref())?;

    let result = RouteOptimizer::new(state.provider.as_ref())
        .directions(origin, destination)
        .await?;

    Ok(Json(result.into()))
}

/// Route from the user through several stations to a destination, in the
/// visiting order the provider finds shortest.
async fn optimize_route(
    State(state): State<AppState>,
    Query(params): Query<OptimizeParams>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin = parse_point(params.user_lat.as_deref(), params.user_lon.as_deref())?;
    let destination = parse_point(
        params.destination_lat.as_deref(),
        params.destination_lon.as_deref(),
    )?;
    let waypoints = parse_waypoint_list(params.waypoints.as_deref())?;

    let result = RouteOptimizer::new(state.provider.as_ref())
        .optimize(origin, destination, waypoints)
        .await?;

    Ok(Json(result.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::InvalidInput(message) => AppError::BadRequest { message },
            RouteError::NoRouteFound(message) => AppError::NotFound { message },
            RouteError::Provider(e) => {
                error!(error = ?e, "routing provider failed");
                AppError::Internal {
                    message: format!("Routing provider error: {e}"),
                }
            }
            RouteError::Unexpected(message) => {
                error!(%message, "unexpected routing failure");
                AppError::Internal {
                    message: format!("Unexpected error: {message}"),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Server errors are logged where they are raised
        if !status.is_server_error() {
            debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
