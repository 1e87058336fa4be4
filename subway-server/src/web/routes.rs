//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::directory::DirectoryError;
use crate::domain::{ErrorCode, FailureKind, InvalidSection, LineId, StationId};
use crate::network::{PathError, PathFinder};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/:id", get(get_station).delete(delete_station))
        .route("/lines", get(list_lines).post(create_line))
        .route(
            "/lines/:id",
            get(get_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_station),
        )
        .route("/paths", get(shortest_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn create_station(
    State(state): State<AppState>,
    req: Result<Json<CreateStationRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = req?;
    let station = state.directory.create_station(&req.name)?;
    let body = StationResponse::from_station(&station);
    Ok(created(format!("/stations/{}", station.id), body))
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state
        .directory
        .stations()
        .iter()
        .map(StationResponse::from_station)
        .collect();
    Json(stations)
}

async fn get_station(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<StationResponse>, AppError> {
    let Path(id) = id?;
    let station = state.directory.station(StationId(id))?;
    Ok(Json(StationResponse::from_station(&station)))
}

async fn delete_station(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.directory.delete_station(StationId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_line(
    State(state): State<AppState>,
    req: Result<Json<CreateLineRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = req?;
    let line = state.directory.create_line(
        &req.name,
        &req.color,
        StationId(req.up_station_id),
        StationId(req.down_station_id),
        distance(req.distance)?,
    )?;
    let stations = state.directory.stations_on(&line)?;
    let body = LineResponse::from_line(&line, &stations);
    Ok(created(format!("/lines/{}", line.id), body))
}

async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, AppError> {
    let lines = state
        .directory
        .lines()
        .iter()
        .map(|line| -> Result<LineResponse, AppError> {
            let stations = state.directory.stations_on(line)?;
            Ok(LineResponse::from_line(line, &stations))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(lines))
}

async fn get_line(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = id?;
    let line = state.directory.line(LineId(id))?;
    let stations = state.directory.stations_on(&line)?;
    Ok(Json(LineResponse::from_line(&line, &stations)))
}

async fn update_line(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    req: Result<Json<UpdateLineRequest>, JsonRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = id?;
    let Json(req) = req?;
    let line = state
        .directory
        .update_line(LineId(id), &req.name, &req.color)?;
    let stations = state.directory.stations_on(&line)?;
    Ok(Json(LineResponse::from_line(&line, &stations)))
}

async fn delete_line(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.directory.delete_line(LineId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Attach a section to a line.
async fn add_section(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    req: Result<Json<SectionRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(req) = req?;
    let line = state.directory.add_section(
        LineId(id),
        StationId(req.up_station_id),
        StationId(req.down_station_id),
        distance(req.distance)?,
    )?;
    let stations = state.directory.stations_on(&line)?;
    let body = LineResponse::from_line(&line, &stations);
    Ok(created(format!("/lines/{}", line.id), body))
}

/// Remove a station from a line.
async fn remove_station(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    query: Result<Query<RemoveStationQuery>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    let Query(query) = query?;
    state
        .directory
        .remove_station(LineId(id), StationId(query.station_id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Shortest path between two stations across all lines.
async fn shortest_path(
    State(state): State<AppState>,
    query: Result<Query<PathQuery>, QueryRejection>,
) -> Result<Json<PathResponse>, AppError> {
    let Query(query) = query?;
    let finder = PathFinder::new(&state.directory, &state.config);
    let route = finder.find(StationId(query.source), StationId(query.target))?;
    Ok(Json(PathResponse::from_route(&route)))
}

fn created(location: String, body: impl serde::Serialize) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

/// Narrow a wire distance to the domain's range.
fn distance(raw: i64) -> Result<u32, AppError> {
    if raw <= 0 {
        return Err(DirectoryError::from(InvalidSection::NonPositiveDistance).into());
    }
    u32::try_from(raw)
        .map_err(|_| AppError::malformed(format!("section distance {raw} is too large")))
}

/// Application error type.
#[derive(Debug)]
pub struct AppError {
    pub kind: FailureKind,
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// A request the extractors could not parse.
    fn malformed(message: String) -> Self {
        AppError {
            kind: FailureKind::InvalidInput,
            code: ErrorCode::InvalidInput,
            message,
        }
    }

    fn status(&self) -> StatusCode {
        match self.kind {
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::InvalidTopologyOperation
            | FailureKind::InvalidPathRequest
            | FailureKind::PathNotFound
            | FailureKind::InvalidInput => StatusCode::BAD_REQUEST,
            FailureKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        AppError {
            kind: e.kind(),
            code: e.code(),
            message: e.to_string(),
        }
    }
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        AppError {
            kind: e.kind(),
            code: e.code(),
            message: e.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::malformed(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::malformed(e.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        AppError::malformed(e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code.as_u32();

        if status.is_server_error() {
            error!(%status, code, message = %self.message, "request failed");
        } else {
            warn!(%status, code, message = %self.message, "request rejected");
        }

        let body = Json(ErrorResponse {
            code,
            message: self.message,
        });
        (status, body).into_response()
    }
}
