//! API handlers

use axum::{
    async_trait,
    extract::rejection::JsonRejection,
    extract::{FromRequest, Path, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::api::AppState;
use crate::types::{BoundingBox, NewPeak, Peak, PeakId};
use crate::Error;

static MAP_PAGE: &str = include_str!("../../assets/map.html");

/// Static map page
pub async fn index() -> Html<&'static str> {
    Html(MAP_PAGE)
}

/// Redirect to the API documentation
pub async fn api_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/api/docs")])
}

/// Health check with system status
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let peaks = state.store.count().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        peaks,
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub peaks: i64,
}

/// Fetch a single peak by id
pub async fn get_peak(
    State(state): State<AppState>,
    Path(id): Path<PeakId>,
) -> Result<Json<Peak>, ApiError> {
    let peak = state.store.get(id).await?;
    Ok(Json(peak))
}

/// Create a peak; the store assigns the id
pub async fn create_peak(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewPeak>,
) -> Result<Json<Peak>, ApiError> {
    let peak = state.store.create(payload).await?;

    tracing::debug!(id = peak.id, name = %peak.name, "Created peak");
    Ok(Json(peak))
}

/// Overwrite all non-id fields of a peak
pub async fn update_peak(
    State(state): State<AppState>,
    Path(id): Path<PeakId>,
    ApiJson(payload): ApiJson<NewPeak>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.update(id, payload).await?;

    Ok(Json(MessageResponse {
        message: "data updated".to_string(),
    }))
}

/// Delete a peak by id
pub async fn delete_peak(
    State(state): State<AppState>,
    Path(id): Path<PeakId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "data deleted successfully".to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List every peak
pub async fn list_peaks(State(state): State<AppState>) -> Result<Json<Vec<Peak>>, ApiError> {
    let peaks = state.store.list().await?;
    Ok(Json(peaks))
}

/// List peaks inside a bounding box.
///
/// The wire format keeps the original `x1, y1, x2, y2` names: `x` bounds are
/// latitudes (x1 the larger), `y` bounds are longitudes (y1 the smaller).
pub async fn peaks_in_box(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BoundingBoxRequest>,
) -> Result<Json<Vec<Peak>>, ApiError> {
    let bbox = BoundingBox {
        lat_max: payload.x1,
        lon_min: payload.y1,
        lat_min: payload.x2,
        lon_max: payload.y2,
    };

    let peaks = state.store.find_in_box(&bbox).await?;
    Ok(Json(peaks))
}

#[derive(Debug, Deserialize)]
pub struct BoundingBoxRequest {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// JSON extractor that maps every rejection to a 400 with a descriptive body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::from_rejection(rejection)),
        }
    }
}

/// Request-scoped API error carrying the response status
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    fn from_rejection(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::PeakNotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ if err.is_storage_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "Request failed");
        }

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}
