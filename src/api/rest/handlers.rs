//! # REST Handlers
//!
//! Request handlers, wire DTOs and error mapping for the REST API.

use crate::application::error::AggregationError;
use crate::application::services::{FlightAggregationEngine, RankingStrategy};
use crate::domain::entities::flight_search::DEFAULT_PASSENGERS;
use crate::domain::entities::{FlightSearch, FlightSearchBuilder, FlightSearchResult};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AirportCode, CabinClass, Supplier};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Largest number of passengers accepted in one search.
pub const MAX_PASSENGERS: i64 = 4;

// ============================================================================
// Application State
// ============================================================================

/// Shared state for every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Aggregation engine over the configured suppliers.
    pub engine: Arc<FlightAggregationEngine>,
    /// Ordering applied to results before rendering.
    pub ranking: Arc<dyn RankingStrategy>,
}

impl AppState {
    /// Creates handler state.
    #[must_use]
    pub fn new(engine: Arc<FlightAggregationEngine>, ranking: Arc<dyn RankingStrategy>) -> Self {
        Self { engine, ranking }
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Body of `POST /flights/search`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchRequest {
    /// Origin IATA code.
    pub origin: String,
    /// Destination IATA code.
    pub destination: String,
    /// Outbound date.
    pub departure_date: NaiveDate,
    /// Return date; absent for one-way.
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    /// Number of passengers; defaults to one.
    #[serde(default)]
    pub number_of_passengers: Option<i64>,
}

impl FlightSearchRequest {
    /// Validates the request against `today` and builds the canonical
    /// search.
    ///
    /// Every field is checked so the caller sees all problems at once. The
    /// date ordering invariant is left to the engine.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` listing each offending field.
    pub fn into_search(self, today: NaiveDate) -> Result<FlightSearch, ApiError> {
        let mut errors = Vec::new();

        let origin = parse_airport("origin", &self.origin, &mut errors);
        let destination = parse_airport("destination", &self.destination, &mut errors);

        if self.departure_date < today {
            errors.push(ErrorDetail::field(
                "departureDate",
                "must be today or in the future",
            ));
        }
        if self.return_date.is_some_and(|date| date < today) {
            errors.push(ErrorDetail::field(
                "returnDate",
                "must be today or in the future",
            ));
        }

        let passengers = self
            .number_of_passengers
            .unwrap_or(i64::from(DEFAULT_PASSENGERS));
        if !(1..=MAX_PASSENGERS).contains(&passengers) {
            errors.push(ErrorDetail::field(
                "numberOfPassengers",
                format!("must be between 1 and {}", MAX_PASSENGERS),
            ));
        }

        match (origin, destination, u32::try_from(passengers)) {
            (Some(origin), Some(destination), Ok(passengers)) if errors.is_empty() => {
                Ok(FlightSearchBuilder::new(origin, destination, self.departure_date)
                    .maybe_return_date(self.return_date)
                    .passengers(passengers)
                    .build())
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

fn parse_airport(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ErrorDetail>,
) -> Option<AirportCode> {
    match value.parse::<AirportCode>() {
        Ok(code) => Some(code),
        Err(e) => {
            errors.push(ErrorDetail::field(field, e.to_string()));
            None
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    /// When the response was produced.
    pub timestamp: DateTime<Utc>,
    /// Payload.
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Wraps `data` with the current timestamp.
    #[must_use]
    pub fn new(data: T) -> Self {
        Self {
            timestamp: Utc::now(),
            data,
        }
    }
}

/// One offer as rendered to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResponse {
    /// Operating airline.
    pub airline: String,
    /// Supplier the offer came from.
    pub supplier: Supplier,
    /// Cabin class, when the supplier reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin_class: Option<CabinClass>,
    /// Fare with exactly two decimals.
    pub fare: String,
    /// Departure airport.
    pub origin: AirportCode,
    /// Arrival airport.
    pub destination: AirportCode,
    /// Local departure date-time.
    pub departure_date: NaiveDateTime,
    /// Local return date-time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDateTime>,
}

impl From<&FlightSearchResult> for FlightSearchResponse {
    fn from(result: &FlightSearchResult) -> Self {
        Self {
            airline: result.airline().to_string(),
            supplier: result.supplier(),
            cabin_class: result.cabin_class(),
            fare: result.fare().to_display_string(),
            origin: result.origin(),
            destination: result.destination(),
            departure_date: result.departure_date(),
            return_date: result.return_date(),
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `UP` while the process serves requests.
    pub status: &'static str,
    /// Number of registered suppliers.
    pub suppliers: usize,
}

/// Error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// Individual problems.
    pub errors: Vec<ErrorDetail>,
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    /// Offending field or supplier, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl ErrorDetail {
    /// Creates a problem attributed to `source`.
    #[must_use]
    pub fn field(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            message: message.into(),
        }
    }

    /// Creates a problem with no specific source.
    #[must_use]
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            source: None,
            message: message.into(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error returned by handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be parsed.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// One or more fields failed validation.
    #[error("validation failed")]
    Validation(Vec<ErrorDetail>),

    /// The search itself failed.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Aggregation(AggregationError::InvalidSearch(_)) => StatusCode::BAD_REQUEST,
            Self::Aggregation(AggregationError::SupplierFailed { source, .. }) => {
                if source.is_transport() {
                    StatusCode::BAD_GATEWAY
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    fn details(&self) -> Vec<ErrorDetail> {
        match self {
            Self::MalformedRequest(message) => vec![ErrorDetail::general(message.clone())],
            Self::Validation(errors) => errors.clone(),
            Self::Aggregation(AggregationError::InvalidSearch(e)) => {
                let source = match e {
                    DomainError::InvalidDatePeriod { .. } => Some("returnDate"),
                    DomainError::InvalidPassengerCount(_) => Some("numberOfPassengers"),
                    DomainError::InvalidFare(_) | DomainError::Arithmetic(_) => None,
                };
                vec![ErrorDetail {
                    source: source.map(str::to_string),
                    message: e.to_string(),
                }]
            }
            Self::Aggregation(AggregationError::SupplierFailed { supplier, source }) => {
                vec![ErrorDetail::field(supplier.to_string(), source.to_string())]
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "search failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        let body = ErrorResponse {
            timestamp: Utc::now(),
            errors: self.details(),
        };
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// `POST /flights/search`
///
/// # Errors
///
/// Returns `ApiError` for malformed or invalid requests and failed searches.
pub async fn search_flights(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FlightSearchRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Vec<FlightSearchResponse>>>, ApiError> {
    let Json(request) = payload?;
    let search = request.into_search(Local::now().date_naive())?;

    let mut results = state.engine.search(&search).await?;
    state.ranking.rank(&mut results);

    let data = results.iter().map(FlightSearchResponse::from).collect();
    Ok(Json(DataResponse::new(data)))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        suppliers: state.engine.supplier_count(),
    })
}
