use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Booking;
use crate::services::booking::{self, BookingRequest};
use crate::state::AppState;

// POST /api/bookings
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingBody {
    pub customer: Option<CustomerBody>,
    pub provider_id: Option<String>,
    pub service: Option<String>,
    pub scheduled_time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct CustomerBody {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateBookingBody>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let caller = state.identity.identify(&headers).await;

    let scheduled_time = body
        .scheduled_time
        .map(|raw| {
            raw.parse::<DateTime<Utc>>().map_err(|_| {
                AppError::Validation("scheduledTime must be an ISO-8601 timestamp".to_string())
            })
        })
        .transpose()?;

    let customer = body.customer.unwrap_or_default();
    let request = BookingRequest {
        customer_name: customer.name,
        customer_phone: customer.phone,
        customer_email: customer.email,
        customer_address: customer.address,
        provider_id: body.provider_id,
        service: body.service,
        scheduled_time,
        notes: body.notes,
    };

    let created = booking::create_booking(&state.store, request)?;
    tracing::info!(
        caller = %caller,
        booking_id = %created.id,
        provider_id = %created.provider_id,
        service = %created.service_type,
        status = created.status.as_str(),
        "booking created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/bookings
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsQuery {
    pub customer_email: Option<String>,
    pub provider_id: Option<String>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Json<Vec<Booking>> {
    let caller = state.identity.identify(&headers).await;

    // Empty query values mean no filter.
    let customer_email = query.customer_email.as_deref().filter(|s| !s.is_empty());
    let provider_id = query.provider_id.as_deref().filter(|s| !s.is_empty());
    let bookings = state.store.list_bookings(customer_email, provider_id);

    tracing::debug!(caller = %caller, count = bookings.len(), "listed bookings");
    Json(bookings)
}
