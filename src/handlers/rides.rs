use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{BookingRequest, GenderPreference, LuggageSize, Ride, RideStatus, User};
use crate::utils::format::{format_currency, format_time};
use crate::AppState;

pub const MAX_PUBLISHED_SEATS: u32 = 7;

#[derive(Debug, Serialize)]
pub struct RideDetailResponse {
    #[serde(flatten)]
    pub ride: Ride,
    pub formatted_price: String,
    pub formatted_departure_time: String,
    pub duration_hours: f64,
}

impl From<Ride> for RideDetailResponse {
    fn from(ride: Ride) -> Self {
        Self {
            formatted_price: format_currency(ride.price, &ride.currency),
            formatted_departure_time: format_time(&ride.departure_time),
            duration_hours: ride.duration_hours(),
            ride,
        }
    }
}

/// Get ride details
pub async fn get_ride(
    State(state): State<AppState>,
    Path(ride_id): Path<Uuid>,
) -> AppResult<Json<RideDetailResponse>> {
    let ride = state
        .catalog
        .find(ride_id)
        .await
        .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

    Ok(Json(ride.into()))
}

// ============ Publishing ============

#[derive(Debug, Default, Deserialize)]
pub struct PublishRideRequest {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub departure_date: Option<NaiveDate>,
    pub departure_time: Option<String>,
    pub estimated_arrival: Option<DateTime<Utc>>,
    pub seats: Option<u32>,
    pub price: Option<f64>,
    pub car: Option<String>,
    pub car_color: Option<String>,
    pub luggage: Option<LuggageSize>,
    pub gender_preference: Option<GenderPreference>,
    pub description: Option<String>,
}

impl PublishRideRequest {
    /// Validate in form order and build the ride. The first missing step is reported.
    pub fn into_ride(self, driver: User, currency: &str) -> AppResult<Ride> {
        let origin = self.origin.trim();
        let destination = self.destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(AppError::BadRequest(
                "Please enter origin and destination".to_string(),
            ));
        }

        let (departure_date, departure_time) = match (self.departure_date, self.departure_time.as_deref()) {
            (Some(date), Some(time)) if !time.trim().is_empty() => (date, time.trim()),
            _ => {
                return Err(AppError::BadRequest(
                    "Please enter departure date and time".to_string(),
                ));
            }
        };
        let time = NaiveTime::parse_from_str(departure_time, "%H:%M").map_err(|_| {
            AppError::BadRequest("Departure time must be in HH:MM format".to_string())
        })?;
        let departs_at = departure_date.and_time(time).and_utc();

        let price = match self.price {
            Some(p) if p.is_finite() && p >= 0.0 => p,
            Some(_) => {
                return Err(AppError::BadRequest(
                    "Price per seat cannot be negative".to_string(),
                ));
            }
            None => {
                return Err(AppError::BadRequest(
                    "Please enter price per seat".to_string(),
                ));
            }
        };

        let car = match self.car.as_deref().map(str::trim) {
            Some(car) if !car.is_empty() => car.to_string(),
            _ => {
                return Err(AppError::BadRequest(
                    "Please enter your car details".to_string(),
                ));
            }
        };

        let seats = self.seats.unwrap_or(3);
        if !(1..=MAX_PUBLISHED_SEATS).contains(&seats) {
            return Err(AppError::BadRequest(format!(
                "Seats must be between 1 and {}",
                MAX_PUBLISHED_SEATS
            )));
        }

        let estimated_arrival = self.estimated_arrival.unwrap_or(departs_at);
        if estimated_arrival < departs_at {
            return Err(AppError::BadRequest(
                "Estimated arrival cannot be before departure".to_string(),
            ));
        }

        Ok(Ride {
            id: Uuid::new_v4(),
            driver_id: driver.id,
            driver,
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date,
            departure_time: time.format("%H:%M").to_string(),
            estimated_arrival,
            available_seats: seats,
            price,
            currency: currency.to_string(),
            car_model: car,
            car_color: self.car_color.unwrap_or_default(),
            allowed_luggage: Some(self.luggage.unwrap_or(LuggageSize::Medium)),
            gender_preference: Some(self.gender_preference.unwrap_or(GenderPreference::Any)),
            description: self.description.filter(|d| !d.trim().is_empty()),
            status: RideStatus::Active,
            created_at: Utc::now(),
        })
    }
}

/// Publish a new ride offered by the signed-in driver
pub async fn publish_ride(
    State(state): State<AppState>,
    Json(payload): Json<PublishRideRequest>,
) -> AppResult<(StatusCode, Json<RideDetailResponse>)> {
    let ride = payload.into_ride(User::demo_driver(), &state.config.default_currency)?;

    tracing::info!(
        ride_id = %ride.id,
        origin = %ride.origin,
        destination = %ride.destination,
        seats = ride.available_seats,
        "Ride published"
    );

    state.catalog.insert(ride.clone()).await;
    Ok((StatusCode::CREATED, Json(ride.into())))
}

// ============ Booking ============

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub seats: u32,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    #[serde(flatten)]
    pub booking: BookingRequest,
    pub formatted_total: String,
    pub message: String,
}

/// Request seats on a ride. The booking is priced and returned, not held.
pub async fn request_booking(
    State(state): State<AppState>,
    Path(ride_id): Path<Uuid>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    let ride = state
        .catalog
        .find(ride_id)
        .await
        .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

    let booking = BookingRequest::for_ride(&ride, payload.seats)?;
    tracing::info!(ride_id = %ride.id, seats = booking.seats, "Booking requested");

    Ok(Json(BookingResponse {
        formatted_total: format_currency(booking.total_price, &booking.currency),
        message: format!("Booking requested for {} seat(s)!", booking.seats),
        booking,
    }))
}
