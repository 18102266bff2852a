use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ride::Ride;
use crate::error::{AppError, AppResult};

/// Requests are never confirmed or charged, so pending is the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
}

/// A priced seat request against a ride. Not stored; seats are not held.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub ride_id: Uuid,
    pub seats: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub currency: String,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl BookingRequest {
    pub fn for_ride(ride: &Ride, seats: u32) -> AppResult<Self> {
        if !ride.is_bookable() {
            return Err(AppError::BadRequest(
                "This ride is no longer accepting bookings".to_string(),
            ));
        }

        if seats == 0 {
            return Err(AppError::BadRequest(
                "Must book at least 1 seat".to_string(),
            ));
        }

        if seats > ride.available_seats {
            return Err(AppError::BadRequest(format!(
                "Maximum {} seats available",
                ride.available_seats
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            ride_id: ride.id,
            seats,
            unit_price: ride.price,
            total_price: ride.price * f64::from(seats),
            currency: ride.currency.clone(),
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at: Utc::now(),
        })
    }
}
