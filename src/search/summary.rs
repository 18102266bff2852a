use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::Ride;
use crate::utils::format::{format_currency, format_time};

/// What a ride card shows in a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideSummary {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: String,
    pub duration_hours: f64,
    pub price: f64,
    pub formatted_price: String,
    pub currency: String,
    pub available_seats: u32,
    pub driver_name: String,
    pub driver_rating: f64,
    pub driver_verified: bool,
}

impl From<&Ride> for RideSummary {
    fn from(ride: &Ride) -> Self {
        Self {
            id: ride.id,
            origin: ride.origin.clone(),
            destination: ride.destination.clone(),
            departure_date: ride.departure_date,
            departure_time: format_time(&ride.departure_time),
            duration_hours: ride.duration_hours(),
            price: ride.price,
            formatted_price: format_currency(ride.price, &ride.currency),
            currency: ride.currency.clone(),
            available_seats: ride.available_seats,
            driver_name: ride.driver.display_name(),
            driver_rating: (ride.driver.rating * 10.0).round() / 10.0,
            driver_verified: ride.driver.verified,
        }
    }
}
