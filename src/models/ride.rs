use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuggageSize {
    Small,
    Medium,
    Large,
}

/// Who the driver is willing to take, as declared when publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPreference {
    Any,
    SameGender,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub driver: User,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    /// Local departure time as `HH:MM`.
    pub departure_time: String,
    pub estimated_arrival: DateTime<Utc>,
    pub available_seats: u32,
    pub price: f64,
    pub currency: String,
    pub car_model: String,
    pub car_color: String,
    pub allowed_luggage: Option<LuggageSize>,
    pub gender_preference: Option<GenderPreference>,
    pub description: Option<String>,
    pub status: RideStatus,
    pub created_at: DateTime<Utc>,
}

impl Ride {
    /// Departure as a UTC instant, falling back to midnight when the time text is malformed.
    pub fn departs_at(&self) -> DateTime<Utc> {
        let time = chrono::NaiveTime::parse_from_str(&self.departure_time, "%H:%M")
            .unwrap_or_default();
        self.departure_date.and_time(time).and_utc()
    }

    /// Trip length in hours, rounded to one decimal.
    pub fn duration_hours(&self) -> f64 {
        let minutes = (self.estimated_arrival - self.departs_at()).num_minutes().max(0);
        (minutes as f64 / 60.0 * 10.0).round() / 10.0
    }

    pub fn is_bookable(&self) -> bool {
        self.status == RideStatus::Active && self.available_seats > 0
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::ride;
    use super::*;

    #[test]
    fn test_duration_hours() {
        let mut r = ride("Mumbai", "Pune", 2, 349.0);
        assert_eq!(r.duration_hours(), 3.0);

        r.estimated_arrival = r.departs_at() + chrono::Duration::minutes(155);
        assert_eq!(r.duration_hours(), 2.6);
    }

    #[test]
    fn test_bookable_requires_active_and_seats() {
        let mut r = ride("Delhi", "Chandigarh", 1, 299.0);
        assert!(r.is_bookable());

        r.status = RideStatus::Cancelled;
        assert!(!r.is_bookable());

        r.status = RideStatus::Active;
        r.available_seats = 0;
        assert!(!r.is_bookable());
    }

    #[test]
    fn test_serializes_snake_case_enums() {
        let mut r = ride("Jaipur", "Ajmer", 3, 199.0);
        r.gender_preference = Some(GenderPreference::SameGender);
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["status"], "active");
        assert_eq!(value["gender_preference"], "same_gender");
        assert_eq!(value["driver"]["gender"], "male");
    }
}
