use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::models::{Gender, Ride, RideStatus, User};

struct Route {
    origin: &'static str,
    destination: &'static str,
    base_price: f64,
}

struct DriverProfile {
    first_name: &'static str,
    last_name: &'static str,
    gender: Gender,
    profile_picture: Option<&'static str>,
}

const POPULAR_ROUTES: [Route; 6] = [
    Route { origin: "Mumbai", destination: "Pune", base_price: 349.0 },
    Route { origin: "Delhi", destination: "Chandigarh", base_price: 299.0 },
    Route { origin: "Bangalore", destination: "Mysore", base_price: 249.0 },
    Route { origin: "Chennai", destination: "Pondicherry", base_price: 279.0 },
    Route { origin: "Ahmedabad", destination: "Vadodara", base_price: 229.0 },
    Route { origin: "Jaipur", destination: "Ajmer", base_price: 199.0 },
];

const DRIVERS: [DriverProfile; 6] = [
    DriverProfile { first_name: "Rajesh", last_name: "Kumar", gender: Gender::Male, profile_picture: None },
    DriverProfile {
        first_name: "Priya",
        last_name: "Sharma",
        gender: Gender::Female,
        profile_picture: Some("/uploads/drivers/priya-sharma.png"),
    },
    DriverProfile { first_name: "Amit", last_name: "Patel", gender: Gender::Male, profile_picture: None },
    DriverProfile { first_name: "Neha", last_name: "Singh", gender: Gender::Female, profile_picture: None },
    DriverProfile { first_name: "Arjun", last_name: "Reddy", gender: Gender::Male, profile_picture: None },
    DriverProfile { first_name: "Meera", last_name: "Verma", gender: Gender::Female, profile_picture: None },
];

const CAR_MODELS: [&str; 5] = ["Maruti Swift", "Hyundai i20", "Honda City", "Tata Nexon", "Mahindra XUV300"];
const CAR_COLORS: [&str; 5] = ["White", "Silver", "Grey", "Black", "Red"];

pub const MOCK_CURRENCY: &str = "INR";

/// Catalog size used when none is configured.
pub fn random_catalog_size<R: Rng>(rng: &mut R) -> usize {
    rng.gen_range(4..=9)
}

/// Generate `count` mock rides departing within a week of `today`.
///
/// Routes, drivers and cars cycle by index so every catalog covers the same
/// cities; times, seats, prices and ratings come from `rng`.
pub fn generate_mock_rides<R: Rng>(count: usize, today: NaiveDate, rng: &mut R) -> Vec<Ride> {
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let route = &POPULAR_ROUTES[i % POPULAR_ROUTES.len()];
            let profile = &DRIVERS[i % DRIVERS.len()];

            let departure_date = today + Duration::days(rng.gen_range(0..7));
            let hour = rng.gen_range(7..=18);
            let minute = rng.gen_range(0..=58);
            let departs_at = departure_date
                .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default())
                .and_utc();
            let duration = Duration::hours(rng.gen_range(2..=4));

            let driver_id = random_uuid(rng);
            let driver = User {
                id: driver_id,
                first_name: profile.first_name.to_string(),
                last_name: profile.last_name.to_string(),
                email: format!("{}@example.com", profile.first_name.to_lowercase()),
                gender: Some(profile.gender),
                rating: rng.gen_range(4.5..4.9),
                verified: true,
                profile_picture: profile.profile_picture.map(str::to_string),
                created_at: now,
            };

            Ride {
                id: random_uuid(rng),
                driver_id,
                driver,
                origin: route.origin.to_string(),
                destination: route.destination.to_string(),
                departure_date,
                departure_time: format!("{:02}:{:02}", hour, minute),
                estimated_arrival: departs_at + duration,
                available_seats: rng.gen_range(1..=3),
                price: route.base_price + f64::from(rng.gen_range(0..100u32)),
                currency: MOCK_CURRENCY.to_string(),
                car_model: CAR_MODELS[i % CAR_MODELS.len()].to_string(),
                car_color: CAR_COLORS[i % CAR_COLORS.len()].to_string(),
                allowed_luggage: None,
                gender_preference: None,
                description: None,
                status: RideStatus::Active,
                created_at: now,
            }
        })
        .collect()
}

/// Draw ids from the same rng so a seeded catalog is fully reproducible.
fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}
