pub mod booking;
pub mod ride;
pub mod user;

pub use booking::{BookingRequest, BookingStatus, PaymentStatus};
pub use ride::{GenderPreference, LuggageSize, Ride, RideStatus};
pub use user::{Gender, User};
