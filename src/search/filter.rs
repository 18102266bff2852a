use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Ride;

/// What a traveller typed into the search form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    /// Carried through to the response; rides are not matched on it.
    pub date: Option<NaiveDate>,
    pub passengers: i64,
}

impl SearchQuery {
    pub fn matches(&self, ride: &Ride) -> bool {
        contains_ignore_case(&ride.origin, &self.origin)
            && contains_ignore_case(&ride.destination, &self.destination)
            && i64::from(ride.available_seats) >= self.passengers
    }
}

/// Rides matching `query`, in catalog order. Never fails; no match is an empty vec.
pub fn search_rides(catalog: &[Ride], query: &SearchQuery) -> Vec<Ride> {
    catalog
        .iter()
        .filter(|ride| query.matches(ride))
        .cloned()
        .collect()
}

// An empty needle matches everything.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ride::fixtures::ride;

    fn catalog() -> Vec<Ride> {
        vec![
            ride("Mumbai", "Pune", 3, 349.0),
            ride("Delhi", "Chandigarh", 2, 299.0),
            ride("Bangalore", "Mysore", 1, 249.0),
            ride("Navi Mumbai", "Pune", 1, 329.0),
            ride("Chennai", "Pondicherry", 2, 279.0),
        ]
    }

    fn query(origin: &str, destination: &str, passengers: i64) -> SearchQuery {
        SearchQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date: None,
            passengers,
        }
    }

    #[test]
    fn test_empty_query_returns_catalog_in_order() {
        let rides = catalog();
        let result = search_rides(&rides, &query("", "", 1));
        assert_eq!(result, rides);
    }

    #[test]
    fn test_origin_is_case_insensitive_substring() {
        let result = search_rides(&catalog(), &query("mUMb", "", 1));
        let origins: Vec<_> = result.iter().map(|r| r.origin.as_str()).collect();
        assert_eq!(origins, vec!["Mumbai", "Navi Mumbai"]);
    }

    #[test]
    fn test_destination_and_seats_combine() {
        let result = search_rides(&catalog(), &query("", "PUNE", 2));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].origin, "Mumbai");
    }

    #[test]
    fn test_every_result_has_enough_seats() {
        for passengers in -1..=4 {
            for r in search_rides(&catalog(), &query("", "", passengers)) {
                assert!(i64::from(r.available_seats) >= passengers);
            }
        }
    }

    #[test]
    fn test_non_positive_passengers_match_all_seats() {
        assert_eq!(search_rides(&catalog(), &query("", "", 0)).len(), 5);
        assert_eq!(search_rides(&catalog(), &query("", "", -3)).len(), 5);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        assert!(search_rides(&catalog(), &query("Kolkata", "", 1)).is_empty());
        assert!(search_rides(&catalog(), &query("", "", 4)).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let q = query("a", "", 2);
        let once = search_rides(&catalog(), &q);
        let twice = search_rides(&once, &q);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_does_not_narrow_results() {
        let mut q = query("", "", 1);
        q.date = NaiveDate::from_ymd_opt(2030, 1, 1);
        assert_eq!(search_rides(&catalog(), &q).len(), 5);
    }
}
