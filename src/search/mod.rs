pub mod filter;
pub mod refine;
pub mod summary;

pub use filter::{search_rides, SearchQuery};
pub use refine::{refine_rides, GenderFilter, PriceSort, RefineOptions};
pub use summary::RideSummary;

use crate::models::Ride;

/// Full search pipeline: match the query, narrow and sort, then summarise for display.
pub fn find_rides(catalog: &[Ride], query: &SearchQuery, options: RefineOptions) -> Vec<RideSummary> {
    refine_rides(search_rides(catalog, query), options)
        .iter()
        .map(RideSummary::from)
        .collect()
}
