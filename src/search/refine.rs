use serde::{Deserialize, Serialize};

use crate::models::{Gender, Ride};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    fn accepts(self, gender: Option<Gender>) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Some(Gender::Male),
            GenderFilter::Female => gender == Some(Gender::Female),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSort {
    #[default]
    None,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefineOptions {
    #[serde(default)]
    pub gender: GenderFilter,
    #[serde(default)]
    pub sort: PriceSort,
}

/// Narrow by driver gender, then order by price.
///
/// Both sorts are stable, so rides with equal prices keep the order the
/// search produced.
pub fn refine_rides(mut rides: Vec<Ride>, options: RefineOptions) -> Vec<Ride> {
    rides.retain(|ride| options.gender.accepts(ride.driver.gender));

    match options.sort {
        PriceSort::None => {}
        PriceSort::Ascending => rides.sort_by(|a, b| a.price.total_cmp(&b.price)),
        PriceSort::Descending => rides.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    rides
}
