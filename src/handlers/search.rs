use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::search::{find_rides, GenderFilter, PriceSort, RefineOptions, RideSummary, SearchQuery};
use crate::AppState;

/// Raw search form fields. Blank fields arrive as empty strings, so `date`
/// and `passengers` are parsed by hand rather than by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub date: Option<String>,
    pub passengers: Option<String>,
    #[serde(default)]
    pub gender: GenderFilter,
    #[serde(default)]
    pub sort: PriceSort,
}

impl SearchParams {
    pub fn query(&self) -> AppResult<SearchQuery> {
        Ok(SearchQuery {
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            date: parse_date(self.date.as_deref())?,
            passengers: parse_passengers(self.passengers.as_deref()),
        })
    }

    pub fn options(&self) -> RefineOptions {
        RefineOptions {
            gender: self.gender,
            sort: self.sort,
        }
    }
}

// Blank or "today" means no date was picked.
fn parse_date(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) if text.eq_ignore_ascii_case("today") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid date {:?}, expected YYYY-MM-DD", text))),
    }
}

// Missing, blank, non-numeric or zero all mean one passenger.
fn parse_passengers(raw: Option<&str>) -> i64 {
    match raw.and_then(|p| p.trim().parse::<i64>().ok()) {
        None | Some(0) => 1,
        Some(n) => n,
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: SearchQuery,
    pub options: RefineOptions,
    pub count: usize,
    pub rides: Vec<RideSummary>,
}

/// Search the catalog for rides
pub async fn search_rides(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let query = params.query()?;
    let options = params.options();

    if !state.config.search_delay.is_zero() {
        tokio::time::sleep(state.config.search_delay).await;
    }

    let catalog = state.catalog.snapshot().await;
    let rides = find_rides(&catalog, &query, options);

    tracing::debug!(
        origin = %query.origin,
        destination = %query.destination,
        passengers = query.passengers,
        gender = ?options.gender,
        sort = ?options.sort,
        catalog = catalog.len(),
        matched = rides.len(),
        "Ride search"
    );

    Ok(Json(SearchResponse {
        query,
        options,
        count: rides.len(),
        rides,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_passengers(raw: &str) -> SearchParams {
        SearchParams { passengers: Some(raw.to_string()), ..Default::default() }
    }

    #[test]
    fn test_passengers_default_to_one() {
        assert_eq!(SearchParams::default().query().unwrap().passengers, 1);
        assert_eq!(with_passengers("0").query().unwrap().passengers, 1);
        assert_eq!(with_passengers("").query().unwrap().passengers, 1);
        assert_eq!(with_passengers("abc").query().unwrap().passengers, 1);
        assert_eq!(with_passengers(" 3 ").query().unwrap().passengers, 3);
        assert_eq!(with_passengers("-2").query().unwrap().passengers, -2);
    }

    #[test]
    fn test_blank_or_today_date_is_none() {
        for raw in ["", "  ", "Today", "today"] {
            let params = SearchParams { date: Some(raw.to_string()), ..Default::default() };
            assert_eq!(params.query().unwrap().date, None);
        }

        let params = SearchParams { date: Some("2026-10-21".to_string()), ..Default::default() };
        assert_eq!(params.query().unwrap().date, NaiveDate::from_ymd_opt(2026, 10, 21));
    }

    #[test]
    fn test_malformed_date_is_bad_request() {
        let params = SearchParams { date: Some("21/10/2026".to_string()), ..Default::default() };
        assert!(matches!(params.query(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_text_is_trimmed() {
        let params = SearchParams {
            origin: "  Mumbai ".to_string(),
            destination: "Pune\t".to_string(),
            ..Default::default()
        };
        let query = params.query().unwrap();
        assert_eq!(query.origin, "Mumbai");
        assert_eq!(query.destination, "Pune");
    }
}
