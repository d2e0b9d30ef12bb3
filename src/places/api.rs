use dioxus::logger::tracing;

use super::model::{Place, VenueSearch};
use crate::contexts::{PlacesError, PlacesResult};
use crate::utils::config;

/// Parameters of the venue search request
#[derive(Debug, Clone, PartialEq)]
pub struct PlacesQuery {
    pub lat: f64,
    pub lng: f64,
    pub limit: u32,
    pub version: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Default for PlacesQuery {
    fn default() -> Self {
        Self {
            lat: config::DEFAULT_LAT,
            lng: config::DEFAULT_LNG,
            limit: config::PLACES_LIMIT,
            version: config::PLACES_API_VERSION.to_string(),
            client_id: config::FOURSQUARE_CLIENT_ID.map(str::to_string),
            client_secret: config::FOURSQUARE_CLIENT_SECRET.map(str::to_string),
        }
    }
}

impl PlacesQuery {
    /// `lat,lng` as used by the `ll` parameter and in error messages
    pub fn coordinates(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("ll", self.coordinates()),
            ("limit", self.limit.to_string()),
            ("v", self.version.clone()),
        ];
        if let Some(id) = &self.client_id {
            params.push(("client_id", id.clone()));
        }
        if let Some(secret) = &self.client_secret {
            params.push(("client_secret", secret.clone()));
        }
        params
    }
}

/// Fetch the venues around `query`. One attempt; any failure is returned as is.
pub async fn fetch_places(query: &PlacesQuery) -> PlacesResult<Vec<Place>> {
    tracing::info!("Fetching places around {}", query.coordinates());

    let response = reqwest::Client::new()
        .get(config::PLACES_ENDPOINT)
        .query(&query.params())
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;
    let places = parse_places(status, &body, query)?;

    tracing::info!("Fetched {} places", places.len());
    Ok(places)
}

/// Turn a raw venue search response into places
pub fn parse_places(status: u16, body: &str, query: &PlacesQuery) -> PlacesResult<Vec<Place>> {
    if status != 200 {
        return Err(PlacesError::Status {
            status,
            message: format!("No data found for co-ordinates: {}", query.coordinates()),
        });
    }

    let search: VenueSearch = serde_json::from_str(body)?;
    search
        .response
        .and_then(|response| response.venues)
        .ok_or_else(|| {
            PlacesError::MissingVenues(format!(
                "No venues detail found for co-ordinates: {}",
                query.coordinates()
            ))
        })
}
