use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A point of interest as returned by the venue search. Only the fields the app
/// consumes are kept; everything else in the venue record is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub location: LatLng,
}

/// Identity used to decide whether a place already has a marker
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceKey {
    name: String,
    lat_bits: u64,
    lng_bits: u64,
}

impl Place {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            location: LatLng { lat, lng },
        }
    }

    /// Marker label: the first character of the name
    pub fn label(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn key(&self) -> PlaceKey {
        PlaceKey {
            name: self.name.clone(),
            lat_bits: self.location.lat.to_bits(),
            lng_bits: self.location.lng.to_bits(),
        }
    }
}

/// Venue search envelope: `{ response: { venues: [...] } }`
#[derive(Debug, Deserialize)]
pub(crate) struct VenueSearch {
    pub response: Option<VenueResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VenueResponse {
    pub venues: Option<Vec<Place>>,
}
