/// Configuration constants for the application
pub mod config {
    /// Venue search endpoint of the places API
    pub const PLACES_ENDPOINT: &str = "https://api.foursquare.com/v2/venues/search";

    /// Coordinates the neighborhood is centred on
    pub const DEFAULT_LAT: f64 = 20.339457;
    pub const DEFAULT_LNG: f64 = 85.807439;

    /// Maximum number of venues requested
    pub const PLACES_LIMIT: u32 = 25;

    /// Places API version date
    pub const PLACES_API_VERSION: &str = "20180707";

    /// Reference lookup endpoint (Wikipedia opensearch)
    pub const REFERENCE_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

    /// Base URL for reference article links
    pub const REFERENCE_ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

    /// User-Agent sent with reference lookups
    pub const USER_AGENT: &str = concat!("neighborhood-map/", env!("CARGO_PKG_VERSION"));

    /// Map provider script
    pub const MAPS_SCRIPT_BASE: &str = "https://maps.googleapis.com/maps/api/js";

    /// Initial map view before the markers are fitted
    pub const MAP_CENTER: (f64, f64) = (20.342011, 85.804517);
    pub const MAP_ZOOM: u8 = 6;

    /// Quiet period before a filter query is applied
    pub const FILTER_DEBOUNCE_MS: u64 = 300;

    /// DOM ids the map provider scripts look up
    pub const MAP_CONTAINER_ID: &str = "map";
    pub const PLACES_LIST_ID: &str = "places-list";

    /// Credentials, injected at build time
    pub const FOURSQUARE_CLIENT_ID: Option<&str> = option_env!("FOURSQUARE_CLIENT_ID");
    pub const FOURSQUARE_CLIENT_SECRET: Option<&str> = option_env!("FOURSQUARE_CLIENT_SECRET");
    pub const GOOGLE_MAPS_API_KEY: Option<&str> = option_env!("GOOGLE_MAPS_API_KEY");

    /// Full URL of the map provider script
    pub fn maps_script_url() -> String {
        match GOOGLE_MAPS_API_KEY {
            Some(key) => format!("{}?key={}", MAPS_SCRIPT_BASE, key),
            None => MAPS_SCRIPT_BASE.to_string(),
        }
    }
}

pub mod debounce;
pub mod sequence;

/// Timer helpers that work on both the desktop and web renderers
pub mod time_utils {
    use std::time::Duration;

    /// Suspend the current task for `duration`
    pub async fn sleep(duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;

        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}

pub use debounce::{Debouncer, Settle};
pub use sequence::{RequestSequence, RequestToken};

#[cfg(test)]
mod tests {
    use super::config::*;

    #[test]
    fn test_maps_script_url() {
        let url = maps_script_url();
        assert!(url.starts_with(MAPS_SCRIPT_BASE));
        if GOOGLE_MAPS_API_KEY.is_some() {
            assert!(url.contains("?key="));
        }
    }
}
