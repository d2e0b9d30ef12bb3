use dioxus::{logger::tracing, prelude::*};

use super::bounds::LatLngBounds;
use super::info_panel::PanelContent;
use super::provider::{Animation, MapProvider, MarkerId};
use crate::contexts::{ProviderError, ProviderResult};
use crate::places::Place;

/// Name of the page-global object holding the map, the info window and the markers
pub const MAP_GLOBAL: &str = "window.__neighborhoodMap";

/// [`MapProvider`] backed by the Google Maps JavaScript API, driven through
/// `document::eval`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleMapsProvider;

impl GoogleMapsProvider {
    /// Send a command to the widget. The script starts right away so commands
    /// keep their order; its outcome is checked in the background.
    fn run(&self, command: &'static str, body: &str) {
        let eval = document::eval(&wrap(body));
        spawn(async move {
            let outcome = eval.join::<bool>().await.map_err(ProviderError::from);
            if let Err(e) = command_outcome(outcome) {
                tracing::error!("Map command {} failed: {}", command, e);
            }
        });
    }
}

/// Guard a snippet so it reports `false` until the map has been attached, and
/// `true` once the snippet ran to the end
fn wrap(body: &str) -> String {
    format!("const nm = {MAP_GLOBAL}; if (!nm) {{ return false; }} {body} return true;")
}

/// Snippet prologue binding `m` to a marker, reporting `false` if it is unknown
fn marker_lookup(id: MarkerId) -> String {
    format!("const m = nm.markers[{}]; if (!m) {{ return false; }}", id.0)
}

fn command_outcome(outcome: ProviderResult<bool>) -> ProviderResult<()> {
    if outcome? {
        Ok(())
    } else {
        Err(ProviderError::Eval("map or marker is not attached".to_string()))
    }
}

/// Encode a string as a JavaScript literal
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn js_animation(animation: Option<Animation>) -> &'static str {
    match animation {
        Some(Animation::Drop) => "google.maps.Animation.DROP",
        Some(Animation::Bounce) => "google.maps.Animation.BOUNCE",
        None => "null",
    }
}

impl MapProvider for GoogleMapsProvider {
    fn create_marker(&mut self, id: MarkerId, place: &Place, label: &str) {
        let title = js_string(&place.name);
        self.run(
            "create_marker",
            &format!(
                "const marker = new google.maps.Marker({{ map: nm.map, position: {{ lat: {lat}, lng: {lng} }}, \
                 title: {title}, label: {label}, animation: {animation} }}); \
                 marker.addListener('click', () => nm.onMarkerClick({id}, {title})); \
                 nm.markers[{id}] = marker;",
                lat = place.location.lat,
                lng = place.location.lng,
                label = js_string(label),
                animation = js_animation(Some(Animation::Drop)),
                id = id.0,
            ),
        );
    }

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) {
        self.run(
            "set_marker_visible",
            &format!(
                "{} m.setMap({});",
                marker_lookup(id),
                if visible { "nm.map" } else { "null" }
            ),
        );
    }

    fn set_marker_animation(&mut self, id: MarkerId, animation: Option<Animation>) {
        self.run(
            "set_marker_animation",
            &format!("{} m.setAnimation({});", marker_lookup(id), js_animation(animation)),
        );
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.run(
            "fit_bounds",
            &format!(
                "nm.map.fitBounds(new google.maps.LatLngBounds({{ lat: {}, lng: {} }}, {{ lat: {}, lng: {} }}));",
                bounds.south, bounds.west, bounds.north, bounds.east
            ),
        );
    }

    fn open_info_panel(&mut self, id: MarkerId, content: &PanelContent) {
        self.run(
            "open_info_panel",
            &format!(
                "{} nm.info.setContent({}); nm.info.open(nm.map, m);",
                marker_lookup(id),
                js_string(&content.to_html())
            ),
        );
    }

    fn set_info_panel_content(&mut self, content: &PanelContent) {
        self.run(
            "set_info_panel_content",
            &format!("nm.info.setContent({});", js_string(&content.to_html())),
        );
    }
}
