use dioxus::logger::tracing;
use std::collections::HashSet;

use super::bounds::LatLngBounds;
use super::info_panel::PanelContent;
use super::provider::{Animation, MapProvider, MarkerId};
use crate::contexts::LookupResult;
use crate::places::{matches_query, Place, PlaceKey};
use crate::reference::ReferenceLink;
use crate::utils::{RequestSequence, RequestToken};

#[derive(Debug, Clone)]
struct MarkerEntry {
    id: MarkerId,
    place: Place,
    visible: bool,
    animation: Option<Animation>,
}

/// Reference lookup the caller should run for a newly opened info panel
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub token: RequestToken,
    pub title: String,
}

/// Mirrors the markers living in the map widget and keeps them in step with the
/// location list, the filter text and the selected title.
///
/// Markers are created once per distinct place and never removed; filtering
/// only detaches them from the map. A click on the map selects the marker that
/// was clicked; a selection by title matches on the place name, so when two
/// places share a name the first marker created for it wins.
pub struct MarkerLayer<P> {
    provider: P,
    markers: Vec<MarkerEntry>,
    materialized: HashSet<PlaceKey>,
    open_panel: Option<MarkerId>,
    lookups: RequestSequence,
}

impl<P: MapProvider> MarkerLayer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            markers: Vec::new(),
            materialized: HashSet::new(),
            open_panel: None,
            lookups: RequestSequence::default(),
        }
    }

    #[cfg(test)]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[cfg(test)]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    #[cfg(test)]
    pub fn visible_titles(&self) -> Vec<&str> {
        self.markers
            .iter()
            .filter(|m| m.visible)
            .map(|m| m.place.name.as_str())
            .collect()
    }

    #[cfg(test)]
    pub fn animated_titles(&self) -> Vec<&str> {
        self.markers
            .iter()
            .filter(|m| m.animation == Some(Animation::Bounce))
            .map(|m| m.place.name.as_str())
            .collect()
    }

    #[cfg(test)]
    pub fn open_panel(&self) -> Option<MarkerId> {
        self.open_panel
    }

    /// Create markers for places seen for the first time and refit the view to
    /// every marker. Does nothing while a filter is active so the view does not
    /// jump under the user. Returns how many markers were created.
    pub fn sync_locations(&mut self, places: &[Place], filter_text: &str) -> usize {
        if !filter_text.trim().is_empty() {
            tracing::debug!("Filter active, not refitting markers");
            return 0;
        }

        let mut created = 0;
        for place in places {
            if !self.materialized.insert(place.key()) {
                continue;
            }
            let id = MarkerId(self.markers.len() as u32);
            self.provider.create_marker(id, place, &place.label());
            self.markers.push(MarkerEntry {
                id,
                place: place.clone(),
                visible: true,
                animation: Some(Animation::Drop),
            });
            created += 1;
        }

        if let Some(bounds) = LatLngBounds::enclosing(self.markers.iter().map(|m| m.place.location)) {
            self.provider.fit_bounds(&bounds);
        }

        tracing::debug!("Created {} markers, {} total", created, self.markers.len());
        created
    }

    /// Attach markers whose title matches the filter and detach the rest
    pub fn apply_filter(&mut self, filter_text: &str) {
        let query = filter_text.trim();
        for marker in &mut self.markers {
            let visible = query.is_empty() || matches_query(&marker.place.name, query);
            if marker.visible != visible {
                marker.visible = visible;
                self.provider.set_marker_visible(marker.id, visible);
            }
        }
    }

    /// Bounce the first marker titled `title`, clear every other animation and
    /// open the info panel on it. If the open panel already belongs to a marker
    /// with that title, that marker stays selected. Returns the lookup to run
    /// when a panel was opened.
    pub fn select(&mut self, title: &str) -> Option<LookupRequest> {
        let open = self
            .open_panel
            .and_then(|id| self.markers.iter().position(|m| m.id == id))
            .filter(|&index| self.markers[index].place.name == title);
        let target = open.or_else(|| self.markers.iter().position(|m| m.place.name == title));
        self.activate(target)
    }

    /// Select the marker the user clicked on the map
    pub fn select_marker(&mut self, id: MarkerId) -> Option<LookupRequest> {
        let target = self.markers.iter().position(|m| m.id == id);
        if target.is_none() {
            tracing::warn!("Click on unknown marker {:?}", id);
        }
        self.activate(target)
    }

    /// Title of the place behind a marker
    pub fn title_of(&self, id: MarkerId) -> Option<&str> {
        self.markers
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.place.name.as_str())
    }

    fn activate(&mut self, target: Option<usize>) -> Option<LookupRequest> {
        for (index, marker) in self.markers.iter_mut().enumerate() {
            let animation = if Some(index) == target {
                Some(Animation::Bounce)
            } else {
                None
            };
            if marker.animation != animation {
                marker.animation = animation;
                self.provider.set_marker_animation(marker.id, animation);
            }
        }

        let marker = &self.markers[target?];
        let (id, title) = (marker.id, marker.place.name.clone());
        if self.open_panel == Some(id) {
            return None;
        }

        let content = PanelContent::Loading { title: title.clone() };
        self.provider.open_info_panel(id, &content);
        self.open_panel = Some(id);

        Some(LookupRequest {
            token: self.lookups.issue(),
            title,
        })
    }

    /// Fill the info panel with a lookup result, unless a newer selection has
    /// been made since the lookup started. Returns whether the result was used.
    pub fn complete_lookup(
        &mut self,
        request: &LookupRequest,
        result: LookupResult<Vec<ReferenceLink>>,
    ) -> bool {
        if !self.lookups.is_current(request.token) || self.open_panel.is_none() {
            tracing::warn!("Discarding stale reference lookup for {}", request.title);
            return false;
        }

        let title = request.title.clone();
        let content = match result {
            Ok(links) => PanelContent::Links { title, links },
            Err(e) => {
                tracing::error!("Reference lookup for {} failed: {}", request.title, e);
                PanelContent::Failed { title, message: e.to_string() }
            }
        };
        self.provider.set_info_panel_content(&content);
        true
    }

    /// The user closed the info panel: stop the marker bouncing
    pub fn close_panel(&mut self) {
        let Some(id) = self.open_panel.take() else {
            return;
        };
        if let Some(marker) = self.markers.iter_mut().find(|m| m.id == id) {
            marker.animation = None;
            self.provider.set_marker_animation(id, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contexts::LookupError;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(MarkerId, String, String),
        Visible(MarkerId, bool),
        Animate(MarkerId, Option<Animation>),
        Fit(LatLngBounds),
        Open(MarkerId, PanelContent),
        Content(PanelContent),
    }

    #[derive(Default)]
    struct RecordingProvider {
        calls: Vec<Call>,
    }

    impl MapProvider for RecordingProvider {
        fn create_marker(&mut self, id: MarkerId, place: &Place, label: &str) {
            self.calls.push(Call::Create(id, place.name.clone(), label.to_string()));
        }
        fn set_marker_visible(&mut self, id: MarkerId, visible: bool) {
            self.calls.push(Call::Visible(id, visible));
        }
        fn set_marker_animation(&mut self, id: MarkerId, animation: Option<Animation>) {
            self.calls.push(Call::Animate(id, animation));
        }
        fn fit_bounds(&mut self, bounds: &LatLngBounds) {
            self.calls.push(Call::Fit(*bounds));
        }
        fn open_info_panel(&mut self, id: MarkerId, content: &PanelContent) {
            self.calls.push(Call::Open(id, content.clone()));
        }
        fn set_info_panel_content(&mut self, content: &PanelContent) {
            self.calls.push(Call::Content(content.clone()));
        }
    }

    fn layer() -> MarkerLayer<RecordingProvider> {
        MarkerLayer::new(RecordingProvider::default())
    }

    fn places() -> Vec<Place> {
        vec![
            Place::new("Cafe A", 1.0, 2.0),
            Place::new("Lingaraj Temple", 3.0, 4.0),
            Place::new("Esplanade One", 5.0, 6.0),
        ]
    }

    #[test]
    fn test_single_place_creates_one_marker_and_fits_to_it() {
        let mut layer = layer();
        assert_eq!(layer.sync_locations(&[Place::new("Cafe A", 1.0, 2.0)], ""), 1);

        assert_eq!(
            layer.provider().calls,
            vec![
                Call::Create(MarkerId(0), "Cafe A".to_string(), "C".to_string()),
                Call::Fit(LatLngBounds { south: 1.0, west: 2.0, north: 1.0, east: 2.0 }),
            ]
        );
    }

    #[test]
    fn test_markers_accumulate_per_distinct_place() {
        let mut layer = layer();
        layer.sync_locations(&places()[..2], "");
        layer.sync_locations(&places(), "");
        layer.sync_locations(&places()[..1], "");
        assert_eq!(layer.marker_count(), 3);

        // same name elsewhere is a different place
        layer.sync_locations(&[Place::new("Cafe A", 9.0, 9.0)], "");
        assert_eq!(layer.marker_count(), 4);
    }

    #[test]
    fn test_sync_is_skipped_while_filtering() {
        let mut layer = layer();
        assert_eq!(layer.sync_locations(&places(), "cafe"), 0);
        assert_eq!(layer.marker_count(), 0);
        assert!(layer.provider().calls.is_empty());

        // whitespace is not an active filter
        assert_eq!(layer.sync_locations(&places(), "  "), 3);
    }

    #[test]
    fn test_filter_toggles_visibility_without_recreating() {
        let mut layer = layer();
        layer.sync_locations(&places(), "");
        layer.provider.calls.clear();

        layer.apply_filter("TEMPLE");
        assert_eq!(layer.visible_titles(), vec!["Lingaraj Temple"]);
        assert_eq!(layer.marker_count(), 3);
        assert!(layer
            .provider()
            .calls
            .iter()
            .all(|c| matches!(c, Call::Visible(_, _))));

        layer.apply_filter("");
        assert_eq!(layer.visible_titles().len(), 3);
    }

    #[test]
    fn test_select_animates_exactly_one() {
        let mut layer = layer();
        layer.sync_locations(&places(), "");

        let request = layer.select("Lingaraj Temple").unwrap();
        assert_eq!(request.title, "Lingaraj Temple");
        assert_eq!(layer.animated_titles(), vec!["Lingaraj Temple"]);
        assert_eq!(layer.open_panel(), Some(MarkerId(1)));

        layer.select("Cafe A").unwrap();
        assert_eq!(layer.animated_titles(), vec!["Cafe A"]);
    }

    #[test]
    fn test_select_unknown_title_clears_all() {
        let mut layer = layer();
        layer.sync_locations(&places(), "");
        layer.select("Cafe A");

        assert!(layer.select("Nowhere").is_none());
        assert!(layer.animated_titles().is_empty());
    }

    #[test]
    fn test_duplicate_names_select_first_marker() {
        let mut layer = layer();
        layer.sync_locations(&[Place::new("Temple", 1.0, 1.0), Place::new("Temple", 2.0, 2.0)], "");
        layer.select("Temple");
        assert_eq!(layer.animated_titles(), vec!["Temple"]);
        assert_eq!(layer.open_panel(), Some(MarkerId(0)));
    }

    #[test]
    fn test_click_selects_the_clicked_marker_among_same_names() {
        let mut layer = layer();
        layer.sync_locations(&[Place::new("Temple", 1.0, 1.0), Place::new("Temple", 2.0, 2.0)], "");
        layer.provider.calls.clear();

        let request = layer.select_marker(MarkerId(1)).unwrap();
        assert_eq!(request.title, "Temple");
        assert_eq!(layer.open_panel(), Some(MarkerId(1)));
        assert!(layer.provider().calls.contains(&Call::Animate(MarkerId(1), Some(Animation::Bounce))));
        assert!(layer.provider().calls.contains(&Call::Animate(MarkerId(0), None)));
        assert!(layer
            .provider()
            .calls
            .iter()
            .all(|c| !matches!(c, Call::Open(MarkerId(0), _))));

        // the title reported upward comes back as a selection and must not
        // move the panel to the first marker with that name
        assert!(layer.select("Temple").is_none());
        assert_eq!(layer.open_panel(), Some(MarkerId(1)));
        assert_eq!(layer.animated_titles(), vec!["Temple"]);
    }

    #[test]
    fn test_click_on_unknown_marker_clears_animations() {
        let mut layer = layer();
        layer.sync_locations(&places(), "");
        layer.select("Cafe A");

        assert!(layer.select_marker(MarkerId(42)).is_none());
        assert!(layer.animated_titles().is_empty());
        assert_eq!(layer.title_of(MarkerId(2)), Some("Esplanade One"));
        assert_eq!(layer.title_of(MarkerId(42)), None);
    }

    #[test]
    fn test_reselecting_open_marker_does_not_reopen() {
        let mut layer = layer();
        layer.sync_locations(&places(), "");
        assert!(layer.select("Cafe A").is_some());
        assert!(layer.select("Cafe A").is_none());

        layer.close_panel();
        assert!(layer.animated_titles().is_empty());
        assert!(layer.select("Cafe A").is_some());
    }

    #[test]
    fn test_lookup_error_is_shown_inline() {
        let mut layer = layer();
        layer.sync_locations(&places(), "");
        let request = layer.select("Cafe A").unwrap();

        let used = layer.complete_lookup(
            &request,
            Err(LookupError::Api { code: "1".to_string(), info: "x".to_string() }),
        );
        assert!(used);

        let Some(Call::Content(content)) = layer.provider().calls.last().cloned() else {
            panic!("expected panel content");
        };
        assert_eq!(
            content,
            PanelContent::Failed { title: "Cafe A".to_string(), message: "x".to_string() }
        );
        assert!(content.to_html().contains("color:red"));
    }

    #[test]
    fn test_stale_lookup_is_discarded() {
        let mut layer = layer();
        layer.sync_locations(&places(), "");
        let slow = layer.select("Cafe A").unwrap();
        let fast = layer.select("Esplanade One").unwrap();

        assert!(layer.complete_lookup(&fast, Ok(Vec::new())));
        layer.provider.calls.clear();

        assert!(!layer.complete_lookup(&slow, Ok(Vec::new())));
        assert!(layer.provider().calls.is_empty());
    }
}
