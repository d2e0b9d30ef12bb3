use dioxus::{logger::tracing, prelude::*};

use crate::map::{
    attach_map, ensure_provider_loaded, GoogleMapsProvider, LoadState, LookupRequest, MapEvent,
    MarkerId, MarkerLayer, ProviderLoader,
};
use crate::places::Place;
use crate::reference;
use crate::utils::config;

const MAP_CSS: Asset = asset!("/assets/styling/map.css");

#[derive(Props, PartialEq, Clone)]
pub struct MapViewProps {
    locations: ReadOnlySignal<Vec<Place>>,
    filter_text: ReadOnlySignal<String>,
    selected_title: ReadOnlySignal<String>,
    on_select: EventHandler<String>,
}

/// Run the reference lookup for a freshly opened info panel and fill it in
fn spawn_lookup(mut layer: Signal<MarkerLayer<GoogleMapsProvider>>, request: LookupRequest) {
    spawn(async move {
        let result = reference::lookup(&request.title).await;
        layer.write().complete_lookup(&request, result);
    });
}

#[component]
pub fn MapView(props: MapViewProps) -> Element {
    let MapViewProps {
        locations,
        filter_text,
        selected_title,
        on_select,
    } = props;

    let loader = use_signal(ProviderLoader::default);
    let mut map_ready = use_signal(|| false);
    let mut layer = use_signal(|| MarkerLayer::new(GoogleMapsProvider));

    // Load the provider once, attach the map and pump its events
    use_effect(move || {
        spawn(async move {
            if ensure_provider_loaded(loader).await != LoadState::Ready {
                return;
            }

            let mut events = attach_map();
            loop {
                let event = match events.recv::<MapEvent>().await {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::error!("Map event channel closed: {}", e);
                        break;
                    }
                };
                match event {
                    MapEvent::Ready => map_ready.set(true),
                    MapEvent::Click { id, title } => {
                        let id = MarkerId(id);
                        let request = layer.write().select_marker(id);
                        if let Some(request) = request {
                            spawn_lookup(layer, request);
                        }
                        let title = layer.peek().title_of(id).map(str::to_string).unwrap_or(title);
                        on_select.call(title);
                    }
                    MapEvent::Close => layer.write().close_panel(),
                }
            }
        });
    });

    use_effect(move || {
        let places = locations();
        if !map_ready() || places.is_empty() {
            return;
        }
        let filter = filter_text.peek().clone();
        layer.write().sync_locations(&places, &filter);
    });

    use_effect(move || {
        let filter = filter_text();
        if map_ready() {
            layer.write().apply_filter(&filter);
        }
    });

    use_effect(move || {
        let title = selected_title();
        // nothing has been picked yet
        if !map_ready() || title.is_empty() {
            return;
        }
        let request = layer.write().select(&title);
        if let Some(request) = request {
            spawn_lookup(layer, request);
        }
    });

    let failed = loader.read().state() == LoadState::Failed;

    rsx! {
        document::Link { rel: "stylesheet", href: MAP_CSS }
        section { id: "maptab", role: "application",
            div {
                id: config::MAP_CONTAINER_ID,
                class: "map",
                hidden: failed,
                "aria-label": "Places on Map",
                "aria-describedby": "map-help",
            }
            div { id: "map-help",
                p {
                    "Map showing the places as per the "
                    a {
                        target: "_blank",
                        rel: "noopener noreferrer",
                        href: "https://developer.foursquare.com/",
                        "Foursquare API"
                    }
                }
            }
            if failed {
                MapError {}
            }
        }
    }
}

/// Static panel shown in place of the map when the provider script cannot load
#[component]
fn MapError() -> Element {
    rsx! {
        div { id: "map-error", "aria-label": "Can not load the Map",
            p {
                span { class: "error", "This page can not load Google Maps correctly." }
                br {}
                em { "Google Map API now requires the use of a valid API Key." }
                br {}
                a { href: "https://developers.google.com/maps/documentation/javascript/get-api-key",
                    "Go get one!"
                }
            }
        }
    }
}
