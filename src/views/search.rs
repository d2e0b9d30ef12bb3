use dioxus::{logger::tracing, prelude::*};

use crate::components::{FilterInput, ListStatus, MapView, PlacesList};
use crate::contexts::ListPanelContext;
use crate::places::{fetch_places, filter_places, Place, PlacesQuery};

const SEARCH_CSS: Asset = asset!("/assets/styling/search.css");

/// Owns the fetched places, the filter query and the selected title, and hands
/// the filtered places to the list and the map
#[component]
pub fn Search() -> Element {
    let panel = use_context::<ListPanelContext>();

    let mut locations = use_signal(Vec::<Place>::new);
    let mut status = use_signal(|| ListStatus::Loading);
    let mut filter_query = use_signal(String::new);
    let mut selected_title = use_signal(String::new);

    // Single fetch at mount; a failure stays on screen for this load
    use_effect(move || {
        spawn(async move {
            match fetch_places(&PlacesQuery::default()).await {
                Ok(places) => {
                    locations.set(places);
                    status.set(ListStatus::Loaded);
                }
                Err(e) => {
                    tracing::error!("Failed to fetch places: {}", e);
                    status.set(ListStatus::Failed(e.to_string()));
                }
            }
        });
    });

    let filtered = use_memo(move || filter_places(&locations.read(), &filter_query.read()));

    rsx! {
        document::Link { rel: "stylesheet", href: SEARCH_CSS }
        main { class: "search-container", role: "main", "aria-label": "Neighborhood Map",
            section { id: "placelistview", class: panel.panel_class(),
                FilterInput {
                    on_query: move |query| filter_query.set(query)
                }
                PlacesList {
                    places: filtered(),
                    selected_title: selected_title(),
                    status: status(),
                    on_select: move |title| selected_title.set(title)
                }
            }
            MapView {
                locations: filtered(),
                filter_text: filter_query(),
                selected_title: selected_title(),
                on_select: move |title| selected_title.set(title)
            }
        }
    }
}
