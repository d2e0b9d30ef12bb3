use dioxus::prelude::*;

use crate::components::PlaceItem;
use crate::places::Place;
use crate::utils::config;

/// Load status of the place list
#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Props, PartialEq, Clone)]
pub struct PlacesListProps {
    places: Vec<Place>,
    selected_title: String,
    status: ListStatus,
    on_select: EventHandler<String>,
}

#[component]
pub fn PlacesList(props: PlacesListProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div { id: config::PLACES_LIST_ID, class: "places-list",
            {match &props.status {
                ListStatus::Loading => rsx! { p { class: "places-status", "Loading places..." } },
                ListStatus::Failed(message) => rsx! {
                    p { class: "error", style: "color: red", "{message}" }
                },
                ListStatus::Loaded if props.places.is_empty() => rsx! {
                    p { class: "places-status", "No places match" }
                },
                ListStatus::Loaded => rsx! {
                    ul { "aria-label": "Places",
                        {props.places.iter().map(|place| {
                            rsx! {
                                PlaceItem {
                                    key: "{place.name}-{place.location.lat}-{place.location.lng}",
                                    place: place.clone(),
                                    selected: place.name == props.selected_title,
                                    on_select: move |title| on_select.call(title),
                                }
                            }
                        })}
                    }
                },
            }}
        }
    }
}
