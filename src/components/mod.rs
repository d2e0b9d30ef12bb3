//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like inputs, lists and the map.

mod filter_input;
pub use filter_input::FilterInput;

mod place_item;
pub use place_item::PlaceItem;

mod places_list;
pub use places_list::{ListStatus, PlacesList};

mod map_view;
pub use map_view::MapView;
