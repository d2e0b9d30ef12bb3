//! Map rendering: marker lifecycle, info panel and the bridge to the
//! JavaScript map provider.

pub mod bootstrap;
pub mod bounds;
pub mod google;
pub mod info_panel;
pub mod markers;
pub mod provider;

pub use bootstrap::*;
pub use bounds::LatLngBounds;
pub use google::GoogleMapsProvider;
pub use info_panel::PanelContent;
pub use markers::{LookupRequest, MarkerLayer};
pub use provider::{Animation, MapProvider, MarkerId};
