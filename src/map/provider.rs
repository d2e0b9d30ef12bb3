use super::bounds::LatLngBounds;
use super::info_panel::PanelContent;
use crate::places::Place;

/// Handle of a marker created through a [`MapProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Drop,
    Bounce,
}

/// Operations the marker layer needs from the map widget.
///
/// Calls are fire-and-forget: the widget lives on the other side of the
/// script bridge and reports user events back separately.
pub trait MapProvider {
    /// Create a visible marker for `place`, starting with the drop animation
    fn create_marker(&mut self, id: MarkerId, place: &Place, label: &str);

    /// Attach the marker to the map or detach it
    fn set_marker_visible(&mut self, id: MarkerId, visible: bool);

    fn set_marker_animation(&mut self, id: MarkerId, animation: Option<Animation>);

    fn fit_bounds(&mut self, bounds: &LatLngBounds);

    /// Anchor the info panel on the marker and show `content`
    fn open_info_panel(&mut self, id: MarkerId, content: &PanelContent);

    /// Replace the content of the open info panel
    fn set_info_panel_content(&mut self, content: &PanelContent);
}
