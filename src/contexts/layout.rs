use dioxus::prelude::*;

/// Context for sharing the list panel toggle between the header and the search view
#[derive(Clone, Copy)]
pub struct ListPanelContext {
    pub is_open: Signal<bool>,
}

impl ListPanelContext {
    pub fn toggle(&mut self) {
        let open = *self.is_open.peek();
        self.is_open.set(!open);
    }

    /// CSS class for the list panel in its current state
    pub fn panel_class(&self) -> &'static str {
        list_panel_class(*self.is_open.read())
    }
}

pub fn list_panel_class(is_open: bool) -> &'static str {
    if is_open {
        "listview open"
    } else {
        "listview"
    }
}
