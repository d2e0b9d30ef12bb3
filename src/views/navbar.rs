use crate::contexts::ListPanelContext;
use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let mut panel = use_context::<ListPanelContext>();
    let expanded = (panel.is_open)();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            header { class: "app-header",
                button {
                    class: "menu-toggle",
                    r#type: "button",
                    "aria-label": "Toggle places list",
                    "aria-expanded": "{expanded}",
                    "aria-controls": "placelistview",
                    onclick: move |_| panel.toggle(),
                    "☰"
                }
                h1 { class: "app-title", "Neighborhood Map" }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
