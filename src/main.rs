use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use views::{Navbar, Search};

mod components;
mod contexts;
mod map;
mod places;
mod reference;
mod utils;
mod views;

use contexts::ListPanelContext;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Search {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus_desktop::{Config, WindowBuilder};

        LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_window(
                    WindowBuilder::new().with_title("Neighborhood Map")
                ),
            )
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    LaunchBuilder::web().launch(App);
}

#[component]
fn App() -> Element {
    // The list panel starts open; the header button toggles it
    let is_open = use_signal(|| true);
    use_context_provider(|| ListPanelContext { is_open });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
