use dioxus::prelude::*;

use crate::places::Place;

#[derive(Props, PartialEq, Clone)]
pub struct PlaceItemProps {
    place: Place,
    selected: bool,
    on_select: EventHandler<String>,
}

#[component]
pub fn PlaceItem(props: PlaceItemProps) -> Element {
    let name = props.place.name.clone();
    let class = if props.selected { "place-item selected" } else { "place-item" };

    rsx! {
        li { class: "{class}",
            button {
                r#type: "button",
                class: "place-button",
                "aria-pressed": "{props.selected}",
                onclick: move |_| props.on_select.call(name.clone()),
                "{props.place.name}"
            }
        }
    }
}
