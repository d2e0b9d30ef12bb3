use dioxus::prelude::*;
use instant::Instant;
use std::time::Duration;

use crate::utils::{config, time_utils::sleep, Debouncer, Settle};

#[derive(Props, PartialEq, Clone)]
pub struct FilterInputProps {
    /// Called with the settled query after the quiet period
    on_query: EventHandler<String>,
    #[props(default = config::FILTER_DEBOUNCE_MS)]
    debounce_ms: u64,
}

#[component]
pub fn FilterInput(props: FilterInputProps) -> Element {
    let mut text = use_signal(String::new);
    let mut debouncer = use_signal(|| Debouncer::new(Duration::from_millis(props.debounce_ms)));
    let on_query = props.on_query;

    rsx! {
        div { class: "filter-container",
            label { r#for: "filter-input", class: "visually-hidden", "Filter places" }
            input {
                id: "filter-input",
                class: "filter-input",
                r#type: "text",
                placeholder: "Filter places",
                value: "{text}",
                oninput: move |evt| {
                    let value = evt.value();
                    text.set(value.clone());
                    let generation = debouncer.write().push(value, Instant::now());

                    spawn(async move {
                        let mut wait = debouncer.peek().window();
                        loop {
                            sleep(wait).await;
                            let outcome = debouncer.write().settle(generation, Instant::now());
                            match outcome {
                                Settle::Ready(query) => {
                                    on_query.call(query);
                                    break;
                                }
                                Settle::Wait(remaining) => wait = remaining,
                                Settle::Stale => break,
                            }
                        }
                    });
                },
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        text.set(String::new());
                        debouncer.write().cancel();
                        on_query.call(String::new());
                    }
                }
            }
        }
    }
}
