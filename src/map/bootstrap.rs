use dioxus::document::Eval;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use serde::Deserialize;

use super::google::MAP_GLOBAL;
use crate::contexts::{ProviderError, ProviderResult};
use crate::utils::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Once-only guard around loading the map provider script
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProviderLoader {
    state: LoadState,
}

impl ProviderLoader {
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Claim the load. Only the first call from `Idle` gets `true`.
    pub fn begin(&mut self) -> bool {
        if self.state != LoadState::Idle {
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    pub fn finish(&mut self, result: &ProviderResult<()>) {
        self.state = match result {
            Ok(()) => LoadState::Ready,
            Err(_) => LoadState::Failed,
        };
    }
}

/// Events the attached map reports back to Rust
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MapEvent {
    Ready,
    Click { id: u32, title: String },
    Close,
}

/// Load the provider script unless it is already loaded or loading, and return
/// the resulting state. Safe to call any number of times.
pub async fn ensure_provider_loaded(mut loader: Signal<ProviderLoader>) -> LoadState {
    if !loader.write().begin() {
        return loader.peek().state();
    }

    let src = config::maps_script_url();
    let result = load_script(&src).await;
    if let Err(e) = &result {
        tracing::error!("{}", e);
    }
    loader.write().finish(&result);
    loader.peek().state()
}

async fn load_script(src: &str) -> ProviderResult<()> {
    let script = format!(
        r#"
        if (typeof window.google === 'object' && typeof window.google.maps === 'object') {{
            return true;
        }}
        return await new Promise((resolve) => {{
            const script = document.createElement('script');
            script.src = {src};
            script.async = true;
            script.onload = () => resolve(true);
            script.onerror = () => resolve(false);
            document.head.appendChild(script);
        }});
        "#,
        src = serde_json::to_string(src).unwrap_or_default(),
    );

    let loaded: bool = document::eval(&script).join().await?;
    if loaded {
        tracing::info!("Map provider loaded");
        Ok(())
    } else {
        Err(ProviderError::ScriptLoad(src.to_string()))
    }
}

/// Create the map inside the map container and return the channel its
/// [`MapEvent`]s arrive on. The channel lives as long as the returned handle.
pub fn attach_map() -> Eval {
    let (lat, lng) = config::MAP_CENTER;
    document::eval(&format!(
        r#"
        const nm = {{
            map: new google.maps.Map(document.getElementById({container}), {{
                center: {{ lat: {lat}, lng: {lng} }},
                zoom: {zoom},
            }}),
            info: new google.maps.InfoWindow(),
            markers: {{}},
        }};
        nm.onMarkerClick = (id, title) => dioxus.send({{ kind: 'click', id, title }});
        nm.info.addListener('closeclick', () => dioxus.send({{ kind: 'close' }}));
        {global} = nm;
        dioxus.send({{ kind: 'ready' }});
        await new Promise(() => {{}});
        "#,
        container = serde_json::to_string(config::MAP_CONTAINER_ID).unwrap_or_default(),
        zoom = config::MAP_ZOOM,
        global = MAP_GLOBAL,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_begins_only_once() {
        let mut loader = ProviderLoader::default();
        assert_eq!(loader.state(), LoadState::Idle);
        assert!(loader.begin());
        assert!(!loader.begin());
        assert_eq!(loader.state(), LoadState::Loading);

        loader.finish(&Ok(()));
        assert_eq!(loader.state(), LoadState::Ready);
        assert!(!loader.begin());
    }

    #[test]
    fn test_failed_load_is_terminal() {
        let mut loader = ProviderLoader::default();
        loader.begin();
        loader.finish(&Err(ProviderError::ScriptLoad("x".to_string())));
        assert_eq!(loader.state(), LoadState::Failed);
        assert!(!loader.begin());
    }

    #[test]
    fn test_map_events_decode() {
        let click: MapEvent =
            serde_json::from_str(r#"{"kind":"click","id":1,"title":"Temple"}"#).unwrap();
        assert_eq!(click, MapEvent::Click { id: 1, title: "Temple".to_string() });
        let close: MapEvent = serde_json::from_str(r#"{"kind":"close"}"#).unwrap();
        assert_eq!(close, MapEvent::Close);
    }
}
