use dioxus::logger::tracing;
use serde_json::Value;

use crate::contexts::{LookupError, LookupResult};
use crate::utils::config;

/// A reference article related to a place
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLink {
    pub title: String,
    pub url: String,
}

/// Look up reference articles whose titles match `title`
pub async fn lookup(title: &str) -> LookupResult<Vec<ReferenceLink>> {
    tracing::info!("Looking up references for {}", title);

    let response = client()?
        .get(config::REFERENCE_ENDPOINT)
        .query(&[
            ("origin", "*"),
            ("action", "opensearch"),
            ("format", "json"),
            ("search", title),
        ])
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    parse_lookup_response(status, &body)
}

// Browsers forbid overriding the User-Agent header, so wasm builds send theirs.
#[cfg(not(target_arch = "wasm32"))]
fn client() -> LookupResult<reqwest::Client> {
    Ok(reqwest::Client::builder().user_agent(config::USER_AGENT).build()?)
}

#[cfg(target_arch = "wasm32")]
fn client() -> LookupResult<reqwest::Client> {
    Ok(reqwest::Client::new())
}

/// Check the HTTP status before parsing the body
pub fn parse_lookup_response(status: u16, body: &str) -> LookupResult<Vec<ReferenceLink>> {
    if status != 200 {
        tracing::error!("Reference lookup returned status {}", status);
        return Err(LookupError::Status(status));
    }
    parse_lookup(body)
}

/// Parse an opensearch response: `[query, [titles...], [descriptions...], [urls...]]`,
/// or an `{ error: { code, info } }` object.
pub fn parse_lookup(body: &str) -> LookupResult<Vec<ReferenceLink>> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(error) = value.get("error") {
        let code = error.get("code").map(scalar_to_string).unwrap_or_default();
        let info = error.get("info").map(scalar_to_string).unwrap_or_default();
        return Err(LookupError::Api { code, info });
    }

    let items = value
        .as_array()
        .ok_or_else(|| LookupError::Decode("expected an array".to_string()))?;

    let titles = match items.get(1).and_then(Value::as_array) {
        Some(titles) => titles,
        None => return Ok(Vec::new()),
    };
    let urls = items.get(3).and_then(Value::as_array);

    let links = titles
        .iter()
        .enumerate()
        .filter_map(|(i, title)| {
            let title = title.as_str().filter(|t| !t.is_empty())?;
            let url = urls
                .and_then(|urls| urls.get(i))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| article_url(title));
            Some(ReferenceLink {
                title: title.to_string(),
                url,
            })
        })
        .collect();

    Ok(links)
}

pub fn article_url(title: &str) -> String {
    format!("{}{}", config::REFERENCE_ARTICLE_BASE, title.replace(' ', "_"))
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_titles_and_urls_are_paired() {
        let body = json!([
            "Lingaraj",
            ["Lingaraj Temple", "Lingaraj Stadium"],
            ["", ""],
            [
                "https://en.wikipedia.org/wiki/Lingaraja_Temple",
                "https://en.wikipedia.org/wiki/Lingaraj_Stadium"
            ]
        ])
        .to_string();

        let links = parse_lookup(&body).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Lingaraj Temple");
        assert_eq!(links[0].url, "https://en.wikipedia.org/wiki/Lingaraja_Temple");
    }

    #[test]
    fn test_missing_urls_fall_back_to_article_path() {
        let body = json!(["Cafe", ["Cafe A", ""]]).to_string();
        let links = parse_lookup(&body).unwrap();
        assert_eq!(
            links,
            vec![ReferenceLink {
                title: "Cafe A".to_string(),
                url: "https://en.wikipedia.org/wiki/Cafe_A".to_string(),
            }]
        );
    }

    #[test]
    fn test_error_body_is_api_error() {
        let body = json!({ "error": { "code": 1, "info": "x" } }).to_string();
        let err = parse_lookup(&body).unwrap_err();
        assert_eq!(err, LookupError::Api { code: "1".to_string(), info: "x".to_string() });
        assert_eq!(err.to_string(), "x");
    }

    #[test]
    fn test_non_ok_status_is_an_error() {
        let body = json!(["Cafe", ["Cafe A"]]).to_string();
        let err = parse_lookup_response(503, &body).unwrap_err();
        assert_eq!(err, LookupError::Status(503));
        assert_eq!(err.to_string(), "Reference lookup failed with status 503");

        assert_eq!(parse_lookup_response(200, &body).unwrap().len(), 1);
    }

    #[test]
    fn test_requests_identify_the_app() {
        assert!(config::USER_AGENT.starts_with("neighborhood-map/"));
        assert!(client().is_ok());
    }

    #[test]
    fn test_unexpected_shape() {
        assert!(matches!(parse_lookup("{}"), Err(LookupError::Decode(_))));
        assert!(matches!(parse_lookup("not json"), Err(LookupError::Decode(_))));
        assert_eq!(parse_lookup("[\"only query\"]").unwrap(), Vec::new());
    }
}
