use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::languages::Entry;

/// Wikipedia REST summary endpoint. `{lang}` and `{article}` are substituted per entry.
pub const DEFAULT_ENDPOINT: &str =
    "https://{lang}.wikipedia.org/api/rest_v1/page/summary/{article}";

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("invalid URL: must be HTTP(S)")]
    InvalidScheme,

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request to {url} failed: status {code}")]
    Status { url: String, code: u16 },

    #[error("summary for ({lang}, {article}) has no \"extract\" field")]
    MissingExtract { lang: String, article: String },
}

/// Only the field we consume; everything else in the response is ignored.
#[derive(Debug, Deserialize)]
struct Summary {
    extract: Option<String>,
}

#[derive(Clone)]
pub struct SummaryClient {
    http: Client,
    endpoint: String,
}

impl SummaryClient {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn url_for(&self, entry: &Entry) -> Result<url::Url, SummaryError> {
        let raw = self
            .endpoint
            .replace("{lang}", entry.lang)
            .replace("{article}", entry.article);
        let parsed = url::Url::parse(&raw)?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            _ => Err(SummaryError::InvalidScheme),
        }
    }

    /// GETs the summary for `entry` and returns its `extract` text.
    ///
    /// Any non-success status is an error; there is no retry.
    pub async fn fetch_extract(&self, entry: &Entry) -> Result<String, SummaryError> {
        let url = self.url_for(entry)?;
        info!(lang = entry.lang, title = %entry.display_title(), "requesting {url}");

        let response = self
            .http
            .get(url.clone())
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummaryError::Status {
                url: url.to_string(),
                code: status.as_u16(),
            });
        }

        let summary: Summary = response.json().await?;
        let extract = summary
            .extract
            .ok_or_else(|| SummaryError::MissingExtract {
                lang: entry.lang.to_string(),
                article: entry.article.to_string(),
            })?;

        debug!(lang = entry.lang, chars = extract.chars().count(), "summary received");
        Ok(extract)
    }
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SummaryClient {
        SummaryClient::new(
            Client::new(),
            format!("{}/{{lang}}/summary/{{article}}", server.uri()),
        )
    }

    const DE: Entry = Entry {
        lang: "de",
        article: "Wasser",
    };

    #[tokio::test]
    async fn fetch_extract_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/de/summary/Wasser"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "Wasser",
                "extract": "Wasser ist ..."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let extract = client_for(&server).fetch_extract(&DE).await.unwrap();
        assert_eq!(extract, "Wasser ist ...");
    }

    #[tokio::test]
    async fn fetch_extract_404_returns_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_extract(&DE).await;
        match result {
            Err(SummaryError::Status { code: 404, url }) => {
                assert!(url.ends_with("/de/summary/Wasser"), "got: {url}");
            }
            other => panic!("expected Status(404), got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_extract_500_returns_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_extract(&DE).await;
        assert!(matches!(result, Err(SummaryError::Status { code: 500, .. })));
    }

    #[tokio::test]
    async fn fetch_extract_without_field_is_missing_extract() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"title": "Wasser"})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_extract(&DE).await;
        assert!(matches!(
            result,
            Err(SummaryError::MissingExtract { ref lang, ref article })
                if lang == "de" && article == "Wasser"
        ));
    }

    #[tokio::test]
    async fn fetch_extract_non_json_body_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_extract(&DE).await;
        assert!(matches!(result, Err(SummaryError::Network(_))));
    }
}
