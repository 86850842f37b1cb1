use crate::config::AppConfig;
use crate::domain::{
    brand::BrandDirectory,
    error::FetchError,
    models::{CompanyCandidate, PalettePayload},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("brandhue/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteRequest<'a> {
    logo_url: &'a str,
}

/// Talks to the autocomplete and color-extraction services over HTTPS.
pub struct HttpBrandDirectory {
    client: reqwest::Client,
    autocomplete_url: String,
    palette_url: String,
}

impl HttpBrandDirectory {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            autocomplete_url: config.autocomplete_url.clone(),
            palette_url: config.palette_url.clone(),
        })
    }

    /// Status check + JSON decode, mapping each failure to its kind.
    async fn decode<T: DeserializeOwned>(
        response: std::result::Result<reqwest::Response, reqwest::Error>,
    ) -> std::result::Result<T, FetchError> {
        let response = response.map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl BrandDirectory for HttpBrandDirectory {
    async fn suggest_companies(
        &self,
        term: &str,
    ) -> std::result::Result<Vec<CompanyCandidate>, FetchError> {
        log::debug!("GET {} query={term:?}", self.autocomplete_url);
        let response = self
            .client
            .get(&self.autocomplete_url)
            .query(&[("query", term)])
            .send()
            .await;
        Self::decode(response).await
    }

    async fn extract_palette(
        &self,
        logo_url: &str,
    ) -> std::result::Result<PalettePayload, FetchError> {
        log::debug!("POST {} logoUrl={logo_url}", self.palette_url);
        let response = self
            .client
            .post(&self.palette_url)
            .json(&PaletteRequest { logo_url })
            .send()
            .await;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answers a single request with `status` and `body`, handing back the
    /// raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                request.extend_from_slice(&chunk[..n]);
                if n == 0 || request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base, handle)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..head_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= head_end + 4 + content_length
    }

    fn adapter_for(base: &str) -> HttpBrandDirectory {
        HttpBrandDirectory::new(&AppConfig {
            autocomplete_url: format!("{base}/suggest"),
            palette_url: format!("{base}/colors"),
            request_timeout_secs: 5,
            ..AppConfig::default()
        })
        .unwrap()
    }

    fn query_of(request: &str) -> Vec<(String, String)> {
        let target = request.split_whitespace().nth(1).unwrap();
        reqwest::Url::parse(&format!("http://localhost{target}"))
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[tokio::test]
    async fn test_suggest_sends_raw_term_as_query() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"name":"Acme","domain":"acme.com","logo":"https://x/logo.png"}]"#,
        )
        .await;

        let candidates = adapter_for(&base)
            .suggest_companies(" acme co ")
            .await
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].domain, "acme.com");
        assert_eq!(candidates[0].primary_color, "");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /suggest?"), "got {request:?}");
        assert_eq!(
            query_of(&request),
            vec![("query".to_string(), " acme co ".to_string())]
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_status_error() {
        let (base, server) = serve_once("503 Service Unavailable", "{}").await;

        let err = adapter_for(&base)
            .suggest_companies("acme")
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Status(503));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_object_instead_of_list_is_malformed() {
        let (base, server) = serve_once("200 OK", r#"{"name":"Acme"}"#).await;

        let err = adapter_for(&base)
            .suggest_companies("acme")
            .await
            .unwrap_err();
        assert!(err.is_malformed(), "got {err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_palette_posts_logo_url() {
        let (base, server) = serve_once(
            "200 OK",
            r##"{"vibrant":{"hex":"#E03A3E","population":12},"darkMuted":{"hex":"#2B1F1F"}}"##,
        )
        .await;

        let payload = adapter_for(&base)
            .extract_palette("https://x/logo.png")
            .await
            .unwrap();
        assert_eq!(payload.vibrant.map(|c| c.hex), Some("#E03A3E".to_string()));
        assert_eq!(payload.dark_muted.map(|c| c.hex), Some("#2B1F1F".to_string()));
        assert!(payload.muted.is_none());

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /colors "), "got {request:?}");
        assert!(request.ends_with(r#"{"logoUrl":"https://x/logo.png"}"#), "got {request:?}");
    }

    #[tokio::test]
    async fn test_swatch_without_hex_is_malformed() {
        let (base, server) = serve_once("200 OK", r#"{"vibrant":{"population":3}}"#).await;

        let err = adapter_for(&base)
            .extract_palette("https://x/logo.png")
            .await
            .unwrap_err();
        assert!(err.is_malformed(), "got {err:?}");
        server.await.unwrap();
    }

    #[test]
    fn test_palette_request_body() {
        let body = serde_json::to_value(PaletteRequest {
            logo_url: "https://x/logo.png",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "logoUrl": "https://x/logo.png" }));
    }

    #[test]
    fn test_builds_from_default_config() {
        let adapter = HttpBrandDirectory::new(&AppConfig::default()).unwrap();
        assert!(adapter.autocomplete_url.starts_with("https://"));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let config = AppConfig {
            // Port 9 on localhost: nothing listens there in CI.
            autocomplete_url: "http://127.0.0.1:9/suggest".to_string(),
            request_timeout_secs: 2,
            ..AppConfig::default()
        };
        let adapter = HttpBrandDirectory::new(&config).unwrap();
        let err = adapter.suggest_companies("acme").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    }
}
