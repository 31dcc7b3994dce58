//! HTTP retrieval of the scores document.

use chrono::Utc;
use reqwest::header;
use tracing::debug;

use super::SourceError;

/// Fetch the scores document from `url`.
///
/// The producer republishes the document in place, so the request carries a
/// timestamp query parameter and a no-cache directive to defeat intermediary
/// caches. Non-2xx responses are transport errors.
pub async fn fetch_scores(url: &str) -> Result<String, SourceError> {
    let client = reqwest::Client::new();

    let response = client
        .get(url)
        .query(&[("t", Utc::now().timestamp_millis().to_string())])
        .header(header::CACHE_CONTROL, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status { status });
    }

    let text = response.text().await?;
    debug!("fetched {} bytes from {}", text.len(), url);

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scores.yaml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("models:\n"))
            .mount(&server)
            .await;

        let body = fetch_scores(&format!("{}/scores.yaml", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "models:\n");
    }

    #[tokio::test]
    async fn test_fetch_sends_cache_busting_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&server)
            .await;

        fetch_scores(&server.uri()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(request.url.query().unwrap_or_default().starts_with("t="));
        assert_eq!(
            request.headers.get(header::CACHE_CONTROL).unwrap(),
            "no-cache"
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetch_scores(&server.uri()).await.unwrap_err();
        match err {
            SourceError::Status { status } => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
