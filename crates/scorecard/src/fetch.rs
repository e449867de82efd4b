//! Shared fetch helpers over the [`HttpTransport`] boundary.
//!
//! Every adapter issues its requests through these functions, so the
//! standard headers, status handling, and the log-and-default absorption
//! policy live in exactly one place.

use serde::de::DeserializeOwned;

use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::platform::{Result, ScrapeError};

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = "scorecard/0.1";

/// Extra headers as borrowed pairs; owned copies are built per request.
pub type ExtraHeaders<'a> = &'a [(&'a str, &'a str)];

fn build_headers(accept: &str, extra: ExtraHeaders<'_>) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Accept".to_string(), accept.to_string()),
        ("User-Agent".to_string(), USER_AGENT.to_string()),
    ];
    for (k, v) in extra {
        headers.push(((*k).to_string(), (*v).to_string()));
    }
    headers
}

fn check_status(url: &str, response: &HttpResponse) -> Result<()> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ScrapeError::not_found(url.to_string())),
        status => {
            let message = String::from_utf8_lossy(&response.body);
            let message: String = message.chars().take(200).collect();
            Err(ScrapeError::api(status, message))
        }
    }
}

/// GET a URL and return the body as text.
pub async fn get_text(
    transport: &dyn HttpTransport,
    url: &str,
    extra: ExtraHeaders<'_>,
) -> Result<String> {
    let request = HttpRequest {
        method: HttpMethod::Get,
        url: url.to_string(),
        headers: build_headers("text/html,*/*", extra),
        body: Vec::new(),
    };
    let response = transport.send(request).await?;
    check_status(url, &response)?;
    Ok(String::from_utf8_lossy(&response.body).to_string())
}

/// GET a URL and deserialize the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    url: &str,
    extra: ExtraHeaders<'_>,
) -> Result<T> {
    let request = HttpRequest {
        method: HttpMethod::Get,
        url: url.to_string(),
        headers: build_headers("application/json", extra),
        body: Vec::new(),
    };
    let response = transport.send(request).await?;
    check_status(url, &response)?;
    serde_json::from_slice(&response.body).map_err(Into::into)
}

/// POST a JSON body and deserialize the JSON response.
///
/// This is the GraphQL path: the body carries the operation and variables.
pub async fn post_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    url: &str,
    body: &serde_json::Value,
    extra: ExtraHeaders<'_>,
) -> Result<T> {
    let mut headers = build_headers("application/json", extra);
    headers.push(("Content-Type".to_string(), "application/json".to_string()));

    let request = HttpRequest {
        method: HttpMethod::Post,
        url: url.to_string(),
        headers,
        body: serde_json::to_vec(body)?,
    };
    let response = transport.send(request).await?;
    check_status(url, &response)?;
    serde_json::from_slice(&response.body).map_err(Into::into)
}

/// Run a fallible fetch and absorb its error into a fallback value.
///
/// The single home for "best-effort fetch, log-and-default": secondary
/// features (recent submissions, pinned repos, heatmaps, embedded rating
/// arrays) route through here so their failure can never take down a
/// primary scrape.
pub async fn best_effort<T, F>(context: &'static str, fallback: T, fut: F) -> T
where
    F: std::future::Future<Output = Result<T>>,
{
    match fut.await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(context, error = %e, "best-effort fetch failed; using default");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MockTransport;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u32,
    }

    #[tokio::test]
    async fn get_json_sends_standard_headers_and_decodes() {
        let transport = MockTransport::new();
        transport.push_ok(HttpMethod::Get, "https://api.test/x", r#"{"value":7}"#);

        let payload: Payload = get_json(&transport, "https://api.test/x", &[])
            .await
            .expect("decode");
        assert_eq!(payload, Payload { value: 7 });

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert!(
            requests[0]
                .headers
                .iter()
                .any(|(k, v)| k == "User-Agent" && v == USER_AGENT)
        );
        assert!(
            requests[0]
                .headers
                .iter()
                .any(|(k, v)| k == "Accept" && v == "application/json")
        );
    }

    #[tokio::test]
    async fn get_text_returns_body() {
        let transport = MockTransport::new();
        transport.push_ok(HttpMethod::Get, "https://site.test/page", "<html>hi</html>");

        let body = get_text(&transport, "https://site.test/page", &[])
            .await
            .expect("text");
        assert_eq!(body, "<html>hi</html>");
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_error() {
        let transport = MockTransport::new();
        transport.push_status(HttpMethod::Get, "https://api.test/broken", 503);

        let err = get_text(&transport, "https://api.test/broken", &[])
            .await
            .expect_err("should fail");
        assert!(matches!(err, ScrapeError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn status_404_maps_to_not_found() {
        let transport = MockTransport::new();
        transport.push_status(HttpMethod::Get, "https://api.test/missing", 404);

        let err = get_json::<Payload>(&transport, "https://api.test/missing", &[])
            .await
            .expect_err("should fail");
        assert!(matches!(err, ScrapeError::NotFound { .. }));
    }

    #[tokio::test]
    async fn post_json_carries_serialized_body() {
        let transport = MockTransport::new();
        transport.push_ok(HttpMethod::Post, "https://gql.test/", r#"{"value":1}"#);

        let body = serde_json::json!({"query": "{ me }"});
        let _: Payload = post_json(&transport, "https://gql.test/", &body, &[])
            .await
            .expect("decode");

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["query"], "{ me }");
        assert!(
            requests[0]
                .headers
                .iter()
                .any(|(k, v)| k == "Content-Type" && v == "application/json")
        );
    }

    #[tokio::test]
    async fn best_effort_returns_value_on_success() {
        let out = best_effort("test", 0u32, async { Ok(41) }).await;
        assert_eq!(out, 41);
    }

    #[tokio::test]
    async fn best_effort_returns_fallback_on_error() {
        let out = best_effort("test", 99u32, async {
            Err(ScrapeError::network("unreachable"))
        })
        .await;
        assert_eq!(out, 99);
    }
}
