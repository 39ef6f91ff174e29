//! `florist health` — check a running Flower instance.
//!
//! Sends a `GET /healthcheck` request to the specified URL and reports
//! the result. Flower answers with a plain `OK` body when the broker
//! connection is alive.

use http_body_util::BodyExt;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::cli::HealthArgs;
use crate::error::FloristError;

pub async fn execute(args: HealthArgs) -> Result<(), FloristError> {
    let url = format!("{}/healthcheck", args.url.trim_end_matches('/'));
    let uri: hyper::Uri =
        url.parse()
            .map_err(|e: hyper::http::uri::InvalidUri| FloristError::UriParse {
                source: Box::new(e),
            })?;

    let connector = hyper_util::client::legacy::connect::HttpConnector::new();
    let client = Client::builder(TokioExecutor::new()).build(connector);

    let req = hyper::Request::builder()
        .uri(uri)
        .body(http_body_util::Full::new(bytes::Bytes::new()))
        .map_err(|e| FloristError::HttpRequest {
            source: Box::new(e),
        })?;

    let response = tokio::time::timeout(std::time::Duration::from_secs(10), client.request(req))
        .await
        .map_err(|_| FloristError::HttpRequest {
            source: "health check timed out after 10s".into(),
        })?
        .map_err(|e| FloristError::HttpRequest {
            source: Box::new(e),
        })?;

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| FloristError::HttpRequest {
            source: Box::new(e),
        })?
        .to_bytes();

    if !status.is_success() {
        return Err(FloristError::HealthCheckFailed(status));
    }

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "healthy": true,
                "status": status.as_u16(),
            })
        );
        return Ok(());
    }

    println!("\u{2713} flower is healthy ({})", args.url);
    let body_str = String::from_utf8_lossy(&body);
    if !body_str.trim().is_empty() {
        println!("  response: {}", body_str.trim());
    }

    Ok(())
}
