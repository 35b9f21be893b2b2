use crate::error::{LookupError, Result};
use address::Address;
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{Request, Uri};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;
use tracing::{debug, warn};

/// Plain-text address echo service queried by default.
pub const DEFAULT_SERVICE_URL: &str = "http://api.ipify.org/";

/// The internet-facing address as seen by the default echo service, or
/// [`Address::NONE`] on any failure.
///
/// `None` (or a zero duration) means no explicit deadline; the platform
/// defaults apply. A single attempt is made, with no retries.
pub async fn public_address(deadline: Option<Duration>) -> Address {
    public_address_from(DEFAULT_SERVICE_URL, deadline).await
}

/// Same as [`public_address`] but against a caller-chosen echo service.
pub async fn public_address_from(url: &str, deadline: Option<Duration>) -> Address {
    match try_public_address_from(url, deadline).await {
        Ok(addr) => addr,
        Err(err) => {
            warn!("Public address query against {} failed: {}", url, err);
            Address::NONE
        }
    }
}

/// Fallible variant of [`public_address_from`].
pub async fn try_public_address_from(url: &str, deadline: Option<Duration>) -> Result<Address> {
    match deadline {
        Some(limit) if !limit.is_zero() => tokio::time::timeout(limit, fetch_address(url))
            .await
            .map_err(|_| LookupError::Timeout)?,
        _ => fetch_address(url).await,
    }
}

/// One GET against the echo service; the body is expected to be the
/// caller's address in dotted-decimal, surrounded by optional whitespace.
async fn fetch_address(url: &str) -> Result<Address> {
    let uri: Uri = url
        .parse()
        .map_err(|_| LookupError::InvalidUrl(url.to_string()))?;
    let client = Client::builder(TokioExecutor::new()).build_http::<Empty<Bytes>>();

    let request = Request::builder()
        .uri(uri)
        .body(Empty::new())
        .map_err(|e| LookupError::Http(e.to_string()))?;
    let response = client
        .request(request)
        .await
        .map_err(|e| LookupError::Http(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }

    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| LookupError::Http(e.to_string()))?
        .to_bytes();
    let text = String::from_utf8_lossy(&body);
    let text = text.trim();
    debug!("Echo service {} answered {:?}", url, text);
    text.parse()
        .map_err(|_| LookupError::MalformedResponse(text.to_string()))
}
