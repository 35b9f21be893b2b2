use address::Address;
use anyhow::Result;
use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Mock what-is-my-address service.
///
/// `GET /` answers with the advertised address as plain text. The other
/// endpoints misbehave on purpose so the degradation paths can be
/// exercised: `/garbage` returns a non-address body, `/empty` an empty
/// one, `/error` an HTTP 500, and `/slow` sleeps before answering.
pub struct MockAddressService {
    listener: TcpListener,
    local_addr: SocketAddr,
    advertised: Address,
}

impl MockAddressService {
    /// Bind on an ephemeral loopback port.
    pub async fn start(advertised: Address) -> Result<Self> {
        Self::bind(0, advertised).await
    }

    pub async fn bind(port: u16, advertised: Address) -> Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", port)).await?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            listener,
            local_addr,
            advertised,
        })
    }

    /// Base URL of the well-behaved endpoint.
    pub fn url(&self) -> String {
        format!("http://{}/", self.local_addr)
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("http://{}{}", self.local_addr, path)
    }

    pub async fn run(self) -> Result<()> {
        info!("Mock address service listening on {}", self.local_addr);
        loop {
            match self.listener.accept().await {
                Ok((stream, _addr)) => {
                    let advertised = self.advertised;
                    tokio::spawn(async move {
                        let io = TokioIo::new(stream);
                        let service =
                            service_fn(move |req| handle_request(req, advertised));
                        if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                            error!("Error serving connection: {}", e);
                        }
                    });
                }
                Err(e) => {
                    error!("Failed to accept connection: {}", e);
                }
            }
        }
    }
}

async fn handle_request(
    req: Request<hyper::body::Incoming>,
    advertised: Address,
) -> std::result::Result<Response<Full<Bytes>>, hyper::Error> {
    let response = match req.uri().path() {
        "/" => text_response(advertised.to_string()),
        "/garbage" => text_response("this-is-not-an-address".to_string()),
        "/empty" => text_response(String::new()),
        "/error" => status_response(StatusCode::INTERNAL_SERVER_ERROR),
        "/slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            text_response(advertised.to_string())
        }
        _ => status_response(StatusCode::NOT_FOUND),
    };
    Ok(response)
}

fn text_response(body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

fn status_response(status: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::new()))
        .unwrap()
}
