//! HTTP endpoint for editor extensions
//!
//! Listens on localhost and accepts:
//! - GET /ping - liveness check
//! - POST /snippets - create a snippet from a posted selection
//!
//! When a token is configured every request must carry it in the
//! `X-Snipforge-Token` header.

mod handlers;
mod types;

pub use handlers::handle_create_snippet;
pub use types::{RequestHost, SnippetRequest};

use std::io::Read;

use anyhow::anyhow;
use tiny_http::{Response, Server};
use tracing::{error, info};

use crate::config::Config;
use crate::platform::PlatformFamily;

const AUTH_HEADER: &str = "X-Snipforge-Token";
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024; // 2 MiB

/// What request handlers share
///
/// Requests are served on a plain thread; `runtime` drives the async
/// create-snippet command for each of them.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub family: PlatformFamily,
    pub runtime: tokio::runtime::Handle,
}

pub struct SnippetServer {
    server: Server,
    state: ServerState,
    auth_token: Option<String>,
}

impl SnippetServer {
    /// Bind to `127.0.0.1:port`. Port 0 picks a free port.
    pub fn bind(state: ServerState, port: u16) -> anyhow::Result<Self> {
        let bind_addr = format!("127.0.0.1:{}", port);
        let server = Server::http(&bind_addr)
            .map_err(|e| anyhow!("failed to start server on {}: {}", bind_addr, e))?;

        let token = state.config.server.token.trim();
        let auth_token = (!token.is_empty()).then(|| token.to_string());

        Ok(Self {
            server,
            state,
            auth_token,
        })
    }

    pub fn local_port(&self) -> Option<u16> {
        self.server.server_addr().to_ip().map(|addr| addr.port())
    }

    /// Serve requests until the listener shuts down.
    pub fn run(self) {
        info!(
            "[snipforge:http] Server listening on port {:?} (auth: {})",
            self.local_port(),
            if self.auth_token.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        );

        for mut request in self.server.incoming_requests() {
            let method = request.method().to_string();
            let url = request.url().to_string();
            let path = url.split('?').next().unwrap_or(url.as_str());

            if !is_authorized(&request, self.auth_token.as_deref()) {
                respond_json(request, 401, serde_json::json!({ "error": "unauthorized" }));
                continue;
            }

            match (method.as_str(), path) {
                ("GET", "/ping") => {
                    respond_json(
                        request,
                        200,
                        serde_json::json!({
                            "status": "ok",
                            "version": env!("CARGO_PKG_VERSION"),
                        }),
                    );
                }
                ("POST", "/snippets") => {
                    let body = match read_request_body(&mut request) {
                        Ok(body) => body,
                        Err(response) => {
                            let _ = request.respond(response);
                            continue;
                        }
                    };
                    let (status, value) = handle_create_snippet(&self.state, &body);
                    respond_json(request, status, value);
                }
                _ => {
                    respond_json(request, 404, serde_json::json!({ "error": "not_found" }));
                }
            }
        }
    }
}

fn is_authorized(request: &tiny_http::Request, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return true;
    };

    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(AUTH_HEADER))
        .is_some_and(|h| h.value.as_str() == expected)
}

fn json_content_type() -> Option<tiny_http::Header> {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).ok()
}

fn json_response(status_code: u16, body: String) -> Response<std::io::Cursor<Vec<u8>>> {
    let response = Response::from_string(body).with_status_code(status_code);
    match json_content_type() {
        Some(header) => response.with_header(header),
        None => response,
    }
}

fn read_request_body(
    request: &mut tiny_http::Request,
) -> Result<String, Response<std::io::Cursor<Vec<u8>>>> {
    let mut body = String::new();
    let mut reader = request.as_reader().take((MAX_BODY_BYTES + 1) as u64);
    if let Err(e) = reader.read_to_string(&mut body) {
        error!("[snipforge:http] Failed to read body: {}", e);
        return Err(json_response(400, "{\"error\":\"bad_request\"}".to_string()));
    }

    if body.len() > MAX_BODY_BYTES {
        return Err(json_response(
            413,
            "{\"error\":\"payload_too_large\"}".to_string(),
        ));
    }

    Ok(body)
}

fn respond_json(request: tiny_http::Request, status_code: u16, value: serde_json::Value) {
    let body =
        serde_json::to_string(&value).unwrap_or_else(|_| "{\"error\":\"serialize\"}".to_string());
    let _ = request.respond(json_response(status_code, body));
}
