use axum::extract::Path;
use axum::http::HeaderMap;
use serde::Serialize;
use url::Url;

use crate::client;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Serialize)]
pub struct ChatSocket {
    pub url: String,
}

/// GET /api/orders/:id/chat - WebSocket URL for the order's live thread
///
/// The socket host is the system of record; this just derives the ws(s)
/// endpoint from the backend base URL and threads the caller's own token
/// through as a query parameter.
pub async fn chat_socket(Path(id): Path<i64>, headers: HeaderMap) -> ApiResult<ChatSocket> {
    let token = crate::middleware::auth::extract_jwt_from_headers(&headers)
        .map_err(ApiError::unauthorized)?;

    let url = socket_url(client::backend().base_url(), id, &token)
        .map_err(|e| ApiError::internal_server_error(format!("Bad socket URL: {}", e)))?;

    Ok(ApiResponse::success(ChatSocket { url: url.to_string() }))
}

/// Build the chat socket URL: http -> ws, https -> wss, path
/// `/ws/chat/<order_id>/`, token as query parameter.
pub fn socket_url(base: &Url, order_id: i64, token: &str) -> Result<Url, url::ParseError> {
    let scheme = if base.scheme() == "https" { "wss" } else { "ws" };
    let host = base.host_str().unwrap_or("localhost");
    let port = base.port().map(|p| format!(":{}", p)).unwrap_or_default();

    let mut url = Url::parse(&format!("{}://{}{}/ws/chat/{}/", scheme, host, port, order_id))?;
    url.query_pairs_mut().append_pair("token", token);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_http_becomes_ws() {
        let base = Url::parse("http://localhost:8000/api/v1/").unwrap();
        let url = socket_url(&base, 42, "tok").unwrap();
        assert_eq!(url.as_str(), "ws://localhost:8000/ws/chat/42/?token=tok");
    }

    #[test]
    fn https_becomes_wss() {
        let base = Url::parse("https://backend.example.com/api/v1/").unwrap();
        let url = socket_url(&base, 7, "tok").unwrap();
        assert_eq!(url.scheme(), "wss");
        assert_eq!(url.host_str(), Some("backend.example.com"));
        assert_eq!(url.path(), "/ws/chat/7/");
    }

    #[test]
    fn token_is_urlencoded() {
        let base = Url::parse("http://localhost:8000/").unwrap();
        let url = socket_url(&base, 1, "a b+c").unwrap();
        assert_eq!(url.query(), Some("token=a+b%2Bc"));
    }
}
