//! Caller address and user agent.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use showtime_auth::ClientInfo;

/// Where a request came from: the first `X-Forwarded-For` hop, then
/// `X-Real-IP`, then `"unknown"`.
#[derive(Debug, Clone)]
pub struct ClientMeta(pub ClientInfo);

impl ClientMeta {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let ip_address = header("x-forwarded-for")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| header("x-real-ip"))
            .unwrap_or("unknown")
            .to_string();

        let user_agent = header("user-agent").unwrap_or_default().to_string();

        Self(ClientInfo {
            ip_address,
            user_agent,
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ClientMeta {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn forwarded_for_wins_and_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.9, 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        headers.insert("user-agent", HeaderValue::from_static("curl/8.5"));

        let ClientMeta(info) = ClientMeta::from_headers(&headers);
        assert_eq!(info.ip_address, "203.0.113.9");
        assert_eq!(info.user_agent, "curl/8.5");
    }

    #[test]
    fn falls_back_to_real_ip_then_unknown() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(ClientMeta::from_headers(&headers).0.ip_address, "10.0.0.2");

        let ClientMeta(info) = ClientMeta::from_headers(&HeaderMap::new());
        assert_eq!(info.ip_address, "unknown");
        assert_eq!(info.user_agent, "");
    }
}
