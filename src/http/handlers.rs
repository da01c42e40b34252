//! Reflection handlers.
//!
//! # Responsibilities
//! - /ip: report the peer address, port stripped
//! - /user-agent: report the User-Agent header
//! - /headers: report all headers, values comma-joined
//! - /delete: mirror args, form, headers, origin and url in one envelope
//! - /players/{player}: fixed-value lookup, plain text
//!
//! # Design Decisions
//! - Handlers are stateless functions of the request; nothing is shared
//! - The /delete envelope joins headers with `;` while /headers uses `,`;
//!   the asymmetry is part of the served contract and is kept
//! - Unknown players get an empty 200, not a 404; clients probe scores by
//!   checking for an empty body

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Path, Request};
use axum::http::{header, HeaderMap};
use axum::response::Response;
use serde::Serialize;

use crate::http::extract::{join_headers, parse_args, strip_port, ArgValue};
use crate::http::response::json_pretty;

/// Cap on buffered form bodies. Requests are small by construction; this
/// only guards against a runaway client.
const FORM_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Serialize)]
struct OriginBody {
    origin: String,
}

#[derive(Serialize)]
struct UserAgentBody {
    #[serde(rename = "user-agent")]
    user_agent: String,
}

#[derive(Serialize)]
struct HeadersBody {
    headers: BTreeMap<String, String>,
}

/// The /delete response shape. `data`, `files` and `json` are fixed
/// placeholders: this server never reads raw bodies, accepts uploads, or
/// decodes JSON.
#[derive(Serialize)]
struct EchoEnvelope {
    args: BTreeMap<String, ArgValue>,
    data: String,
    files: BTreeMap<String, ArgValue>,
    form: BTreeMap<String, ArgValue>,
    headers: BTreeMap<String, String>,
    json: Option<serde_json::Value>,
    origin: String,
    url: String,
}

/// GET /ip — the client's address as the server saw it, port stripped.
pub async fn ip(ConnectInfo(peer): ConnectInfo<SocketAddr>) -> Response {
    let origin = strip_port(&peer.to_string()).to_string();
    json_pretty(&OriginBody { origin })
}

/// GET /user-agent — the first User-Agent value, empty string if absent.
pub async fn user_agent(headers: HeaderMap) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    json_pretty(&UserAgentBody { user_agent })
}

/// GET /headers — every request header, multi-values joined with `,`.
pub async fn headers(headers: HeaderMap) -> Response {
    json_pretty(&HeadersBody {
        headers: join_headers(&headers, ","),
    })
}

/// DELETE /delete — mirror the request back as an echo envelope.
///
/// `url` is the request-target exactly as received; the raw query string is
/// not re-encoded, so an unconventional `?a=1;b=2` survives verbatim.
pub async fn delete(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
) -> Response {
    let url = request.uri().to_string();
    let args = parse_args(request.uri().query().unwrap_or(""));
    let joined_headers = join_headers(request.headers(), ";");
    let origin = strip_port(&peer.to_string()).to_string();
    let form_encoded = has_form_content_type(request.headers());

    let form = if form_encoded {
        match axum::body::to_bytes(request.into_body(), FORM_BODY_LIMIT).await {
            Ok(bytes) => parse_args(&String::from_utf8_lossy(&bytes)),
            Err(error) => {
                // A broken body read yields an empty form, never an error.
                tracing::debug!(error = %error, "failed to read form body");
                BTreeMap::new()
            }
        }
    } else {
        BTreeMap::new()
    };

    json_pretty(&EchoEnvelope {
        args,
        data: String::new(),
        files: BTreeMap::new(),
        form,
        headers: joined_headers,
        json: None,
        origin,
        url,
    })
}

/// GET /players/{player} — fixed scores for known players, plain text.
pub async fn players(Path(player): Path<String>) -> String {
    match player.as_str() {
        "Pepper" => "20".to_string(),
        "Floyd" => "10".to_string(),
        _ => String::new(),
    }
}

/// True when the Content-Type media type is urlencoded form data.
/// Parameters such as `; charset=utf-8` are ignored.
fn has_form_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|media_type| {
            media_type
                .trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn form_content_type_matches_with_and_without_charset() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        assert!(has_form_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=utf-8"),
        );
        assert!(has_form_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        assert!(!has_form_content_type(&headers));

        headers.remove(header::CONTENT_TYPE);
        assert!(!has_form_content_type(&headers));
    }

    #[tokio::test]
    async fn known_players_have_fixed_scores() {
        assert_eq!(players(Path("Pepper".to_string())).await, "20");
        assert_eq!(players(Path("Floyd".to_string())).await, "10");
    }

    #[tokio::test]
    async fn unknown_player_yields_empty_body() {
        assert_eq!(players(Path("Unknown".to_string())).await, "");
    }
}
