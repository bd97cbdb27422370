//! URL routing and request validation.
//!
//! Paths map onto identicon parameters here; nothing reaches the core until
//! every numeric segment is a positive integer inside the configured limits.

use super::ServerConfig;
use crate::{compute_identicon, IdenticonConfig};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::num::{IntErrorKind, ParseIntError};
use tiny_http::Method;

/// Output form of an image route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Markup,
    Base64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Image {
        slug: String,
        params: IdenticonConfig,
        encoding: Encoding,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    NotFound,
    Unprocessable(String),
}

/// A fully built response: status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

#[derive(Serialize)]
struct ImageBody {
    svg: String,
}

#[derive(Serialize)]
struct WelcomeBody {
    #[serde(rename = "Welcome")]
    welcome: &'static str,
    info: String,
}

#[derive(Serialize)]
struct DetailBody {
    detail: String,
}

impl Reply {
    fn json<T: Serialize>(status: u16, body: &T) -> Self {
        let body = serde_json::to_string(body)
            .unwrap_or_else(|_| r#"{"detail":"serialization failed"}"#.to_string());
        Self { status, body }
    }

    fn detail(status: u16, detail: impl Into<String>) -> Self {
        Self::json(status, &DetailBody { detail: detail.into() })
    }
}

/// Match a request path (query string ignored) against the route table.
pub fn resolve(url: &str, config: &ServerConfig) -> Result<Route, RouteError> {
    let path = url.split(&['?', '#'][..]).next().unwrap_or("");
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Ok(Route::Welcome);
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    let defaults = config.defaults;

    let (encoding, slug, params) = match segments.as_slice() {
        ["svg", slug] => (Encoding::Markup, slug, defaults),
        ["base64", slug] => (Encoding::Base64, slug, defaults),
        ["svg", slug, size] => (
            Encoding::Markup,
            slug,
            IdenticonConfig {
                size: parse_dimension("size", size, config.max_size)?,
                ..defaults
            },
        ),
        ["base64", slug, size] => (
            Encoding::Base64,
            slug,
            IdenticonConfig {
                size: parse_dimension("size", size, config.max_size)?,
                ..defaults
            },
        ),
        ["board", slug, bsize, iter, size] => {
            (Encoding::Markup, slug, parse_full(config, bsize, iter, size)?)
        }
        ["base64board", slug, bsize, iter, size] => {
            (Encoding::Base64, slug, parse_full(config, bsize, iter, size)?)
        }
        _ => return Err(RouteError::NotFound),
    };

    if slug.is_empty() {
        return Err(RouteError::NotFound);
    }
    let slug = percent_decode_str(slug)
        .decode_utf8()
        .map_err(|_| RouteError::Unprocessable("slug: not valid UTF-8".to_string()))?
        .into_owned();

    Ok(Route::Image {
        slug,
        params,
        encoding,
    })
}

fn parse_full(
    config: &ServerConfig,
    bsize: &str,
    iter: &str,
    size: &str,
) -> Result<IdenticonConfig, RouteError> {
    Ok(IdenticonConfig {
        board_size: parse_dimension("bsize", bsize, config.max_board_size)?,
        iterations: parse_dimension("iter", iter, config.max_iterations)?,
        size: parse_dimension("size", size, config.max_size)?,
    })
}

fn parse_dimension(name: &str, raw: &str, max: u32) -> Result<u32, RouteError> {
    let too_small = || {
        RouteError::Unprocessable(format!("{}: ensure this value is greater than 0", name))
    };
    let too_large = || {
        RouteError::Unprocessable(format!(
            "{}: ensure this value is less than or equal to {}",
            name, max
        ))
    };

    let value: i64 = raw.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => too_large(),
        IntErrorKind::NegOverflow => too_small(),
        _ => RouteError::Unprocessable(format!("{}: value is not a valid integer", name)),
    })?;
    if value <= 0 {
        return Err(too_small());
    }
    if value > i64::from(max) {
        return Err(too_large());
    }
    Ok(value as u32)
}

/// Produce the reply for one request. `host` feeds the link in the welcome
/// message.
pub fn dispatch(method: &Method, url: &str, host: Option<&str>, config: &ServerConfig) -> Reply {
    if !matches!(method, Method::Get | Method::Head) {
        return Reply::detail(405, "Method Not Allowed");
    }

    match resolve(url, config) {
        Ok(Route::Welcome) => {
            let base_url = match host {
                Some(host) => format!("http://{}/", host),
                None => format!("http://{}/", config.bind),
            };
            Reply::json(
                200,
                &WelcomeBody {
                    welcome: "Hello, welcome to the Drunken Bishop Identicon API! Use it to generate unique identicons for a slug.",
                    info: format!(
                        "For more information on how to use the API, visit {}doc!",
                        base_url
                    ),
                },
            )
        }
        Ok(Route::Image {
            slug,
            params,
            encoding,
        }) => match compute_identicon(&slug, params.board_size, params.iterations, params.size) {
            Ok(image) => {
                let svg = match encoding {
                    Encoding::Markup => image.as_markup(),
                    Encoding::Base64 => image.as_base64(),
                };
                Reply::json(200, &ImageBody { svg })
            }
            Err(e) => Reply::detail(422, e.to_string()),
        },
        Err(RouteError::NotFound) => Reply::detail(404, "Not Found"),
        Err(RouteError::Unprocessable(reason)) => Reply::detail(422, reason),
    }
}
