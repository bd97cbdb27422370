//! Sending replies over tiny_http.

use super::routes::Reply;
use crate::{Error, Result};
use tiny_http::{Header, Request, Response};

const JSON: &str = "application/json";

/// Value of the `Host` header, if the client sent one.
pub fn host_header(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Host"))
        .map(|h| h.value.to_string())
}

/// Write `reply` as a JSON response.
pub fn send_json(request: Request, reply: Reply) -> Result<()> {
    let content_type = Header::from_bytes("Content-Type", JSON)
        .map_err(|_| Error::ServerError("invalid Content-Type header".into()))?;
    let response = Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(content_type);
    request
        .respond(response)
        .map_err(|e| Error::ServerError(format!("failed to send response: {}", e)))
}
