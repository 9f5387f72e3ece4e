use axum::response::{IntoResponse, Response};
use http::{header, HeaderMap};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::RestError;

/// Serialize `value` as JSON indented by one space, newline terminated.
pub fn pretty_json<T: Serialize>(value: &T) -> Result<Response, RestError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    value.serialize(&mut serializer).map_err(RestError::Encode)?;
    buf.push(b'\n');

    Ok(([(header::CONTENT_TYPE, "application/json")], buf).into_response())
}

/// True when the request declares a JSON body. Media type parameters such as
/// `charset` are ignored.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}
