//! Request parameter extraction.
//!
//! # Responsibilities
//! - GET: decode the query string into `Params`
//! - POST: require `application/json`, decode a flat JSON object
//!
//! # Design Decisions
//! - Content type is checked before the body is read
//! - Malformed JSON yields empty `Params`; operand parsing then reports it
//! - Body size errors keep axum's own 413 rejection

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Query, Request};
use axum::http::{header, HeaderMap, Method};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::calc::{CalcError, Params};

/// Parameters of a calculation request, from whichever source the method implies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcParams(pub Params);

impl<S> FromRequest<S> for CalcParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.method() == Method::POST {
            if !is_json_content_type(req.headers()) {
                return Err(CalcError::InvalidContentType.into_response());
            }

            let body = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;

            let value = serde_json::from_slice::<Value>(&body).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Request body is not valid JSON");
                Value::Null
            });

            return Ok(Self(Params::from_json(&value)));
        }

        let Query(map) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map_err(|_| CalcError::InvalidInput.into_response())?;

        Ok(Self(Params::new(map)))
    }
}

/// Whether the `Content-Type` media type is `application/json`.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|media| media.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
