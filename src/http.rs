use anyhow::Context;
use bytes::Bytes;
use hyper::{
    header::{CONTENT_TYPE, LOCATION},
    Body, StatusCode,
};
use log::debug;
use serde::Serialize;

use crate::{
    outcome::Outcome,
    problem::Problem,
    response::{to_response, ApiResponse},
    unit::UnitOutcome,
};

pub type Response = hyper::Response<Body>;

/// Content type of `OkWithContent` bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type of problem bodies.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Types that can be written out as an HTTP response.
///
/// ```rust
/// use routcome::{Disposition, Outcome, Responder};
///
/// let outcome: Outcome<(), String> = Outcome::failure_with("gone".into(), Disposition::NotFound);
/// let response = outcome.into_response()?;
///
/// assert_eq!(response.status(), 404);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub trait Responder {
    fn into_response(self) -> anyhow::Result<Response>;
}

/// Empty-bodied response with the given status.
fn empty(status: StatusCode) -> anyhow::Result<Response> {
    Ok(hyper::Response::builder()
        .status(status)
        .body(Body::empty())?)
}

impl<T> Responder for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> anyhow::Result<Response> {
        let response = match self {
            ApiResponse::Ok => empty(StatusCode::OK)?,
            ApiResponse::OkWithContent(value) => {
                let body = serde_json::to_vec(&value).context("could not serialize response body")?;
                hyper::Response::builder()
                    .status(StatusCode::OK)
                    .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                    .body(Body::from(body))?
            }
            ApiResponse::Created { location } => {
                let mut builder = hyper::Response::builder().status(StatusCode::CREATED);
                if let Some(location) = location {
                    builder = builder.header(LOCATION, location);
                }
                builder.body(Body::empty())?
            }
            ApiResponse::Problem(problem) => problem.into_response()?,
            ApiResponse::Forbidden => empty(StatusCode::FORBIDDEN)?,
            ApiResponse::Unauthorized => empty(StatusCode::UNAUTHORIZED)?,
            ApiResponse::NotFound => empty(StatusCode::NOT_FOUND)?,
            ApiResponse::NoContent => empty(StatusCode::NO_CONTENT)?,
        };

        debug!("Responder::into_response - status: {}", response.status());
        Ok(response)
    }
}

/// Problem-details response: the problem's status with a JSON body of
/// `title`, `status` and `detail`.
impl Responder for Problem {
    fn into_response(self) -> anyhow::Result<Response> {
        let status = StatusCode::from_u16(self.status)
            .with_context(|| format!("invalid problem status: {}", self.status))?;
        let body = serde_json::to_vec(&self).context("could not serialize problem")?;

        Ok(hyper::Response::builder()
            .status(status)
            .header(CONTENT_TYPE, PROBLEM_CONTENT_TYPE)
            .body(Body::from(body))?)
    }
}

/// Encodes `to_response(self, None)`. Use [`Outcome::into_api_response`]
/// first to pass a location.
///
/// # Panics
///
/// Panics like [`to_response`] on an unmapped disposition.
impl<T, E> Responder for Outcome<T, E>
where
    T: Serialize,
{
    fn into_response(self) -> anyhow::Result<Response> {
        to_response(self, None).into_response()
    }
}

impl<E> Responder for UnitOutcome<E> {
    fn into_response(self) -> anyhow::Result<Response> {
        self.into_api_response(None).into_response()
    }
}

/// Collects a response body, blocking the current thread.
pub fn body_to_bytes(body: Body) -> anyhow::Result<Bytes> {
    Ok(futures_executor::block_on(hyper::body::to_bytes(body))?)
}
