use anyhow::bail;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::problem::Problem;

/// Semantic category of an outcome.
///
/// Every tag except [`Disposition::Unknown`] carries three facts: an HTTP
/// status code, a short title and a human readable description. The tag is
/// independent of the outcome's branch, so a success may be tagged
/// `NoContent` or a failure `NotFound`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// No disposition was given. Has no facts and no response shape.
    #[default]
    Unknown,

    /// 200 Success, empty body.
    Ok,

    /// 200 Success, the outcome's value is the body.
    OkWithContent,

    /// 201 Created.
    Created,

    /// 400 Error.
    Error,

    /// 403 Forbidden.
    Forbidden,

    /// 401 Unauthorized.
    Unauthorized,

    /// 422 Invalid. Has problem facts but no response shape of its own.
    Invalid,

    /// 404 Not Found.
    NotFound,

    /// 204 No Content.
    NoContent,

    /// 500 Critical Error.
    CriticalError,

    /// 503 Unavailable.
    Unavailable,
}

impl Disposition {
    /// Every tag, in declaration order.
    pub const ALL: [Disposition; 12] = [
        Self::Unknown,
        Self::Ok,
        Self::OkWithContent,
        Self::Created,
        Self::Error,
        Self::Forbidden,
        Self::Unauthorized,
        Self::Invalid,
        Self::NotFound,
        Self::NoContent,
        Self::CriticalError,
        Self::Unavailable,
    ];

    /// Name of the tag as written in code, e.g. `"OkWithContent"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Ok => "Ok",
            Self::OkWithContent => "OkWithContent",
            Self::Created => "Created",
            Self::Error => "Error",
            Self::Forbidden => "Forbidden",
            Self::Unauthorized => "Unauthorized",
            Self::Invalid => "Invalid",
            Self::NotFound => "NotFound",
            Self::NoContent => "NoContent",
            Self::CriticalError => "CriticalError",
            Self::Unavailable => "Unavailable",
        }
    }

    /// Returns (status, title, description) or `None` for `Unknown`.
    fn facts(self) -> Option<(StatusCode, &'static str, &'static str)> {
        let facts = match self {
            Self::Unknown => return None,
            Self::Ok | Self::OkWithContent => (
                StatusCode::OK,
                "Success",
                "Operation completed successfully.",
            ),
            Self::Created => (
                StatusCode::CREATED,
                "Created",
                "Resource has been created successfully.",
            ),
            Self::Error => (
                StatusCode::BAD_REQUEST,
                "Error",
                "An error occurred during the operation.",
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Access to the resource is forbidden.",
            ),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Authentication is required to access the resource.",
            ),
            Self::Invalid => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid",
                "The request contains invalid data.",
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "The requested resource could not be found.",
            ),
            Self::NoContent => (
                StatusCode::NO_CONTENT,
                "No Content",
                "Operation completed successfully, but there is no content to return.",
            ),
            Self::CriticalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Critical Error",
                "A critical error occurred on the server.",
            ),
            Self::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Unavailable",
                "The service is currently unavailable.",
            ),
        };
        Some(facts)
    }

    pub fn status_code(self) -> Option<StatusCode> {
        self.facts().map(|(status, _, _)| status)
    }

    pub fn title(self) -> Option<&'static str> {
        self.facts().map(|(_, title, _)| title)
    }

    pub fn description(self) -> Option<&'static str> {
        self.facts().map(|(_, _, description)| description)
    }

    /// Problem facts of this tag.
    ///
    /// # Panics
    ///
    /// Panics for [`Disposition::Unknown`], which has no facts. Use
    /// `Problem::try_from` to get an error instead.
    #[track_caller]
    pub fn to_problem(self) -> Problem {
        match Problem::try_from(self) {
            Ok(problem) => problem,
            Err(e) => {
                log::error!("{}", e);
                panic!("{}", e)
            }
        }
    }
}

impl Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Disposition {
    type Error = anyhow::Error;

    // `Self::Error` would be ambiguous with the `Error` variant
    fn try_from(value: &str) -> Result<Self, anyhow::Error> {
        // names are case sensitive
        match Self::ALL.into_iter().find(|d| d.name() == value.trim()) {
            Some(disposition) => Ok(disposition),
            None => bail!("invalid disposition: {}", value),
        }
    }
}

impl TryFrom<Disposition> for Problem {
    type Error = UnsupportedDisposition;

    fn try_from(value: Disposition) -> Result<Self, Self::Error> {
        let (status, title, description) = value.facts().ok_or(UnsupportedDisposition(value))?;
        Ok(Problem::new(title, status.as_u16(), description))
    }
}

/// A disposition was used where it has no mapping.
///
/// This is a programming error at the call site, never a data condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("UnsupportedDisposition: disposition {0} conversion is not supported")]
pub struct UnsupportedDisposition(pub Disposition);
