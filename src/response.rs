use crate::{
    disposition::{Disposition, UnsupportedDisposition},
    outcome::Outcome,
    problem::Problem,
    unit::UnitOutcome,
};

/// Response shapes an outcome can be projected onto.
///
/// The host layer turns these into protocol responses; see
/// [`crate::http::Responder`] for the HTTP encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// 200 with an empty body.
    Ok,

    /// 200 carrying the outcome's value.
    OkWithContent(T),

    /// 201, optionally pointing at the created resource.
    Created { location: Option<String> },

    /// Error response built from the disposition's problem facts.
    Problem(Problem),

    /// 403, no body.
    Forbidden,

    /// 401, no body.
    Unauthorized,

    /// 404, no body.
    NotFound,

    /// 204, no body.
    NoContent,
}

/// Projects an outcome onto its response shape.
///
/// `location` is only used for [`Disposition::Created`] and is passed
/// through as given.
///
/// # Panics
///
/// Panics with `UnsupportedDisposition` when the disposition has no shape
/// (`Unknown` and `Invalid`), and with `InvalidState` when an
/// `OkWithContent` outcome is a failure.
#[track_caller]
pub fn to_response<T, E>(outcome: Outcome<T, E>, location: Option<&str>) -> ApiResponse<T> {
    match try_to_response(outcome, location) {
        Ok(response) => response,
        Err(e) => {
            log::error!("{}", e);
            panic!("{}", e)
        }
    }
}

/// Same as [`to_response`], returning unmapped dispositions as an error.
#[track_caller]
pub fn try_to_response<T, E>(
    outcome: Outcome<T, E>,
    location: Option<&str>,
) -> Result<ApiResponse<T>, UnsupportedDisposition> {
    let disposition = outcome.disposition();

    // no wildcard arm: a new disposition must be mapped here explicitly
    let response = match disposition {
        Disposition::Ok => ApiResponse::Ok,
        Disposition::OkWithContent => ApiResponse::OkWithContent(outcome.into_value()),
        Disposition::Created => ApiResponse::Created {
            location: location.map(str::to_owned),
        },
        Disposition::Error | Disposition::Unavailable | Disposition::CriticalError => {
            ApiResponse::Problem(Problem::try_from(disposition)?)
        }
        Disposition::Forbidden => ApiResponse::Forbidden,
        Disposition::Unauthorized => ApiResponse::Unauthorized,
        Disposition::NotFound => ApiResponse::NotFound,
        Disposition::NoContent => ApiResponse::NoContent,
        Disposition::Unknown | Disposition::Invalid => {
            return Err(UnsupportedDisposition(disposition))
        }
    };

    Ok(response)
}

impl<T, E> Outcome<T, E> {
    /// Method form of [`to_response`].
    #[track_caller]
    pub fn into_api_response(self, location: Option<&str>) -> ApiResponse<T> {
        to_response(self, location)
    }
}

impl<E> UnitOutcome<E> {
    /// Projects like [`to_response`]. There is no payload to send, so
    /// `OkWithContent` becomes an empty [`ApiResponse::Ok`].
    ///
    /// # Panics
    ///
    /// Panics like [`to_response`], including `InvalidState` for an
    /// `OkWithContent` failure.
    #[track_caller]
    pub fn into_api_response(self, location: Option<&str>) -> ApiResponse<()> {
        match to_response(self.into(), location) {
            ApiResponse::OkWithContent(()) => ApiResponse::Ok,
            response => response,
        }
    }
}
