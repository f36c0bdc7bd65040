use serde::{Deserialize, Serialize};

/// Problem facts of an error-shaped response.
///
/// Serializes to the problem-details wire format:
///
/// ```json
/// { "title": "Error", "status": 400, "detail": "An error occurred during the operation." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Short, human readable summary.
    pub title: String,

    /// HTTP status code.
    pub status: u16,

    /// Human readable explanation.
    #[serde(rename = "detail")]
    pub description: String,
}

impl Problem {
    pub fn new<T, D>(title: T, status: u16, description: D) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        Self {
            title: title.into(),
            status,
            description: description.into(),
        }
    }
}
