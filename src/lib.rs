//! Outcome types for request handlers.
//!
//! An [`Outcome`] is a value or an error tagged with a [`Disposition`]. The
//! disposition decides which HTTP response the outcome turns into:
//!
//! ```rust
//! use routcome::{to_response, ApiResponse, Disposition, Outcome};
//!
//! let outcome: Outcome<u32, String> = Outcome::success_with(42, Disposition::OkWithContent);
//!
//! assert_eq!(to_response(outcome, None), ApiResponse::OkWithContent(42));
//! ```
//!
//! Combinators (`map`, `bind`, `map_error`, `fold`) are available on ready
//! outcomes, with `_async` variants taking async functions, and on pending
//! outcomes through [`OutcomeFutureExt`] and [`UnitOutcomeFutureExt`].

pub mod disposition;
pub mod future;
pub mod http;
pub mod outcome;
pub mod problem;
pub mod response;
pub mod unit;

pub use disposition::{Disposition, UnsupportedDisposition};
pub use future::{OutcomeFutureExt, UnitOutcomeFutureExt};
pub use http::Responder;
pub use outcome::{ApiOutcome, Outcome};
pub use problem::Problem;
pub use response::{to_response, try_to_response, ApiResponse};
pub use unit::UnitOutcome;
