//! Authentication primitives for Assura upstream calls.
//!
//! Provides:
//! - [`Credentials`] — the `{clientId, clientSecret, organizationId}` triple
//! - [`AuthSource`] — either a caller-supplied bearer token or credentials
//! - [`TokenHolder`] — resolves an `AuthSource` to a bearer token, exchanging
//!   and caching when credentials are used
//! - [`Clock`] — time source for expiry checks ([`SystemClock`], [`ManualClock`])

mod clock;
mod credentials;
mod token;

pub use clock::{Clock, ManualClock, SystemClock};
pub use credentials::{
    AuthSource, BEARER_TOKEN_PARAM, CLIENT_ID_PARAM, CLIENT_SECRET_PARAM, Credentials,
};
pub use token::{BearerToken, TokenHolder, TokenResponse, DEFAULT_EXPIRES_IN_SECS, SAFETY_MARGIN};
