//! Session resolution: turn user input into a bearer token for one tenant
//!
//! Two ways in:
//! - direct token entry (`<id>|<secret>`), from the `B4ND_TOKEN` environment variable or a
//!   prompt that re-asks until the format is right
//! - email/password login against `POST /user/login`, retried a bounded number of times

pub mod prompt;
pub mod resolver;

pub use prompt::{read_non_empty, read_token, validate_token};
pub use resolver::{
    ConsoleCredentials, CredentialSource, LoginMethod, login_with_credentials, resolve_session,
};
