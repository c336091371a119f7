use std::io::{self, IsTerminal};

use anyhow::{Context, Result, bail};
use dialoguer::Password;
use reqwest::blocking::Client;

use super::prompt::{read_non_empty, read_token, validate_token};
use crate::api::{Credentials, login};
use crate::error::ApiError;
use crate::models::{Session, Tenant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LoginMethod {
    /// Use account email and password
    Password,
    /// Enter a token directly
    Token,
}

impl LoginMethod {
    pub const ALL: [LoginMethod; 2] = [LoginMethod::Password, LoginMethod::Token];

    pub fn menu_label(self) -> &'static str {
        match self {
            LoginMethod::Password => "Use Account Password",
            LoginMethod::Token => "Enter Token Directly",
        }
    }
}

/// Supplies one set of credentials per login attempt
pub trait CredentialSource {
    fn credentials(&mut self) -> Result<Credentials>;
}

/// Reads credentials from stdin; the password is not echoed on a terminal
pub struct ConsoleCredentials;

impl CredentialSource for ConsoleCredentials {
    fn credentials(&mut self) -> Result<Credentials> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        let email = read_non_empty(&mut stdin.lock(), &mut stdout, "Email")?;
        let password = if stdin.is_terminal() {
            Password::new()
                .with_prompt("Enter Password")
                .allow_empty_password(true)
                .validate_with(require_password)
                .interact()
                .context("Failed to read password")?
        } else {
            read_non_empty(&mut stdin.lock(), &mut stdout, "Password")?
        };

        Ok(Credentials { email, password })
    }
}

const EMPTY_PASSWORD: &str = "Password cannot be empty. Please try again.";

// Empty input reaches this check so the terminal prompt reports it like the line prompt
fn require_password(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() { Err(EMPTY_PASSWORD) } else { Ok(()) }
}

/// Log in with credentials, prompting again after each rejected attempt
///
/// # Errors
///
/// Fails after `max_attempts` rejections, or immediately on transport and decode errors.
pub fn login_with_credentials(
    client: &Client,
    tenant: &Tenant,
    source: &mut dyn CredentialSource,
    max_attempts: u32,
) -> Result<String> {
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let credentials = source.credentials()?;
        match login(client, tenant, &credentials) {
            Ok(token) => return Ok(token),
            Err(ApiError::LoginRejected(message)) => {
                println!("Login failed: {}", message);
                tracing::warn!(attempt, max_attempts, "login rejected");
            }
            Err(e) => return Err(e).context("Error logging in"),
        }
    }

    bail!("Login failed after {} attempts", max_attempts)
}

/// Produce a session for `tenant` using the chosen method
///
/// A token from the environment takes precedence over any method.
pub fn resolve_session(
    client: &Client,
    tenant: &Tenant,
    method: LoginMethod,
    env_token: Option<String>,
    max_login_attempts: u32,
) -> Result<Session> {
    let token = match env_token {
        Some(token) => {
            if !validate_token(&token) {
                bail!("{} is not in the 'ID|Token' format", crate::utils::TOKEN_ENV_VAR);
            }
            tracing::debug!("using token from environment");
            token
        }
        None => match method {
            LoginMethod::Token => read_token(&mut io::stdin().lock(), &mut io::stdout())?,
            LoginMethod::Password => {
                login_with_credentials(client, tenant, &mut ConsoleCredentials, max_login_attempts)?
            }
        },
    };

    tracing::debug!(tenant = %tenant.name, "token resolved");
    Ok(Session::new(token, tenant))
}
