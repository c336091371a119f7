use std::fmt;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use super::headers::login_headers;
use crate::error::ApiError;
use crate::models::Tenant;

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct LoginData {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    data: Option<LoginData>,
}

pub fn login_url(api_base: &str) -> String {
    format!("{}/user/login", api_base.trim_end_matches('/'))
}

/// Exchange email and password for a bearer token
///
/// # Errors
///
/// [`ApiError::LoginRejected`] when the server answers with a non-empty `messages` list;
/// the caller decides whether to prompt again.
pub fn login(client: &Client, tenant: &Tenant, credentials: &Credentials) -> Result<String, ApiError> {
    let body = json!({
        "email": credentials.email,
        "password": credentials.password,
    });

    tracing::debug!(tenant = %tenant.name, email = %credentials.email, "logging in");
    let response = client
        .post(login_url(&tenant.api_base))
        .headers(login_headers(&tenant.app_name, &tenant.app_version)?)
        .json(&body)
        .send()?;
    let text = response.text()?;

    parse_login_response(&text)
}

/// Extract the token from a login response body
pub fn parse_login_response(body: &str) -> Result<String, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(ApiError::UnexpectedResponse)?;

    if let Some(first) = value.get("messages").and_then(Value::as_array).and_then(|m| m.first())
        && let Some(message) = first.as_str()
    {
        return Err(ApiError::LoginRejected(message.to_string()));
    }

    let response: LoginResponse =
        serde_json::from_value(value).map_err(ApiError::UnexpectedResponse)?;

    response
        .data
        .and_then(|data| data.token)
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingToken)
}
