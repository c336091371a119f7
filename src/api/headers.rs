//! Identity headers the API expects from its iOS app

use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue,
    InvalidHeaderValue, USER_AGENT,
};

use crate::models::Session;

const PLATFORM: &str = "IOS";
const HISTORY_ACCEPT_ENCODING: &str = "br;q=1.0, gzip;q=0.9, deflate;q=0.8";
const HISTORY_ACCEPT_LANGUAGE: &str = "zh-Hans-JP;q=1.0, ja-JP;q=0.9, zh-Hant-JP;q=0.8";

const APP_VERSION: &str = "app-version";
const APP_NAME: &str = "app-name";
const PLATFORM_HEADER: &str = "platform";

/// User agent of the official iOS client for the given app version
pub fn user_agent(app_version: &str) -> String {
    format!(
        "B4ND/{} (com.tokyo-tsushin.b4nd.prd; build:27; iOS 17.3.1) Alamofire/5.6.1",
        app_version
    )
}

/// Headers for `POST /user/login`
pub fn login_headers(app_name: &str, app_version: &str) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(APP_VERSION, HeaderValue::from_str(app_version)?);
    headers.insert(APP_NAME, HeaderValue::from_str(app_name)?);
    headers.insert(PLATFORM_HEADER, HeaderValue::from_static(PLATFORM));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=UTF-8"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
    headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent(app_version))?);
    Ok(headers)
}

/// Headers for `GET /message/getChatsHistory/{id}`
pub fn history_headers(session: &Session) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", session.token))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    headers.insert(APP_VERSION, HeaderValue::from_str(&session.app_version)?);
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(HISTORY_ACCEPT_ENCODING));
    headers.insert(PLATFORM_HEADER, HeaderValue::from_static(PLATFORM));
    headers.insert(APP_NAME, HeaderValue::from_str(&session.app_name)?);
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(HISTORY_ACCEPT_LANGUAGE));
    headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent(&session.app_version))?);
    Ok(headers)
}
