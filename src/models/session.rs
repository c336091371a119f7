use std::fmt;

use crate::models::Tenant;

/// Everything the fetcher needs to talk to one tenant on behalf of one user
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub api_base: String,
    pub app_name: String,
    pub app_version: String,
}

impl Session {
    pub fn new(token: String, tenant: &Tenant) -> Self {
        Self {
            token,
            api_base: tenant.api_base.clone(),
            app_name: tenant.app_name.clone(),
            app_version: tenant.app_version.clone(),
        }
    }
}

// Keeps the bearer token out of `{:?}` output and debug logs
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .finish()
    }
}
