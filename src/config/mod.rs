//! Catalog configuration: which tenants exist and whose history can be archived
//!
//! The built-in catalog covers the known deployments. A JSON file can add correspondents
//! or point a tenant at a different deployment:
//!
//! ```json
//! {
//!   "tenants": [{"name": "b4nd", "api_base": "https://staging.example/api",
//!                "app_name": "b4nd-user", "app_version": "1.1.21"}],
//!   "correspondents": [{"id": 50, "name": "New Member", "tenant": "b4nd"}]
//! }
//! ```
//!
//! File tenants replace built-ins with the same name. File correspondents replace built-ins
//! with the same id and are otherwise appended in file order.

pub mod catalog;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::models::{Correspondent, Tenant};

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tenants: Vec<Tenant>,
    #[serde(default)]
    correspondents: Vec<Correspondent>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tenants: Vec<Tenant>,
    pub correspondents: Vec<Correspondent>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tenants: catalog::builtin_tenants(),
            correspondents: catalog::builtin_correspondents(),
        }
    }
}

impl AppConfig {
    /// Load the catalog
    ///
    /// An explicit path must exist. Without one, the default location is used when a file
    /// is present there, otherwise the built-in catalog.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match crate::utils::default_config_path() {
                Ok(path) if path.exists() => path,
                _ => return Ok(config),
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded catalog file");

        config.merge(file);
        config.validate()?;
        Ok(config)
    }

    fn merge(&mut self, file: CatalogFile) {
        for tenant in file.tenants {
            match self.tenants.iter_mut().find(|t| t.name == tenant.name) {
                Some(existing) => *existing = tenant,
                None => self.tenants.push(tenant),
            }
        }
        for correspondent in file.correspondents {
            match self.correspondents.iter_mut().find(|c| c.id == correspondent.id) {
                Some(existing) => *existing = correspondent,
                None => self.correspondents.push(correspondent),
            }
        }
    }

    fn validate(&self) -> Result<()> {
        for correspondent in &self.correspondents {
            if self.tenant(&correspondent.tenant).is_none() {
                bail!(
                    "Correspondent {} refers to unknown tenant '{}'",
                    correspondent.menu_label(),
                    correspondent.tenant
                );
            }
        }
        Ok(())
    }

    pub fn tenant(&self, name: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|t| t.name == name)
    }

    pub fn correspondent(&self, id: i64) -> Option<&Correspondent> {
        self.correspondents.iter().find(|c| c.id == id)
    }

    /// Tenant serving the given correspondent
    pub fn tenant_for(&self, correspondent: &Correspondent) -> Result<&Tenant> {
        self.tenant(&correspondent.tenant).with_context(|| {
            format!("Unknown tenant '{}' for {}", correspondent.tenant, correspondent.menu_label())
        })
    }
}
