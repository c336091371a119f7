//! Built-in tenants and correspondents

use crate::models::{Correspondent, Tenant};

pub const B4ND_TENANT: &str = "b4nd";
pub const KYOKO_TENANT: &str = "kyoko";

pub fn builtin_tenants() -> Vec<Tenant> {
    vec![
        Tenant {
            name: B4ND_TENANT.to_string(),
            api_base: "https://admin.b4nd.me/api".to_string(),
            app_name: "b4nd-user".to_string(),
            app_version: "1.1.20".to_string(),
        },
        Tenant {
            name: KYOKO_TENANT.to_string(),
            api_base: "https://api-prd.saitokyoko-message.jp/api".to_string(),
            app_name: "kyoko-user".to_string(),
            app_version: "1.0.2".to_string(),
        },
    ]
}

pub fn builtin_correspondents() -> Vec<Correspondent> {
    [
        (36, "松村沙友理", B4ND_TENANT),
        (37, "鈴木絢音", B4ND_TENANT),
        (43, "菅井友香", B4ND_TENANT),
        (1, "齊藤京子", KYOKO_TENANT),
    ]
    .into_iter()
    .map(|(id, name, tenant)| Correspondent {
        id,
        name: name.to_string(),
        tenant: tenant.to_string(),
    })
    .collect()
}
