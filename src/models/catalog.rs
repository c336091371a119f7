use serde::{Deserialize, Serialize};

/// One API deployment: base URL plus the app identity its server expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub name: String,
    pub api_base: String,
    pub app_name: String,
    pub app_version: String,
}

/// An account whose chat history can be archived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correspondent {
    pub id: i64,
    pub name: String,
    pub tenant: String,
}

impl Correspondent {
    /// Label shown in the selection menu, e.g. `鈴木絢音 (ID 37)`
    pub fn menu_label(&self) -> String {
        format!("{} (ID {})", self.name, self.id)
    }
}
