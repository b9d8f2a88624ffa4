use serde::{Deserialize, Serialize};

/// Role of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    User,
}

/// Capabilities gated behind a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Open the admin dashboard
    ViewAdminDashboard,

    /// Manage user accounts
    ManageUsers,

    /// Manage products and articles
    ManageContent,
}

impl UserRole {
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewAdminDashboard | Capability::ManageUsers => *self == UserRole::Admin,
            Capability::ManageContent => matches!(self, UserRole::Admin | UserRole::Editor),
        }
    }
}
