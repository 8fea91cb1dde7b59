/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Staff role carried in the session token's role claim.
/// The wire representation is the kebab-case string the identity layer issues
/// ("member", "admin", "super-admin").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Member,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Lenient parse of a role claim. Unknown or empty strings yield `None`,
    /// which downstream checks treat as "no privileges".
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim() {
            "member" => Some(Role::Member),
            "admin" => Some(Role::Admin),
            "super-admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    /// Whether this role clears the admin-route bar.
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
            Role::SuperAdmin => "super-admin",
        }
    }
}
