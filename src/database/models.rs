// Credential store models
//
// Users live only in process memory; warehouse managers are static reference data.

use serde::{Deserialize, Serialize};

/// Access level carried by a user record and by its session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored user account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Argon2 PHC string; never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

/// A user about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct WarehouseManager {
    pub id: u64,
    pub name: String,
    pub contact: String,
}

/// Static warehouse manager directory exposed behind the admin gate
pub fn warehouse_managers() -> Vec<WarehouseManager> {
    vec![
        WarehouseManager {
            id: 1,
            name: "john doe".to_string(),
            contact: "+44123456789".to_string(),
        },
        WarehouseManager {
            id: 2,
            name: "jane doe".to_string(),
            contact: "+44987654321".to_string(),
        },
    ]
}
