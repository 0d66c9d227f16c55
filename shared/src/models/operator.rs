//! Operator Model
//!
//! Authentication itself is external; callers hand the engine an already
//! authenticated operator. Only the role matters here (reopen is admin-only).

use serde::{Deserialize, Serialize};

/// Operator role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "STAFF")]
    Staff,
}

/// An authenticated back-office operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub id: String,
    pub display_name: String,
    pub role: Role,
}

impl Operator {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
