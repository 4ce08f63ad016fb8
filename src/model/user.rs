use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The kind of account an actor signed in with. Fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Client,
    Owner,
    Delivery,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Client => "Client",
            Role::Owner => "Owner",
            Role::Delivery => "Delivery",
        };
        f.write_str(name)
    }
}

/// The authenticated identity attached to a call by the authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub role: Role,
}

impl AuthUser {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn client(id: u32) -> Self {
        Self::new(UserId(id), Role::Client)
    }

    pub fn owner(id: u32) -> Self {
        Self::new(UserId(id), Role::Owner)
    }

    pub fn delivery(id: u32) -> Self {
        Self::new(UserId(id), Role::Delivery)
    }
}
