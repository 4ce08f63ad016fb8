//! # Role Authorization Guard
//!
//! Every order operation declares an [`Access`] value. The guard compares it with the
//! caller's identity before anything else runs; a denied call touches no store and no
//! topic.

use crate::model::{AuthUser, Role};
use thiserror::Error;
use tracing::warn;

/// Who may invoke an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No identity required.
    Public,
    /// Any authenticated identity.
    Any,
    /// An authenticated identity holding one of these roles.
    Roles(&'static [Role]),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,
}

/// The order operations and subscriptions exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateOrder,
    GetOrders,
    GetOrder,
    EditOrder,
    TakeOrder,
    PendingOrders,
    CookedOrders,
    OrderUpdates,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::CreateOrder,
        Operation::GetOrders,
        Operation::GetOrder,
        Operation::EditOrder,
        Operation::TakeOrder,
        Operation::PendingOrders,
        Operation::CookedOrders,
        Operation::OrderUpdates,
    ];

    pub fn access(self) -> Access {
        match self {
            Operation::CreateOrder => Access::Roles(&[Role::Client]),
            Operation::GetOrders | Operation::GetOrder | Operation::OrderUpdates => Access::Any,
            Operation::EditOrder => Access::Roles(&[Role::Owner, Role::Delivery]),
            Operation::TakeOrder => Access::Roles(&[Role::Delivery]),
            Operation::PendingOrders => Access::Roles(&[Role::Owner]),
            Operation::CookedOrders => Access::Roles(&[Role::Delivery]),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateOrder => "createOrder",
            Operation::GetOrders => "getOrders",
            Operation::GetOrder => "getOrder",
            Operation::EditOrder => "editOrder",
            Operation::TakeOrder => "takeOrder",
            Operation::PendingOrders => "pendingOrders",
            Operation::CookedOrders => "cookedOrders",
            Operation::OrderUpdates => "orderUpdates",
        }
    }
}

/// Checks `identity` against `access`. Returns the identity the call proceeds with.
pub fn authorize(access: Access, identity: Option<&AuthUser>) -> Result<Option<AuthUser>, AccessError> {
    match (access, identity) {
        (Access::Public, identity) => Ok(identity.copied()),
        (_, None) => Err(AccessError::Unauthorized),
        (Access::Any, Some(user)) => Ok(Some(*user)),
        (Access::Roles(roles), Some(user)) if roles.contains(&user.role) => Ok(Some(*user)),
        (Access::Roles(_), Some(_)) => Err(AccessError::Forbidden),
    }
}

/// Runs the guard for `operation`; an authorized caller is always authenticated.
pub fn authorize_operation(
    operation: Operation,
    identity: Option<&AuthUser>,
) -> Result<AuthUser, AccessError> {
    let authorized = authorize(operation.access(), identity).and_then(|user| {
        user.ok_or(AccessError::Unauthorized)
    });
    if let Err(denied) = &authorized {
        warn!(
            operation = operation.name(),
            user = ?identity.map(|u| u.id),
            role = ?identity.map(|u| u.role),
            %denied,
            "Access denied"
        );
    }
    authorized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_passes_without_identity() {
        assert_eq!(authorize(Access::Public, None), Ok(None));
        let user = AuthUser::client(1);
        assert_eq!(authorize(Access::Public, Some(&user)), Ok(Some(user)));
    }

    #[test]
    fn any_requires_identity() {
        assert_eq!(authorize(Access::Any, None), Err(AccessError::Unauthorized));
        let user = AuthUser::owner(3);
        assert_eq!(authorize(Access::Any, Some(&user)), Ok(Some(user)));
    }

    #[test]
    fn roles_require_identity_then_membership() {
        let access = Access::Roles(&[Role::Owner, Role::Delivery]);
        assert_eq!(authorize(access, None), Err(AccessError::Unauthorized));
        assert_eq!(
            authorize(access, Some(&AuthUser::client(1))),
            Err(AccessError::Forbidden)
        );
        assert!(authorize(access, Some(&AuthUser::delivery(2))).is_ok());
    }

    #[test]
    fn operation_table() {
        let client = AuthUser::client(1);
        let owner = AuthUser::owner(2);
        let driver = AuthUser::delivery(3);
        let allowed = |op: Operation, user: &AuthUser| authorize_operation(op, Some(user)).is_ok();

        assert!(allowed(Operation::CreateOrder, &client));
        assert!(!allowed(Operation::CreateOrder, &owner));
        assert!(!allowed(Operation::TakeOrder, &owner));
        assert!(allowed(Operation::TakeOrder, &driver));
        assert!(!allowed(Operation::EditOrder, &client));
        assert!(allowed(Operation::PendingOrders, &owner));
        assert!(!allowed(Operation::PendingOrders, &driver));
        assert!(allowed(Operation::CookedOrders, &driver));
        for user in [&client, &owner, &driver] {
            assert!(allowed(Operation::GetOrders, user));
            assert!(allowed(Operation::GetOrder, user));
            assert!(allowed(Operation::OrderUpdates, user));
        }
        for op in Operation::ALL {
            assert_eq!(authorize_operation(op, None), Err(AccessError::Unauthorized));
        }
    }
}
