//! Plain data records managed by the stores, plus the identity types shared across layers.

pub mod money;
pub mod order;
pub mod restaurant;
pub mod user;

pub use money::*;
pub use order::*;
pub use restaurant::*;
pub use user::*;

/// Declares a numeric record identifier with the `From<u32>` conversion the stores need.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of an account, issued by the authentication layer.
    UserId,
    "user"
);
record_id!(
    /// Type-safe identifier for Restaurants.
    RestaurantId,
    "restaurant"
);
record_id!(
    /// Type-safe identifier for Dishes.
    DishId,
    "dish"
);
record_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);
record_id!(
    /// Type-safe identifier for OrderItems.
    OrderItemId,
    "order_item"
);
