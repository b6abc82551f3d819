//! Status and role enums for various entities.
//!
//! All of them travel as `snake_case` strings on the wire and round-trip
//! through `Display`/`FromStr` with the same spelling.

use serde::{Deserialize, Serialize};

/// Implements `Display` and `FromStr` for a unit-variant enum using the
/// provided wire spellings.
macro_rules! wire_enum_strings {
    ($name:ident, $label:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Returns the wire spelling of this value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", $label, ": {}"), s)),
                }
            }
        }
    };
}

/// Role of a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Shopper with access to their own account and orders.
    #[default]
    Customer,
    /// Full access to store management.
    Admin,
    /// Store employee with limited management access.
    Staff,
}

wire_enum_strings!(UserRole, "user role", {
    Customer => "customer",
    Admin => "admin",
    Staff => "staff",
});

/// Purpose of a stored address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    Shipping,
    Billing,
}

wire_enum_strings!(AddressType, "address type", {
    Shipping => "shipping",
    Billing => "billing",
});

/// Overall order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

wire_enum_strings!(OrderStatus, "order status", {
    Pending => "pending",
    Confirmed => "confirmed",
    Processing => "processing",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
    Refunded => "refunded",
});

impl OrderStatus {
    /// Whether the order can no longer change state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Refunded)
    }
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    PartiallyPaid,
    Refunded,
    Failed,
}

wire_enum_strings!(PaymentStatus, "payment status", {
    Pending => "pending",
    Paid => "paid",
    PartiallyPaid => "partially_paid",
    Refunded => "refunded",
    Failed => "failed",
});

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    #[default]
    Unfulfilled,
    PartiallyFulfilled,
    Fulfilled,
    Cancelled,
}

wire_enum_strings!(FulfillmentStatus, "fulfillment status", {
    Unfulfilled => "unfulfilled",
    PartiallyFulfilled => "partially_fulfilled",
    Fulfilled => "fulfilled",
    Cancelled => "cancelled",
});

/// Sort direction for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

wire_enum_strings!(SortOrder, "sort order", {
    Asc => "asc",
    Desc => "desc",
});

/// UI-facing state of an asynchronous load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

wire_enum_strings!(LoadingState, "loading state", {
    Idle => "idle",
    Loading => "loading",
    Success => "success",
    Error => "error",
});
