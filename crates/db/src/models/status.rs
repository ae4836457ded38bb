//! Closed string enums carried by lockers and rents.
//!
//! Variants serialize as their upper-case wire names. `VALUES` lists the
//! wire names in declaration order and is the allowed set reported in
//! validation errors.

use serde::{Deserialize, Serialize};

macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Wire names in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Return the wire name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_string_enum! {
    /// Whether a locker door is open or closed.
    LockerStatus {
        Open = "OPEN",
        Closed = "CLOSED",
    }
}

define_string_enum! {
    /// Parcel size class of a rent.
    RentSize {
        Xs = "XS",
        S = "S",
        M = "M",
        L = "L",
        Xl = "XL",
    }
}

define_string_enum! {
    /// Delivery stage of a rent. Any value may be set at any time.
    RentStatus {
        Created = "CREATED",
        WaitingDropoff = "WAITING_DROPOFF",
        WaitingPickup = "WAITING_PICKUP",
        Delivered = "DELIVERED",
    }
}
