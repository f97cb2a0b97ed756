//! Typed identifier newtypes for requirement records.
//!
//! A `CustomerReqId` cannot be accidentally used where a `TechReqId` is
//! expected. IDs are owned strings supplied by the caller (the storage layer
//! keys records by them); `Ord` follows plain lexicographic order, which is
//! what the canonical correlation-pair ordering relies on.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Customer (voice-of-customer) requirement identifier.
    CustomerReqId
);

define_id!(
    /// Technical requirement identifier.
    TechReqId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_order_lexicographically() {
        assert!(TechReqId::from("tr-1") < TechReqId::from("tr-2"));
        assert!(TechReqId::from("a") < TechReqId::from("b"));
    }

    #[test]
    fn test_id_display_round_trip() {
        let id = CustomerReqId::new("cr-42");
        assert_eq!(id.to_string(), "cr-42");
        assert_eq!(id.as_str(), "cr-42");
    }
}
