//! Strongly-typed ID newtypes for domain entities.
//!
//! Each entity gets its own newtype wrapper around `Uuid`, preventing
//! accidental misuse of IDs (e.g., passing a `DocumentId` where a
//! `PrincipalId` is expected).
//!
//! # Example
//!
//! ```ignore
//! use lodgeworks_models::ids::{PrincipalId, DocumentId};
//!
//! fn load_member(id: PrincipalId) { /* ... */ }
//!
//! let principal_id = PrincipalId::new();
//! let document_id = DocumentId::new();
//!
//! load_member(principal_id);    // OK
//! // load_member(document_id);  // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to define a strongly-typed ID newtype.
///
/// Generates a newtype wrapper around `Uuid` with the trait implementations
/// needed for serialization, ordered collections, and display.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID.
            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create an ID from a u128 value (useful for constants).
            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            /// Get the inner UUID value.
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Get a reference to the inner UUID.
            #[inline]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Create a nil (all zeros) ID.
            #[inline]
            pub const fn nil() -> Self {
                Self(Uuid::nil())
            }

            /// Check if this is a nil ID.
            #[inline]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl AsRef<Uuid> for $name {
            #[inline]
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }
    };
}

define_id! {
    /// Identifier of a member principal.
    PrincipalId
}

define_id! {
    /// Identifier of an uploaded document.
    DocumentId
}

define_id! {
    /// Identifier of a scheduled program.
    ProgramId
}

define_id! {
    /// Identifier of a notification event (one per broadcast).
    NotificationEventId
}

define_id! {
    /// Identifier of a per-recipient notification record.
    NotificationId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_types() {
        let a = PrincipalId::from_u128(1);
        let b = PrincipalId::from_u128(1);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_nil_id() {
        let id = DocumentId::nil();
        assert!(id.is_nil());
        assert!(!DocumentId::new().is_nil());
    }

    #[test]
    fn test_serde_transparent() {
        let id = PrincipalId::from_u128(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));
        let back: PrincipalId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
