//! Newtype IDs for type-safe identifiers.
//!
//! The upstream catalog hands out positive integer ids, so every id here
//! wraps a `u64` and zero is never a valid value.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "u64")]
        pub struct $name(u64);

        impl $name {
            /// Wrap a trusted raw value.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Parse and validate an id from user input.
            ///
            /// Rejects zero, negative and non-numeric input.
            pub fn parse(s: &str) -> Result<Self, CommerceError> {
                let raw: i64 = s
                    .trim()
                    .parse()
                    .map_err(|_| CommerceError::InvalidProductId(s.to_string()))?;
                Self::try_from(raw)
            }

            /// Get the raw value.
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = CommerceError;

            fn try_from(raw: i64) -> Result<Self, Self::Error> {
                if raw <= 0 {
                    return Err(CommerceError::InvalidProductId(raw.to_string()));
                }
                Ok(Self(raw as u64))
            }
        }

        impl FromStr for $name {
            type Err = CommerceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Stable catalog identifier of a product.
    ProductId
);
