//! Shared newtypes used across all domain modules.
//!
//! Identifier newtypes are serialization-transparent: they serialize and
//! deserialize as the bare strings the backend sends, so they can be used
//! directly in wire types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Percent-encoded form for use as a URL path segment.
            pub fn encoded(&self) -> String {
                urlencoding::encode(&self.0).into_owned()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self(s))
            }
        }
    };
}

string_id! {
    /// Tenant (account) identifier.
    TenantId
}

string_id! {
    /// User identifier.
    UserId
}

string_id! {
    /// Role identifier.
    RoleId
}

string_id! {
    /// Permission identifier.
    PermissionId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = TenantId::new("tenant-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"tenant-1\"");

        let parsed: UserId = serde_json::from_str("\"u-42\"").unwrap();
        assert_eq!(parsed.as_str(), "u-42");
    }

    #[test]
    fn test_encoded_escapes_path_characters() {
        assert_eq!(RoleId::from("a/b c").encoded(), "a%2Fb%20c");
        assert_eq!(PermissionId::from("plain").encoded(), "plain");
    }

    #[test]
    fn test_blank_ids_are_empty() {
        assert!(TenantId::from("  ").is_empty());
        assert!(!TenantId::from("x").is_empty());
    }
}
