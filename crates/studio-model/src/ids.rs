//! Identifier newtypes for the persona tree
//!
//! Identifiers originate in seed data as human-readable slugs
//! (e.g. `sarah-chen`, `the-obsidian-crown`), so they are string-backed
//! rather than generated.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create from any string-like value
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View as a string slice
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// Unique persona identifier
    PersonaId
);
string_id!(
    /// Unique photo specification identifier
    PhotoId
);
string_id!(
    /// Unique project identifier
    ProjectId
);
string_id!(
    /// Unique category identifier
    CategoryId
);
