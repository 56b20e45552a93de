//! Newtype domain identifiers.
//!
//! Every GitHub entity this workspace touches is addressed by an opaque,
//! service-assigned node identifier. Each kind of node gets a distinct newtype
//! wrapping a `String`, so a [`ProjectId`] can never be passed where a
//! [`FieldId`] is expected even though both are strings on the wire.
//!
//! Human-facing numbers (issue numbers, project numbers) are deliberately
//! separate types from node identifiers: the number `42` names an issue only
//! within one repository, while the node id names it globally.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! node_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Macro for u64-wrapped newtypes (GitHub-assigned numbers).
// Generates: struct (Copy), new(), as_u64(), Display.
// ---------------------------------------------------------------------------
macro_rules! number_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new number from a raw integer.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value.
            pub fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — opaque node ids
// ---------------------------------------------------------------------------

node_id! {
    /// Identifies a ProjectV2 board.
    ProjectId
}

node_id! {
    /// Identifies an item on a ProjectV2 board.
    ///
    /// Distinct from the identifier of the underlying issue or pull request:
    /// adding the same issue to two boards yields two item identifiers.
    ProjectItemId
}

node_id! {
    /// Identifies a field configured on a ProjectV2 board.
    FieldId
}

node_id! {
    /// Identifies one option of a single-select project field.
    FieldOptionId
}

node_id! {
    /// Identifies a GitHub issue node.
    ///
    /// This is the opaque global identifier, not the per-repository issue
    /// number shown in the GitHub UI. See [`IssueNumber`].
    IssueId
}

node_id! {
    /// Identifies a GitHub repository node.
    RepositoryId
}

// ---------------------------------------------------------------------------
// Identifiers — human-facing names and numbers
// ---------------------------------------------------------------------------

node_id! {
    /// A GitHub user login (e.g. `"octocat"`).
    Login
}

number_id! {
    /// The per-repository issue number shown in the GitHub UI (e.g. `#42`).
    ///
    /// Only meaningful together with a repository; resolve it to an
    /// [`IssueId`] before addressing the issue globally.
    IssueNumber
}

number_id! {
    /// The per-owner ProjectV2 number shown in the board URL.
    ProjectNumber
}
