//! Entity snapshot types.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! the fields of a remote entity as returned by one query. They are reduced
//! forms: only the fields this workspace actually uses are decoded, and every
//! value is a transient, read-only snapshot of remote state. Nothing here is
//! owned, mutated, or persisted locally.

use serde::{Deserialize, Serialize};

use crate::{FieldId, FieldOptionId, IssueId, ProjectId, ProjectItemId, ProjectNumber, RepositoryId};

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// A ProjectV2 board: a container of items with configurable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque node identifier of the board.
    pub id: ProjectId,
    /// Board title as shown in the GitHub UI.
    pub title: String,
    /// Per-owner project number from the board URL.
    pub number: ProjectNumber,
    /// Web URL of the board.
    pub url: String,
}

// ---------------------------------------------------------------------------

/// Data type tag of a project field.
///
/// The tag vocabulary is owned by the remote service; tags this workspace does
/// not know about decode to [`FieldDataType::Other`] rather than failing the
/// whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldDataType {
    /// Free-form text field.
    Text,
    /// Numeric field.
    Number,
    /// Date field.
    Date,
    /// Field whose value is chosen from a fixed set of named options.
    SingleSelect,
    /// Iteration (sprint) field.
    Iteration,
    /// A tag introduced by the service after this crate was written.
    #[serde(other)]
    Other,
}

/// One option of a single-select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Opaque node identifier of the option.
    pub id: FieldOptionId,
    /// Option label as shown in the GitHub UI.
    pub name: String,
}

/// A field configured on a ProjectV2 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectField {
    /// Opaque node identifier of the field.
    pub id: FieldId,
    /// Field name as shown in the GitHub UI.
    pub name: String,
    /// Data type tag.
    #[serde(rename = "dataType")]
    pub data_type: FieldDataType,
    /// Ordered option list. Only single-select fields carry options; for
    /// every other data type the service omits the key and this list is
    /// empty.
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

impl ProjectField {
    /// Returns `true` if this field's value is chosen from [`Self::options`].
    pub fn is_single_select(&self) -> bool {
        self.data_type == FieldDataType::SingleSelect
    }
}

// ---------------------------------------------------------------------------

/// An issue or pull request attached to a ProjectV2 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    /// Opaque node identifier of the item (distinct from the underlying
    /// issue's identifier).
    pub id: ProjectItemId,
    /// Item title.
    pub title: String,
    /// Web URL of the underlying content.
    pub url: String,
}

// ---------------------------------------------------------------------------
// Repositories and issues
// ---------------------------------------------------------------------------

/// A GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Opaque node identifier of the repository.
    pub id: RepositoryId,
    /// Repository name without the owner prefix.
    pub name: String,
    /// Web URL of the repository.
    pub url: String,
}

/// A GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Opaque node identifier of the issue (not the issue number).
    pub id: IssueId,
    /// Issue title.
    pub title: String,
    /// Web URL of the issue.
    pub url: String,
}
