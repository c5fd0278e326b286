//! Error types for Launchpad construction and parsing

use thiserror::Error;

use crate::content::GuideCategory;

/// Main error type for Launchpad operations.
///
/// Only construction-time validation and strict parsing produce these.
/// Lookup misses, empty groups and missing optional content are ordinary
/// values (`Option`, empty lists, empty-state views), not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchpadError {
    /// Two commands share the same primary key
    #[error("Duplicate command name: {name}")]
    DuplicateCommand {
        /// The repeated name
        name: String,
    },

    /// A guide category has no entry in the guide content table
    #[error("Guide content table has no entry for {category}")]
    IncompleteGuideTable {
        /// The missing category
        category: GuideCategory,
    },

    /// A guide content entry has an empty field
    #[error("Guide content for {category} has an empty {field}")]
    EmptyGuideContent {
        /// The category whose entry is incomplete
        category: GuideCategory,
        /// Name of the empty field
        field: &'static str,
    },

    /// A path that names none of the known route families
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// A guide category identifier that matches no enumeration member
    #[error("Unknown guide category: {0}")]
    UnknownGuideCategory(String),

    /// Configuration that failed to deserialize
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for Launchpad operations
pub type Result<T> = std::result::Result<T, LaunchpadError>;
