//! Boundary to the external collaborator that supplies raw command source text
//!
//! The core never opens files. A host implements [`SourceProvider`] and the
//! Source tab asks it for text by file name.

use indexmap::IndexMap;

/// Supplies the raw text of a command's documentation file, if it has one.
pub trait SourceProvider {
    /// Raw text for `file_name`, or `None` when unavailable.
    fn load(&self, file_name: &str) -> Option<String>;
}

/// A provider that never has any text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl SourceProvider for NoSource {
    fn load(&self, _file_name: &str) -> Option<String> {
        None
    }
}

/// In-memory provider keyed by file name.
///
/// # Example
///
/// ```
/// use launchpad::{SourceProvider, StaticSources};
///
/// let sources = StaticSources::new().with("ship.md", "# /ship");
/// assert_eq!(sources.load("ship.md").as_deref(), Some("# /ship"));
/// assert_eq!(sources.load("burn.md"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSources {
    files: IndexMap<String, String>,
}

impl StaticSources {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with(mut self, file_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.files.insert(file_name.into(), text.into());
        self
    }
}

impl SourceProvider for StaticSources {
    fn load(&self, file_name: &str) -> Option<String> {
        self.files.get(file_name).cloned()
    }
}

impl<F> SourceProvider for F
where
    F: Fn(&str) -> Option<String>,
{
    fn load(&self, file_name: &str) -> Option<String> {
        self(file_name)
    }
}
