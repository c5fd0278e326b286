//! Content Repository: read-only registries of commands and guides
//!
//! All tables are built once and never mutated. Every query is
//! deterministic and preserves declaration order.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │       ContentRepository       │
//! ├───────────────┬───────────────┤
//! │ commands      │ guides        │
//! │ name → Command│ GuideCategory │
//! │ (IndexMap)    │ → GuideContent│
//! └───────────────┴───────────────┘
//! ```

mod catalog;
mod command;
mod guide;
mod guides_data;
pub mod pages;

pub use catalog::builtin_commands;
pub use command::{Command, CommandArchitecture, CommandCategory, CommandOption, KeyBehavior};
pub use guide::{GuideCategory, GuideContent, GuideTable};
pub use guides_data::builtin_guides;

use indexmap::IndexMap;
use tracing::debug;

use command::fold_case;

use crate::error::{LaunchpadError, Result};

/// A related-command soft reference and what it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedCommand<'a> {
    /// The stored name
    pub name: &'a str,
    /// The command it names, if the repository has one
    pub target: Option<&'a Command>,
}

impl RelatedCommand<'_> {
    /// Whether the reference points at an existing command.
    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

/// Read-only registry of commands and guide content.
///
/// # Example
///
/// ```
/// use launchpad::{CommandCategory, ContentRepository};
///
/// let repo = ContentRepository::builtin().unwrap();
///
/// let ship = repo.find_command_by_name("/ship").unwrap();
/// assert_eq!(ship.category, CommandCategory::Development);
///
/// assert!(repo.find_command_by_name("/doesnotexist").is_none());
/// assert_eq!(repo.search_commands("").len(), repo.command_count());
/// ```
#[derive(Debug, Clone)]
pub struct ContentRepository {
    /// Commands keyed by name, in declaration order
    commands: IndexMap<String, Command>,

    /// Guide content for every category
    guides: GuideTable,
}

impl ContentRepository {
    /// Create a repository, failing if two commands share a name.
    pub fn new(commands: impl IntoIterator<Item = Command>, guides: GuideTable) -> Result<Self> {
        let mut by_name = IndexMap::new();
        for command in commands {
            if by_name.contains_key(&command.name) {
                return Err(LaunchpadError::DuplicateCommand { name: command.name });
            }
            by_name.insert(command.name.clone(), command);
        }

        Ok(Self {
            commands: by_name,
            guides,
        })
    }

    /// Create a repository holding the builtin command catalog and guides.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_commands(), builtin_guides()?)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Commands
    // ═══════════════════════════════════════════════════════════════════

    /// All commands in declaration order.
    pub fn list_commands(&self) -> Vec<&Command> {
        self.commands.values().collect()
    }

    /// Number of commands.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Commands in `category`, in declaration order. Empty if none.
    pub fn list_commands_by_category(&self, category: CommandCategory) -> Vec<&Command> {
        self.commands
            .values()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Exact, case-sensitive lookup by name (including the leading slash).
    pub fn find_command_by_name(&self, name: &str) -> Option<&Command> {
        let found = self.commands.get(name);
        if found.is_none() {
            debug!(name, "command not found");
        }
        found
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// An empty query returns every command. Results keep declaration
    /// order; there is no relevance ranking.
    pub fn search_commands(&self, query: &str) -> Vec<&Command> {
        if query.is_empty() {
            return self.list_commands();
        }

        let needle = fold_case(query);
        self.commands
            .values()
            .filter(|c| c.matches_folded(&needle))
            .collect()
    }

    /// Resolve each of `command`'s related-command names.
    ///
    /// Names with no matching command are kept with `target: None`.
    /// A command without architecture has no related commands.
    pub fn resolve_related<'a>(&'a self, command: &'a Command) -> Vec<RelatedCommand<'a>> {
        let Some(architecture) = &command.architecture else {
            return Vec::new();
        };

        architecture
            .related_commands
            .iter()
            .map(|name| {
                let target = self.commands.get(name);
                if target.is_none() {
                    debug!(from = %command.name, name = %name, "related command does not resolve");
                }
                RelatedCommand {
                    name: name.as_str(),
                    target,
                }
            })
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Guides
    // ═══════════════════════════════════════════════════════════════════

    /// Guide content for `category`. Always present.
    pub fn guide_content(&self, category: GuideCategory) -> &GuideContent {
        self.guides.get(category)
    }

    /// The full guide table.
    pub fn guides(&self) -> &GuideTable {
        &self.guides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> ContentRepository {
        ContentRepository::builtin().unwrap()
    }

    #[test]
    fn test_builtin_is_valid() {
        assert_eq!(repo().command_count(), 13);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let cmd = Command::new("/dup", "Twice.", "/dup", CommandCategory::Build);
        let result = ContentRepository::new(vec![cmd.clone(), cmd], builtin_guides().unwrap());
        assert_eq!(
            result.unwrap_err(),
            LaunchpadError::DuplicateCommand {
                name: "/dup".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let repo = repo();
        assert!(repo.find_command_by_name("/ship").is_some());
        assert!(repo.find_command_by_name("/SHIP").is_none());
        assert!(repo.find_command_by_name("ship").is_none());
    }

    #[test]
    fn test_empty_category_yields_empty_list() {
        let cmd = Command::new("/only", "Only one.", "/only", CommandCategory::Build);
        let repo = ContentRepository::new(vec![cmd], builtin_guides().unwrap()).unwrap();
        assert!(repo
            .list_commands_by_category(CommandCategory::Workflow)
            .is_empty());
    }

    #[test]
    fn test_resolve_related_keeps_dangling_names() {
        let arch = CommandArchitecture::new("p").with_related(["/build", "/nowhere"]);
        let cmd = Command::new("/x", "x", "/x", CommandCategory::Build).with_architecture(arch);
        let repo = repo();

        let related = repo.resolve_related(&cmd);
        assert_eq!(related.len(), 2);
        assert!(related[0].is_resolved());
        assert_eq!(related[0].target.map(|c| c.name.as_str()), Some("/build"));
        assert_eq!(related[1].name, "/nowhere");
        assert!(!related[1].is_resolved());
    }

    #[test]
    fn test_resolve_related_without_architecture() {
        let cmd = Command::new("/x", "x", "/x", CommandCategory::Build);
        assert!(repo().resolve_related(&cmd).is_empty());
    }
}
