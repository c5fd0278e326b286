//! Commands screen: search, category grouping and expandable cards

use serde::Serialize;
use std::collections::HashSet;

use super::command_detail::CommandDetailScreen;
use crate::content::{Command, CommandCategory, CommandOption, ContentRepository};

/// Placeholder text for the search field.
pub const SEARCH_PLACEHOLDER: &str = "Search commands...";

/// Transient state of the Commands screen.
///
/// # Example
///
/// ```
/// use launchpad::{CommandsScreen, ContentRepository};
///
/// let repo = ContentRepository::builtin().unwrap();
/// let mut screen = CommandsScreen::new();
///
/// screen.set_query("QUEUE");
/// let names: Vec<_> = screen
///     .sections(&repo)
///     .iter()
///     .flat_map(|s| s.cards.iter().map(|c| c.name))
///     .collect();
/// assert_eq!(names, vec!["/queue", "/burn"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandsScreen {
    /// Current search text
    query: String,

    /// Names of expanded cards
    expanded: HashSet<String>,

    /// Detail view opened from this screen, if any
    detail: Option<CommandDetailScreen>,
}

/// One category group of the command list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandSection<'a> {
    /// The category
    pub category: CommandCategory,
    /// Header text
    pub title: &'static str,
    /// Rows, in declaration order; never empty
    pub cards: Vec<CommandCard<'a>>,
}

/// A command list row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandCard<'a> {
    /// Command name
    pub name: &'a str,
    /// One-line summary
    pub description: &'a str,
    /// Whether the row is expanded
    pub expanded: bool,
    /// Extra content shown while expanded
    pub details: Option<CardDetails<'a>>,
}

/// Content of an expanded row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDetails<'a> {
    /// Invocation syntax
    pub usage: &'a str,
    /// Example invocations; `None` when the command has none
    pub examples: Option<&'a [String]>,
    /// Options; `None` when the command has none
    pub options: Option<&'a [CommandOption]>,
}

impl<'a> CardDetails<'a> {
    fn of(command: &'a Command) -> Self {
        Self {
            usage: &command.usage,
            examples: non_empty(&command.examples),
            options: non_empty(&command.options),
        }
    }
}

fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    (!items.is_empty()).then_some(items)
}

impl CommandsScreen {
    /// Create the screen with an empty query and every card collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Search
    // ═══════════════════════════════════════════════════════════════════

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clear the search text.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Whether the clear action should be offered.
    pub fn can_clear(&self) -> bool {
        !self.query.is_empty()
    }

    /// Matching commands grouped by category.
    ///
    /// Groups follow category order; categories with no match are left out.
    pub fn sections<'a>(&self, repo: &'a ContentRepository) -> Vec<CommandSection<'a>> {
        let matches = repo.search_commands(&self.query);

        CommandCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let cards: Vec<_> = matches
                    .iter()
                    .copied()
                    .filter(|c| c.category == category)
                    .map(|c| self.card(c))
                    .collect();

                (!cards.is_empty()).then(|| CommandSection {
                    category,
                    title: category.title(),
                    cards,
                })
            })
            .collect()
    }

    fn card<'a>(&self, command: &'a Command) -> CommandCard<'a> {
        let expanded = self.is_expanded(&command.name);
        CommandCard {
            name: &command.name,
            description: &command.description,
            expanded,
            details: expanded.then(|| CardDetails::of(command)),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Expand / Collapse
    // ═══════════════════════════════════════════════════════════════════

    /// Flip the expanded state of one row. Returns the new state.
    pub fn toggle_expanded(&mut self, name: &str) -> bool {
        if self.expanded.remove(name) {
            false
        } else {
            self.expanded.insert(name.to_string());
            true
        }
    }

    /// Whether the row for `name` is expanded.
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Detail
    // ═══════════════════════════════════════════════════════════════════

    /// Open the detail view for `name`. Unknown names open a not-found view.
    pub fn open_detail(&mut self, name: impl Into<String>) -> &mut CommandDetailScreen {
        self.detail.insert(CommandDetailScreen::new(name))
    }

    /// Close the detail view, if open.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// The open detail view.
    pub fn detail(&self) -> Option<&CommandDetailScreen> {
        self.detail.as_ref()
    }

    /// The open detail view, mutably.
    pub fn detail_mut(&mut self) -> Option<&mut CommandDetailScreen> {
        self.detail.as_mut()
    }
}
