//! Command detail screen: Overview, Architecture and Source tabs

use serde::Serialize;

use crate::config::AppConfig;
use crate::content::{Command, CommandArchitecture, CommandOption, ContentRepository, KeyBehavior};
use crate::source::SourceProvider;

/// Title of the not-found view.
pub const NOT_FOUND_TITLE: &str = "Command Not Found";

/// Architecture tab text when a command has no architecture record.
pub const NO_ARCHITECTURE: &str = "No architecture details available for this command.";

/// Source tab headline when a command names no source file.
pub const NO_SOURCE_FILE: &str = "No source file available";

/// Source tab note when no raw text was supplied.
pub const SOURCE_NOT_LOADED: &str = "Raw source not loaded in this build.";

/// The three detail tabs, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetailTab {
    /// Description, usage, examples and options
    #[default]
    Overview,
    /// Deep-dive record
    Architecture,
    /// Raw documentation text
    Source,
}

impl DetailTab {
    /// Every tab, in display order.
    pub const ALL: [DetailTab; 3] = [
        DetailTab::Overview,
        DetailTab::Architecture,
        DetailTab::Source,
    ];

    /// Tab label.
    pub fn title(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Architecture => "Architecture",
            DetailTab::Source => "Source",
        }
    }

    /// Position in the tab row.
    pub fn index(&self) -> usize {
        match self {
            DetailTab::Overview => 0,
            DetailTab::Architecture => 1,
            DetailTab::Source => 2,
        }
    }

    /// Tab at `index`, if any.
    pub fn from_index(index: usize) -> Option<DetailTab> {
        DetailTab::ALL.get(index).copied()
    }
}

/// Transient state of the command detail screen.
///
/// Holds only the requested name and the selected tab; the record
/// itself is looked up on every [`view`](Self::view).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDetailScreen {
    name: String,
    selected: DetailTab,
}

impl CommandDetailScreen {
    /// Create the screen for `name`, on the Overview tab.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: DetailTab::default(),
        }
    }

    /// The requested command name.
    pub fn command_name(&self) -> &str {
        &self.name
    }

    /// The selected tab.
    pub fn selected_tab(&self) -> DetailTab {
        self.selected
    }

    /// Select `tab`.
    pub fn select_tab(&mut self, tab: DetailTab) {
        self.selected = tab;
    }

    /// Select the tab at `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether a tab was selected.
    pub fn select_tab_index(&mut self, index: usize) -> bool {
        match DetailTab::from_index(index) {
            Some(tab) => {
                self.selected = tab;
                true
            }
            None => false,
        }
    }

    /// Render the selected tab.
    ///
    /// `sources` is only consulted when the Source tab is selected.
    pub fn view<'a>(
        &self,
        repo: &'a ContentRepository,
        sources: &dyn SourceProvider,
        config: &AppConfig,
    ) -> CommandDetailView<'a> {
        let Some(command) = repo.find_command_by_name(&self.name) else {
            return CommandDetailView::NotFound {
                title: NOT_FOUND_TITLE,
                message: format!("Command '{}' not found", self.name),
            };
        };

        let content = match self.selected {
            DetailTab::Overview => TabContent::Overview(OverviewView::of(command)),
            DetailTab::Architecture => {
                TabContent::Architecture(ArchitectureView::of(repo, command))
            }
            DetailTab::Source => TabContent::Source(SourceView::of(command, sources, config)),
        };

        CommandDetailView::Found {
            name: &command.name,
            tabs: DetailTab::ALL.map(|t| t.title()),
            selected: self.selected,
            content,
        }
    }
}

/// What the detail screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CommandDetailView<'a> {
    /// The requested name matched no command
    NotFound {
        /// Header
        title: &'static str,
        /// Body text naming the command
        message: String,
    },
    /// The command exists
    Found {
        /// Command name, for the header
        name: &'a str,
        /// Tab labels, in order
        tabs: [&'static str; 3],
        /// Selected tab
        selected: DetailTab,
        /// Selected tab's content
        content: TabContent<'a>,
    },
}

/// Content of one tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", content = "view", rename_all = "camelCase")]
pub enum TabContent<'a> {
    /// Overview tab
    Overview(OverviewView<'a>),
    /// Architecture tab
    Architecture(ArchitectureView<'a>),
    /// Source tab
    Source(SourceView),
}

// ═══════════════════════════════════════════════════════════════════════
// Overview
// ═══════════════════════════════════════════════════════════════════════

/// The Overview tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView<'a> {
    /// One-line summary
    pub description: &'a str,
    /// Invocation syntax
    pub usage: &'a str,
    /// Examples (may be empty)
    pub examples: &'a [String],
    /// Options (may be empty)
    pub options: &'a [CommandOption],
    /// Pro tips; empty without an architecture record
    pub pro_tips: &'a [String],
}

impl<'a> OverviewView<'a> {
    fn of(command: &'a Command) -> Self {
        Self {
            description: &command.description,
            usage: &command.usage,
            examples: &command.examples,
            options: &command.options,
            pro_tips: command
                .architecture
                .as_ref()
                .map(|a| a.pro_tips.as_slice())
                .unwrap_or_default(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Architecture
// ═══════════════════════════════════════════════════════════════════════

/// The Architecture tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ArchitectureView<'a> {
    /// The command has no architecture record
    Empty {
        /// Explanation shown in place of content
        message: &'static str,
    },
    /// The command's architecture record
    Details(ArchitectureDetails<'a>),
}

/// A populated Architecture tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureDetails<'a> {
    /// Rationale
    pub philosophy: &'a str,
    /// Numbered steps
    pub workflow: Vec<WorkflowStep<'a>>,
    /// Notable behaviors
    pub key_behaviors: &'a [KeyBehavior],
    /// Scenarios the command suits
    pub best_for: &'a [String],
    /// Scenarios to avoid (may be empty)
    pub not_for: &'a [String],
    /// Related commands with their resolution
    pub related: Vec<RelatedChip<'a>>,
}

/// One numbered workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowStep<'a> {
    /// 1-based position
    pub number: usize,
    /// Step text
    pub text: &'a str,
}

/// A related-command chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelatedChip<'a> {
    /// Stored name
    pub name: &'a str,
    /// Whether the repository has a command of that name
    pub resolved: bool,
}

impl<'a> ArchitectureView<'a> {
    fn of(repo: &'a ContentRepository, command: &'a Command) -> Self {
        match &command.architecture {
            None => ArchitectureView::Empty {
                message: NO_ARCHITECTURE,
            },
            Some(architecture) => ArchitectureView::Details(details(repo, command, architecture)),
        }
    }
}

fn details<'a>(
    repo: &'a ContentRepository,
    command: &'a Command,
    architecture: &'a CommandArchitecture,
) -> ArchitectureDetails<'a> {
    ArchitectureDetails {
        philosophy: &architecture.philosophy,
        workflow: architecture
            .workflow
            .iter()
            .enumerate()
            .map(|(i, text)| WorkflowStep { number: i + 1, text })
            .collect(),
        key_behaviors: &architecture.key_behaviors,
        best_for: &architecture.best_for,
        not_for: &architecture.not_for,
        related: repo
            .resolve_related(command)
            .into_iter()
            .map(|r| RelatedChip {
                name: r.name,
                resolved: r.is_resolved(),
            })
            .collect(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Source
// ═══════════════════════════════════════════════════════════════════════

/// The Source tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SourceView {
    /// No usable raw text
    Missing {
        /// Names the file when known
        headline: String,
        /// Secondary note
        note: &'static str,
    },
    /// Raw text supplied by the host
    Loaded {
        /// Display path of the file, when known
        path: Option<String>,
        /// The text, verbatim
        text: String,
    },
}

impl SourceView {
    fn of(command: &Command, sources: &dyn SourceProvider, config: &AppConfig) -> Self {
        let file_name = command.source_file_name.as_deref();
        let text = file_name
            .and_then(|name| sources.load(name))
            .filter(|text| !text.trim().is_empty());

        match text {
            Some(text) => SourceView::Loaded {
                path: file_name.map(|name| config.source_path(name)),
                text,
            },
            None => SourceView::Missing {
                headline: match file_name {
                    Some(name) => format!("Source file: {}", config.source_path(name)),
                    None => NO_SOURCE_FILE.to_string(),
                },
                note: SOURCE_NOT_LOADED,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{NoSource, StaticSources};

    fn repo() -> ContentRepository {
        ContentRepository::builtin().unwrap()
    }

    #[test]
    fn test_tab_indices() {
        for tab in DetailTab::ALL {
            assert_eq!(DetailTab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(DetailTab::from_index(3), None);
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut screen = CommandDetailScreen::new("/ship");
        assert!(screen.select_tab_index(2));
        assert!(!screen.select_tab_index(7));
        assert_eq!(screen.selected_tab(), DetailTab::Source);
    }

    #[test]
    fn test_not_found() {
        let repo = repo();
        let screen = CommandDetailScreen::new("/doesnotexist");
        let view = screen.view(&repo, &NoSource, &AppConfig::default());
        assert_eq!(
            view,
            CommandDetailView::NotFound {
                title: NOT_FOUND_TITLE,
                message: "Command '/doesnotexist' not found".to_string(),
            }
        );
    }

    #[test]
    fn test_workflow_is_numbered_from_one() {
        let repo = repo();
        let mut screen = CommandDetailScreen::new("/ship");
        screen.select_tab(DetailTab::Architecture);

        let CommandDetailView::Found {
            content: TabContent::Architecture(ArchitectureView::Details(details)),
            ..
        } = screen.view(&repo, &NoSource, &AppConfig::default())
        else {
            panic!("expected architecture details");
        };

        let numbers: Vec<_> = details.workflow.iter().map(|s| s.number).collect();
        assert_eq!(numbers, (1..=details.workflow.len()).collect::<Vec<_>>());
        assert!(details.related.iter().all(|r| r.resolved));
    }

    #[test]
    fn test_source_missing_names_file() {
        let repo = repo();
        let mut screen = CommandDetailScreen::new("/ship");
        screen.select_tab(DetailTab::Source);

        let view = screen.view(&repo, &NoSource, &AppConfig::default());
        let CommandDetailView::Found { content, .. } = view else {
            panic!("expected found");
        };
        assert_eq!(
            content,
            TabContent::Source(SourceView::Missing {
                headline: "Source file: .claude/commands/ship.md".to_string(),
                note: SOURCE_NOT_LOADED,
            })
        );
    }

    #[test]
    fn test_blank_source_counts_as_missing() {
        let repo = repo();
        let sources = StaticSources::new().with("ship.md", "  \n ");
        let mut screen = CommandDetailScreen::new("/ship");
        screen.select_tab(DetailTab::Source);

        let CommandDetailView::Found { content, .. } =
            screen.view(&repo, &sources, &AppConfig::default())
        else {
            panic!("expected found");
        };
        assert!(matches!(content, TabContent::Source(SourceView::Missing { .. })));
    }

    #[test]
    fn test_source_loaded_verbatim() {
        let repo = repo();
        let sources = StaticSources::new().with("burn.md", "# /burn\n\nRun the queue.");
        let mut screen = CommandDetailScreen::new("/burn");
        screen.select_tab(DetailTab::Source);

        let CommandDetailView::Found { content, .. } =
            screen.view(&repo, &sources, &AppConfig::default())
        else {
            panic!("expected found");
        };
        assert_eq!(
            content,
            TabContent::Source(SourceView::Loaded {
                path: Some(".claude/commands/burn.md".to_string()),
                text: "# /burn\n\nRun the queue.".to_string(),
            })
        );
    }
}
