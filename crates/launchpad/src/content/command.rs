//! Command records: documented operations of the external developer tool

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed grouping for commands.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandCategory {
    /// Ideation, building and iterating on the app
    Development,
    /// Compiling, installing and releasing
    Build,
    /// Queueing and resuming work
    Workflow,
}

impl CommandCategory {
    /// Every category, in display order.
    pub const ALL: [CommandCategory; 3] = [
        CommandCategory::Development,
        CommandCategory::Build,
        CommandCategory::Workflow,
    ];

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            CommandCategory::Development => "Development",
            CommandCategory::Build => "Build & Deploy",
            CommandCategory::Workflow => "Workflow",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A single `(flag, description)` option of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Flag or sub-command word, e.g. `--dry-run`
    pub flag: String,
    /// What the option does
    pub description: String,
}

impl CommandOption {
    /// Create a new option.
    pub fn new(flag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            description: description.into(),
        }
    }
}

/// A `(title, description)` pair describing one behavior of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBehavior {
    /// Short title
    pub title: String,
    /// Longer explanation
    pub description: String,
}

impl KeyBehavior {
    /// Create a new key behavior.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Deep-dive detail for a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandArchitecture {
    /// Free-text rationale
    pub philosophy: String,
    /// Steps in execution order
    pub workflow: Vec<String>,
    /// Notable behaviors
    pub key_behaviors: Vec<KeyBehavior>,
    /// Scenarios the command suits
    pub best_for: Vec<String>,
    /// Scenarios to avoid (may be empty)
    pub not_for: Vec<String>,
    /// Names of related commands; these may not exist in the repository
    pub related_commands: Vec<String>,
    /// Tips (may be empty)
    pub pro_tips: Vec<String>,
}

impl CommandArchitecture {
    /// Create an architecture record with the given philosophy.
    pub fn new(philosophy: impl Into<String>) -> Self {
        Self {
            philosophy: philosophy.into(),
            ..Default::default()
        }
    }

    /// Set the workflow steps.
    pub fn with_workflow<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workflow = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Set the key behaviors from `(title, description)` pairs.
    pub fn with_key_behaviors<I, T, D>(mut self, behaviors: I) -> Self
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        self.key_behaviors = behaviors
            .into_iter()
            .map(|(title, description)| KeyBehavior::new(title, description))
            .collect();
        self
    }

    /// Set the best-for scenarios.
    pub fn with_best_for<I, S>(mut self, scenarios: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.best_for = scenarios.into_iter().map(Into::into).collect();
        self
    }

    /// Set the not-for scenarios.
    pub fn with_not_for<I, S>(mut self, scenarios: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.not_for = scenarios.into_iter().map(Into::into).collect();
        self
    }

    /// Set the related command names.
    pub fn with_related<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_commands = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pro tips.
    pub fn with_pro_tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pro_tips = tips.into_iter().map(Into::into).collect();
        self
    }
}

/// A documented operation of the external tool.
///
/// # Example
///
/// ```
/// use launchpad::{Command, CommandCategory};
///
/// let cmd = Command::new("/build", "Compile the Android app.", "/build [clean]", CommandCategory::Build)
///     .with_examples(["/build", "/build clean"])
///     .with_options([("clean", "Clean build from scratch")]);
///
/// assert_eq!(cmd.examples.len(), 2);
/// assert!(cmd.architecture.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// Slash-prefixed primary key, e.g. `/ship`
    pub name: String,
    /// One-line summary
    pub description: String,
    /// Canonical invocation syntax
    pub usage: String,
    /// Example invocations, in rendering order
    #[serde(default)]
    pub examples: Vec<String>,
    /// Options, in rendering order
    #[serde(default)]
    pub options: Vec<CommandOption>,
    /// Grouping
    pub category: CommandCategory,
    /// Deep-dive detail, when available
    #[serde(default)]
    pub architecture: Option<CommandArchitecture>,
    /// External documentation file this command corresponds to
    #[serde(default)]
    pub source_file_name: Option<String>,
}

impl Command {
    /// Create a command with no examples, options, architecture or source file.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
        category: CommandCategory,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
            examples: Vec::new(),
            options: Vec::new(),
            category,
            architecture: None,
            source_file_name: None,
        }
    }

    /// Set the example invocations.
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Set the options from `(flag, description)` pairs.
    pub fn with_options<I, F, D>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (F, D)>,
        F: Into<String>,
        D: Into<String>,
    {
        self.options = options
            .into_iter()
            .map(|(flag, description)| CommandOption::new(flag, description))
            .collect();
        self
    }

    /// Attach an architecture record.
    pub fn with_architecture(mut self, architecture: CommandArchitecture) -> Self {
        self.architecture = Some(architecture);
        self
    }

    /// Attach a source file name.
    pub fn with_source_file(mut self, file_name: impl Into<String>) -> Self {
        self.source_file_name = Some(file_name.into());
        self
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be passed through [`fold_case`].
    pub(crate) fn matches_folded(&self, needle: &str) -> bool {
        fold_case(&self.name).contains(needle) || fold_case(&self.description).contains(needle)
    }
}

/// Lowercase one character at a time.
///
/// Unlike `str::to_lowercase` this ignores word context (a final `Σ`
/// still folds to `σ`), so any substring of a text folds to a substring
/// of the folded text.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_titles_in_display_order() {
        let titles: Vec<_> = CommandCategory::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Development", "Build & Deploy", "Workflow"]);
    }

    #[test]
    fn test_command_builder() {
        let cmd = Command::new("/x", "Does x.", "/x", CommandCategory::Workflow)
            .with_examples(["/x"])
            .with_options([("--y", "Also y")])
            .with_source_file("x.md");

        assert_eq!(cmd.examples, vec!["/x".to_string()]);
        assert_eq!(cmd.options, vec![CommandOption::new("--y", "Also y")]);
        assert_eq!(cmd.source_file_name.as_deref(), Some("x.md"));
    }

    #[test]
    fn test_matches_folded() {
        let cmd = Command::new("/Queue", "Save a Task", "/queue", CommandCategory::Workflow);
        assert!(cmd.matches_folded("queue"));
        assert!(cmd.matches_folded("a task"));
        assert!(!cmd.matches_folded("burn"));
    }

    #[test]
    fn test_fold_case_ignores_word_position() {
        let cmd = Command::new("/greek", "ΑΣ build", "/greek", CommandCategory::Build);
        assert_eq!(fold_case("ΑΣ"), "ασ");
        assert!(cmd.matches_folded(&fold_case("Σ")));
        assert!(cmd.matches_folded(&fold_case("αΣ b")));
    }

    #[test]
    fn test_category_serializes_symbolically() {
        let json = serde_json::to_string(&CommandCategory::Build).unwrap();
        assert_eq!(json, "\"BUILD\"");
    }

    #[test]
    fn test_command_deserializes_with_defaults() {
        let cmd: Command = serde_json::from_str(
            r#"{"name":"/run","description":"Run it.","usage":"/run","category":"BUILD"}"#,
        )
        .unwrap();
        assert!(cmd.examples.is_empty());
        assert!(cmd.architecture.is_none());
        assert!(cmd.source_file_name.is_none());
    }
}
