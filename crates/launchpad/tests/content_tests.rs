//! Tests for the content repository and builtin catalog

use launchpad::content::builtin_guides;
use launchpad::*;
use pretty_assertions::assert_eq;

fn repo() -> ContentRepository {
    ContentRepository::builtin().expect("builtin content is valid")
}

fn names(commands: &[&Command]) -> Vec<String> {
    commands.iter().map(|c| c.name.clone()).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Lookup
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_find_ship() {
    let repo = repo();
    let ship = repo.find_command_by_name("/ship").expect("/ship exists");
    assert_eq!(ship.category, CommandCategory::Development);
    assert!(ship.architecture.is_some());
}

#[test]
fn test_find_round_trips_every_command() {
    let repo = repo();
    for command in repo.list_commands() {
        assert_eq!(repo.find_command_by_name(&command.name), Some(command));
    }
}

#[test]
fn test_find_is_exact_and_case_sensitive() {
    let repo = repo();
    assert!(repo.find_command_by_name("/doesnotexist").is_none());
    assert!(repo.find_command_by_name("/SHIP").is_none());
    assert!(repo.find_command_by_name("ship").is_none());
}

#[test]
fn test_builtin_categories() {
    let repo = repo();
    let category = |name: &str| repo.find_command_by_name(name).map(|c| c.category);

    assert_eq!(category("/queue"), Some(CommandCategory::Workflow));
    assert_eq!(category("/build"), Some(CommandCategory::Build));
    assert_eq!(category("/pilot"), Some(CommandCategory::Development));
}

// ═══════════════════════════════════════════════════════════════════════
// Listing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_list_by_category_preserves_order() {
    let repo = repo();
    assert_eq!(
        names(&repo.list_commands_by_category(CommandCategory::Build)),
        vec!["/build", "/install", "/run", "/release"]
    );
    assert_eq!(
        names(&repo.list_commands_by_category(CommandCategory::Workflow)),
        vec!["/queue", "/burn", "/reboot"]
    );
}

#[test]
fn test_categories_partition_catalog() {
    let repo = repo();
    let total: usize = CommandCategory::ALL
        .into_iter()
        .map(|c| repo.list_commands_by_category(c).len())
        .sum();
    assert_eq!(total, repo.command_count());
    assert_eq!(repo.list_commands().len(), 13);
}

// ═══════════════════════════════════════════════════════════════════════
// Search
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_search_queue() {
    let repo = repo();
    assert_eq!(names(&repo.search_commands("queue")), vec!["/queue", "/burn"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let repo = repo();
    assert_eq!(
        names(&repo.search_commands("ANDROID")),
        names(&repo.search_commands("android"))
    );
    assert_eq!(names(&repo.search_commands("android")), vec!["/build"]);
}

#[test]
fn test_search_empty_returns_all() {
    let repo = repo();
    assert_eq!(names(&repo.search_commands("")), names(&repo.list_commands()));
}

#[test]
fn test_search_finds_word_final_capital_sigma() -> anyhow::Result<()> {
    let greek = Command::new("/greek", "ΑΣ build", "/greek", CommandCategory::Build);
    let repo = ContentRepository::new([greek], builtin_guides()?)?;

    for query in ["Σ", "σ", "ΑΣ", "ασ b"] {
        assert_eq!(names(&repo.search_commands(query)), vec!["/greek"], "{query}");
    }
    Ok(())
}

#[test]
fn test_search_no_match() {
    assert!(repo().search_commands("zzzz-nothing").is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Related commands
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_related_names_in_catalog_resolve() {
    let repo = repo();
    let ship = repo.find_command_by_name("/ship").expect("/ship exists");
    let related = repo.resolve_related(ship);

    assert!(!related.is_empty());
    for reference in related {
        let target = reference.target.expect("builtin related names resolve");
        assert_eq!(target.name, reference.name);
    }
}

#[test]
fn test_unresolved_related_name() -> anyhow::Result<()> {
    let command = Command::new("/solo", "Stands alone", "/solo", CommandCategory::Workflow)
        .with_architecture(CommandArchitecture::new("Alone").with_related(["/ghost", "/solo"]));
    let repo = ContentRepository::new([command], builtin_guides()?)?;
    let solo = repo.find_command_by_name("/solo").expect("/solo exists");

    let resolved: Vec<_> = repo
        .resolve_related(solo)
        .iter()
        .map(|r| (r.name, r.is_resolved()))
        .collect();
    assert_eq!(resolved, vec![("/ghost", false), ("/solo", true)]);
    Ok(())
}

#[test]
fn test_duplicate_names_rejected() -> anyhow::Result<()> {
    let a = Command::new("/twin", "First", "/twin", CommandCategory::Build);
    let b = Command::new("/twin", "Second", "/twin", CommandCategory::Build);

    let err = ContentRepository::new([a, b], builtin_guides()?).unwrap_err();
    assert_eq!(
        err,
        LaunchpadError::DuplicateCommand {
            name: "/twin".to_string()
        }
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Guides
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_guide_content_non_empty_for_every_category() {
    let repo = repo();
    for category in GuideCategory::ALL {
        let guide = repo.guide_content(category);
        assert!(!guide.overview.is_empty(), "{category} overview");
        assert!(!guide.key_features.is_empty(), "{category} key features");
        assert!(!guide.architecture_tips.is_empty(), "{category} tips");
        assert!(!guide.example_prompts.is_empty(), "{category} prompts");
    }
}

#[test]
fn test_guide_table_in_enumeration_order() {
    let repo = repo();
    let order: Vec<_> = repo.guides().iter().map(|(c, _)| c).collect();
    assert_eq!(order, GuideCategory::ALL.to_vec());
}

#[test]
fn test_command_json_shape() -> anyhow::Result<()> {
    let repo = repo();
    let ship = repo.find_command_by_name("/ship").expect("/ship exists");
    let json = serde_json::to_value(ship)?;

    assert_eq!(json["category"], "DEVELOPMENT");
    assert_eq!(json["sourceFileName"], "ship.md");
    Ok(())
}
