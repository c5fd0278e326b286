//! Builtin command catalog

use super::command::{Command, CommandArchitecture, CommandCategory};

/// The builtin commands, in declaration order.
pub fn builtin_commands() -> Vec<Command> {
    vec![
        blueprint(),
        forge(),
        ship(),
        pilot(),
        land(),
        flight_plan(),
        queue(),
        burn(),
        reboot(),
        build(),
        install(),
        run(),
        release(),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
// Development
// ═══════════════════════════════════════════════════════════════════════

fn blueprint() -> Command {
    Command::new(
        "/blueprint",
        "Interactive product ideation. Define your app concept through guided questions.",
        "/blueprint",
        CommandCategory::Development,
    )
    .with_examples([
        "/blueprint",
        "Define a fitness tracking app",
        "Create context for a recipe app",
    ])
    .with_architecture(
        CommandArchitecture::new(
            "Decide what to build before building it. A short interview turns a vague idea \
             into written context that every later command reads.",
        )
        .with_workflow([
            "Ask about the problem, the audience and the core use case",
            "Narrow the feature list down to an MVP",
            "Capture screens, data and navigation in plain language",
            "Write the results into the project context files",
        ])
        .with_key_behaviors([
            ("One question at a time", "Answers shape the next question."),
            ("Context on disk", "Output lands in .claude/context/ for later commands."),
        ])
        .with_best_for(["Starting a brand new app", "Pinning down a fuzzy idea"])
        .with_not_for(["Changing an app that already exists"])
        .with_related(["/forge", "/flight-plan"])
        .with_pro_tips(["Be specific about who the app is for; it sharpens every later step."]),
    )
    .with_source_file("blueprint.md")
}

fn forge() -> Command {
    Command::new(
        "/forge",
        "Generate and build your complete MVP. Creates proposal, reviews with you, builds the app.",
        "/forge",
        CommandCategory::Development,
    )
    .with_examples(["/forge", "/forge --confirm-destructive"])
    .with_options([("--confirm-destructive", "Confirm rebuild of existing app")])
    .with_architecture(
        CommandArchitecture::new(
            "Turn blueprint context into a working first version in one guided pass, \
             with a review checkpoint before any code is written.",
        )
        .with_workflow([
            "Read the blueprint context",
            "Draft a proposal covering screens, models and navigation",
            "Review the proposal with you and apply changes",
            "Generate the code and build the app",
            "Report what was created",
        ])
        .with_key_behaviors([
            ("Proposal first", "Nothing is generated until the proposal is approved."),
            ("Guarded rebuild", "Overwriting an existing app requires an explicit flag."),
        ])
        .with_best_for(["Creating the first version of an app"])
        .with_not_for(["Small incremental changes", "Apps with hand-written code you want to keep"])
        .with_related(["/blueprint", "/ship", "/build"])
        .with_pro_tips(["Run /blueprint first; /forge is only as good as its context."]),
    )
    .with_source_file("forge.md")
}

fn ship() -> Command {
    Command::new(
        "/ship",
        "Autonomous changes — implement, document, and commit in one command.",
        "/ship <request>",
        CommandCategory::Development,
    )
    .with_examples([
        "/ship add dark mode toggle",
        "/ship fix the login crash",
        "/ship --no-commit refactor auth",
    ])
    .with_options([
        ("--no-commit", "Make changes without committing"),
        ("--no-doc", "Skip documentation"),
        ("--dry-run", "Preview without changes"),
    ])
    .with_architecture(
        CommandArchitecture::new(
            "A single spoken sentence should be enough to get a change implemented, \
             documented and committed without further supervision.",
        )
        .with_workflow([
            "Parse the request and read project context",
            "Implement the change",
            "Build to verify it compiles",
            "Update documentation",
            "Commit with a descriptive message",
        ])
        .with_key_behaviors([
            ("Autonomous", "Runs start to finish without asking questions."),
            ("Progress logged", "Each step is logged so /reboot can resume it."),
            ("Voice friendly", "Short natural-language requests work best."),
        ])
        .with_best_for(["Small, well-defined changes", "Bug fixes with a clear cause"])
        .with_not_for(["Changes you want to test by hand before committing"])
        .with_related(["/pilot", "/queue", "/reboot"])
        .with_pro_tips([
            "Use --dry-run to preview a risky change.",
            "Queue follow-ups with /queue instead of chaining requests.",
        ]),
    )
    .with_source_file("ship.md")
}

fn pilot() -> Command {
    Command::new(
        "/pilot",
        "Interactive development with user present for testing before commit.",
        "/pilot <request>",
        CommandCategory::Development,
    )
    .with_examples([
        "/pilot add settings screen",
        "/pilot redesign home page",
        "/pilot implement auth flow",
    ])
    .with_options([
        ("Discuss", "Claude asks clarifying questions"),
        ("Build", "App is built and installed for testing"),
        ("Verify", "User tests and approves changes"),
    ])
    .with_architecture(
        CommandArchitecture::new(
            "Keep a human in the loop for changes that need eyes on a device. \
             Nothing is committed until you have tried it.",
        )
        .with_workflow([
            "Discuss the request and agree on scope",
            "Implement the change",
            "Build and install to the device",
            "Wait for you to test and give feedback",
            "Leave the changes pending for /land",
        ])
        .with_key_behaviors([
            ("Session based", "Each pilot run gets a session id."),
            ("No auto-commit", "Changes stay uncommitted until landed."),
        ])
        .with_best_for(["UI work", "Features that need manual testing"])
        .with_not_for(["Unattended batches of changes"])
        .with_related(["/land", "/ship", "/install"])
        .with_pro_tips(["Keep the device connected so the install step succeeds."]),
    )
    .with_source_file("pilot.md")
}

fn land() -> Command {
    Command::new(
        "/land",
        "Commit pending changes from a /pilot session.",
        "/land [session_id]",
        CommandCategory::Development,
    )
    .with_examples(["/land", "/land pilot_0018_20260117", "/land --no-push"])
    .with_options([
        ("session_id", "Specific pilot session to land"),
        ("--no-push", "Commit without pushing"),
    ])
    .with_architecture(
        CommandArchitecture::new(
            "Committing is a separate decision from building. Landing closes a pilot \
             session once you are happy with what you tested.",
        )
        .with_workflow([
            "Find the most recent pilot session, or the one named",
            "Summarize the pending changes",
            "Commit with a message derived from the session",
            "Push unless told not to",
        ])
        .with_key_behaviors([("Session aware", "Commit messages reuse the pilot discussion.")])
        .with_best_for(["Finishing a /pilot session"])
        .with_related(["/pilot"])
        .with_pro_tips(["Pass a session id to land an older pilot session."]),
    )
    .with_source_file("land.md")
}

fn flight_plan() -> Command {
    Command::new(
        "/flight-plan",
        "Strategic planning with deep brainstorming for complex features.",
        "/flight-plan <idea>",
        CommandCategory::Development,
    )
    .with_examples([
        "/flight-plan add user authentication",
        "/flight-plan --file requirements.md",
        "/flight-plan list",
    ])
    .with_options([
        ("--file", "Plan from requirements file"),
        ("--prompt", "Plan from existing prompt"),
        ("list", "Show all flight plans"),
        ("execute", "Execute a specific plan"),
    ])
    .with_architecture(
        CommandArchitecture::new(
            "Large features fail when they start with code. A flight plan breaks the \
             work into ordered, reviewable steps before anything is touched.",
        )
        .with_workflow([
            "Brainstorm approaches and trade-offs",
            "Pick an approach with you",
            "Split the work into numbered steps",
            "Save the plan for later execution",
        ])
        .with_key_behaviors([
            ("Saved plans", "Plans persist and can be listed or executed later."),
            ("Multiple inputs", "Plans can start from an idea, a file or a prompt."),
        ])
        .with_best_for(["Features that touch many screens", "Unclear requirements"])
        .with_not_for(["One-line fixes"])
        .with_related(["/blueprint", "/queue", "/burn"])
        .with_pro_tips(["Execute plan steps through /queue and /burn for unattended runs."]),
    )
    .with_source_file("flight-plan.md")
}

// ═══════════════════════════════════════════════════════════════════════
// Workflow
// ═══════════════════════════════════════════════════════════════════════

fn queue() -> Command {
    Command::new(
        "/queue",
        "Save a task for later when AI is busy with something else.",
        "/queue <task>",
        CommandCategory::Workflow,
    )
    .with_examples(["/queue add error handling", "/queue list", "/queue clear"])
    .with_options([
        ("list", "Show all pending tasks"),
        ("clear", "Remove all tasks"),
        ("pop", "Remove oldest task"),
    ])
    .with_architecture(
        CommandArchitecture::new(
            "Ideas arrive while other work is running. Writing them down is cheaper \
             than interrupting.",
        )
        .with_workflow([
            "Append the task to the pending list",
            "Confirm its position",
        ])
        .with_key_behaviors([
            ("First in, first out", "Tasks run in the order they were added."),
            ("Persistent", "The list survives session restarts."),
        ])
        .with_best_for(["Capturing follow-ups during a long change"])
        .with_related(["/burn", "/ship"]),
    )
    .with_source_file("queue.md")
}

fn burn() -> Command {
    Command::new(
        "/burn",
        "Execute all queued tasks sequentially, like a rocket burn.",
        "/burn",
        CommandCategory::Workflow,
    )
    .with_examples(["/burn", "/burn --dry-run", "/burn --first"])
    .with_options([
        ("--dry-run", "Preview without executing"),
        ("--first", "Execute only first task"),
        ("--skip-failed", "Auto-skip failed tasks"),
    ])
    .with_architecture(
        CommandArchitecture::new(
            "Batch the backlog. Each pending task is shipped in turn so you can walk away.",
        )
        .with_workflow([
            "Load the pending list",
            "Ship the oldest task",
            "Remove it from the list on success",
            "Repeat until the list is empty or a task fails",
        ])
        .with_key_behaviors([
            ("Sequential", "Tasks never run in parallel."),
            ("Stops on failure", "Unless --skip-failed is given."),
        ])
        .with_best_for(["Working through a backlog unattended"])
        .with_not_for(["Tasks that need manual testing"])
        .with_related(["/queue", "/ship", "/reboot"])
        .with_pro_tips(["Run /burn --dry-run first to check the order."]),
    )
    .with_source_file("burn.md")
}

fn reboot() -> Command {
    Command::new(
        "/reboot",
        "Resume interrupted work from progress logs.",
        "/reboot [session_id]",
        CommandCategory::Workflow,
    )
    .with_examples(["/reboot", "/reboot ship_0015_20260117", "/reboot --list"])
    .with_options([
        ("--list", "List all interrupted sessions"),
        ("--clean", "Mark stale sessions as abandoned"),
    ])
    .with_architecture(
        CommandArchitecture::new(
            "Sessions end unexpectedly. Progress logs make every long-running command resumable.",
        )
        .with_workflow([
            "Find the most recent interrupted session, or the one named",
            "Read its progress log",
            "Continue from the last completed step",
        ])
        .with_key_behaviors([("Log driven", "Only steps recorded as complete are skipped.")])
        .with_best_for(["Recovering after a crash or timeout"])
        .with_related(["/ship", "/burn"])
        .with_pro_tips(["Use --clean now and then to drop sessions you will never resume."]),
    )
    .with_source_file("reboot.md")
}

// ═══════════════════════════════════════════════════════════════════════
// Build & Deploy
// ═══════════════════════════════════════════════════════════════════════

fn build() -> Command {
    Command::new(
        "/build",
        "Compile the Android app.",
        "/build [clean]",
        CommandCategory::Build,
    )
    .with_examples(["/build", "/build clean"])
    .with_options([("clean", "Clean build from scratch")])
    .with_architecture(
        CommandArchitecture::new("Compile early and often. A fast build check catches mistakes cheaply.")
            .with_workflow(["Run the Gradle debug build", "Summarize errors, if any"])
            .with_key_behaviors([("Readable errors", "Compiler output is condensed to the relevant lines.")])
            .with_best_for(["Checking that the project compiles"])
            .with_related(["/install", "/run"]),
    )
    .with_source_file("build.md")
}

fn install() -> Command {
    Command::new(
        "/install",
        "Build and install to connected device or emulator.",
        "/install",
        CommandCategory::Build,
    )
    .with_examples(["/install"])
    .with_architecture(
        CommandArchitecture::new("Getting the app onto a device should take one command.")
            .with_workflow(["Build the debug variant", "Install it with adb"])
            .with_best_for(["Trying the app on a real device"])
            .with_not_for(["Machines with no device or emulator attached"])
            .with_related(["/build", "/run"]),
    )
    .with_source_file("install.md")
}

fn run() -> Command {
    Command::new(
        "/run",
        "Build, install, and launch the app.",
        "/run",
        CommandCategory::Build,
    )
    .with_examples(["/run"])
    .with_architecture(
        CommandArchitecture::new("The shortest path from code to a running app.")
            .with_workflow(["Build the debug variant", "Install it", "Launch the main activity"])
            .with_best_for(["Quick manual checks after a change"])
            .with_related(["/build", "/install"]),
    )
    .with_source_file("run.md")
}

fn release() -> Command {
    Command::new(
        "/release",
        "Build a signed release bundle and tag the version.",
        "/release [version]",
        CommandCategory::Build,
    )
    .with_examples(["/release", "/release 1.1.0"])
    .with_options([("version", "Version name to tag; defaults to the next patch")])
    .with_architecture(
        CommandArchitecture::new(
            "Releases should be repeatable. The same steps run every time, in the same order.",
        )
        .with_workflow([
            "Bump the version name and code",
            "Build the signed release bundle",
            "Commit the version change",
            "Tag the commit",
        ])
        .with_key_behaviors([("Signed output", "Uses the configured release keystore.")])
        .with_best_for(["Preparing a store upload"])
        .with_not_for(["Day-to-day testing builds"])
        .with_related(["/build"])
        .with_pro_tips(["Check the keystore path before the first release."]),
    )
    .with_source_file("release.md")
}
