//! Builtin guide content

use super::guide::{GuideCategory, GuideContent, GuideTable};
use crate::error::Result;

/// Build the builtin guide table.
///
/// Fails only if an entry below is missing or empty.
pub fn builtin_guides() -> Result<GuideTable> {
    GuideTable::from_entries(GuideCategory::ALL.into_iter().map(|c| (c, content_for(c))))
}

fn content_for(category: GuideCategory) -> GuideContent {
    match category {
        GuideCategory::Utility => GuideContent::new(
            "Utility apps solve everyday problems with focused, single-purpose functionality. \
             They're often the easiest apps to build and perfect for learning mobile development. \
             Focus on doing one thing exceptionally well.",
            [
                "Clean, focused UI with minimal distractions",
                "Fast launch time and responsive interactions",
                "Offline-first functionality",
                "Simple data persistence",
                "Clear visual feedback for actions",
            ],
            [
                "Use ViewModel for calculation state",
                "Consider Room for history/settings",
                "Keep the UI layer thin and focused",
            ],
            [
                "/ship add a calculator screen",
                "/ship create a unit converter",
                "/ship build a tip calculator",
            ],
        ),
        GuideCategory::Games => GuideContent::new(
            "Games bring joy and entertainment to users. From simple casual games to complex \
             puzzles, game development teaches you animation, state management, and user \
             engagement. Start simple and iterate.",
            [
                "Game loop and state management",
                "Animations and visual effects",
                "Score tracking and persistence",
                "Sound effects and haptic feedback",
                "Difficulty progression",
            ],
            [
                "Separate game logic from UI",
                "Use coroutines for game loops",
                "Consider a state machine for game states",
            ],
            [
                "/ship create a trivia game",
                "/ship add a puzzle screen",
                "/ship build a memory card game",
            ],
        ),
        GuideCategory::Ecommerce => GuideContent::new(
            "E-commerce apps enable buying and selling. They require product catalogs, shopping \
             carts, and checkout flows. Learn about lists, state management, and user flows.",
            [
                "Product catalog with search and filters",
                "Shopping cart with quantity management",
                "User authentication and profiles",
                "Checkout flow with form validation",
                "Order history and tracking",
            ],
            [
                "Use Repository pattern for products",
                "Implement proper cart state management",
                "Consider offline-first with Room + API",
            ],
            [
                "/ship add a product list screen",
                "/ship create a shopping cart",
                "/ship build a checkout flow",
            ],
        ),
        GuideCategory::Social => GuideContent::new(
            "Social apps connect people. They feature user profiles, feeds, messaging, and \
             notifications. Master data synchronization and real-time updates.",
            [
                "User registration and profiles",
                "Content feed with pull-to-refresh",
                "Like, comment, and share actions",
                "Direct messaging",
                "Push notifications",
            ],
            [
                "Plan your data models carefully",
                "Implement proper authentication flow",
                "Use pagination for feeds",
            ],
            [
                "/ship add a user profile screen",
                "/ship create a feed with posts",
                "/ship build a messaging screen",
            ],
        ),
        GuideCategory::Productivity => GuideContent::new(
            "Productivity apps help users accomplish goals. Task managers, calendars, and habit \
             trackers teach persistence, scheduling, and state management.",
            [
                "Task creation and management",
                "Due dates and reminders",
                "Categories and tags",
                "Progress tracking",
                "Data backup and sync",
            ],
            [
                "Use Room for local persistence",
                "Implement proper date/time handling",
                "Consider WorkManager for reminders",
            ],
            [
                "/ship add a task list screen",
                "/ship create a calendar view",
                "/ship build a habit tracker",
            ],
        ),
        GuideCategory::Creative => GuideContent::new(
            "Creative tools empower expression. Drawing apps, photo editors, and music tools \
             require canvas work, gesture handling, and media manipulation.",
            [
                "Canvas for drawing/editing",
                "Tool palette and settings",
                "Undo/redo functionality",
                "Export and sharing",
                "Gallery for saved work",
            ],
            [
                "Use Canvas for custom drawing",
                "Implement command pattern for undo/redo",
                "Consider file storage for exports",
            ],
            [
                "/ship add a drawing canvas",
                "/ship create a color picker",
                "/ship build a photo filter screen",
            ],
        ),
    }
}
