//! The debug screen.
//!
//! Owns the loaded catalog, the current selection and the FPS counter.
//! Built on screen enter, consumed on dispose. All methods run on the
//! host's UI thread in response to a click or once per frame.
//!
//! ## States
//!
//! - `NotLoaded`: Entered, reload not yet pressed
//! - `Loaded`: Last reload succeeded
//! - `Failed`: Last reload failed; the list shows the error text
//!
//! Reload is allowed from every state and always replaces the catalog.
//! Proceed is allowed from every state; it carries a card only if a
//! selection has resolved since the last reload.

use crate::cards::Card;
use crate::catalog::{resolve, AssetSource, Catalog, CatalogListing, CatalogLoader};
use crate::config::ScreenConfig;

use super::collaborators::{CardListView, ScreenRouter};
use super::commands::{Command, CommandTable, UiElement};
use super::fps::FpsCounter;

/// Catalog state of the screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogState {
    #[default]
    NotLoaded,
    Loaded(Catalog),
    /// Error text shown in place of the list.
    Failed(String),
}

impl CatalogState {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }
}

/// Headless model of the debug screen.
///
/// ## Example
///
/// ```
/// use rust_ccg_catalog::catalog::MemoryAssets;
/// use rust_ccg_catalog::config::ScreenConfig;
/// use rust_ccg_catalog::screen::{DebugScreen, PendingTransition, SelectionList, UiElement};
///
/// let assets = MemoryAssets::new().with(
///     "cards.json",
///     r#"{"cards": [{"id": "c1", "name": "Slash", "type": "ATTACK_CLOSE", "cost": 1}]}"#,
/// );
/// let mut screen = DebugScreen::enter(
///     ScreenConfig::default(),
///     assets,
///     SelectionList::new(),
///     PendingTransition::new(),
/// );
///
/// screen.click(UiElement::ReloadButton);
/// screen.list_mut().highlight(0);
/// screen.click(UiElement::NextButton);
///
/// let (_list, router) = screen.dispose();
/// assert_eq!(router.card.map(|c| c.id), Some("c1".to_string()));
/// ```
#[derive(Debug)]
pub struct DebugScreen<A, L, R> {
    loader: CatalogLoader<A>,
    list: L,
    router: R,
    commands: CommandTable,
    state: CatalogState,
    selection: Option<Card>,
    fps: FpsCounter,
}

impl<A, L, R> DebugScreen<A, L, R>
where
    A: AssetSource,
    L: CardListView,
    R: ScreenRouter,
{
    /// Build the screen. Loads the catalog right away if
    /// `config.load_on_enter` is set.
    pub fn enter(config: ScreenConfig, assets: A, list: L, router: R) -> Self {
        let mut screen = Self {
            loader: CatalogLoader::new(config.catalog, assets),
            list,
            router,
            commands: CommandTable::default(),
            state: CatalogState::NotLoaded,
            selection: None,
            fps: FpsCounter::new(config.fps_window_secs),
        };
        if config.load_on_enter {
            screen.reload();
        }
        screen
    }

    /// Replace the command table (builder pattern).
    #[must_use]
    pub fn with_commands(mut self, commands: CommandTable) -> Self {
        self.commands = commands;
        self
    }

    pub fn commands_mut(&mut self) -> &mut CommandTable {
        &mut self.commands
    }

    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// The loaded catalog, if the last reload succeeded.
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            CatalogState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Card that the next screen would receive.
    #[must_use]
    pub fn selection(&self) -> Option<&Card> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    #[must_use]
    pub fn assets(&self) -> &A {
        self.loader.assets()
    }

    /// Resources read by the next reload.
    pub fn assets_mut(&mut self) -> &mut A {
        self.loader.assets_mut()
    }

    #[must_use]
    pub fn router(&self) -> &R {
        &self.router
    }

    #[must_use]
    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    /// Handle a click on a UI element.
    ///
    /// Returns the command that ran, or `None` for unbound elements.
    pub fn click(&mut self, element: UiElement) -> Option<Command> {
        let Some(command) = self.commands.command_for(element) else {
            cli_log::debug!("no command bound to {:?}", element);
            return None;
        };
        self.execute(command);
        Some(command)
    }

    /// Run a command directly.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Reload => self.reload(),
            Command::Select => {
                self.select();
            }
            Command::Proceed => self.proceed(),
        }
    }

    /// Reload the catalog, replacing the old one and the list items.
    ///
    /// A failed load shows the error text as the only list entry.
    /// Any previous selection is dropped.
    pub fn reload(&mut self) {
        let result = self.loader.load();
        let listing = CatalogListing::from_result(&result);
        self.list.set_items(listing.display);

        self.state = match result {
            Ok(catalog) => CatalogState::Loaded(catalog),
            Err(err) => CatalogState::Failed(err.to_string()),
        };

        if let Some(stale) = self.selection.take() {
            cli_log::debug!("reload cleared selection of '{}'", stale.id);
        }
    }

    /// Resolve the highlighted list entry to a card.
    ///
    /// Nothing highlighted, or no matching card, leaves the current
    /// selection as it was.
    pub fn select(&mut self) -> Option<&Card> {
        let highlighted = self.list.selected();
        let resolved = self
            .catalog()
            .and_then(|catalog| resolve(highlighted.as_deref(), catalog))
            .cloned();

        match (resolved, highlighted) {
            (Some(card), _) => {
                cli_log::debug!("selected card '{}'", card.id);
                self.selection = Some(card);
            }
            (None, Some(entry)) => cli_log::debug!("no card matches '{}'", entry),
            (None, None) => {}
        }
        self.selection.as_ref()
    }

    /// Hand the selection to the next screen and request the transition.
    pub fn proceed(&mut self) {
        self.select();
        cli_log::info!(
            "leaving debug screen with {}",
            self.selection
                .as_ref()
                .map_or_else(|| "no card".to_string(), |c| format!("card '{}'", c.id))
        );
        self.router.set_selected_card(self.selection.clone());
        self.router.request_transition();
    }

    /// Per-frame update. Returns the FPS label.
    pub fn render(&mut self, delta_secs: f32) -> String {
        self.fps.tick(delta_secs);
        self.fps.label()
    }

    /// Tear the screen down, handing back the host collaborators.
    pub fn dispose(self) -> (L, R) {
        cli_log::debug!("disposing debug screen");
        (self.list, self.router)
    }
}
