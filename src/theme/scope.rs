use std::sync::Arc;

use gpui::{App, AppContext, Context, Entity, EntityId, Subscription, WeakEntity};

use crate::theme::{ResolvedTheme, ThemeError, ThemeStore, ThemeValue};

/// State behind a [`ThemeScope`].
pub struct ThemeScopeState {
    store: ThemeStore,
    parent: Option<WeakEntity<ThemeScopeState>>,
    depth: usize,
}

impl ThemeScopeState {
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }
}

/// A handle to a theme that is shared by a subtree of components.
///
/// Cloning the handle shares the scope. Every component rendered with this
/// scope sees its live theme; views that called
/// [`subscribe_view`](Self::subscribe_view) re-render after each
/// [`update`](Self::update) or [`replace`](Self::replace).
///
/// Scopes nest with [`nest`](Self::nest). A nested scope keeps its own store,
/// so mutations of the outer scope never reach components rendered with the
/// inner one.
#[derive(Clone)]
pub struct ThemeScope {
    state: Entity<ThemeScopeState>,
}

impl ThemeScope {
    /// Creates a top-level scope from the built-in theme and `user_override`.
    pub fn new(cx: &mut App, user_override: &ThemeValue) -> Self {
        Self::from_store(cx, ThemeStore::new(user_override), None)
    }

    /// Like [`new`](Self::new), with the override given as JSON.
    pub fn from_json(cx: &mut App, user_override: &str) -> Result<Self, ThemeError> {
        Ok(Self::new(cx, &ThemeValue::from_json(user_override)?))
    }

    /// Creates a scope around an existing store, e.g. one with a custom base.
    pub fn with_store(cx: &mut App, store: ThemeStore) -> Self {
        Self::from_store(cx, store, None)
    }

    /// Creates a scope that shadows this one for the components it is given to.
    pub fn nest(&self, cx: &mut App, user_override: &ThemeValue) -> Self {
        let depth = self.depth(cx) + 1;
        Self::from_store(
            cx,
            ThemeStore::new(user_override),
            Some((self.state.downgrade(), depth)),
        )
    }

    fn from_store(
        cx: &mut App,
        store: ThemeStore,
        parent: Option<(WeakEntity<ThemeScopeState>, usize)>,
    ) -> Self {
        let (parent, depth) = match parent {
            Some((parent, depth)) => (Some(parent), depth),
            None => (None, 0),
        };

        Self {
            state: cx.new(|_cx| ThemeScopeState {
                store,
                parent,
                depth,
            }),
        }
    }

    /// Merges `patch` onto the live theme and notifies observers if it changed.
    /// Returns whether it changed.
    pub fn update(&self, cx: &mut App, patch: &ThemeValue) -> bool {
        self.state.update(cx, |state, cx| {
            let changed = state.store.update(patch);
            if changed {
                cx.notify();
            }
            changed
        })
    }

    /// Resets the live theme to this scope's default, merges `theme` onto it
    /// and notifies observers if it changed. Returns whether it changed.
    pub fn replace(&self, cx: &mut App, theme: &ThemeValue) -> bool {
        self.state.update(cx, |state, cx| {
            let changed = state.store.replace(theme);
            if changed {
                cx.notify();
            }
            changed
        })
    }

    pub fn current(&self, cx: &App) -> Arc<ThemeValue> {
        self.state.read(cx).store.current()
    }

    pub fn default_theme(&self, cx: &App) -> Arc<ThemeValue> {
        self.state.read(cx).store.default_theme()
    }

    pub fn revision(&self, cx: &App) -> u64 {
        self.state.read(cx).store.revision()
    }

    /// How many scopes enclose this one.
    pub fn depth(&self, cx: &App) -> usize {
        self.state.read(cx).depth
    }

    /// The scope this one was nested in, if it is still alive.
    pub fn parent(&self, cx: &App) -> Option<ThemeScope> {
        let parent = self.state.read(cx).parent.as_ref()?.upgrade()?;
        Some(ThemeScope { state: parent })
    }

    pub fn entity_id(&self) -> EntityId {
        self.state.entity_id()
    }

    pub fn resolve(&self, cx: &App) -> ResolvedTheme {
        ResolvedTheme::new(self.current(cx), Some(self.clone()))
    }

    /// Runs `on_change` after every mutation that changed the theme.
    pub fn observe(
        &self,
        cx: &mut App,
        mut on_change: impl FnMut(&ThemeScope, &mut App) + 'static,
    ) -> Subscription {
        let scope = self.clone();
        cx.observe(&self.state, move |_state, cx| on_change(&scope, cx))
    }

    /// Re-renders the view owning `cx` after every mutation that changed the theme.
    pub fn subscribe_view<V: 'static>(&self, cx: &mut Context<V>) -> Subscription {
        cx.observe(&self.state, |_view, _state, cx| cx.notify())
    }
}

impl PartialEq for ThemeScope {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}
