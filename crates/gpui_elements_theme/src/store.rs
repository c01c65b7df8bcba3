use std::sync::Arc;

use crate::{ThemeValue, builtin_theme, merge, merge_in_place};

/// Holds the default theme of a scope alongside its live theme.
///
/// The default is fixed at construction. [`update`](Self::update) patches the
/// live theme, [`replace`](Self::replace) discards every earlier patch and
/// re-applies onto the default. Snapshots handed out by
/// [`current`](Self::current) are immutable; later mutations produce a new
/// tree instead of changing one a consumer still holds.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    default_theme: Arc<ThemeValue>,
    current: Arc<ThemeValue>,
    revision: u64,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(&ThemeValue::empty())
    }
}

impl ThemeStore {
    /// Creates a store whose default is the built-in theme merged with `user_override`.
    pub fn new(user_override: &ThemeValue) -> Self {
        Self::with_base(&builtin_theme(), user_override)
    }

    /// Creates a store on top of a custom base instead of the built-in theme.
    pub fn with_base(base: &ThemeValue, user_override: &ThemeValue) -> Self {
        let default_theme = Arc::new(merge(base, user_override));

        Self {
            current: default_theme.clone(),
            default_theme,
            revision: 0,
        }
    }

    /// Merges `patch` onto the live theme. Returns whether anything changed.
    pub fn update(&mut self, patch: &ThemeValue) -> bool {
        let changed = merge_in_place(Arc::make_mut(&mut self.current), patch);

        if changed {
            self.revision += 1;
            log::debug!("theme updated (revision {})", self.revision);
        }

        changed
    }

    /// Resets the live theme to the default, then merges `theme` onto it.
    /// Returns whether anything changed.
    pub fn replace(&mut self, theme: &ThemeValue) -> bool {
        let next = merge(&self.default_theme, theme);

        if next == *self.current {
            return false;
        }

        self.current = Arc::new(next);
        self.revision += 1;
        log::debug!("theme replaced (revision {})", self.revision);

        true
    }

    pub fn current(&self) -> Arc<ThemeValue> {
        self.current.clone()
    }

    pub fn default_theme(&self) -> Arc<ThemeValue> {
        self.default_theme.clone()
    }

    /// Bumped by every mutation that changed the live theme.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
