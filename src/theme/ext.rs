use gpui::{App, Global};

use crate::theme::{ResolvedTheme, ThemeScope};

/// The outermost scope, shared by every component that is not given one.
struct GlobalThemeScope(ThemeScope);

impl Global for GlobalThemeScope {}

/// Extension trait for accessing the app-wide theme scope.
pub trait ThemeExt {
    /// Installs `scope` as the outermost scope of the app.
    fn set_theme_scope(&mut self, scope: ThemeScope);

    /// The outermost scope, if one was installed.
    fn theme_scope(&self) -> Option<ThemeScope>;

    /// Resolves the theme for a component: `scope` if given, otherwise the
    /// app-wide scope, otherwise the built-in theme.
    fn resolve_theme(&self, scope: Option<&ThemeScope>) -> ResolvedTheme;

    /// Resolves the app-wide theme.
    fn get_theme(&self) -> ResolvedTheme {
        self.resolve_theme(None)
    }
}

impl ThemeExt for App {
    fn set_theme_scope(&mut self, scope: ThemeScope) {
        self.set_global(GlobalThemeScope(scope))
    }

    fn theme_scope(&self) -> Option<ThemeScope> {
        self.try_global::<GlobalThemeScope>()
            .map(|global| global.0.clone())
    }

    fn resolve_theme(&self, scope: Option<&ThemeScope>) -> ResolvedTheme {
        if let Some(scope) = scope {
            return scope.resolve(self);
        }

        match self.try_global::<GlobalThemeScope>() {
            Some(global) => global.0.resolve(self),
            None => ResolvedTheme::builtin(),
        }
    }
}
