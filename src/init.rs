use gpui::App;

use crate::{
    icons::IconRegistry,
    theme::{ThemeExt, ThemeScope, ThemeValue},
};

/// Registers the key bindings of the text input and the default icon sets.
pub fn init(cx: &mut App) {
    gpui_primitives::input::init(cx);
    cx.default_global::<IconRegistry>();
}

/// Like [`init`], and installs an app-wide theme scope built from
/// `user_override`. Returns the scope so it can be updated later.
pub fn init_with_theme(cx: &mut App, user_override: &ThemeValue) -> ThemeScope {
    init(cx);

    let scope = ThemeScope::new(cx, user_override);
    cx.set_theme_scope(scope.clone());
    scope
}
