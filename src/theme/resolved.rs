use std::sync::Arc;

use gpui::{App, Rgba};

use crate::{
    parse_color,
    theme::{ThemeScope, ThemeValue, builtin_theme},
};

/// The theme a component renders with, as seen at one propagation tick.
///
/// Carries an immutable snapshot of the theme tree and, when the component
/// sits inside a scope, the scope handle used to mutate it.
#[derive(Clone)]
pub struct ResolvedTheme {
    value: Arc<ThemeValue>,
    scope: Option<ThemeScope>,
}

impl ResolvedTheme {
    pub(crate) fn new(value: Arc<ThemeValue>, scope: Option<ThemeScope>) -> Self {
        Self { value, scope }
    }

    /// The built-in theme, with no scope to mutate.
    pub fn builtin() -> Self {
        Self::new(builtin_theme(), None)
    }

    pub fn value(&self) -> &ThemeValue {
        &self.value
    }

    pub fn scope(&self) -> Option<&ThemeScope> {
        self.scope.as_ref()
    }

    pub fn get(&self, path: &str) -> Option<&ThemeValue> {
        self.value.get(path)
    }

    pub fn string(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    pub fn number(&self, path: &str) -> Option<f32> {
        self.get(path)?.as_f64().map(|number| number as f32)
    }

    /// Reads a color token. Missing tokens yield `None`; malformed ones are
    /// logged and yield `None` as well.
    pub fn color(&self, path: &str) -> Option<Rgba> {
        let value = self.get(path)?;

        let Some(string) = value.as_str() else {
            log::warn!("theme token `{path}` is a {}, not a color", value.kind());
            return None;
        };

        match parse_color(string) {
            Ok(color) => Some(color),
            Err(err) => {
                log::warn!("theme token `{path}`: {err}");
                None
            }
        }
    }

    pub fn color_or(&self, path: &str, fallback: Rgba) -> Rgba {
        self.color(path).unwrap_or(fallback)
    }

    /// Whether two snapshots differ structurally.
    pub fn differs_from(&self, other: &ResolvedTheme) -> bool {
        !Arc::ptr_eq(&self.value, &other.value) && self.value != other.value
    }

    /// Patches the enclosing scope and returns whether its theme changed.
    /// Does nothing outside of a scope.
    pub fn update(&self, cx: &mut App, patch: &ThemeValue) -> bool {
        self.scope
            .as_ref()
            .is_some_and(|scope| scope.update(cx, patch))
    }

    /// Resets and patches the enclosing scope and returns whether its theme
    /// changed. Does nothing outside of a scope.
    pub fn replace(&self, cx: &mut App, theme: &ThemeValue) -> bool {
        self.scope
            .as_ref()
            .is_some_and(|scope| scope.replace(cx, theme))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::rgb_a;

    fn resolved(value: serde_json::Value) -> ResolvedTheme {
        ResolvedTheme::new(Arc::new(ThemeValue::from(value)), None)
    }

    #[test]
    fn test_color_lookup() {
        let theme = resolved(json!({
            "colors": { "primary": "#2089dc", "broken": "#12", "size": 3 }
        }));

        assert_eq!(theme.color("colors.primary"), Some(rgb_a(0x2089dc, 1.)));
        assert_eq!(theme.color("colors.missing"), None);
        assert_eq!(theme.color("colors.broken"), None);
        assert_eq!(theme.color("colors.size"), None);
        assert_eq!(
            theme.color_or("colors.missing", rgb_a(0xffffff, 1.)),
            rgb_a(0xffffff, 1.)
        );
    }

    #[test]
    fn test_number_and_string_lookup() {
        let theme = resolved(json!({ "sizes": { "icon": 24 }, "fonts": { "ios": "System" } }));

        assert_eq!(theme.number("sizes.icon"), Some(24.));
        assert_eq!(theme.string("fonts.ios"), Some("System"));
        assert_eq!(theme.string("sizes.icon"), None);
    }

    #[test]
    fn test_builtin_has_no_scope() {
        let theme = ResolvedTheme::builtin();

        assert!(theme.scope().is_none());
        assert_eq!(theme.string("colors.primary"), Some("#2089dc"));
    }

    #[test]
    fn test_differs_from_is_structural() {
        let a = resolved(json!({ "colors": { "primary": "blue" } }));
        let b = resolved(json!({ "colors": { "primary": "blue" } }));
        let c = resolved(json!({ "colors": { "primary": "green" } }));

        assert!(!a.differs_from(&a.clone()));
        assert!(!a.differs_from(&b));
        assert!(a.differs_from(&c));
    }
}
