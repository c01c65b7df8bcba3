use std::sync::{Arc, LazyLock};

use crate::ThemeValue;

static BUILTIN_THEME: LazyLock<Arc<ThemeValue>> = LazyLock::new(|| {
    Arc::new(
        ThemeValue::from_json(include_str!("../themes/base.json")).unwrap_or_else(|err| {
            log::error!("bundled base theme failed to parse: {err}");
            ThemeValue::empty()
        }),
    )
});

/// The base palette and fonts every store starts from.
///
/// This is also what components resolve when no scope encloses them.
pub fn builtin_theme() -> Arc<ThemeValue> {
    BUILTIN_THEME.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_theme_has_palette_and_fonts() {
        let theme = builtin_theme();

        assert_eq!(theme.str_at("colors.primary").unwrap(), "#2089dc");
        assert_eq!(theme.str_at("colors.grey3").unwrap(), "#86939e");
        assert_eq!(theme.str_at("colors.searchBg").unwrap(), "#303337");
        assert_eq!(
            theme.str_at("colors.platform.ios.primary").unwrap(),
            "#007aff"
        );
        assert_eq!(theme.str_at("fonts.android.medium.family").unwrap(), "sans-serif-medium");
    }

    #[test]
    fn test_builtin_theme_is_shared() {
        assert!(Arc::ptr_eq(&builtin_theme(), &builtin_theme()));
    }
}
