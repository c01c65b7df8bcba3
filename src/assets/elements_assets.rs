#![allow(missing_docs)] // Derive macros generate undocumented methods.

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::{Result, SharedString};
        use rust_embed::RustEmbed;

        use crate::assets::assets::AssetProvider;

        /// Glyphs for the default icons of the bundled components.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct ElementsAssets;

        impl AssetProvider for ElementsAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(ElementsAssets::iter()
                    .filter_map(|p| p.starts_with(path).then(|| p.into()))
                    .collect())
            }
        }
    }
);

use enum_assoc::Assoc;

/// Icons the components fall back to when the caller does not supply one.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn icon_type(&self) -> &'static str)]
#[func(pub fn name(&self) -> &'static str)]
pub enum BuiltinIcon {
    #[assoc(icon_type = "material")]
    #[assoc(name = "search")]
    Search,

    #[assoc(icon_type = "material")]
    #[assoc(name = "clear")]
    Clear,

    #[assoc(icon_type = "material")]
    #[assoc(name = "check")]
    Check,

    #[assoc(icon_type = "material")]
    #[assoc(name = "keyboard-arrow-right")]
    ChevronRight,

    #[assoc(icon_type = "material")]
    #[assoc(name = "arrow-back")]
    ArrowBack,

    #[assoc(icon_type = "ionicon")]
    #[assoc(name = "ios-search")]
    IosSearch,

    #[assoc(icon_type = "ionicon")]
    #[assoc(name = "ios-close-circle")]
    IosCloseCircle,

    #[assoc(icon_type = "ionicon")]
    #[assoc(name = "ios-arrow-forward")]
    IosArrowForward,
}
