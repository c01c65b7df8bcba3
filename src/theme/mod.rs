//! Theme scopes and theme injection.
//!
//! The merge rules and the store live in `gpui_elements_theme`; this module
//! wraps a store in a gpui entity ([`ThemeScope`]) so that views are notified
//! when it changes, and hands the resolved theme to components through
//! [`Themed`] and [`WithTheme`].

pub use gpui_elements_theme::{
    ThemeError, ThemeMap, ThemeStore, ThemeValue, builtin_theme, merge, merge_in_place,
};

mod ext;
pub use ext::*;

mod injector;
pub use injector::*;

mod resolved;
pub use resolved::*;

mod scope;
pub use scope::*;
