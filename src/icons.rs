//! Mapping from icon types (`material`, `ionicon`, ...) to bundled icon sets.

use std::sync::LazyLock;

use gpui::{App, Global, SharedString};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Icon type used when none is given or the given one is unknown.
pub const DEFAULT_ICON_TYPE: &str = "material";

const BUILTIN_ICON_TYPES: &[&str] = &[
    "material",
    "material-community",
    "ionicon",
    "font-awesome",
    "font-awesome-5",
    "feather",
    "antdesign",
    "entypo",
    "evilicon",
    "foundation",
    "octicon",
    "simple-line-icon",
    "zocial",
];

/// A directory of svg glyphs named `<name>.svg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub directory: SharedString,
}

impl IconSet {
    pub fn new(directory: impl Into<SharedString>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path(&self, name: &str) -> SharedString {
        format!("{}/{name}.svg", self.directory.trim_end_matches('/')).into()
    }
}

/// Registry of icon types. Custom types registered at runtime take
/// precedence over built-in ones with the same name.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    sets: IndexMap<SharedString, IconSet>,
}

impl Global for IconRegistry {}

impl Default for IconRegistry {
    fn default() -> Self {
        let sets = BUILTIN_ICON_TYPES
            .iter()
            .copied()
            .map(|name| {
                let name = SharedString::new_static(name);
                let set = IconSet::new(format!("icons/{name}"));
                (name, set)
            })
            .collect();

        Self { sets }
    }
}

static DEFAULT_REGISTRY: LazyLock<IconRegistry> = LazyLock::new(IconRegistry::default);

impl IconRegistry {
    pub fn register(&mut self, icon_type: impl Into<SharedString>, set: IconSet) {
        let icon_type = icon_type.into();
        log::debug!("registering icon type `{icon_type}` at `{}`", set.directory);
        self.sets.insert(icon_type, set);
    }

    pub fn get(&self, icon_type: &str) -> Option<&IconSet> {
        self.sets.get(icon_type)
    }

    /// The set for `icon_type`, falling back to [`DEFAULT_ICON_TYPE`].
    pub fn icon_set(&self, icon_type: &str) -> &IconSet {
        if let Some(set) = self.get(icon_type) {
            return set;
        }

        log::warn!("unknown icon type `{icon_type}`, using `{DEFAULT_ICON_TYPE}`");

        // The default type is registered on construction and never removed.
        match self.get(DEFAULT_ICON_TYPE) {
            Some(set) => set,
            None => &DEFAULT_REGISTRY.sets[0],
        }
    }

    /// The svg asset path for `name` in `icon_type`.
    pub fn resolve(&self, icon_type: &str, name: &str) -> SharedString {
        self.icon_set(icon_type).path(name)
    }
}

/// Extension trait for reading and extending the app's icon registry.
pub trait IconRegistryExt {
    fn register_custom_icon_type(&mut self, icon_type: impl Into<SharedString>, set: IconSet);

    fn icon_registry(&self) -> &IconRegistry;
}

impl IconRegistryExt for App {
    fn register_custom_icon_type(&mut self, icon_type: impl Into<SharedString>, set: IconSet) {
        self.default_global::<IconRegistry>().register(icon_type, set);
    }

    fn icon_registry(&self) -> &IconRegistry {
        self.try_global::<IconRegistry>()
            .unwrap_or(&DEFAULT_REGISTRY)
    }
}
