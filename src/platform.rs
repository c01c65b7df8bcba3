use serde::{Deserialize, Serialize};

/// The platform whose look a component imitates.
///
/// Components pick their paddings, font sizes and default icons from this.
/// By default it follows the compile target: Apple targets render the iOS
/// look, Android targets the Android look, everything else the default one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Default,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Default
        }
    }

    pub fn is_ios(self) -> bool {
        self == Platform::Ios
    }

    pub fn is_android(self) -> bool {
        self == Platform::Android
    }

    /// Picks the value for this platform.
    pub fn select<T>(self, ios: T, android: T, default: T) -> T {
        match self {
            Platform::Ios => ios,
            Platform::Android => android,
            Platform::Default => default,
        }
    }

    /// Picks `ios` on iOS and `other` everywhere else.
    pub fn ios_or<T>(self, ios: T, other: T) -> T {
        if self.is_ios() { ios } else { other }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
