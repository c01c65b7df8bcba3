use gpui::{
    App, ClickEvent, Edges, ElementId, InteractiveElement, IntoElement, Length, ParentElement,
    Pixels, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px, svg,
};

use crate::{
    RgbaExt,
    components::ClickHandler,
    icons::{DEFAULT_ICON_TYPE, IconRegistryExt},
    platform::Platform,
    rgb_a,
    theme::{ResolvedTheme, ThemeScope, Themed},
    utils::TRANSPARENT,
};

pub const DEFAULT_ICON_SIZE: f32 = 24.;
pub const DISABLED_ICON_BACKGROUND: u32 = 0xD1D5D8;

const BUTTON_MARGIN: f32 = 7.;
const PRESSED_OPACITY: f32 = 0.3;
const RIPPLE_ALPHA: f32 = 0.2;

/// How a raised icon lifts off its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconShadow {
    None,
    /// Android elevation.
    Elevation,
    /// A one pixel offset shadow.
    Offset,
}

/// Values a parent component fills in for the props the caller left unset.
#[derive(Debug, Clone)]
pub struct IconDefaults {
    pub icon_type: SharedString,
    pub name: Option<SharedString>,
    pub size: Option<Pixels>,
    pub color: Option<Rgba>,
}

impl IconDefaults {
    pub fn new(icon_type: impl Into<SharedString>, name: impl Into<SharedString>) -> Self {
        Self {
            icon_type: icon_type.into(),
            name: Some(name.into()),
            size: None,
            color: None,
        }
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }
}

/// A glyph from an icon set, optionally drawn on a round button.
///
/// `reverse` fills the button with `color` and draws the glyph in
/// `reverse_color`; `raised` draws it on a white button with a shadow.
pub struct Icon {
    id: Option<ElementId>,
    icon_type: Option<SharedString>,
    name: Option<SharedString>,
    path: Option<SharedString>,
    size: Option<Pixels>,
    color: Option<Rgba>,
    reverse: bool,
    reverse_color: Rgba,
    raised: bool,
    underlay_color: Rgba,
    disabled: bool,
    disabled_color: Rgba,
    margin: Edges<Option<Length>>,
    platform: Platform,
    on_click: Option<ClickHandler>,
    theme_scope: Option<ThemeScope>,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            id: None,
            icon_type: None,
            name: None,
            path: None,
            size: None,
            color: None,
            reverse: false,
            reverse_color: rgb_a(0xffffff, 1.),
            raised: false,
            underlay_color: TRANSPARENT,
            disabled: false,
            disabled_color: rgb_a(DISABLED_ICON_BACKGROUND, 1.),
            margin: Edges::default(),
            platform: Platform::current(),
            on_click: None,
            theme_scope: None,
        }
    }
}

impl Icon {
    /// An icon from the default (`material`) set.
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Draws an svg asset directly instead of looking the name up in an icon set.
    pub fn from_path(path: impl Into<SharedString>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The icon set to look `name` up in, e.g. `ionicon`.
    pub fn icon_type(mut self, icon_type: impl Into<SharedString>) -> Self {
        self.icon_type = Some(icon_type.into());
        self
    }

    pub fn name(mut self, name: impl Into<SharedString>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn reverse_color(mut self, color: impl Into<Rgba>) -> Self {
        self.reverse_color = color.into();
        self
    }

    pub fn raised(mut self, raised: bool) -> Self {
        self.raised = raised;
        self
    }

    /// Background shown while the icon is pressed.
    pub fn underlay_color(mut self, color: impl Into<Rgba>) -> Self {
        self.underlay_color = color.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn disabled_color(mut self, color: impl Into<Rgba>) -> Self {
        self.disabled_color = color.into();
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn theme_scope(mut self, scope: &ThemeScope) -> Self {
        self.theme_scope = Some(scope.clone());
        self
    }

    /// Sets uniform margin for all sides.
    pub fn m(mut self, margin: impl Into<Length>) -> Self {
        self.margin = Edges::all(Some(margin.into()));
        self
    }

    /// Sets top margin.
    pub fn mt(mut self, margin: impl Into<Length>) -> Self {
        self.margin.top = Some(margin.into());
        self
    }

    /// Sets bottom margin.
    pub fn mb(mut self, margin: impl Into<Length>) -> Self {
        self.margin.bottom = Some(margin.into());
        self
    }

    /// Sets left margin.
    pub fn ml(mut self, margin: impl Into<Length>) -> Self {
        self.margin.left = Some(margin.into());
        self
    }

    /// Sets right margin.
    pub fn mr(mut self, margin: impl Into<Length>) -> Self {
        self.margin.right = Some(margin.into());
        self
    }

    /// Fills in every prop in `defaults` that was not set on this icon.
    pub fn with_defaults(mut self, defaults: &IconDefaults) -> Self {
        if self.icon_type.is_none() && self.path.is_none() {
            self.icon_type = Some(defaults.icon_type.clone());
        }
        if self.name.is_none() {
            self.name = defaults.name.clone();
        }
        self.size = self.size.or(defaults.size);
        self.color = self.color.or(defaults.color);
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn has_on_click(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn get_name(&self) -> Option<&SharedString> {
        self.name.as_ref()
    }

    pub fn get_icon_type(&self) -> &str {
        self.icon_type.as_deref().unwrap_or(DEFAULT_ICON_TYPE)
    }

    pub fn get_size(&self) -> Pixels {
        self.size.unwrap_or(px(DEFAULT_ICON_SIZE))
    }

    pub fn get_color(&self) -> Rgba {
        self.color.unwrap_or(rgb_a(0x000000, 1.))
    }

    /// The svg asset this icon draws.
    pub fn glyph_path(&self, cx: &App) -> Option<SharedString> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }

        let name = self.name.as_ref()?;
        Some(cx.icon_registry().resolve(self.get_icon_type(), name))
    }

    pub fn layout(&self) -> IconLayout {
        IconLayout::new(self)
    }

    fn element_id(&self) -> ElementId {
        match &self.id {
            Some(id) => id.clone(),
            None => ElementId::Name(
                format!(
                    "icon:{}:{}",
                    self.get_icon_type(),
                    self.name.as_deref().unwrap_or_default()
                )
                .into(),
            ),
        }
    }
}

/// The resolved geometry and colors of an [`Icon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    pub glyph_size: Pixels,
    pub glyph_color: Rgba,
    /// Diameter of the round button, when the icon is reversed or raised.
    pub button_size: Option<Pixels>,
    pub corner_radius: Option<Pixels>,
    pub margin: Option<Pixels>,
    pub background: Rgba,
    pub pressed_background: Rgba,
    pub shadow: IconShadow,
}

impl IconLayout {
    pub fn new(icon: &Icon) -> Self {
        let size = icon.get_size();
        let color = icon.get_color();
        let is_button = icon.reverse || icon.raised;

        let background = if icon.reverse {
            color
        } else if icon.raised {
            rgb_a(0xffffff, 1.)
        } else {
            TRANSPARENT
        };

        let pressed_background = if icon.platform.is_android() {
            color.alpha(RIPPLE_ALPHA)
        } else if icon.reverse {
            color
        } else {
            icon.underlay_color
        };

        let shadow = match (icon.raised, icon.platform) {
            (false, _) => IconShadow::None,
            (true, Platform::Android) => IconShadow::Elevation,
            (true, _) => IconShadow::Offset,
        };

        Self {
            glyph_size: size,
            glyph_color: if icon.reverse {
                icon.reverse_color
            } else {
                color
            },
            button_size: is_button.then(|| size * 2. + px(4.)),
            corner_radius: is_button.then(|| size + px(4.)),
            margin: is_button.then(|| px(BUTTON_MARGIN)),
            background: if icon.disabled {
                icon.disabled_color
            } else {
                background
            },
            pressed_background,
            shadow,
        }
    }
}

impl Themed for Icon {
    const NAME: &'static str = "Icon";

    fn render_themed(
        self,
        _theme: &ResolvedTheme,
        _window: &mut Window,
        cx: &mut App,
    ) -> impl IntoElement {
        let layout = self.layout();
        let id = self.element_id();
        let is_android = self.platform.is_android();

        let glyph_path = self.glyph_path(cx);
        if glyph_path.is_none() {
            log::warn!("icon `{id}` has neither a name nor a path");
        }

        let on_click = match self.disabled {
            true => None,
            false => self.on_click,
        };

        let face = div()
            .flex()
            .items_center()
            .justify_center()
            .bg(layout.background)
            .when_some(layout.button_size, |this, size| this.size(size))
            .when_some(layout.corner_radius, |this, radius| this.rounded(radius))
            .when_some(glyph_path, |this, path| {
                this.child(
                    svg()
                        .path(path)
                        .flex_none()
                        .size(layout.glyph_size)
                        .text_color(layout.glyph_color),
                )
            });

        div()
            .id(id)
            .flex_none()
            .overflow_hidden()
            .when_some(layout.corner_radius, |this, radius| this.rounded(radius))
            .when_some(layout.margin, |this, margin| this.m(margin))
            .when_some(self.margin.top, |this, v| this.mt(v))
            .when_some(self.margin.bottom, |this, v| this.mb(v))
            .when_some(self.margin.left, |this, v| this.ml(v))
            .when_some(self.margin.right, |this, v| this.mr(v))
            .map(|this| match layout.shadow {
                IconShadow::None => this,
                IconShadow::Elevation => this.shadow_md(),
                IconShadow::Offset => this.shadow_sm(),
            })
            .when_some(on_click, |this, on_click| {
                let pressed = layout.pressed_background;

                this.cursor_pointer()
                    .map(|this| match is_android {
                        true => this.active(move |style| style.bg(pressed)),
                        false => this.active(move |style| style.bg(pressed).opacity(PRESSED_OPACITY)),
                    })
                    .on_click(move |event, window, cx| on_click(event, window, cx))
            })
            .child(face)
    }

    fn take_theme_scope(&mut self) -> Option<ThemeScope> {
        self.theme_scope.take()
    }
}

crate::impl_themed_element!(Icon);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_icon_layout() {
        let layout = Icon::new("search").layout();

        assert_eq!(layout.glyph_size, px(24.));
        assert_eq!(layout.glyph_color, rgb_a(0x000000, 1.));
        assert_eq!(layout.background, TRANSPARENT);
        assert_eq!(layout.button_size, None);
        assert_eq!(layout.margin, None);
        assert_eq!(layout.shadow, IconShadow::None);
    }

    #[test]
    fn test_reverse_fills_button_with_color() {
        let layout = Icon::new("search")
            .size(px(20.))
            .color(rgb_a(0x2089dc, 1.))
            .reverse(true)
            .layout();

        assert_eq!(layout.button_size, Some(px(44.)));
        assert_eq!(layout.corner_radius, Some(px(24.)));
        assert_eq!(layout.margin, Some(px(7.)));
        assert_eq!(layout.background, rgb_a(0x2089dc, 1.));
        assert_eq!(layout.glyph_color, rgb_a(0xffffff, 1.));
    }

    #[test]
    fn test_raised_shadow_depends_on_platform() {
        let android = Icon::new("search")
            .raised(true)
            .platform(Platform::Android)
            .layout();
        let ios = Icon::new("search").raised(true).platform(Platform::Ios).layout();

        assert_eq!(android.background, rgb_a(0xffffff, 1.));
        assert_eq!(android.shadow, IconShadow::Elevation);
        assert_eq!(ios.shadow, IconShadow::Offset);
        assert_eq!(ios.button_size, Some(px(52.)));
    }

    #[test]
    fn test_pressed_background() {
        let color = rgb_a(0xff0000, 1.);

        let android = Icon::new("x").color(color).platform(Platform::Android).layout();
        assert_eq!(android.pressed_background, color.alpha(0.2));

        let underlay = Icon::new("x")
            .underlay_color(rgb_a(0x00ff00, 1.))
            .platform(Platform::Ios)
            .layout();
        assert_eq!(underlay.pressed_background, rgb_a(0x00ff00, 1.));

        let reversed = Icon::new("x")
            .color(color)
            .reverse(true)
            .platform(Platform::Default)
            .layout();
        assert_eq!(reversed.pressed_background, color);
    }

    #[test]
    fn test_disabled_background() {
        let layout = Icon::new("x").disabled(true).layout();
        assert_eq!(layout.background, rgb_a(DISABLED_ICON_BACKGROUND, 1.));

        let custom = Icon::new("x")
            .disabled(true)
            .disabled_color(rgb_a(0x111111, 1.))
            .layout();
        assert_eq!(custom.background, rgb_a(0x111111, 1.));
    }

    #[test]
    fn test_defaults_only_fill_unset_props() {
        let defaults = IconDefaults::new("ionicon", "ios-arrow-forward")
            .size(px(16.))
            .color(rgb_a(0xD1D1D6, 1.));

        let filled = Icon::default().with_defaults(&defaults);
        assert_eq!(filled.get_icon_type(), "ionicon");
        assert_eq!(
            filled.get_name(),
            Some(&SharedString::from("ios-arrow-forward"))
        );
        assert_eq!(filled.get_size(), px(16.));

        let custom = Icon::new("star")
            .color(rgb_a(0xff0000, 1.))
            .with_defaults(&defaults);
        assert_eq!(custom.get_name(), Some(&SharedString::from("star")));
        assert_eq!(custom.get_color(), rgb_a(0xff0000, 1.));
        assert_eq!(custom.get_size(), px(16.));
    }
}

#[cfg(all(test, feature = "test-support"))]
mod app_tests {
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    use super::*;
    use crate::icons::IconSet;

    #[gpui::test]
    fn test_glyph_path_resolution(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert_eq!(
                Icon::new("search").glyph_path(cx),
                Some(SharedString::from("icons/material/search.svg"))
            );
            assert_eq!(
                Icon::new("ios-search").icon_type("ionicon").glyph_path(cx),
                Some(SharedString::from("icons/ionicon/ios-search.svg"))
            );
            assert_eq!(
                Icon::from_path("brand/logo.svg").glyph_path(cx),
                Some(SharedString::from("brand/logo.svg"))
            );
            assert_eq!(Icon::default().glyph_path(cx), None);

            cx.register_custom_icon_type("brand", IconSet::new("brand"));
            assert_eq!(
                Icon::new("logo").icon_type("brand").glyph_path(cx),
                Some(SharedString::from("brand/logo.svg"))
            );
        });
    }

    #[gpui::test]
    fn test_icon_on_click_callback(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("search").id("search").on_click(|_event, _window, _cx| {});
            assert!(icon.has_on_click());
        });
    }

    #[gpui::test]
    fn test_icon_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| IconTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);

        // The window creation itself validates rendering works
    }

    /// Test view that contains icons in every style
    struct IconTestView;

    impl gpui::Render for IconTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(Icon::new("search"))
                .child(Icon::new("clear").reverse(true).color(rgb_a(0x2089dc, 1.)))
                .child(
                    Icon::new("check")
                        .id("raised")
                        .raised(true)
                        .on_click(|_event, _window, _cx| {}),
                )
                .child(Icon::new("check").disabled(true))
        }
    }
}
