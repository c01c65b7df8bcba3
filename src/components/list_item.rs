use gpui::{
    AnyElement, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels,
    Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
    px, relative,
};

use crate::{
    components::{ClickHandler, Icon, IconDefaults},
    platform::Platform,
    rgb_a,
    theme::{ResolvedTheme, ThemeScope, Themed},
};

/// Secondary text and icon color of Material lists.
pub const ANDROID_SECONDARY: Rgba = Rgba {
    r: 0.,
    g: 0.,
    b: 0.,
    a: 0.54,
};

const CHEVRON_COLOR: u32 = 0xD1D1D6;
const PRESSED_OPACITY: f32 = 0.85;

/// Sizes and colors of a [`ListItem`] for one platform and theme.
#[derive(Debug, Clone)]
pub struct ListItemStyle {
    pub padding: Pixels,
    pub background: Rgba,
    pub divider_color: Rgba,
    pub title_size: Pixels,
    pub title_color: Rgba,
    pub subtitle_size: Pixels,
    pub subtitle_color: Rgba,
    pub right_text_color: Rgba,
    pub icon: IconDefaults,
    pub checkmark: IconDefaults,
    pub chevron: IconDefaults,
}

impl ListItemStyle {
    pub fn resolve(theme: &ResolvedTheme, platform: Platform) -> Self {
        let black = rgb_a(0x000000, 1.);

        let mut icon = IconDefaults {
            icon_type: "material".into(),
            name: None,
            size: Some(px(24.)),
            color: None,
        };
        if !platform.is_ios() {
            icon.color = Some(ANDROID_SECONDARY);
        }

        let chevron = match platform {
            Platform::Ios => IconDefaults::new("ionicon", "ios-arrow-forward"),
            _ => IconDefaults::new("material", "keyboard-arrow-right"),
        };

        Self {
            padding: px(platform.ios_or(14., 16.)),
            background: rgb_a(0xffffff, 1.),
            divider_color: theme.color_or("colors.divider", rgb_a(0xbcbbc1, 1.)),
            title_size: px(platform.ios_or(17., 16.)),
            title_color: black,
            subtitle_size: px(platform.ios_or(15., 14.)),
            subtitle_color: platform.ios_or(black, ANDROID_SECONDARY),
            right_text_color: ANDROID_SECONDARY,
            icon,
            checkmark: IconDefaults::new("material", "check")
                .size(px(20.))
                .color(theme.color_or("colors.primary", rgb_a(0x2089dc, 1.))),
            chevron: chevron.size(px(16.)).color(rgb_a(CHEVRON_COLOR, 1.)),
        }
    }
}

/// A row with a title, optional subtitle and decorations on either side.
///
/// Children are laid out left to right: left element, left icon, title and
/// subtitle, right title and subtitle, right icon, right element, checkmark,
/// chevron. Consecutive children are separated by `pad`.
pub struct ListItem {
    id: ElementId,
    title: SharedString,
    subtitle: Option<SharedString>,
    right_title: Option<SharedString>,
    right_subtitle: Option<SharedString>,
    left_icon: Option<Icon>,
    right_icon: Option<Icon>,
    left_element: Option<AnyElement>,
    right_element: Option<AnyElement>,
    checkmark: Option<Icon>,
    chevron: Option<Icon>,
    top_divider: bool,
    bottom_divider: bool,
    pad: Pixels,
    disabled: bool,
    platform: Platform,
    on_click: Option<ClickHandler>,
    theme_scope: Option<ThemeScope>,
}

impl ListItem {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            title: SharedString::default(),
            subtitle: None,
            right_title: None,
            right_subtitle: None,
            left_icon: None,
            right_icon: None,
            left_element: None,
            right_element: None,
            checkmark: None,
            chevron: None,
            top_divider: false,
            bottom_divider: false,
            pad: px(16.),
            disabled: false,
            platform: Platform::current(),
            on_click: None,
            theme_scope: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn right_title(mut self, title: impl Into<SharedString>) -> Self {
        self.right_title = Some(title.into());
        self
    }

    pub fn right_subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.right_subtitle = Some(subtitle.into());
        self
    }

    /// Unset props of `icon` fall back to the list's icon size and color.
    pub fn left_icon(mut self, icon: Icon) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: Icon) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn left_element(mut self, element: impl IntoElement) -> Self {
        self.left_element = Some(element.into_any_element());
        self
    }

    pub fn right_element(mut self, element: impl IntoElement) -> Self {
        self.right_element = Some(element.into_any_element());
        self
    }

    /// Shows a check mark in the primary color.
    pub fn checkmark(mut self, checkmark: bool) -> Self {
        self.checkmark = checkmark.then(Icon::default);
        self
    }

    /// Shows a custom check mark. Unset props use the defaults of [`checkmark`](Self::checkmark).
    pub fn checkmark_icon(mut self, icon: Icon) -> Self {
        self.checkmark = Some(icon);
        self
    }

    /// Shows the platform's disclosure indicator.
    pub fn chevron(mut self, chevron: bool) -> Self {
        self.chevron = chevron.then(Icon::default);
        self
    }

    pub fn chevron_icon(mut self, icon: Icon) -> Self {
        self.chevron = Some(icon);
        self
    }

    pub fn top_divider(mut self, top_divider: bool) -> Self {
        self.top_divider = top_divider;
        self
    }

    pub fn bottom_divider(mut self, bottom_divider: bool) -> Self {
        self.bottom_divider = bottom_divider;
        self
    }

    /// Space between consecutive children.
    pub fn pad(mut self, pad: impl Into<Pixels>) -> Self {
        self.pad = pad.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
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

    fn text(text: SharedString, size: Pixels, color: Rgba) -> impl IntoElement {
        div().text_size(size).text_color(color).child(text)
    }
}

impl Themed for ListItem {
    const NAME: &'static str = "ListItem";

    fn render_themed(
        self,
        theme: &ResolvedTheme,
        _window: &mut Window,
        _cx: &mut App,
    ) -> impl IntoElement {
        let style = ListItemStyle::resolve(theme, self.platform);
        let platform = self.platform;
        let with_defaults = |icon: Icon, defaults: &IconDefaults| {
            icon.platform(platform).with_defaults(defaults)
        };

        let on_click = match self.disabled {
            true => None,
            false => self.on_click,
        };

        let has_right_content = self.right_title.is_some() || self.right_subtitle.is_some();

        div()
            .id(self.id)
            .flex()
            .flex_row()
            .items_center()
            .gap(self.pad)
            .p(style.padding)
            .bg(style.background)
            .border_color(style.divider_color)
            .when(self.top_divider, |this| this.border_t_1())
            .when(self.bottom_divider, |this| this.border_b_1())
            .when_some(self.left_element, |this, element| this.child(element))
            .when_some(self.left_icon, |this, icon| {
                this.child(with_defaults(icon, &style.icon))
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .justify_center()
                    .child(Self::text(self.title, style.title_size, style.title_color))
                    .when_some(self.subtitle, |this, subtitle| {
                        this.child(Self::text(
                            subtitle,
                            style.subtitle_size,
                            style.subtitle_color,
                        ))
                    }),
            )
            .when(has_right_content, |this| {
                this.child(
                    div()
                        .flex()
                        .flex_col()
                        .justify_center()
                        .items_end()
                        .flex_basis(relative(0.))
                        .map(|mut this| {
                            this.style().flex_grow = Some(0.5);
                            this.style().flex_shrink = Some(1.);
                            this
                        })
                        .when_some(self.right_title, |this, title| {
                            this.child(Self::text(
                                title,
                                style.title_size,
                                style.right_text_color,
                            ))
                        })
                        .when_some(self.right_subtitle, |this, subtitle| {
                            this.child(Self::text(
                                subtitle,
                                style.subtitle_size,
                                style.right_text_color,
                            ))
                        }),
                )
            })
            .when_some(self.right_icon, |this, icon| {
                this.child(with_defaults(icon, &style.icon))
            })
            .when_some(self.right_element, |this, element| this.child(element))
            .when_some(self.checkmark, |this, icon| {
                this.child(with_defaults(icon, &style.checkmark))
            })
            .when_some(self.chevron, |this, icon| {
                this.child(with_defaults(icon, &style.chevron))
            })
            .when_some(on_click, |this, on_click| {
                this.cursor_pointer()
                    .active(|style| style.opacity(PRESSED_OPACITY))
                    .on_click(move |event, window, cx| on_click(event, window, cx))
            })
    }

    fn take_theme_scope(&mut self) -> Option<ThemeScope> {
        self.theme_scope.take()
    }
}

crate::impl_themed_element!(ListItem);
