use gpui::{
    AnyElement, IntoElement, ParentElement, Pixels, Rgba, Styled, div, px,
};

use super::SearchBarContent;
use crate::{
    components::{Icon, IconDefaults},
    rgb_a,
    theme::ResolvedTheme,
};

/// Colors of the default search bar, read from the theme palette.
#[derive(Debug, Clone)]
pub struct DefaultSearchBarStyle {
    pub background: Rgba,
    pub border_color: Rgba,
    pub padding: Pixels,
    pub field_background: Rgba,
    pub field_radius: Pixels,
    pub field_min_height: Pixels,
    pub text_color: Rgba,
    pub placeholder_color: Rgba,
    pub search_icon: IconDefaults,
    pub clear_icon: IconDefaults,
}

impl DefaultSearchBarStyle {
    pub fn resolve(theme: &ResolvedTheme, light_theme: bool, round: bool) -> Self {
        let grey3 = theme.color_or("colors.grey3", rgb_a(0x86939e, 1.));

        let (background, border_color, field_background) = if light_theme {
            (
                theme.color_or("colors.grey5", rgb_a(0xe1e8ee, 1.)),
                rgb_a(0xe1e1e1, 1.),
                theme.color_or("colors.grey4", rgb_a(0xbdc6cf, 1.)),
            )
        } else {
            (
                theme.color_or("colors.grey0", rgb_a(0x393e42, 1.)),
                rgb_a(0x000000, 1.),
                theme.color_or("colors.searchBg", rgb_a(0x303337, 1.)),
            )
        };

        Self {
            background,
            border_color,
            padding: px(8.),
            field_background,
            field_radius: px(if round { 15. } else { 3. }),
            field_min_height: px(30.),
            text_color: grey3,
            placeholder_color: grey3,
            search_icon: IconDefaults::new("material", "search")
                .size(px(18.))
                .color(grey3),
            clear_icon: IconDefaults::new("material", "clear")
                .size(px(18.))
                .color(grey3),
        }
    }
}

pub(super) fn render(mut content: SearchBarContent, theme: &ResolvedTheme) -> AnyElement {
    let style = DefaultSearchBarStyle::resolve(theme, content.light_theme, content.round);

    let search_icon = Icon::default()
        .platform(content.platform)
        .with_defaults(&style.search_icon);
    let input = content
        .text_input(style.text_color, style.placeholder_color)
        .ml(px(10.));
    let trailing = content.trailing_icons(
        Icon::default().with_defaults(&style.clear_icon),
        style.text_color,
    );

    div()
        .flex()
        .flex_col()
        .p(style.padding)
        .bg(style.background)
        .border_t_1()
        .border_b_1()
        .border_color(style.border_color)
        .child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .min_h(style.field_min_height)
                .rounded(style.field_radius)
                .overflow_hidden()
                .bg(style.field_background)
                .child(div().ml(px(8.)).child(search_icon))
                .child(input)
                .child(trailing),
        )
        .into_any_element()
}
