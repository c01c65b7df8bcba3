use gpui::{AnyElement, IntoElement, ParentElement, Pixels, Rgba, Styled, div, px};

use super::SearchBarContent;
use crate::{
    ElementIdExt,
    components::{Icon, IconDefaults},
    rgb_a,
};

const ANDROID_GRAY: u32 = 0x4d4d4d;

/// Material search bar: a white bar whose search icon turns into a back
/// arrow while the field has focus.
#[derive(Debug, Clone)]
pub struct AndroidSearchBarStyle {
    pub background: Rgba,
    pub padding_y: Pixels,
    pub text_color: Rgba,
    pub placeholder_color: Rgba,
    pub search_icon: IconDefaults,
    pub cancel_icon: IconDefaults,
    pub clear_icon: IconDefaults,
}

impl Default for AndroidSearchBarStyle {
    fn default() -> Self {
        let gray = rgb_a(ANDROID_GRAY, 1.);

        Self {
            background: rgb_a(0xffffff, 1.),
            padding_y: px(8.),
            text_color: rgb_a(0x000000, 1.),
            placeholder_color: gray,
            search_icon: IconDefaults::new("material", "search")
                .size(px(25.))
                .color(gray),
            cancel_icon: IconDefaults::new("material", "arrow-back")
                .size(px(25.))
                .color(gray),
            clear_icon: IconDefaults::new("material", "clear")
                .size(px(25.))
                .color(gray),
        }
    }
}

pub(super) fn render(mut content: SearchBarContent) -> AnyElement {
    let style = AndroidSearchBarStyle::default();

    let leading = match (content.has_focus, content.on_cancel.take()) {
        (true, Some(on_cancel)) => Icon::default()
            .id(content.id.with_suffix("cancel"))
            .with_defaults(&style.cancel_icon)
            .on_click(move |event, window, cx| on_cancel(event, window, cx)),
        _ => Icon::default().with_defaults(&style.search_icon),
    }
    .platform(content.platform);

    let input = content
        .text_input(style.text_color, style.placeholder_color)
        .ml(px(24.))
        .mr(px(8.));
    let trailing = content.trailing_icons(
        Icon::default().with_defaults(&style.clear_icon),
        style.placeholder_color,
    );

    div()
        .flex()
        .flex_row()
        .items_center()
        .py(style.padding_y)
        .bg(style.background)
        .child(div().ml(px(8.)).child(leading))
        .child(input)
        .child(trailing)
        .into_any_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_icons() {
        let style = AndroidSearchBarStyle::default();

        assert_eq!(style.background, rgb_a(0xffffff, 1.));
        assert_eq!(style.search_icon.name.as_deref(), Some("search"));
        assert_eq!(style.cancel_icon.name.as_deref(), Some("arrow-back"));
        assert_eq!(style.cancel_icon.color, Some(rgb_a(ANDROID_GRAY, 1.)));
        assert_eq!(style.clear_icon.size, Some(px(25.)));
    }
}
