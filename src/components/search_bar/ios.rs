use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, Pixels, Rgba,
    StatefulInteractiveElement, Styled, div, prelude::FluentBuilder, px,
};

use super::SearchBarContent;
use crate::{
    ElementIdExt,
    components::{Icon, IconDefaults},
    rgb_a,
};

const IOS_GRAY: u32 = 0x7d7d7d;

/// The iOS search bar does not follow the theme palette.
#[derive(Debug, Clone)]
pub struct IosSearchBarStyle {
    pub background: Rgba,
    pub padding_y: Pixels,
    pub field_background: Rgba,
    pub field_radius: Pixels,
    pub field_min_height: Pixels,
    pub field_margin_x: Pixels,
    pub text_color: Rgba,
    pub placeholder_color: Rgba,
    pub search_icon: IconDefaults,
    pub clear_icon: IconDefaults,
    pub cancel_color: Rgba,
    pub cancel_disabled_color: Rgba,
    pub cancel_text_size: Pixels,
}

impl Default for IosSearchBarStyle {
    fn default() -> Self {
        let gray = rgb_a(IOS_GRAY, 1.);

        Self {
            background: rgb_a(0xf5f5f5, 1.),
            padding_y: px(13.),
            field_background: rgb_a(0xdcdce1, 1.),
            field_radius: px(9.),
            field_min_height: px(36.),
            field_margin_x: px(8.),
            text_color: rgb_a(0x000000, 1.),
            placeholder_color: gray,
            search_icon: IconDefaults::new("ionicon", "ios-search")
                .size(px(20.))
                .color(gray),
            clear_icon: IconDefaults::new("ionicon", "ios-close-circle")
                .size(px(20.))
                .color(gray),
            cancel_color: rgb_a(0x007aff, 1.),
            cancel_disabled_color: rgb_a(0xcdcdcd, 1.),
            cancel_text_size: px(18.),
        }
    }
}

pub(super) fn render(mut content: SearchBarContent) -> AnyElement {
    let style = IosSearchBarStyle::default();

    let search_icon = Icon::default()
        .platform(content.platform)
        .with_defaults(&style.search_icon);
    let input = content
        .text_input(style.text_color, style.placeholder_color)
        .ml(px(6.));
    let trailing = content.trailing_icons(
        Icon::default().with_defaults(&style.clear_icon),
        style.placeholder_color,
    );

    let cancel_disabled = content.cancel_button_disabled;
    let on_cancel = content.on_cancel.take().filter(|_| !cancel_disabled);

    div()
        .flex()
        .flex_row()
        .items_center()
        .overflow_hidden()
        .py(style.padding_y)
        .bg(style.background)
        .child(
            div()
                .flex()
                .flex_row()
                .flex_1()
                .items_center()
                .mx(style.field_margin_x)
                .min_h(style.field_min_height)
                .rounded(style.field_radius)
                .bg(style.field_background)
                .child(div().ml(px(8.)).child(search_icon))
                .child(input)
                .child(trailing),
        )
        .when(content.has_focus, |this| {
            this.child(
                div()
                    .id(content.id.with_suffix("cancel"))
                    .p(px(8.))
                    .text_center()
                    .text_size(style.cancel_text_size)
                    .text_color(if cancel_disabled {
                        style.cancel_disabled_color
                    } else {
                        style.cancel_color
                    })
                    .child(content.cancel_button_title.clone())
                    .when_some(on_cancel, |this, on_cancel| {
                        this.cursor_pointer()
                            .active(|style| style.opacity(0.2))
                            .on_click(move |event, window, cx| on_cancel(event, window, cx))
                    }),
            )
        })
        .into_any_element()
}
